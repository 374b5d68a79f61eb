//! Registration page creating an account and signing it in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use super::failure_message;
use crate::net::types::Registration;
use crate::router::routes::LOGIN_PATH;
use crate::state::session::use_session;

/// Build the `/register` body from the form. Name and email are trimmed;
/// passwords go through as typed.
fn registration_from_form(name: &str, email: &str, password: &str, password_confirmation: &str) -> Registration {
    Registration {
        name: name.trim().to_owned(),
        email: email.trim().to_owned(),
        password: password.to_owned(),
        password_confirmation: password_confirmation.to_owned(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirmation = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set(String::new());

        let session = session.clone();
        let registration =
            registration_from_form(&name.get(), &email.get(), &password.get(), &password_confirmation.get());
        leptos::task::spawn_local(async move {
            if let Err(e) = session.register(&registration).await {
                info.set(failure_message("Registration", &e));
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || password_confirmation.get()
                        on:input=move |ev| password_confirmation.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href=LOGIN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
