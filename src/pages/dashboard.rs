//! Dashboard page, the authenticated landing route.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session::use_session;

/// Heading text. After a reload the profile is not restored, and some
/// backends omit the name, so the greeting falls back to a generic label.
fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) if !user.name.is_empty() => format!("Welcome, {}", user.name),
        _ => "Welcome back".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let busy = RwSignal::new(false);

    let heading_session = session.clone();
    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let session = session.clone();
        leptos::task::spawn_local(async move {
            session.logout().await;
            busy.set(false);
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>{move || greeting(heading_session.user().as_ref())}</h1>
                <button class="btn dashboard__logout" on:click=on_logout disabled=move || busy.get()>
                    "Logout"
                </button>
            </header>
        </div>
    }
}
