//! Route outlet applying the navigation guard to every location change.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos router hands every path to this component. It resolves the
//! path through the static route table and the guard, then renders the page
//! or replaces the history entry with the redirect target. The closure reads
//! the session signal, so signing in or out re-runs the guard on the current
//! path.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::router::guard::{Navigation, resolve};
use crate::router::routes::Page;
use crate::state::session::use_session;

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Dashboard => view! { <DashboardPage/> }.into_any(),
        Page::Register => view! { <RegisterPage/> }.into_any(),
    }
}

#[component]
pub fn RouteOutlet() -> impl IntoView {
    let session = use_session();
    let location = use_location();

    move || {
        let path = location.pathname.get();
        match resolve(&path, session.is_authenticated()) {
            Navigation::Render(page) => render_page(page),
            Navigation::Redirect(target) => {
                leptos::logging::log!("redirect {path} -> {target}");
                let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
                view! { <Redirect path=target options/> }.into_any()
            }
            Navigation::NotFound => view! { <p class="not-found">"Page not found."</p> }.into_any(),
        }
    }
}
