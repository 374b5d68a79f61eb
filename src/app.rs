//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_outlet::RouteOutlet;
use crate::config::ApiConfig;
use crate::net::api::HttpAuthApi;
use crate::state::session::SessionStore;
use crate::util::storage::LocalStorage;

/// Root application component.
///
/// Builds the session store once, restoring any persisted token, and
/// provides it to every route. All paths go through [`RouteOutlet`] so the
/// route table and guard own the path-to-page mapping.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::restore(HttpAuthApi::new(ApiConfig::from_build_env()), LocalStorage);
    provide_context(session);

    view! {
        <Title text="Session Gate"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RouteOutlet/>
                <Route path=WildcardSegment("path") view=RouteOutlet/>
            </Routes>
        </Router>
    }
}
