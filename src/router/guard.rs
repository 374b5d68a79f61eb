//! Navigation guard: allow or redirect each route transition.
//!
//! The guard reads the authenticated flag and never touches the session.
//! `/login` and `/dashboard` have opposite requirements, so under the static
//! table a redirect cannot bounce straight back.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::{AccessRequirement, DASHBOARD_PATH, LOGIN_PATH, Page, RouteTarget, find_route};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(&'static str),
}

/// Result of resolving a pathname against the table and the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Render(Page),
    Redirect(&'static str),
    NotFound,
}

#[must_use]
pub fn check_access(access: AccessRequirement, is_authenticated: bool) -> GuardOutcome {
    match (access, is_authenticated) {
        (AccessRequirement::RequiresAuth, false) => GuardOutcome::Redirect(LOGIN_PATH),
        (AccessRequirement::RequiresGuest, true) => GuardOutcome::Redirect(DASHBOARD_PATH),
        _ => GuardOutcome::Allow,
    }
}

#[must_use]
pub fn resolve(path: &str, is_authenticated: bool) -> Navigation {
    let Some(route) = find_route(path) else {
        return Navigation::NotFound;
    };
    match route.target {
        RouteTarget::Redirect(target) => Navigation::Redirect(target),
        RouteTarget::View { page, access } => match check_access(access, is_authenticated) {
            GuardOutcome::Allow => Navigation::Render(page),
            GuardOutcome::Redirect(target) => Navigation::Redirect(target),
        },
    }
}
