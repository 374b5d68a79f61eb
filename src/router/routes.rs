//! Static route table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const REGISTER_PATH: &str = "/register";

/// Per-route policy on the session's authentication state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccessRequirement {
    /// Reachable by anyone.
    #[default]
    None,
    /// Only for signed-in users (e.g. the dashboard).
    RequiresAuth,
    /// Only for signed-out users (login and registration forms).
    RequiresGuest,
}

/// Views a route can render. The outlet maps each to its page component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Dashboard,
    Register,
}

/// What a matched path leads to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    View { page: Page, access: AccessRequirement },
    /// Unconditional redirect to another path.
    Redirect(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: RouteTarget,
}

impl RouteDescriptor {
    /// Access requirement of a view route; redirects carry none.
    #[must_use]
    pub fn access(&self) -> AccessRequirement {
        match self.target {
            RouteTarget::View { access, .. } => access,
            RouteTarget::Redirect(_) => AccessRequirement::None,
        }
    }
}

pub static ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor { path: ROOT_PATH, name: None, target: RouteTarget::Redirect(LOGIN_PATH) },
    RouteDescriptor {
        path: LOGIN_PATH,
        name: Some("login"),
        target: RouteTarget::View { page: Page::Login, access: AccessRequirement::RequiresGuest },
    },
    RouteDescriptor {
        path: DASHBOARD_PATH,
        name: Some("dashboard"),
        target: RouteTarget::View { page: Page::Dashboard, access: AccessRequirement::RequiresAuth },
    },
    RouteDescriptor {
        path: REGISTER_PATH,
        name: Some("register"),
        target: RouteTarget::View { page: Page::Register, access: AccessRequirement::RequiresGuest },
    },
];

/// Collapse a location pathname to the form used in the table: `""` becomes
/// `/` and a trailing slash is dropped.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { ROOT_PATH } else { trimmed }
}

#[must_use]
pub fn find_route(path: &str) -> Option<&'static RouteDescriptor> {
    let path = normalize_path(path);
    ROUTES.iter().find(|r| r.path == path)
}

/// Path of a named route.
#[must_use]
pub fn path_for(name: &str) -> Option<&'static str> {
    ROUTES.iter().find(|r| r.name == Some(name)).map(|r| r.path)
}
