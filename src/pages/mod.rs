//! Route-level pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page is the view of one entry in `router::routes`. Pages only call
//! session store actions; redirects after sign-in or sign-out come from the
//! route outlet re-running the guard.


pub mod dashboard;
pub mod login;
pub mod register;

use crate::net::error::AuthError;

/// Message shown under a form when an auth action fails.
pub(crate) fn failure_message(action: &str, err: &AuthError) -> String {
    format!("{action} failed: {err}")
}
