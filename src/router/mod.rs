//! Path routing and per-route access control.
//!
//! SYSTEM CONTEXT
//! ==============
//! `routes` is the static table of paths; `guard` turns a path plus the
//! session's authenticated flag into a render/redirect decision. Both are
//! plain data and functions so the decision procedure is testable without a
//! browser; `components::route_outlet` applies it inside the Leptos router.

pub mod guard;
pub mod routes;
