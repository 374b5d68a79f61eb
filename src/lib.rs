//! # session-gate
//!
//! Leptos + WASM single-page frontend with an authentication session store
//! and a route guard.
//!
//! The session store (`state::session`) holds the bearer token, mirrors it to
//! `localStorage`, and drives login/register/logout against the remote API.
//! The router (`router`) maps paths to pages and decides, per transition,
//! whether the current session may enter the target route.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;
