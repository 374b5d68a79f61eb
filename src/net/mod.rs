//! Networking modules for the remote authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` defines the single failure kind the
//! session store propagates, and `types` holds the JSON request/response
//! schema.

pub mod api;
pub mod error;
pub mod types;
