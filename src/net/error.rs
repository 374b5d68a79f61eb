//! The one failure kind surfaced by authentication calls.
//!
//! ERROR HANDLING
//! ==============
//! Variants carry diagnostic detail only. The session store and the pages
//! treat every variant the same way: login/register log and return it,
//! logout logs and drops it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}{}", detail_suffix(.message.as_deref()))]
    Status { status: u16, message: Option<String> },
    /// A 2xx response whose body could not be read.
    #[error("malformed response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl AuthError {
    /// Build a status error, lifting a JSON `message` field out of the body
    /// when there is one.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty());
        Self::Status { status, message }
    }
}

fn detail_suffix(message: Option<&str>) -> String {
    message.map(|m| format!(": {m}")).unwrap_or_default()
}
