//! REST calls against the remote authentication API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Host builds (tests, tooling): every call fails with
//! [`AuthError::Request`] since the endpoints are only reachable from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and unreadable bodies all map onto
//! [`AuthError`]. No retries and no timeouts: one attempt per call.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::AuthError;
use super::types::{AuthResponse, LoginCredentials, Registration};
use crate::config::ApiConfig;

pub const LOGIN_ENDPOINT: &str = "/login";
pub const REGISTER_ENDPOINT: &str = "/register";
pub const LOGOUT_ENDPOINT: &str = "/logout";

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> AuthError {
    AuthError::Request("not available outside the browser".to_owned())
}

/// Credential-exchange and invalidation calls the session store depends on.
/// Mocked in tests.
#[async_trait::async_trait(?Send)]
pub trait AuthApi {
    /// `POST /login`.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] on transport failure, non-2xx status, or a
    /// body without `access_token`.
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, AuthError>;

    /// `POST /register`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AuthApi::login`].
    async fn register(&self, registration: &Registration) -> Result<AuthResponse, AuthError>;

    /// `POST /logout`, authorized with `token` when one is held.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] on transport failure or non-2xx status.
    async fn logout(&self, token: Option<&str>) -> Result<(), AuthError>;
}

/// [`AuthApi`] backed by `fetch` through `gloo-net`.
#[derive(Clone, Debug, Default)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(feature = "csr")]
async fn read_failure(resp: gloo_net::http::Response) -> AuthError {
    let status = resp.status();
    // Body is only used for the error detail; an unreadable one still
    // reports the status.
    let body = resp.text().await.unwrap_or_default();
    AuthError::from_status(status, &body)
}

#[cfg(feature = "csr")]
async fn post_credentials<B: serde::Serialize>(url: &str, body: &B) -> Result<AuthResponse, AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| AuthError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(read_failure(resp).await);
    }
    resp.json::<AuthResponse>()
        .await
        .map_err(|e| AuthError::Decode(e.to_string()))
}

#[async_trait::async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "csr")]
        {
            post_credentials(&self.config.endpoint(LOGIN_ENDPOINT), credentials).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(unavailable())
        }
    }

    async fn register(&self, registration: &Registration) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "csr")]
        {
            post_credentials(&self.config.endpoint(REGISTER_ENDPOINT), registration).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = registration;
            Err(unavailable())
        }
    }

    async fn logout(&self, token: Option<&str>) -> Result<(), AuthError> {
        #[cfg(feature = "csr")]
        {
            let mut request = gloo_net::http::Request::post(&self.config.endpoint(LOGOUT_ENDPOINT))
                .header("Accept", "application/json");
            if let Some(token) = token {
                request = request.header("Authorization", &bearer_header(token));
            }
            let resp = request
                .send()
                .await
                .map_err(|e| AuthError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(read_failure(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(unavailable())
        }
    }
}
