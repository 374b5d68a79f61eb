//! Authentication session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is the single source of truth for the bearer token. The
//! route outlet reads it on every transition; pages call its three actions.
//! `localStorage` mirrors the token so a reload keeps the user signed in.
//!
//! INVARIANTS
//! ==========
//! - `is_authenticated()` is derived from `token`, never stored separately.
//! - The durable `auth_token` entry is written only after a successful
//!   login/register and removed on every logout.
//! - A failed login/register leaves memory and storage untouched.
//! - Logout always ends the local session, whatever the backend says.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{AuthApi, HttpAuthApi};
use crate::net::error::AuthError;
use crate::net::types::{AuthResponse, LoginCredentials, Registration, User};
use crate::util::storage::{KeyValueStore, LocalStorage};

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// In-memory authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Rebuild the session from durable storage. The profile is not
    /// persisted, so a restored session has a token and no user.
    pub fn restore(storage: &impl KeyValueStore) -> Self {
        let token = storage.get(TOKEN_STORAGE_KEY).filter(|t| !t.is_empty());
        Self { token, user: None }
    }
}

/// Owns the session signal and mediates every state-changing auth call.
#[derive(Clone, Debug)]
pub struct SessionStore<A, S> {
    api: A,
    storage: S,
    session: RwSignal<Session>,
}

/// Session store wired to the browser.
pub type AppSession = SessionStore<HttpAuthApi, LocalStorage>;

/// Fetch the app's session store from context.
///
/// # Panics
///
/// Panics when called outside the tree rendered by [`crate::app::App`].
pub fn use_session() -> AppSession {
    expect_context::<AppSession>()
}

impl<A: AuthApi, S: KeyValueStore> SessionStore<A, S> {
    /// Create the store, reading the persisted token once.
    pub fn restore(api: A, storage: S) -> Self {
        let session = Session::restore(&storage);
        if session.is_authenticated() {
            leptos::logging::log!("restored session token from storage");
        }
        Self { api, storage, session: RwSignal::new(session) }
    }

    /// Snapshot of the current state without subscribing.
    pub fn session(&self) -> Session {
        self.session.get_untracked()
    }

    /// Tracked read: reactive closures re-run when the session changes.
    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user.clone())
    }

    /// Exchange credentials for a token and start the session.
    ///
    /// The profile comes from the response only. A token-only response
    /// leaves `user` empty rather than pairing the new token with an older
    /// profile.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthError`] from the API; the session is left unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let credentials = LoginCredentials { email: email.to_owned(), password: password.to_owned() };
        let response = self
            .api
            .login(&credentials)
            .await
            .and_then(require_token)
            .inspect_err(|e| leptos::logging::error!("login failed: {e}"))?;

        self.start(&response);
        Ok(response)
    }

    /// Create an account and start its session.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthError`] from the API; the session is left unchanged.
    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, AuthError> {
        let response = self
            .api
            .register(registration)
            .await
            .and_then(require_token)
            .inspect_err(|e| leptos::logging::error!("registration failed: {e}"))?;

        self.start(&response);
        Ok(response)
    }

    fn start(&self, response: &AuthResponse) {
        self.storage.set(TOKEN_STORAGE_KEY, &response.access_token);
        self.session.set(Session { token: Some(response.access_token.clone()), user: response.user.clone() });
    }

    /// End the session. The backend is asked to revoke the token first, but
    /// local state is cleared even when that call fails.
    pub async fn logout(&self) {
        let token = self.session.with_untracked(|s| s.token.clone());
        if let Err(e) = self.api.logout(token.as_deref()).await {
            leptos::logging::warn!("logout endpoint error, clearing local session anyway: {e}");
        }
        self.storage.remove(TOKEN_STORAGE_KEY);
        self.session.set(Session::default());
    }
}

fn require_token(response: AuthResponse) -> Result<AuthResponse, AuthError> {
    if response.access_token.is_empty() {
        return Err(AuthError::Decode("empty access_token".to_owned()));
    }
    Ok(response)
}
