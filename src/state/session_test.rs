use super::*;
use futures::executor::block_on;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

// =========================================================================
// MemoryStorage
// =========================================================================

/// Shared in-memory store; clones see the same entries so a test can keep a
/// handle after moving one into the session store.
#[derive(Clone, Default)]
struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<RefCell<usize>>,
}

impl MemoryStorage {
    fn with_token(token: &str) -> Self {
        let storage = Self::default();
        storage.entries.borrow_mut().insert(TOKEN_STORAGE_KEY.to_owned(), token.to_owned());
        storage
    }

    fn token(&self) -> Option<String> {
        self.entries.borrow().get(TOKEN_STORAGE_KEY).cloned()
    }

    fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        *self.writes.borrow_mut() += 1;
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        *self.writes.borrow_mut() += 1;
        self.entries.borrow_mut().remove(key);
    }
}

// =========================================================================
// MockApi
// =========================================================================

#[derive(Clone, Default)]
struct MockApi {
    login_result: Option<Result<AuthResponse, AuthError>>,
    register_result: Option<Result<AuthResponse, AuthError>>,
    logout_error: Option<AuthError>,
    logins: Rc<RefCell<Vec<LoginCredentials>>>,
    logout_tokens: Rc<RefCell<Vec<Option<String>>>>,
}

fn unconfigured() -> AuthError {
    AuthError::Request("unconfigured".to_owned())
}

#[async_trait::async_trait(?Send)]
impl AuthApi for MockApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, AuthError> {
        self.logins.borrow_mut().push(credentials.clone());
        self.login_result.clone().unwrap_or_else(|| Err(unconfigured()))
    }

    async fn register(&self, _registration: &Registration) -> Result<AuthResponse, AuthError> {
        self.register_result.clone().unwrap_or_else(|| Err(unconfigured()))
    }

    async fn logout(&self, token: Option<&str>) -> Result<(), AuthError> {
        self.logout_tokens.borrow_mut().push(token.map(str::to_owned));
        match &self.logout_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

fn token_response(token: &str) -> AuthResponse {
    AuthResponse { access_token: token.to_owned(), token_type: Some("Bearer".to_owned()), user: None }
}

fn alice() -> User {
    User {
        id: "1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        email_verified_at: None,
        created_at: None,
        updated_at: None,
    }
}

fn registration() -> Registration {
    Registration {
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "secret123".to_owned(),
        password_confirmation: "secret123".to_owned(),
    }
}

fn network_error() -> AuthError {
    AuthError::Request("NetworkError when attempting to fetch resource.".to_owned())
}

// =========================================================================
// restore
// =========================================================================

#[test]
fn restore_without_token_is_unauthenticated() {
    let store = SessionStore::restore(MockApi::default(), MemoryStorage::default());
    assert_eq!(store.session(), Session::default());
    assert!(!store.is_authenticated());
}

#[test]
fn restore_with_token_is_authenticated_without_user() {
    let store = SessionStore::restore(MockApi::default(), MemoryStorage::with_token("T"));
    assert!(store.is_authenticated());
    assert_eq!(store.token().as_deref(), Some("T"));
    assert!(store.user().is_none());
}

#[test]
fn restore_treats_empty_token_as_absent() {
    let store = SessionStore::restore(MockApi::default(), MemoryStorage::with_token(""));
    assert!(!store.is_authenticated());
    assert!(store.token().is_none());
}

// =========================================================================
// login
// =========================================================================

#[test]
fn login_success_persists_token_and_authenticates() {
    let storage = MemoryStorage::default();
    let api = MockApi { login_result: Some(Ok(token_response("T"))), ..MockApi::default() };
    let logins = api.logins.clone();
    let store = SessionStore::restore(api, storage.clone());

    let resp = block_on(store.login("alice@example.com", "pw")).unwrap();

    assert_eq!(resp.access_token, "T");
    assert_eq!(storage.token().as_deref(), Some("T"));
    assert!(store.is_authenticated());
    assert_eq!(store.token().as_deref(), Some("T"));
    assert_eq!(
        logins.borrow().as_slice(),
        &[LoginCredentials { email: "alice@example.com".to_owned(), password: "pw".to_owned() }]
    );
}

#[test]
fn login_then_restart_restores_token_but_not_user() {
    let storage = MemoryStorage::default();
    let api = MockApi {
        login_result: Some(Ok(AuthResponse { user: Some(alice()), ..token_response("T") })),
        ..MockApi::default()
    };
    let store = SessionStore::restore(api, storage.clone());
    block_on(store.login("alice@example.com", "pw")).unwrap();
    assert_eq!(store.user(), Some(alice()));

    let restarted = SessionStore::restore(MockApi::default(), storage);
    assert!(restarted.is_authenticated());
    assert_eq!(restarted.token().as_deref(), Some("T"));
    assert!(restarted.user().is_none());
}

#[test]
fn login_without_user_in_response_leaves_user_absent() {
    let api = MockApi { login_result: Some(Ok(token_response("T"))), ..MockApi::default() };
    let store = SessionStore::restore(api, MemoryStorage::default());
    block_on(store.login("a@b.com", "pw")).unwrap();
    assert!(store.user().is_none());
}

#[test]
fn login_token_only_response_drops_previous_user() {
    let storage = MemoryStorage::default();
    let api = MockApi {
        register_result: Some(Ok(AuthResponse { user: Some(alice()), ..token_response("R") })),
        login_result: Some(Ok(token_response("T"))),
        ..MockApi::default()
    };
    let store = SessionStore::restore(api, storage.clone());
    block_on(store.register(&registration())).unwrap();
    assert_eq!(store.user(), Some(alice()));

    block_on(store.login("bob@example.com", "pw")).unwrap();

    assert_eq!(store.token().as_deref(), Some("T"));
    assert!(store.user().is_none());
    assert_eq!(storage.token().as_deref(), Some("T"));
}

#[test]
fn login_network_error_leaves_state_and_storage_untouched() {
    let storage = MemoryStorage::default();
    let api = MockApi { login_result: Some(Err(network_error())), ..MockApi::default() };
    let store = SessionStore::restore(api, storage.clone());

    let err = block_on(store.login("a@b.com", "pw")).unwrap_err();

    assert_eq!(err, network_error());
    assert!(!store.is_authenticated());
    assert_eq!(store.session(), Session::default());
    assert_eq!(storage.writes(), 0);
    assert!(storage.token().is_none());
}

#[test]
fn login_rejected_credentials_keep_existing_session() {
    let storage = MemoryStorage::with_token("OLD");
    let api = MockApi {
        login_result: Some(Err(AuthError::Status { status: 401, message: Some("Invalid credentials".to_owned()) })),
        ..MockApi::default()
    };
    let store = SessionStore::restore(api, storage.clone());

    assert!(block_on(store.login("a@b.com", "wrong")).is_err());
    assert_eq!(store.token().as_deref(), Some("OLD"));
    assert_eq!(storage.token().as_deref(), Some("OLD"));
}

#[test]
fn login_empty_token_is_a_failure() {
    let storage = MemoryStorage::default();
    let api = MockApi { login_result: Some(Ok(token_response(""))), ..MockApi::default() };
    let store = SessionStore::restore(api, storage.clone());

    let err = block_on(store.login("a@b.com", "pw")).unwrap_err();
    assert!(matches!(err, AuthError::Decode(_)));
    assert!(!store.is_authenticated());
    assert_eq!(storage.writes(), 0);
}

// =========================================================================
// register
// =========================================================================

#[test]
fn register_success_sets_token_and_user() {
    let storage = MemoryStorage::default();
    let api = MockApi {
        register_result: Some(Ok(AuthResponse { user: Some(alice()), ..token_response("R") })),
        ..MockApi::default()
    };
    let store = SessionStore::restore(api, storage.clone());

    let resp = block_on(store.register(&registration())).unwrap();

    assert_eq!(resp.user, Some(alice()));
    assert_eq!(store.user(), Some(alice()));
    assert_eq!(store.token().as_deref(), Some("R"));
    assert_eq!(storage.token().as_deref(), Some("R"));
    assert!(store.is_authenticated());
}

#[test]
fn register_failure_leaves_state_untouched() {
    let storage = MemoryStorage::default();
    let api = MockApi {
        register_result: Some(Err(AuthError::from_status(422, r#"{"message":"The email has already been taken."}"#))),
        ..MockApi::default()
    };
    let store = SessionStore::restore(api, storage.clone());

    let err = block_on(store.register(&registration())).unwrap_err();

    assert!(matches!(err, AuthError::Status { status: 422, .. }));
    assert_eq!(store.session(), Session::default());
    assert_eq!(storage.writes(), 0);
}

// =========================================================================
// logout
// =========================================================================

#[test]
fn logout_clears_session_and_storage() {
    let storage = MemoryStorage::default();
    let api = MockApi {
        register_result: Some(Ok(AuthResponse { user: Some(alice()), ..token_response("R") })),
        ..MockApi::default()
    };
    let store = SessionStore::restore(api, storage.clone());
    block_on(store.register(&registration())).unwrap();

    block_on(store.logout());

    assert_eq!(store.session(), Session::default());
    assert!(!store.is_authenticated());
    assert!(storage.token().is_none());
}

#[test]
fn logout_sends_held_bearer_token() {
    let api = MockApi::default();
    let tokens = api.logout_tokens.clone();
    let store = SessionStore::restore(api, MemoryStorage::with_token("T"));

    block_on(store.logout());

    assert_eq!(tokens.borrow().as_slice(), &[Some("T".to_owned())]);
}

#[test]
fn logout_network_error_still_ends_session() {
    let storage = MemoryStorage::with_token("T");
    let api = MockApi { logout_error: Some(network_error()), ..MockApi::default() };
    let store = SessionStore::restore(api, storage.clone());

    block_on(store.logout());

    assert!(store.token().is_none());
    assert!(!store.is_authenticated());
    assert!(storage.token().is_none());
}

#[test]
fn logout_server_error_still_ends_session() {
    let storage = MemoryStorage::with_token("T");
    let api = MockApi {
        logout_error: Some(AuthError::Status { status: 500, message: None }),
        ..MockApi::default()
    };
    let store = SessionStore::restore(api, storage.clone());

    block_on(store.logout());

    assert_eq!(store.session(), Session::default());
    assert!(storage.token().is_none());
}

#[test]
fn logout_when_unauthenticated_is_idempotent() {
    let storage = MemoryStorage::default();
    let api = MockApi::default();
    let tokens = api.logout_tokens.clone();
    let store = SessionStore::restore(api, storage.clone());

    block_on(store.logout());
    block_on(store.logout());

    assert_eq!(store.session(), Session::default());
    assert!(storage.token().is_none());
    assert_eq!(storage.writes(), 2);
    assert_eq!(tokens.borrow().as_slice(), &[None, None]);
}

// =========================================================================
// Session
// =========================================================================

#[test]
fn session_authenticated_tracks_token_presence() {
    let mut session = Session::default();
    assert!(!session.is_authenticated());
    session.token = Some("T".to_owned());
    assert!(session.is_authenticated());
}
