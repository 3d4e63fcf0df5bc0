//! Authenticated session store.
//!
//! State machine: `Anonymous -> (login/register success) -> Authenticated
//! -> (logout | token rejected) -> Anonymous`. The user profile and the
//! bearer token are always both present or both absent.
//!
//! Fail-closed: any doubt about token validity (a failed `/auth/me`
//! verification, a 401 from an authenticated call) reverts to the
//! anonymous state rather than retaining stale trust.

use std::sync::{Arc, RwLock};

use secrecy::SecretString;
use thiserror::Error;
use tracing::instrument;

use crate::api::{ApiClient, ApiError, Credentials, NewUser, PasswordChange, ProfileUpdate};
use crate::models::UserProfile;
use crate::storage::{KeyValueStore, KeyValueStoreExt, keys};

/// Errors that can occur during session operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend rejected the operation; carries its human-readable
    /// message for inline display.
    #[error("{0}")]
    Rejected(String),

    /// The operation requires an authenticated session.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Transport-level failure.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The authenticated user plus its bearer token.
#[derive(Debug, Clone)]
struct SessionState {
    user: UserProfile,
    token: String,
}

/// Session store: owns the current user/token pair.
///
/// The bearer token is mirrored into the [`ApiClient`] so every request
/// made anywhere in the process carries it.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    api: ApiClient,
    state: RwLock<Option<SessionState>>,
}

impl SessionStore {
    /// Create an anonymous session store.
    ///
    /// Call [`restore`](Self::restore) afterwards to pick up a persisted
    /// session.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, api: ApiClient) -> Self {
        Self {
            storage,
            api,
            state: RwLock::new(None),
        }
    }

    /// Restore a persisted session and verify it against the backend.
    ///
    /// A restored token is never trusted as-is: it is immediately
    /// re-validated via `/auth/me`, and discarded if verification fails.
    /// Returns whether the session ended up authenticated.
    #[instrument(skip(self))]
    pub async fn restore(&self) -> bool {
        let user = self.read_persisted::<UserProfile>(keys::USER);
        let token = self.read_persisted::<String>(keys::AUTH_TOKEN);

        let (Some(user), Some(token)) = (user, token) else {
            return false;
        };

        self.api.set_token(SecretString::from(token.clone()));
        self.replace_state(Some(SessionState { user, token }));

        // Fail-closed verification; refresh_user logs out on failure.
        let _ = self.refresh_user().await;
        self.is_authenticated()
    }

    /// Log in with email and password.
    ///
    /// On success the session becomes authenticated and is persisted.
    /// On failure the session state is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] with the backend's message for bad
    /// credentials, or [`AuthError::Api`] for transport failures.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let credentials = Credentials {
            email: email.to_owned(),
            password: password.to_owned(),
        };

        let payload = self.api.login(&credentials).await.map_err(|e| match e {
            ApiError::Unauthorized => AuthError::Rejected("Invalid email or password".to_string()),
            ApiError::Api { message, .. } => AuthError::Rejected(message),
            other => AuthError::Api(other),
        })?;

        self.establish(payload.user.clone(), payload.token);
        Ok(payload.user)
    }

    /// Register a new account; the backend logs it in on success.
    ///
    /// Same success/failure contract as [`login`](Self::login).
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] with the backend's message if the
    /// account cannot be created.
    #[instrument(skip(self, new_user))]
    pub async fn register(&self, new_user: &NewUser) -> Result<UserProfile, AuthError> {
        let payload = self.api.register(new_user).await.map_err(|e| match e {
            ApiError::Api { message, .. } => AuthError::Rejected(message),
            other => AuthError::Api(other),
        })?;

        self.establish(payload.user.clone(), payload.token);
        Ok(payload.user)
    }

    /// Log out: clear the in-memory session, the client token, and the
    /// persisted copies, synchronously.
    pub fn logout(&self) {
        self.replace_state(None);
        self.api.clear_token();

        for key in [keys::USER, keys::AUTH_TOKEN] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!(key, "failed to remove persisted session: {e}");
            }
        }
    }

    /// Re-validate the current token against the backend.
    ///
    /// On success the stored user is replaced with the fresh profile. On
    /// any failure the session is logged out (fail-closed).
    ///
    /// # Errors
    ///
    /// Returns the verification error after logging out.
    #[instrument(skip(self))]
    pub async fn refresh_user(&self) -> Result<(), AuthError> {
        if !self.is_authenticated() {
            return Ok(());
        }

        match self.api.me().await {
            Ok(user) => {
                self.persist_user(&user);
                let mut state = self.write();
                if let Some(session) = state.as_mut() {
                    session.user = user;
                }
                Ok(())
            }
            Err(e) => {
                tracing::info!("session verification failed, logging out: {e}");
                self.logout();
                Err(self.map_authenticated_err(e))
            }
        }
    }

    /// Update the authenticated user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] if anonymous (including
    /// after a 401 forced the session closed).
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, AuthError> {
        if !self.is_authenticated() {
            return Err(AuthError::NotAuthenticated);
        }

        let user = self
            .api
            .update_profile(update)
            .await
            .map_err(|e| self.map_authenticated_err(e))?;

        self.persist_user(&user);
        {
            let mut state = self.write();
            if let Some(session) = state.as_mut() {
                session.user = user.clone();
            }
        }
        Ok(user)
    }

    /// Change the authenticated user's password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] if the current password is wrong.
    pub async fn change_password(&self, current: &str, new: &str) -> Result<(), AuthError> {
        if !self.is_authenticated() {
            return Err(AuthError::NotAuthenticated);
        }

        let change = PasswordChange {
            current_password: current.to_owned(),
            new_password: new.to_owned(),
        };

        self.api
            .change_password(&change)
            .await
            .map_err(|e| self.map_authenticated_err(e))
    }

    /// The current user, if authenticated.
    #[must_use]
    pub fn current_user(&self) -> Option<UserProfile> {
        self.read().as_ref().map(|session| session.user.clone())
    }

    /// Whether a user and token are both present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    /// Whether the current user may access the admin console.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.read()
            .as_ref()
            .is_some_and(|session| session.user.is_admin())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Enter the authenticated state and persist it.
    fn establish(&self, user: UserProfile, token: String) {
        self.api.set_token(SecretString::from(token.clone()));
        self.persist_user(&user);
        if let Err(e) = self.storage.put_json(keys::AUTH_TOKEN, &token) {
            tracing::warn!("failed to persist session token: {e}");
        }
        self.replace_state(Some(SessionState { user, token }));
    }

    /// Map an error from an authenticated call; a 401 forces logout.
    fn map_authenticated_err(&self, e: ApiError) -> AuthError {
        match e {
            ApiError::Unauthorized => {
                self.logout();
                AuthError::NotAuthenticated
            }
            ApiError::Api { message, .. } => AuthError::Rejected(message),
            other => AuthError::Api(other),
        }
    }

    fn persist_user(&self, user: &UserProfile) {
        if let Err(e) = self.storage.put_json(keys::USER, user) {
            tracing::warn!("failed to persist session user: {e}");
        }
    }

    fn read_persisted<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.storage.get_json::<T>(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, "failed to read persisted session: {e}");
                None
            }
        }
    }

    fn replace_state(&self, state: Option<SessionState>) {
        *self.write() = state;
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<SessionState>> {
        self.state
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<SessionState>> {
        self.state
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
