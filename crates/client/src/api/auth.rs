//! Authentication endpoints.
//!
//! These return raw wire payloads; session lifecycle (persisting the
//! token, fail-closed logout) lives in [`crate::stores::SessionStore`].

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::models::UserProfile;

use super::{ApiClient, ApiError};

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Profile update request body; unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Password change request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// Successful login/register payload: the profile plus its bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub user: UserProfile,
    pub token: String,
}

impl ApiClient {
    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] on bad credentials, or another
    /// error if the request fails.
    #[instrument(skip(self, credentials))]
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthPayload, ApiError> {
        let builder = self
            .request(Method::POST, &["auth", "login"])?
            .json(credentials);
        self.fetch(builder).await
    }

    /// Create an account and log it in.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected (e.g. the
    /// email is already registered).
    #[instrument(skip(self, new_user))]
    pub async fn register(&self, new_user: &NewUser) -> Result<AuthPayload, ApiError> {
        let builder = self
            .request(Method::POST, &["auth", "register"])?
            .json(new_user);
        self.fetch(builder).await
    }

    /// Fetch the profile behind the attached token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] if the token is missing or
    /// no longer valid.
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        let builder = self.request(Method::GET, &["auth", "me"])?;
        self.fetch(builder).await
    }

    /// Update the authenticated user's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let builder = self
            .request(Method::PUT, &["auth", "profile"])?
            .json(update);
        self.fetch(builder).await
    }

    /// Change the authenticated user's password.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected (e.g. the
    /// current password is wrong).
    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PUT, &["auth", "change-password"])?
            .json(change);
        self.execute(builder).await
    }
}
