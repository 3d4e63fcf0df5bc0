//! User profile model.

use serde::{Deserialize, Serialize};

use robotech_core::{Email, UserId, UserRole};

/// Profile of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: UserId,
    pub name: String,
    pub email: Email,
    #[serde(default)]
    pub role: UserRole,
}

impl UserProfile {
    /// Whether this user may access the admin console.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_defaults_to_user() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"id": "u1", "name": "Dana", "email": "dana@example.com"}"#,
        )
        .unwrap();
        assert_eq!(profile.role, UserRole::User);
        assert!(!profile.is_admin());
    }

    #[test]
    fn test_admin_role() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"_id": "u2", "name": "Admin User", "email": "admin@example.com", "role": "admin"}"#,
        )
        .unwrap();
        assert!(profile.is_admin());
    }
}
