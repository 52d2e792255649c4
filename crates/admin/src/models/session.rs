//! Session-related types.
//!
//! Types stored in the session for authentication state.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use stockpile_core::{PermissionLevel, UserRecord, permission_level_for_role};

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for the logged-in operator (user + token + permission level).
    pub const CURRENT_USER: &str = "current_user";
}

/// The logged-in operator as stored in the session.
///
/// User, bearer token, and permission level travel as one value: a session
/// either has all three or none of them, which is the whole auth invariant.
/// The token is wrapped in [`SecretString`] so `Debug` output and logs never
/// reveal it; serialization into the session store is explicit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user: UserRecord,
    #[serde(serialize_with = "expose_token", deserialize_with = "wrap_token")]
    token: SecretString,
    pub permission_level: PermissionLevel,
}

impl CurrentUser {
    /// Build the session identity from a successful login response,
    /// deriving the permission level from the user's role.
    #[must_use]
    pub fn new(user: UserRecord, token: SecretString) -> Self {
        let permission_level = permission_level_for_role(&user.role);
        Self {
            user,
            token,
            permission_level,
        }
    }

    /// The bearer token for upstream requests.
    #[must_use]
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }
}

fn expose_token<S>(token: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(token.expose_secret())
}

fn wrap_token<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(SecretString::from(String::deserialize(deserializer)?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_user(role: &str) -> UserRecord {
        UserRecord {
            id: "u1".to_string(),
            name: "Priya Shah".to_string(),
            email: "priya@example.com".to_string(),
            role: role.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn derives_level_one_for_admins() {
        let user = CurrentUser::new(test_user("admin"), SecretString::from("tok"));
        assert_eq!(user.permission_level, 1);
    }

    #[test]
    fn derives_level_two_for_everyone_else() {
        let user = CurrentUser::new(test_user("manager"), SecretString::from("tok"));
        assert_eq!(user.permission_level, 2);
    }

    #[test]
    fn survives_a_session_round_trip() {
        let before = CurrentUser::new(test_user("admin"), SecretString::from("bearer-123"));
        let stored = serde_json::to_string(&before).unwrap();
        let after: CurrentUser = serde_json::from_str(&stored).unwrap();
        assert_eq!(after.user, before.user);
        assert_eq!(after.token(), "bearer-123");
        assert_eq!(after.permission_level, 1);
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let user = CurrentUser::new(test_user("admin"), SecretString::from("top-secret"));
        let debug = format!("{user:?}");
        assert!(!debug.contains("top-secret"));
    }
}
