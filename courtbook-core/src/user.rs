//! Users and session information.

use serde::{Deserialize, Serialize};

/// Read-only projection of the authenticated principal or a booking's
/// owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// What the server reports about the current session.
///
/// `groups` is absent for anonymous sessions and on older servers, so it
/// defaults to empty; the client assumes no permission model beyond
/// authenticated vs not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub is_authenticated: bool,
    pub user: Option<User>,
    #[serde(default)]
    pub groups: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_session_decodes_without_groups() {
        let raw = serde_json::json!({
            "isAuthenticated": false,
            "user": null
        });

        let session: SessionInfo = serde_json::from_value(raw).unwrap();
        assert!(!session.is_authenticated);
        assert_eq!(session.user, None);
        assert!(session.groups.is_empty());
    }

    #[test]
    fn authenticated_session_carries_user_and_groups() {
        let raw = serde_json::json!({
            "isAuthenticated": true,
            "user": {
                "id": "3",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com"
            },
            "groups": ["captain"]
        });

        let session: SessionInfo = serde_json::from_value(raw).unwrap();
        assert!(session.is_authenticated);
        assert_eq!(session.user.unwrap().first_name, "Ada");
        assert_eq!(session.groups, vec!["captain".to_string()]);
    }
}
