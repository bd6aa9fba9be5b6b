use serde::{Deserialize, Serialize};

/// Account profile as returned by `/api/auth/me` and `/api/users/`.
///
/// `is_superuser`, `profile_image`, and `updated_at` default when absent so
/// payloads from older backend versions still parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub profile_image: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    /// Name to address the user by: full name when set, username otherwise.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_profile() {
        let json = r#"{
            "id": 7,
            "email": "test@example.com",
            "username": "testuser",
            "full_name": "Test User",
            "is_active": true,
            "is_superuser": false,
            "profile_image": null,
            "created_at": "2024-01-15T09:30:00",
            "updated_at": "2024-02-01T12:00:00"
        }"#;

        let user: User = serde_json::from_str(json).expect("Failed to parse profile test JSON");
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "testuser");
        assert_eq!(user.display_name(), "Test User");
        assert!(user.is_active);
        assert!(!user.is_superuser);
    }

    #[test]
    fn test_parse_minimal_profile() {
        // Older backends omit the superuser and image fields entirely
        let json = r#"{
            "id": 1,
            "email": "a@b.com",
            "username": "a",
            "full_name": null,
            "is_active": true,
            "created_at": "2024-01-15T09:30:00"
        }"#;

        let user: User = serde_json::from_str(json).expect("Failed to parse profile test JSON");
        assert!(!user.is_superuser);
        assert_eq!(user.profile_image, None);
        assert_eq!(user.updated_at, None);
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut user: User = serde_json::from_str(
            r#"{"id":1,"email":"a@b.com","username":"a","full_name":null,"is_active":true,"created_at":"2024-01-15T09:30:00"}"#,
        )
        .expect("parse");
        assert_eq!(user.display_name(), "a");

        user.full_name = Some(String::new());
        assert_eq!(user.display_name(), "a");

        user.full_name = Some("A".to_string());
        assert_eq!(user.display_name(), "A");
    }
}
