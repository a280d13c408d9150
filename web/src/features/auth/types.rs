//! Request and response types for auth-related API calls. The login payload
//! carries the raw password, so it must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Identity summary returned by the API for the signed-in user.
/// This mirrors cookie-backed session state and contains no secrets.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_serializes_both_fields() {
        let request = LoginRequest {
            email: "ann@x.com".to_string(),
            password: "secret1".to_string(),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(json.contains("\"email\":\"ann@x.com\""));
        assert!(json.contains("\"password\":\"secret1\""));
    }

    #[test]
    fn current_user_deserializes_the_api_shape() {
        let json = r#"{
            "id": "5f8b9c1e-1111-2222-3333-444455556666",
            "name": "Ann",
            "email": "ann@x.com",
            "created_at": "2024-06-01T12:00:00Z"
        }"#;

        let user: CurrentUser = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "ann@x.com");
    }
}
