//! API request and response types

use crate::models::User;
use serde::{Deserialize, Serialize};

/// Signup request
///
/// The confirmation field uses the `confirmPassword` wire name expected by
/// the web client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful signup/login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub result: User,
    pub token: String,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_wire_names() {
        let json = r#"{
            "email": "student@example.com",
            "password": "warrior-two",
            "confirmPassword": "warrior-two"
        }"#;

        let req: SignupRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.email, "student@example.com");
        assert_eq!(req.confirm_password, "warrior-two");

        let round_trip = serde_json::to_value(&req).unwrap();
        assert!(round_trip.get("confirmPassword").is_some());
        assert!(round_trip.get("confirm_password").is_none());
    }

    #[test]
    fn test_error_response_shape() {
        let err = ErrorResponse {
            message: "Invalid credentials".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"message":"Invalid credentials"}"#);
    }
}
