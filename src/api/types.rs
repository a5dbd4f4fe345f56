//! Wire types for the EduPortal REST API
//!
//! The backend speaks camelCase JSON; the structs here own the renames so
//! the rest of the crate stays snake_case.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/enrollments`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country_code: String,
    pub course: String,
    pub institution: String,
    pub consent: bool,
}

/// Body of `POST /api/auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /api/auth/login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

/// The authenticated user carried in a successful login response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthUser {
    pub id: String,
    pub full_name: String,
    pub email: String,
}

/// Body of `POST /api/auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub full_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub email: String,
    pub mobile_number: String,
    pub password: String,
    pub confirm_password: String,
}

/// Response of `POST /api/auth/register`
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_enrollment_request_serializes_camel_case() {
        let request = EnrollmentRequest {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            country_code: "+91".to_string(),
            course: "data-science".to_string(),
            institution: "bits-pilani".to_string(),
            consent: true,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["countryCode"], "+91");
        assert_eq!(json["consent"], true);
        assert!(json.get("country_code").is_none());
    }

    #[test]
    fn test_registration_request_serializes_camel_case() {
        let request = RegistrationRequest {
            full_name: "Asha Rao".to_string(),
            date_of_birth: "2001-04-12".to_string(),
            gender: "Female".to_string(),
            email: "asha@example.com".to_string(),
            mobile_number: "9876543210".to_string(),
            password: "abcdefgh".to_string(),
            confirm_password: "abcdefgh".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["fullName"], "Asha Rao");
        assert_eq!(json["dateOfBirth"], "2001-04-12");
        assert_eq!(json["mobileNumber"], "9876543210");
        assert_eq!(json["confirmPassword"], "abcdefgh");
    }

    #[test]
    fn test_login_response_deserializes() {
        let json = r#"{"success": true, "message": "Welcome back", "user": {"id": "u1", "fullName": "Asha Rao", "email": "asha@example.com"}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.message, "Welcome back");
        let user = response.user.unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.full_name, "Asha Rao");
    }

    #[test]
    fn test_login_response_tolerates_missing_fields() {
        let json = r#"{"success": false}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.message, "");
        assert!(response.user.is_none());
    }

    #[test]
    fn test_auth_user_tolerates_extra_fields() {
        let json = r#"{"id": "u1", "fullName": "Asha", "email": "a@b.com", "role": "student"}"#;
        let user: AuthUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");
    }

    #[test]
    fn test_registration_response_defaults_message() {
        let response: RegistrationResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.message, "");
    }
}
