use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::users::models::User;

/// Request DTO for user registration
///
/// Deliberately not `Serialize`: the password is write-only and must never
/// appear in any response or log serialization.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(
        length(min = 1, max = 150, message = "Username must be 1-150 characters"),
        regex(
            path = "*crate::shared::validation::USERNAME_REGEX",
            message = "Username must start with letter or underscore and contain only alphanumeric characters and underscores"
        )
    )]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(regex(
        path = "*crate::shared::validation::PHONE_REGEX",
        message = "Invalid phone number format"
    ))]
    pub phone_number: Option<String>,

    #[validate(length(max = 500, message = "Address must not exceed 500 characters"))]
    pub address: Option<String>,
}

/// Request DTO for profile updates
///
/// Username and id are immutable through this path.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(email(message = "Invalid email format"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[validate(regex(
        path = "*crate::shared::validation::PHONE_REGEX",
        message = "Invalid phone number format"
    ))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[validate(length(max = 500, message = "Address must not exceed 500 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Response DTO for a user account (no password field)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            phone_number: u.phone_number,
            address: u.address,
            created_at: u.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;

    fn valid_registration() -> RegisterRequestDto {
        RegisterRequestDto {
            username: "john_doe".to_string(),
            email: SafeEmail().fake(),
            password: "hunter22-long".to_string(),
            phone_number: None,
            address: None,
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(valid_registration().validate().is_ok());
    }

    #[test]
    fn test_short_password_fails() {
        let mut dto = valid_registration();
        dto.password = "short".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_bad_email_fails() {
        let mut dto = valid_registration();
        dto.email = "not-an-email".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_bad_username_fails() {
        let mut dto = valid_registration();
        dto.username = "9lives".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_response_dto_has_no_password() {
        // Compile-time property backed by a serialization check
        let dto = UserResponseDto {
            id: Uuid::new_v4(),
            username: "john_doe".to_string(),
            email: "john@example.com".to_string(),
            phone_number: "".to_string(),
            address: "".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert!(!json.contains("password"));
    }
}
