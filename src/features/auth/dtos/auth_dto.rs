use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for obtaining a token pair
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct TokenObtainRequestDto {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request DTO for token refresh
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RefreshTokenRequestDto {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh: String,
}

/// Response DTO for token obtain (access + refresh pair)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenPairResponseDto {
    /// JWT access token
    pub access: String,
    /// JWT refresh token
    pub refresh: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Access token expiry time in seconds
    pub expires_in: i64,
}

/// Response DTO for token refresh
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RefreshTokenResponseDto {
    /// New JWT access token
    pub access: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Token expiry time in seconds
    pub expires_in: i64,
}
