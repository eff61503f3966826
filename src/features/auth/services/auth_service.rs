use sqlx::PgPool;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{
    RefreshTokenRequestDto, RefreshTokenResponseDto, TokenObtainRequestDto, TokenPairResponseDto,
};
use crate::features::auth::services::token_service::TokenService;
use crate::features::auth::services::verify_password;
use crate::features::users::models::User;

/// Service for credential-based token issuance
pub struct AuthService {
    pool: PgPool,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(pool: PgPool, token_service: Arc<TokenService>) -> Self {
        Self {
            pool,
            token_service,
        }
    }

    /// Exchange username + password for an access/refresh token pair
    ///
    /// Unknown users and wrong passwords both fail with the same message.
    pub async fn obtain_pair(&self, dto: TokenObtainRequestDto) -> Result<TokenPairResponseDto> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, phone_number, address, is_staff, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(&dto.username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up user for login: {:?}", e);
            AppError::Database(e)
        })?;

        let user = user
            .ok_or_else(|| AppError::Auth("Invalid username or password".to_string()))?;

        if !verify_password(&user.password_hash, &dto.password)? {
            return Err(AppError::Auth("Invalid username or password".to_string()));
        }

        tracing::info!("Token pair issued for user: {}", user.username);

        self.token_service.issue_pair(&user)
    }

    /// Exchange a refresh token for a new access token
    pub fn refresh(&self, dto: RefreshTokenRequestDto) -> Result<RefreshTokenResponseDto> {
        self.token_service.refresh_access_token(&dto.refresh)
    }
}
