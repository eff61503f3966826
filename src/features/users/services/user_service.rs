use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::services::hash_password;
use crate::features::users::dtos::{RegisterRequestDto, UpdateProfileDto, UserResponseDto};
use crate::features::users::models::User;

const USER_COLUMNS: &str =
    "id, username, email, password_hash, phone_number, address, is_staff, created_at, updated_at";

/// Service for user registration and profile management
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new user account
    ///
    /// The password is hashed before it ever reaches the database; duplicate
    /// usernames and emails fail validation.
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<UserResponseDto> {
        if self.username_taken(&dto.username).await? {
            return Err(AppError::Validation("Username already taken".to_string()));
        }
        if self.email_taken(&dto.email, None).await? {
            return Err(AppError::Validation("Email already registered".to_string()));
        }

        let password_hash = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (username, email, password_hash, phone_number, address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(&password_hash)
        .bind(dto.phone_number.unwrap_or_default())
        .bind(dto.address.unwrap_or_default())
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        tracing::info!("User registered: id={}, username={}", user.id, user.username);

        Ok(user.into())
    }

    /// Get a user's own profile
    pub async fn get_profile(&self, user_id: Uuid) -> Result<UserResponseDto> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user profile: {:?}", e);
            AppError::Database(e)
        })?;

        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Update the authenticated user's own profile
    ///
    /// Only email, phone number and address are writable here.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        dto: UpdateProfileDto,
    ) -> Result<UserResponseDto> {
        if let Some(email) = &dto.email {
            if self.email_taken(email, Some(user_id)).await? {
                return Err(AppError::Validation("Email already registered".to_string()));
            }
        }

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET email = COALESCE($2, email),
                phone_number = COALESCE($3, phone_number),
                address = COALESCE($4, address),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(dto.email)
        .bind(dto.phone_number)
        .bind(dto.address)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn username_taken(&self, username: &str) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(exists)
    }

    async fn email_taken(&self, email: &str, exclude_user: Option<Uuid>) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(email)
        .bind(exclude_user)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(exists)
    }
}

/// Map PostgreSQL unique violations (racing past the pre-checks) to validation errors
fn map_unique_violation(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some("23505") {
            return AppError::Validation("Username or email already taken".to_string());
        }
    }

    tracing::error!("Failed to write user: {:?}", e);
    AppError::Database(e)
}
