use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{RefreshTokenResponseDto, TokenPairResponseDto};
use crate::features::auth::model::{
    AuthenticatedUser, Claims, TOKEN_TYPE_ACCESS, TOKEN_TYPE_REFRESH,
};
use crate::features::users::models::User;

/// Service for issuing and validating HS256 token pairs
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
    leeway_secs: u64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl_secs: config.access_token_ttl.as_secs() as i64,
            refresh_ttl_secs: config.refresh_token_ttl.as_secs() as i64,
            leeway_secs: config.jwt_leeway.as_secs(),
        }
    }

    /// Issue an access + refresh token pair for the given user
    pub fn issue_pair(&self, user: &User) -> Result<TokenPairResponseDto> {
        let access = self.issue_token(user, TOKEN_TYPE_ACCESS, self.access_ttl_secs)?;
        let refresh = self.issue_token(user, TOKEN_TYPE_REFRESH, self.refresh_ttl_secs)?;

        Ok(TokenPairResponseDto {
            access,
            refresh,
            token_type: "Bearer".to_string(),
            expires_in: self.access_ttl_secs,
        })
    }

    /// Validate an access token and extract the authenticated user
    ///
    /// Refresh tokens are rejected here: they only buy a new access token
    /// through [`TokenService::refresh_access_token`].
    pub fn validate_access_token(&self, token: &str) -> Result<AuthenticatedUser> {
        let claims = self.decode_claims(token)?;

        if claims.token_type != TOKEN_TYPE_ACCESS {
            return Err(AppError::Auth("Token is not an access token".to_string()));
        }

        claims_to_user(&claims)
    }

    /// Exchange a valid refresh token for a new access token
    pub fn refresh_access_token(&self, refresh_token: &str) -> Result<RefreshTokenResponseDto> {
        let claims = self.decode_claims(refresh_token)?;

        if claims.token_type != TOKEN_TYPE_REFRESH {
            return Err(AppError::Auth("Token is not a refresh token".to_string()));
        }

        let user = claims_to_user(&claims)?;
        let now = Utc::now().timestamp();

        let access_claims = Claims {
            sub: user.user_id.to_string(),
            username: user.username,
            is_staff: user.is_staff,
            token_type: TOKEN_TYPE_ACCESS.to_string(),
            iat: now,
            exp: now + self.access_ttl_secs,
        };

        let access = encode(&Header::default(), &access_claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        Ok(RefreshTokenResponseDto {
            access,
            token_type: "Bearer".to_string(),
            expires_in: self.access_ttl_secs,
        })
    }

    fn issue_token(&self, user: &User, token_type: &str, ttl_secs: i64) -> Result<String> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            is_staff: user.is_staff,
            token_type: token_type.to_string(),
            iat: now,
            exp: now + ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    fn decode_claims(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway_secs;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Auth(e.to_string()))?;

        Ok(token_data.claims)
    }
}

fn claims_to_user(claims: &Claims) -> Result<AuthenticatedUser> {
    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Auth("Invalid subject claim".to_string()))?;

    Ok(AuthenticatedUser {
        user_id,
        username: claims.username.clone(),
        is_staff: claims.is_staff,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::time::Duration;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-that-is-long-enough-0123456789".to_string(),
            access_token_ttl: Duration::from_secs(900),
            refresh_token_ttl: Duration::from_secs(3600),
            jwt_leeway: Duration::from_secs(0),
        }
    }

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            phone_number: "".to_string(),
            address: "".to_string(),
            is_staff: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_issue_pair_and_validate_access() {
        let service = TokenService::new(&test_config());
        let user = test_user();

        let pair = service.issue_pair(&user).unwrap();
        assert_eq!(pair.token_type, "Bearer");
        assert_eq!(pair.expires_in, 900);

        let authenticated = service.validate_access_token(&pair.access).unwrap();
        assert_eq!(authenticated.user_id, user.id);
        assert_eq!(authenticated.username, "alice");
        assert!(!authenticated.is_staff);
    }

    #[test]
    fn test_refresh_token_rejected_on_access_path() {
        let service = TokenService::new(&test_config());
        let pair = service.issue_pair(&test_user()).unwrap();

        let err = service.validate_access_token(&pair.refresh).unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }

    #[test]
    fn test_access_token_rejected_on_refresh_path() {
        let service = TokenService::new(&test_config());
        let pair = service.issue_pair(&test_user()).unwrap();

        let err = service.refresh_access_token(&pair.access).unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }

    #[test]
    fn test_refresh_yields_valid_access_token() {
        let service = TokenService::new(&test_config());
        let user = test_user();
        let pair = service.issue_pair(&user).unwrap();

        let refreshed = service.refresh_access_token(&pair.refresh).unwrap();
        let authenticated = service.validate_access_token(&refreshed.access).unwrap();
        assert_eq!(authenticated.user_id, user.id);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = TokenService::new(&test_config());
        let other = TokenService::new(&AuthConfig {
            jwt_secret: "another-secret-that-is-long-enough-987654".to_string(),
            ..test_config()
        });

        let pair = other.issue_pair(&test_user()).unwrap();
        assert!(service.validate_access_token(&pair.access).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let service = TokenService::new(&config);

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            username: "alice".to_string(),
            is_staff: false,
            token_type: TOKEN_TYPE_ACCESS.to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = service.validate_access_token(&token).unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }
}
