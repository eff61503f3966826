use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{
    RefreshTokenRequestDto, RefreshTokenResponseDto, TokenObtainRequestDto, TokenPairResponseDto,
};
use crate::features::auth::services::AuthService;
use crate::shared::types::ApiResponse;
use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

/// Obtain an access + refresh token pair
#[utoipa::path(
    post,
    path = "/api/token",
    request_body = TokenObtainRequestDto,
    responses(
        (status = 200, description = "Token pair issued", body = ApiResponse<TokenPairResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn obtain_token(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<TokenObtainRequestDto>,
) -> Result<Json<ApiResponse<TokenPairResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let pair = service.obtain_pair(dto).await?;
    Ok(Json(ApiResponse::success(Some(pair), None, None)))
}

/// Refresh an access token using a refresh token
#[utoipa::path(
    post,
    path = "/api/token/refresh",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "Token refreshed successfully", body = ApiResponse<RefreshTokenResponseDto>),
        (status = 401, description = "Invalid or expired refresh token")
    ),
    tag = "auth"
)]
pub async fn refresh_token(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<RefreshTokenRequestDto>,
) -> Result<Json<ApiResponse<RefreshTokenResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service.refresh(dto)?;
    Ok(Json(ApiResponse::success(Some(response), None, None)))
}
