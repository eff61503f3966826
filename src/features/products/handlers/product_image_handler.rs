use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::products::dtos::{ImageUploadForm, ProductImageResponseDto, ProductResponseDto};
use crate::features::products::services::ProductImageService;
use crate::shared::constants::{is_image_mime_type_allowed, ALLOWED_IMAGE_MIME_TYPES, MAX_IMAGE_SIZE};
use crate::shared::types::ApiResponse;

/// An image file pulled out of a multipart request
struct ImageUpload {
    data: Vec<u8>,
    content_type: String,
    file_name: String,
}

/// Read the `image` field from a multipart body and validate it
async fn read_image_field(mut multipart: Multipart) -> Result<ImageUpload, AppError> {
    let mut upload: Option<ImageUpload> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "image" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let file_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read image bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read image data: {}", e))
                })?;

                upload = Some(ImageUpload {
                    data: data.to_vec(),
                    content_type,
                    file_name,
                });
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let upload =
        upload.ok_or_else(|| AppError::BadRequest("Image field is required".to_string()))?;

    if upload.data.len() > MAX_IMAGE_SIZE {
        return Err(AppError::BadRequest(format!(
            "Image too large. Maximum size is {} bytes ({} MB)",
            MAX_IMAGE_SIZE,
            MAX_IMAGE_SIZE / 1024 / 1024
        )));
    }

    if !is_image_mime_type_allowed(&upload.content_type) {
        return Err(AppError::BadRequest(format!(
            "File type '{}' is not allowed. Allowed types: {}",
            upload.content_type,
            ALLOWED_IMAGE_MIME_TYPES.join(", ")
        )));
    }

    Ok(upload)
}

/// Upload or replace the product's primary image
///
/// Accepts multipart/form-data with an `image` field.
#[utoipa::path(
    post,
    path = "/api/products/{id}/image",
    params(
        ("id" = Uuid, Path, description = "Product id")
    ),
    request_body(
        content = ImageUploadForm,
        content_type = "multipart/form-data",
        description = "Image upload form",
    ),
    responses(
        (status = 200, description = "Primary image set", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Invalid file"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Product not found")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_primary_image(
    _user: AuthenticatedUser,
    State(service): State<Arc<ProductImageService>>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<ProductResponseDto>>, AppError> {
    let upload = read_image_field(multipart).await?;

    let product = service
        .upload_primary_image(id, upload.data, &upload.content_type, &upload.file_name)
        .await?;

    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Attach a gallery image to a product
///
/// Accepts multipart/form-data with an `image` field.
#[utoipa::path(
    post,
    path = "/api/products/{id}/images",
    params(
        ("id" = Uuid, Path, description = "Product id")
    ),
    request_body(
        content = ImageUploadForm,
        content_type = "multipart/form-data",
        description = "Image upload form",
    ),
    responses(
        (status = 201, description = "Gallery image attached", body = ApiResponse<ProductImageResponseDto>),
        (status = 400, description = "Invalid file"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Product not found")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_gallery_image(
    _user: AuthenticatedUser,
    State(service): State<Arc<ProductImageService>>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<ProductImageResponseDto>>), AppError> {
    let upload = read_image_field(multipart).await?;

    let image = service
        .add_gallery_image(id, upload.data, &upload.content_type, &upload.file_name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(image), None, None)),
    ))
}

/// Remove a gallery image from a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}/images/{image_id}",
    params(
        ("id" = Uuid, Path, description = "Product id"),
        ("image_id" = Uuid, Path, description = "Image id")
    ),
    responses(
        (status = 200, description = "Gallery image removed"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Image not found")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_gallery_image(
    _user: AuthenticatedUser,
    State(service): State<Arc<ProductImageService>>,
    Path((id, image_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    service.delete_gallery_image(id, image_id).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Image deleted successfully".to_string()),
        None,
    )))
}
