use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::admin::dtos::{
    AdminCategoryDto, AdminListQuery, AdminProductDto, AdminProductImageDto,
    AdminProductImagesQuery, AdminProductsQuery, AdminResourceDto, AdminUserDto,
};
use crate::features::admin::registry::ADMIN_RESOURCES;
use crate::features::admin::services::AdminService;
use crate::features::auth::guards::RequireStaff;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// The operator console resource registry
#[utoipa::path(
    get,
    path = "/api/admin/resources",
    responses(
        (status = 200, description = "Registered console resources", body = ApiResponse<Vec<AdminResourceDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Staff access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_admin_resources(
    RequireStaff(_user): RequireStaff,
) -> Result<Json<ApiResponse<Vec<AdminResourceDto>>>> {
    let resources: Vec<AdminResourceDto> = ADMIN_RESOURCES.iter().map(|r| r.into()).collect();
    Ok(Json(ApiResponse::success(Some(resources), None, None)))
}

/// List categories for the console
#[utoipa::path(
    get,
    path = "/api/admin/categories",
    params(AdminListQuery, PaginationQuery),
    responses(
        (status = 200, description = "Paginated categories", body = ApiResponse<Vec<AdminCategoryDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Staff access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_admin_categories(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<AdminService>>,
    Query(query): Query<AdminListQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<AdminCategoryDto>>>> {
    let (items, total) = service
        .list_categories(pagination.offset(), pagination.limit(), query.q.as_deref())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// List products for the console
#[utoipa::path(
    get,
    path = "/api/admin/products",
    params(AdminProductsQuery, PaginationQuery),
    responses(
        (status = 200, description = "Paginated products", body = ApiResponse<Vec<AdminProductDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Staff access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_admin_products(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<AdminService>>,
    Query(query): Query<AdminProductsQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<AdminProductDto>>>> {
    let (items, total) = service
        .list_products(
            pagination.offset(),
            pagination.limit(),
            query.q.as_deref(),
            query.category,
            query.is_active,
        )
        .await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// List product images for the console
#[utoipa::path(
    get,
    path = "/api/admin/product-images",
    params(AdminProductImagesQuery, PaginationQuery),
    responses(
        (status = 200, description = "Paginated product images", body = ApiResponse<Vec<AdminProductImageDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Staff access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_admin_product_images(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<AdminService>>,
    Query(query): Query<AdminProductImagesQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<AdminProductImageDto>>>> {
    let (items, total) = service
        .list_product_images(pagination.offset(), pagination.limit(), query.product)
        .await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// List users for the console
#[utoipa::path(
    get,
    path = "/api/admin/users",
    params(AdminListQuery, PaginationQuery),
    responses(
        (status = 200, description = "Paginated users", body = ApiResponse<Vec<AdminUserDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Staff access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_admin_users(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<AdminService>>,
    Query(query): Query<AdminListQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<AdminUserDto>>>> {
    let (items, total) = service
        .list_users(pagination.offset(), pagination.limit(), query.q.as_deref())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}
