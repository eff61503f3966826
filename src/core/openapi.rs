use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers, model as auth_model};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::obtain_token,
        auth_handlers::refresh_token,
        // Users
        users_handlers::register,
        users_handlers::get_profile,
        users_handlers::update_profile,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Products
        products_handlers::list_products,
        products_handlers::get_product,
        products_handlers::create_product,
        products_handlers::update_product,
        products_handlers::delete_product,
        products_handlers::upload_primary_image,
        products_handlers::upload_gallery_image,
        products_handlers::delete_gallery_image,
        // Admin
        admin_handlers::list_admin_resources,
        admin_handlers::list_admin_categories,
        admin_handlers::list_admin_products,
        admin_handlers::list_admin_product_images,
        admin_handlers::list_admin_users,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_model::AuthenticatedUser,
            auth_dtos::TokenObtainRequestDto,
            auth_dtos::TokenPairResponseDto,
            auth_dtos::RefreshTokenRequestDto,
            auth_dtos::RefreshTokenResponseDto,
            ApiResponse<auth_dtos::TokenPairResponseDto>,
            ApiResponse<auth_dtos::RefreshTokenResponseDto>,
            // Users
            users_dtos::RegisterRequestDto,
            users_dtos::UpdateProfileDto,
            users_dtos::UserResponseDto,
            ApiResponse<users_dtos::UserResponseDto>,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Products
            products_dtos::CreateProductDto,
            products_dtos::UpdateProductDto,
            products_dtos::ImageUploadForm,
            products_dtos::ProductResponseDto,
            products_dtos::ProductImageResponseDto,
            ApiResponse<Vec<products_dtos::ProductResponseDto>>,
            ApiResponse<products_dtos::ProductResponseDto>,
            ApiResponse<products_dtos::ProductImageResponseDto>,
            // Admin
            admin_dtos::AdminResourceDto,
            admin_dtos::AdminCategoryDto,
            admin_dtos::AdminProductDto,
            admin_dtos::AdminProductImageDto,
            admin_dtos::AdminUserDto,
            ApiResponse<Vec<admin_dtos::AdminResourceDto>>,
            ApiResponse<Vec<admin_dtos::AdminCategoryDto>>,
            ApiResponse<Vec<admin_dtos::AdminProductDto>>,
            ApiResponse<Vec<admin_dtos::AdminProductImageDto>>,
            ApiResponse<Vec<admin_dtos::AdminUserDto>>,
        )
    ),
    tags(
        (name = "auth", description = "Token issuance and refresh"),
        (name = "users", description = "Registration and profile management"),
        (name = "categories", description = "Product categories"),
        (name = "products", description = "Product catalog and images"),
        (name = "admin", description = "Operator console (staff only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "API documentation for the storefront backend",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
