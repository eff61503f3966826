pub mod admin_dtos;

pub use admin_dtos::{
    AdminCategoryDto, AdminListQuery, AdminProductDto, AdminProductImageDto,
    AdminProductImagesQuery, AdminProductsQuery, AdminResourceDto, AdminUserDto,
};
