pub mod product_dto;

pub use product_dto::{
    CreateProductDto, ImageUploadForm, ListProductsQuery, ProductImageResponseDto,
    ProductResponseDto, UpdateProductDto,
};
