mod product;
mod product_image;

pub use product::ProductWithCategory;
pub use product_image::ProductImage;
