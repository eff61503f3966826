pub mod product_handler;
pub mod product_image_handler;

pub use product_handler::{
    __path_create_product, __path_delete_product, __path_get_product, __path_list_products,
    __path_update_product, create_product, delete_product, get_product, list_products,
    update_product,
};
pub use product_image_handler::{
    __path_delete_gallery_image, __path_upload_gallery_image, __path_upload_primary_image,
    delete_gallery_image, upload_gallery_image, upload_primary_image,
};
