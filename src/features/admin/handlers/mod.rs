pub mod admin_handlers;

pub use admin_handlers::{
    __path_list_admin_categories, __path_list_admin_product_images, __path_list_admin_products,
    __path_list_admin_resources, __path_list_admin_users, list_admin_categories,
    list_admin_product_images, list_admin_products, list_admin_resources, list_admin_users,
};
