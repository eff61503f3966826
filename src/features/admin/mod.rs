//! Operator console feature (staff only).
//!
//! A statically declared registry describes, per entity, which columns the
//! console lists, filters and searches; the list endpoints honor exactly
//! those fields. There is no dynamic registration.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/admin/resources` | The resource registry |
//! | GET | `/api/admin/categories` | List categories (search: name) |
//! | GET | `/api/admin/products` | List products (filter: category, is_active; search: name, description) |
//! | GET | `/api/admin/product-images` | List product images (filter: product) |
//! | GET | `/api/admin/users` | List users (search: username, email) |

pub mod dtos;
pub mod handlers;
pub mod registry;
pub mod routes;
pub mod services;

pub use services::AdminService;
