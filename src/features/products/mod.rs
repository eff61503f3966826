//! Product catalog feature.
//!
//! Products reference exactly one category and own zero or more gallery
//! images. Responses carry the referenced category's current name and
//! absolute URLs for all stored images.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/products` | No | List products (filter by category / is_active) |
//! | POST | `/api/products` | No | Create product |
//! | GET | `/api/products/{id}` | No | Get product by id |
//! | PUT/PATCH | `/api/products/{id}` | No | Update product |
//! | DELETE | `/api/products/{id}` | No | Delete product and its images |
//! | POST | `/api/products/{id}/image` | Yes | Upload/replace primary image |
//! | POST | `/api/products/{id}/images` | Yes | Attach gallery image |
//! | DELETE | `/api/products/{id}/images/{image_id}` | Yes | Remove gallery image |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ProductImageService, ProductService};
