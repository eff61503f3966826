mod auth_service;
mod password_service;
mod token_service;

pub use auth_service::AuthService;
pub use password_service::{hash_password, verify_password};
pub use token_service::TokenService;
