pub mod auth_handler;

pub use auth_handler::{__path_obtain_token, __path_refresh_token, obtain_token, refresh_token};
