pub mod user_handler;

pub use user_handler::{
    __path_get_profile, __path_register, __path_update_profile, get_profile, register,
    update_profile,
};
