pub mod user_dto;

pub use user_dto::{RegisterRequestDto, UpdateProfileDto, UserResponseDto};
