pub mod auth_dto;

pub use auth_dto::{
    RefreshTokenRequestDto, RefreshTokenResponseDto, TokenObtainRequestDto, TokenPairResponseDto,
};
