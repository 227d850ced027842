pub mod auth;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, ValidateResponse};
