//! HTTP clients for external services

pub mod user_service;

pub use user_service::UserServiceClient;
