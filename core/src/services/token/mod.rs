//! Token service module for JWT management
//!
//! This module handles session token issuance and verification, with
//! HS256 shared-secret or RS256 key-pair signing.

mod config;
mod key_manager;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use key_manager::Rs256KeyManager;
pub use service::{JwtTokenIssuer, TokenIssuer};
