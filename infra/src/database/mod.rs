//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - Credential lookups against the `users` table

pub mod connection;
pub mod credential_repository;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use credential_repository::MySqlCredentialRepository;
