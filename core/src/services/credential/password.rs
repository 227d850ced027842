//! bcrypt helpers shared by the credential store, account stores and tests.

use crate::errors::DomainError;

/// Hash a plaintext password with bcrypt at the given cost
pub fn hash_password(plain: &str, cost: u32) -> Result<String, DomainError> {
    bcrypt::hash(plain, cost).map_err(|e| DomainError::Internal {
        message: format!("Failed to hash password: {}", e),
    })
}

/// Compare a plaintext password with a stored bcrypt hash
///
/// Returns an error only when the stored hash cannot be parsed.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(plain, hash)
}
