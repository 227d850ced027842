//! RS256 key management for JWT signing and verification

use std::fs;
use std::path::{Path, PathBuf};

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::errors::{DomainError, TokenError};

/// RS256 key pair used to sign and verify session tokens
#[derive(Clone)]
pub struct Rs256KeyManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// Where the keys came from, `None` for in-memory keys
    source: Option<(PathBuf, PathBuf)>,
}

impl std::fmt::Debug for Rs256KeyManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rs256KeyManager")
            .field("source", &self.source)
            .finish()
    }
}

fn key_error(message: String) -> DomainError {
    DomainError::Token(TokenError::KeyLoadError { message })
}

impl Rs256KeyManager {
    /// Loads a key pair from PEM files
    ///
    /// # Arguments
    ///
    /// * `private_key_path` - Path to the PEM-encoded private key file
    /// * `public_key_path` - Path to the PEM-encoded public key file
    ///
    /// # Returns
    ///
    /// * `Ok(Rs256KeyManager)` - Keys loaded
    /// * `Err(DomainError)` - A file is missing or not a valid RSA PEM key
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sa_core::services::token::Rs256KeyManager;
    ///
    /// let keys = Rs256KeyManager::new(
    ///     "keys/jwt_private_key.pem",
    ///     "keys/jwt_public_key.pem",
    /// ).expect("Failed to load keys");
    /// ```
    pub fn new<P: AsRef<Path>>(private_key_path: P, public_key_path: P) -> Result<Self, DomainError> {
        let private_key_path = private_key_path.as_ref().to_path_buf();
        let public_key_path = public_key_path.as_ref().to_path_buf();

        let private_pem = fs::read(&private_key_path).map_err(|e| {
            key_error(format!(
                "Failed to read private key {}: {}",
                private_key_path.display(),
                e
            ))
        })?;
        let public_pem = fs::read(&public_key_path).map_err(|e| {
            key_error(format!(
                "Failed to read public key {}: {}",
                public_key_path.display(),
                e
            ))
        })?;

        let (encoding_key, decoding_key) = Self::parse(&private_pem, &public_pem)?;

        Ok(Self {
            encoding_key,
            decoding_key,
            source: Some((private_key_path, public_key_path)),
        })
    }

    /// Builds a key pair from PEM strings (embedded keys, tests)
    pub fn from_pem_strings(private_key_pem: &str, public_key_pem: &str) -> Result<Self, DomainError> {
        let (encoding_key, decoding_key) =
            Self::parse(private_key_pem.as_bytes(), public_key_pem.as_bytes())?;

        Ok(Self {
            encoding_key,
            decoding_key,
            source: None,
        })
    }

    fn parse(private_pem: &[u8], public_pem: &[u8]) -> Result<(EncodingKey, DecodingKey), DomainError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_pem)
            .map_err(|e| key_error(format!("Invalid private key format: {}", e)))?;
        let decoding_key = DecodingKey::from_rsa_pem(public_pem)
            .map_err(|e| key_error(format!("Invalid public key format: {}", e)))?;
        Ok((encoding_key, decoding_key))
    }

    /// Returns the encoding key for signing JWTs
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the decoding key for verifying JWTs
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    /// Paths the keys were read from, if file-backed
    pub fn key_paths(&self) -> Option<(&Path, &Path)> {
        self.source
            .as_ref()
            .map(|(private, public)| (private.as_path(), public.as_path()))
    }
}
