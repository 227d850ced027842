//! JWT session token issuer

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;
use super::key_manager::Rs256KeyManager;

/// Issues and verifies session tokens
///
/// Issuance is a pure function of the username plus the clock; no state is
/// kept between calls.
pub trait TokenIssuer: Send + Sync {
    /// Sign a fresh session token bound to `username`
    ///
    /// # Returns
    /// * `Ok(String)` - The encoded token, unique per call
    /// * `Err(DomainError)` - Signing failed
    fn issue(&self, username: &str) -> Result<String, DomainError>;

    /// Check signature, validity window, issuer and audience
    ///
    /// # Returns
    /// * `Ok(Claims)` - The decoded claims
    /// * `Err(DomainError::Token(_))` - The token is not acceptable
    fn verify(&self, token: &str) -> Result<Claims, DomainError>;
}

/// `TokenIssuer` backed by `jsonwebtoken`
pub struct JwtTokenIssuer {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtTokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenIssuer")
            .field("algorithm", &self.config.algorithm)
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .field("expiry_seconds", &self.config.expiry_seconds)
            .finish()
    }
}

impl JwtTokenIssuer {
    /// Creates a new token issuer
    ///
    /// HS256 signs with `jwt_secret`. RS256 loads the key pair from
    /// `private_key_path` and `public_key_path`, both of which must be set.
    ///
    /// # Returns
    ///
    /// A new `JwtTokenIssuer` or `TokenError::KeyLoadError` if keys cannot be loaded
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        match config.algorithm {
            Algorithm::RS256 => {
                let (private_key_path, public_key_path) =
                    match (&config.private_key_path, &config.public_key_path) {
                        (Some(private), Some(public)) => (private.clone(), public.clone()),
                        _ => {
                            return Err(DomainError::Token(TokenError::KeyLoadError {
                                message: "RS256 algorithm requires JWT_PRIVATE_KEY_PATH and JWT_PUBLIC_KEY_PATH"
                                    .to_string(),
                            }))
                        }
                    };
                let key_manager = Rs256KeyManager::new(private_key_path, public_key_path)?;
                Ok(Self::with_rs256_keys(config, key_manager))
            }
            Algorithm::HS256 => {
                let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
                let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
                Ok(Self::build(config, encoding_key, decoding_key))
            }
            other => Err(DomainError::Internal {
                message: format!("Unsupported JWT algorithm: {:?}", other),
            }),
        }
    }

    /// Creates an RS256 issuer from keys already loaded
    pub fn with_rs256_keys(mut config: TokenServiceConfig, key_manager: Rs256KeyManager) -> Self {
        config.algorithm = Algorithm::RS256;
        let encoding_key = key_manager.encoding_key().clone();
        let decoding_key = key_manager.decoding_key().clone();
        Self::build(config, encoding_key, decoding_key)
    }

    fn build(config: TokenServiceConfig, encoding_key: EncodingKey, decoding_key: DecodingKey) -> Self {
        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    pub fn expiry_seconds(&self) -> i64 {
        self.config.expiry_seconds
    }

    pub(crate) fn encode_claims(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, username: &str) -> Result<String, DomainError> {
        let claims = Claims::new_session(
            username,
            &self.config.issuer,
            &self.config.audience,
            self.config.expiry_seconds,
        )
        .ok_or(DomainError::Token(TokenError::TokenGenerationFailed))?;
        self.encode_claims(&claims)
    }

    fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let kind = match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::InvalidTokenFormat,
                };
                DomainError::Token(kind)
            })
    }
}
