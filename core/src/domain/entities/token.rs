//! Claims carried by session tokens.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token expiration time (1 hour)
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 3600;

/// JWT issuer
pub const JWT_ISSUER: &str = "scalable-auth";

/// JWT audience
pub const JWT_AUDIENCE: &str = "scalable-api";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID, unique per issuance
    pub jti: String,
}

impl Claims {
    /// Creates claims for a session token bound to `username`
    ///
    /// # Arguments
    ///
    /// * `username` - The authenticated username
    /// * `issuer` - Value for the `iss` claim
    /// * `audience` - Value for the `aud` claim
    /// * `expiry_seconds` - Lifetime of the token
    ///
    /// Returns `None` when the expiry falls outside the representable range.
    pub fn new_session(
        username: &str,
        issuer: &str,
        audience: &str,
        expiry_seconds: i64,
    ) -> Option<Self> {
        let now = Utc::now();
        let expiry = now.checked_add_signed(Duration::try_seconds(expiry_seconds)?)?;

        Some(Self {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        })
    }

    /// The username the token is bound to
    pub fn username(&self) -> &str {
        &self.sub
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Expiry as a timestamp, if representable
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}
