//! Outputs of credential verification and login.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Principal;

/// Result reported by a credential store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    /// Whether the pair was accepted
    pub authenticated: bool,

    /// Identity behind the pair, when one was found
    pub principal: Option<Principal>,
}

impl AuthResult {
    pub fn authenticated(principal: Principal) -> Self {
        Self {
            authenticated: true,
            principal: Some(principal),
        }
    }

    pub fn rejected() -> Self {
        Self {
            authenticated: false,
            principal: None,
        }
    }
}

/// Signed session token returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub token: String,
}

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}
