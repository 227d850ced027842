//! Account representation returned by the account-creation collaborator.

use serde::{Deserialize, Serialize};

use super::credential::Role;

/// A newly created account
///
/// Carries no password field, so a registration result can never echo
/// the submitted secret back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredAccount {
    /// Identifier assigned by the account store
    pub id: String,

    pub username: String,

    pub role: Role,
}

impl RegisteredAccount {
    pub fn new(id: impl Into<String>, username: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            role,
        }
    }
}
