//! Authentication route handlers
//!
//! - `POST /login` exchanges a username/password pair for a session token
//! - `POST /register` forwards a new account to the user-service
//! - `GET /validate` checks a bearer session token

pub mod login;
pub mod register;
pub mod validate;

use std::sync::Arc;

use sa_core::services::{AccountCreationService, AuthService, CredentialStore, TokenIssuer};

/// Application state that holds shared services
pub struct AppState<C, T, A>
where
    C: CredentialStore,
    T: TokenIssuer,
    A: AccountCreationService,
{
    pub auth_service: Arc<AuthService<C, T, A>>,
}

impl<C, T, A> AppState<C, T, A>
where
    C: CredentialStore,
    T: TokenIssuer,
    A: AccountCreationService,
{
    pub fn new(auth_service: Arc<AuthService<C, T, A>>) -> Self {
        Self { auth_service }
    }
}
