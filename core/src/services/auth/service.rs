//! Main authentication service implementation

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::entities::RegisteredAccount;
use crate::domain::value_objects::{LoginCommand, RegistrationRequest, SessionToken};
use crate::errors::{AuthError, DomainError};
use crate::services::account::AccountCreationService;
use crate::services::credential::CredentialStore;
use crate::services::token::TokenIssuer;

/// Authentication service for login and registration
///
/// Holds no per-call state, so one instance is shared across all request
/// handlers. Collaborators are injected through the constructor.
pub struct AuthService<C, T, A>
where
    C: CredentialStore,
    T: TokenIssuer,
    A: AccountCreationService,
{
    /// Verifies username/password pairs
    credential_store: Arc<C>,
    /// Signs session tokens
    token_issuer: Arc<T>,
    /// Creates accounts on registration
    account_service: Arc<A>,
}

impl<C, T, A> AuthService<C, T, A>
where
    C: CredentialStore,
    T: TokenIssuer,
    A: AccountCreationService,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `credential_store` - Store consulted on login
    /// * `token_issuer` - Issuer for session tokens
    /// * `account_service` - Collaborator that creates accounts
    pub fn new(credential_store: Arc<C>, token_issuer: Arc<T>, account_service: Arc<A>) -> Self {
        Self {
            credential_store,
            token_issuer,
            account_service,
        }
    }

    /// Authenticate a username/password pair and issue a session token
    ///
    /// A token is issued only when the credential store reports the pair as
    /// authenticated. Unknown usernames, wrong passwords and non-authenticated
    /// verdicts all fail with the same error.
    ///
    /// # Returns
    ///
    /// * `Ok(SessionToken)` - Token bound to `command.username`
    /// * `Err(DomainError::Auth(AuthError::WrongCredentials))` - Verification failed
    /// * `Err(DomainError::CollaboratorUnavailable)` - The credential store could not be consulted
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sa_core::domain::value_objects::LoginCommand;
    /// # use sa_core::services::{AuthService, CredentialStore, TokenIssuer, AccountCreationService};
    ///
    /// # async fn example<C: CredentialStore, T: TokenIssuer, A: AccountCreationService>(
    /// #     auth_service: AuthService<C, T, A>,
    /// # ) {
    /// match auth_service.login(LoginCommand::new("alice", "correct-pw")).await {
    ///     Ok(session) => println!("token: {}", session.token),
    ///     Err(e) => eprintln!("login failed: {}", e),
    /// }
    /// # }
    /// ```
    pub async fn login(&self, command: LoginCommand) -> Result<SessionToken, DomainError> {
        let username = command.username.as_str();
        debug!(username = %username, "Verifying credentials");

        let result = self
            .credential_store
            .verify(username, &command.password)
            .await
            .map_err(|e| {
                error!(username = %username, error = %e, "Credential store failed during login");
                e
            })?;

        if !result.authenticated {
            warn!(username = %username, "Login rejected: wrong credentials");
            return Err(DomainError::Auth(AuthError::WrongCredentials));
        }

        let token = self.token_issuer.issue(username)?;
        info!(username = %username, "Login succeeded, session token issued");

        Ok(SessionToken::new(token))
    }

    /// Forward a registration request to the account-creation collaborator
    ///
    /// The collaborator's answer, or its error, is returned unchanged.
    pub async fn register(&self, request: RegistrationRequest) -> Result<RegisteredAccount, DomainError> {
        debug!(username = %request.username, role = %request.role, "Forwarding registration");

        match self.account_service.create(&request).await {
            Ok(account) => {
                info!(id = %account.id, username = %account.username, "Account registered");
                Ok(account)
            }
            Err(e) => {
                warn!(username = %request.username, error = %e, "Account creation failed");
                Err(e)
            }
        }
    }

    /// Token issuer shared with callers that validate tokens
    pub fn token_issuer(&self) -> &Arc<T> {
        &self.token_issuer
    }
}
