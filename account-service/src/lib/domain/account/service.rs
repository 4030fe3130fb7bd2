use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AccountSummary;
use crate::domain::account::models::Credentials;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;

/// Domain service implementation for account operations.
///
/// Orchestrates the hasher, the store adapter, and the token issuer for
/// each request; holds no per-request state.
pub struct AccountService<R>
where
    R: AccountRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<R>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<R> AccountServicePort for AccountService<R>
where
    R: AccountRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<Account, AccountError> {
        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| AccountError::Password(e.to_string()))?;

        let account = Account {
            id: AccountId::new(),
            login: command.login,
            password_hash,
            created_at: Utc::now(),
        };

        // No existence pre-check: the store's uniqueness constraint is the
        // only race-free arbiter for concurrent registrations.
        self.repository.create(account).await
    }

    async fn login(&self, credentials: Credentials) -> Result<String, AccountError> {
        let account = self
            .repository
            .find_by_login(&credentials.login)
            .await?
            .ok_or_else(|| AccountError::NotFoundByLogin(credentials.login.to_string()))?;

        let result = self
            .authenticator
            .authenticate(
                &credentials.password,
                &account.password_hash,
                &account.id.to_string(),
            )
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => AccountError::InvalidCredentials,
                auth::AuthenticationError::Jwt(err) => AccountError::Token(err.to_string()),
            })?;

        Ok(result.access_token)
    }

    async fn get_account(&self, id: &AccountId) -> Result<AccountSummary, AccountError> {
        self.repository
            .find_summary_by_id(id)
            .await?
            .ok_or(AccountError::NotFound(id.to_string()))
    }
}
