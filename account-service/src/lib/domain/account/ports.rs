use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AccountSummary;
use crate::domain::account::models::Credentials;
use crate::domain::account::models::Login;
use crate::domain::account::models::RegisterCommand;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account with validated credentials.
    ///
    /// # Arguments
    /// * `command` - Validated command containing login and password
    ///
    /// # Returns
    /// Created account entity
    ///
    /// # Errors
    /// * `DuplicateLogin` - Login is already taken
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<Account, AccountError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Arguments
    /// * `credentials` - Login and plaintext password
    ///
    /// # Returns
    /// Signed token whose subject is the account identifier
    ///
    /// # Errors
    /// * `NotFoundByLogin` - No account with this login
    /// * `InvalidCredentials` - Password does not match
    /// * `Token` - Token issuance failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, credentials: Credentials) -> Result<String, AccountError>;

    /// Retrieve an account summary by unique identifier.
    ///
    /// The summary never carries the password hash.
    ///
    /// # Arguments
    /// * `id` - Account ID
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_account(&self, id: &AccountId) -> Result<AccountSummary, AccountError>;
}

/// Persistence operations for the account aggregate.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account to storage.
    ///
    /// Login uniqueness is enforced by the store itself; a concurrent insert
    /// of the same login surfaces as `DuplicateLogin` here, never as a
    /// partial write.
    ///
    /// # Arguments
    /// * `account` - Account entity to create
    ///
    /// # Errors
    /// * `DuplicateLogin` - Login is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve an account by login.
    ///
    /// # Arguments
    /// * `login` - Login to search for
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_login(&self, login: &Login) -> Result<Option<Account>, AccountError>;

    /// Retrieve an account summary by identifier.
    ///
    /// The projection excludes the password hash at the query level.
    ///
    /// # Arguments
    /// * `id` - Account ID
    ///
    /// # Returns
    /// Optional account summary (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_summary_by_id(
        &self,
        id: &AccountId,
    ) -> Result<Option<AccountSummary>, AccountError>;
}
