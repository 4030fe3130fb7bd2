use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::account::errors::AccountIdError;
use crate::domain::account::errors::LoginError;

/// Account aggregate entity.
///
/// Represents a registered account. The password hash is set at creation
/// and never updated within this service.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub login: Login,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Read model for account lookups.
///
/// Structurally excludes the password hash so no read path can leak it.
#[derive(Debug, Clone)]
pub struct AccountSummary {
    pub id: AccountId,
    pub login: Login,
    pub created_at: DateTime<Utc>,
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an account ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AccountIdError> {
        Uuid::parse_str(s)
            .map(AccountId)
            .map_err(|e| AccountIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Login value type
///
/// A login only has to be present; it is the store's uniqueness constraint
/// that makes it a usable identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login(String);

impl Login {
    /// Create a new valid login.
    ///
    /// # Errors
    /// * `Empty` - Login is empty or whitespace only
    pub fn new(login: String) -> Result<Self, LoginError> {
        if login.trim().is_empty() {
            return Err(LoginError::Empty);
        }
        Ok(Self(login))
    }

    /// Get login as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new account with domain types
#[derive(Debug)]
pub struct RegisterCommand {
    pub login: Login,
    pub password: String,
}

impl RegisterCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `login` - Validated login
    /// * `password` - Plain text password (will be hashed by the service)
    pub fn new(login: Login, password: String) -> Self {
        Self { login, password }
    }
}

/// Credentials presented on login.
#[derive(Debug)]
pub struct Credentials {
    pub login: Login,
    pub password: String,
}

impl Credentials {
    pub fn new(login: Login, password: String) -> Self {
        Self { login, password }
    }
}
