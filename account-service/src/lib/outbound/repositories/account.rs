use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AccountSummary;
use crate::domain::account::models::Login;
use crate::domain::account::ports::AccountRepository;

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    login: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: AccountId(row.id),
            login: Login::new(row.login)?,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

// Projection row: the password hash never leaves the database on this path.
#[derive(sqlx::FromRow)]
struct AccountSummaryRow {
    id: Uuid,
    login: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountSummaryRow> for AccountSummary {
    type Error = AccountError;

    fn try_from(row: AccountSummaryRow) -> Result<Self, Self::Error> {
        Ok(AccountSummary {
            id: AccountId(row.id),
            login: Login::new(row.login)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (id, login, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(account.id.0)
        .bind(account.login.as_str())
        .bind(&account.password_hash)
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountError::DuplicateLogin(account.login.as_str().to_string());
                }
            }
            AccountError::DatabaseError(e.to_string())
        })?;

        Ok(account)
    }

    async fn find_by_login(&self, login: &Login) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, login, password_hash, created_at
            FROM accounts
            WHERE login = $1
            "#,
        )
        .bind(login.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }

    async fn find_summary_by_id(
        &self,
        id: &AccountId,
    ) -> Result<Option<AccountSummary>, AccountError> {
        let row = sqlx::query_as::<_, AccountSummaryRow>(
            r#"
            SELECT id, login, created_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        row.map(AccountSummary::try_from).transpose()
    }
}
