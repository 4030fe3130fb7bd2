use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AccountSummary;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::middleware::AuthenticatedSubject;
use crate::inbound::http::router::AppState;

pub async fn get_account(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    Path(account_id): Path<String>,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    // An id that does not parse cannot name an account
    let id = AccountId::from_string(&account_id)
        .map_err(|_| ApiError::NotFound(format!("Account not found: {}", account_id)))?;

    tracing::debug!(
        subject = %subject.account_id,
        account = %id,
        "Protected account lookup"
    );

    state
        .account_service
        .get_account(&id)
        .await
        .map_err(ApiError::from)
        .map(|ref summary| ApiSuccess::new(StatusCode::OK, summary.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountData {
    pub id: String,
    pub login: String,
    pub created_at: DateTime<Utc>,
}

impl From<&AccountSummary> for AccountData {
    fn from(summary: &AccountSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            login: summary.login.as_str().to_string(),
            created_at: summary.created_at,
        }
    }
}
