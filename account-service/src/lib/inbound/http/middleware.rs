use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::account::models::AccountId;
use crate::inbound::http::router::AppState;

/// Extension type carrying the verified token subject into protected handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedSubject {
    pub account_id: AccountId,
}

/// Access gate for protected routes.
///
/// No token at all is rejected as 401; a token that fails verification is
/// rejected as 400. The gate does not check that the subject still exists —
/// that is the downstream handler's ordinary not-found case.
pub async fn require_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let Some(token) = bearer_token(&req) else {
        return Err(
            ApiError::Unauthorized("Missing authentication token".to_string()).into_response(),
        );
    };

    let subject = state.authenticator.verify_token(token).map_err(|_| {
        tracing::warn!("Token verification failed");
        ApiError::BadRequest("Invalid token".to_string()).into_response()
    })?;

    // A verified token always carries a well-formed subject; anything else
    // means the token was not ours.
    let account_id = AccountId::from_string(&subject)
        .map_err(|_| ApiError::BadRequest("Invalid token".to_string()).into_response())?;

    req.extensions_mut()
        .insert(AuthenticatedSubject { account_id });

    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Option<&str> {
    let header = req.headers().get(http::header::AUTHORIZATION)?;
    let value = header.to_str().ok()?;
    value.strip_prefix("Bearer ")
}
