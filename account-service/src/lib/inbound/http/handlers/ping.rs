use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

pub async fn ping() -> ApiSuccess<PingResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        PingResponseData {
            message: "Ping! Pong!".to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PingResponseData {
    pub message: String,
}
