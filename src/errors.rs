use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No records found")]
    NoRecordsFound,

    #[error("Upstream API error: {0}")]
    Upstream(String),
}

/// Helper for mapping any gateway fault into an upstream error
pub fn upstream_error<E: ToString>(err: E) -> AppError {
    AppError::Upstream(err.to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Choose status codes per variant
        let status = match self {
            // The one failure the upstream contract models; the dashboard
            // script keys off this exact body.
            AppError::NoRecordsFound => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
