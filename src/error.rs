use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::translate::TranslationError;

/// Errors surfaced to API callers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("text is required")]
    MissingText,

    #[error("invalid request body: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Translation(#[from] TranslationError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingText | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Translation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        (
            status,
            Json(json!({
                "success": false,
                "error": self.to_string(),
            })),
        )
            .into_response()
    }
}
