use crate::engine::GenerationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors surfaced by the HTTP endpoints, rendered as the
/// `{"status": "error", "message", "code"}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Topic is required")]
    MissingTopic,

    #[error("Request body is required")]
    MissingData,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingTopic => "MISSING_TOPIC",
            Self::MissingData => "MISSING_DATA",
            Self::MissingFields(_) => "MISSING_FIELDS",
            Self::Generation(_) => "GENERATION_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        if status.is_server_error() {
            tracing::error!(code, error = %self, "Generation failed");
        } else {
            tracing::warn!(code, error = %self, "Rejected request");
        }

        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
            "code": code,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
