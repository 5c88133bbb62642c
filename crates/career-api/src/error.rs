use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use career_counsel::error::CounselError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Counsel(CounselError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    kind: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Counsel(e) => {
                let kind = e.kind();
                match e {
                    CounselError::EmptyHistory { .. } => {
                        (StatusCode::UNPROCESSABLE_ENTITY, kind, e.to_string())
                    }
                    CounselError::MalformedRecommendation(_) | CounselError::UnknownCategory(_) => {
                        tracing::warn!(kind, "recommendation rejected: {e}");
                        (StatusCode::BAD_GATEWAY, kind, e.to_string())
                    }
                    CounselError::ModelInvocation(_) => {
                        tracing::error!("model invocation failed: {e}");
                        (
                            StatusCode::BAD_GATEWAY,
                            kind,
                            "the language model is unavailable, retry later".to_string(),
                        )
                    }
                    CounselError::StoreConnection(_) => {
                        tracing::error!("chat history store failed: {e}");
                        (
                            StatusCode::SERVICE_UNAVAILABLE,
                            kind,
                            "chat history is temporarily unavailable".to_string(),
                        )
                    }
                }
            }
        };

        (status, Json(ErrorBody { error: message, kind })).into_response()
    }
}

impl From<CounselError> for ApiError {
    fn from(e: CounselError) -> Self {
        ApiError::Counsel(e)
    }
}
