use thiserror::Error;

use career_bedrock::error::BedrockError;
use career_core::error::RecommendationError;
use career_storage::error::StorageError;

/// Failures of a counseling turn, tagged by the remedy the caller needs.
#[derive(Debug, Error)]
pub enum CounselError {
    #[error("chat history store unavailable: {0}")]
    StoreConnection(#[from] StorageError),

    #[error("model invocation failed: {0}")]
    ModelInvocation(#[from] BedrockError),

    #[error("malformed recommendation: {0}")]
    MalformedRecommendation(RecommendationError),

    #[error("unknown industry category: {0:?}")]
    UnknownCategory(String),

    #[error("no conversation history for session {session_id}")]
    EmptyHistory { session_id: String },
}

impl CounselError {
    /// Stable machine-readable tag, sent to API callers.
    pub fn kind(&self) -> &'static str {
        match self {
            CounselError::StoreConnection(_) => "store_connection",
            CounselError::ModelInvocation(_) => "model_invocation",
            CounselError::MalformedRecommendation(_) => "malformed_recommendation",
            CounselError::UnknownCategory(_) => "unknown_category",
            CounselError::EmptyHistory { .. } => "empty_history",
        }
    }
}

impl From<RecommendationError> for CounselError {
    fn from(e: RecommendationError) -> Self {
        match e {
            RecommendationError::UnknownCategory(label) => CounselError::UnknownCategory(label),
            other => CounselError::MalformedRecommendation(other),
        }
    }
}
