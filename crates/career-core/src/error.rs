use thiserror::Error;

/// Failure to turn raw model output into a [`RecommendationRecord`].
///
/// [`RecommendationRecord`]: crate::models::recommendation::RecommendationRecord
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendationError {
    #[error("expected 3 colon-delimited fields (job:reason:category), found {found}: {raw:?}")]
    Malformed { found: usize, raw: String },

    #[error("unknown industry category: {0:?}")]
    UnknownCategory(String),
}
