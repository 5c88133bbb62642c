//! Parsing of the final-turn model output.
//!
//! The model is instructed to answer with exactly `[job:reason:category]`.
//! Parsing is strict: anything that does not split into three fields, or
//! whose category is not an exact entry of [`CATEGORIES`], is an error. A
//! wrong category index is worse than a visible failure, so nothing is
//! coerced into a default.
//!
//! [`CATEGORIES`]: crate::category::CATEGORIES

use crate::category;
use crate::error::RecommendationError;
use crate::models::recommendation::RecommendationRecord;

/// Parse raw model text into a [`RecommendationRecord`].
///
/// Surrounding whitespace is ignored, one enclosing `[` … `]` pair is
/// stripped when both are present, and each field is trimmed before the
/// category lookup. Empty `job` or `reason` fields are kept as they are.
pub fn parse_recommendation(raw: &str) -> Result<RecommendationRecord, RecommendationError> {
    let text = raw.trim();
    let inner = text
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(text);

    let fields: Vec<&str> = inner.split(':').map(str::trim).collect();
    let [job, reason, label] = fields.as_slice() else {
        return Err(RecommendationError::Malformed {
            found: fields.len(),
            raw: raw.to_string(),
        });
    };

    let category = category::index_of(label)
        .ok_or_else(|| RecommendationError::UnknownCategory(label.to_string()))?;

    Ok(RecommendationRecord {
        job: job.to_string(),
        reason: reason.to_string(),
        category,
    })
}
