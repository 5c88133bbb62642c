use serde::{Deserialize, Serialize};

/// The structured job recommendation produced on a final turn.
///
/// Never persisted. `category` is the 1-based index into
/// [`CATEGORIES`](crate::category::CATEGORIES).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub job: String,
    pub reason: String,
    pub category: usize,
}
