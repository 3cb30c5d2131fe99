use serde::{Deserialize, Serialize};

/// Body of `POST /generate-summary`.
///
/// A request with no `headlines` field deserializes to an empty list, so
/// "missing" and "empty" are rejected on the same path.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub headlines: Vec<String>,
}

/// Success body: the refined summary text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Failure body. A response carries either this shape or
/// [`SummaryResponse`], never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
