//! Route handlers for the summary API.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};
use tracing::{error, info};

use crate::ai::{refinement_messages, summary_messages};
use crate::core::models::{SummaryRequest, SummaryResponse};
use crate::errors::ApiError;

use super::AppState;

/// `POST /generate-summary`
///
/// Validates the headline list, then makes two sequential provider calls:
/// one to draft a summary, one to refine it. Either failure short-circuits
/// into an error response; no partial result is returned.
pub async fn generate_summary(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    if body.headlines.is_empty() {
        return Err(ApiError::EmptyHeadlines);
    }

    info!(
        headlines = body.headlines.len(),
        "generating headline summary"
    );

    let draft = state
        .generator
        .generate(summary_messages(&body.headlines))
        .await
        .inspect_err(|e| error!(error = %e, "summarize call failed"))?;

    let refined = state
        .generator
        .generate(refinement_messages(&draft))
        .await
        .inspect_err(|e| error!(error = %e, "refinement call failed"))?;

    Ok(Json(SummaryResponse { summary: refined }))
}

/// `GET /healthz` — liveness probe.
pub async fn healthz() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
