//! Detection status endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use detection::DetectionResponse;

use crate::AppState;
use crate::error::ApiError;

/// GET /detect — returns the current detection status.
pub async fn detect(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DetectionResponse>, ApiError> {
    let response = state.detector.detect().await?;
    tracing::debug!(status = %response.status, "detection served");
    Ok(Json(response))
}
