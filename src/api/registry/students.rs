//! Student endpoints

use axum::{extract::State, http::StatusCode};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, SuspendRequest};

/// POST /api/suspend
pub async fn suspend(
    State(state): State<AppState>,
    Json(request): Json<SuspendRequest>,
) -> Result<StatusCode, ApiError> {
    debug!(student = %request.student(), "Suspending student");

    state.registration_service.suspend(request.student()).await?;

    Ok(StatusCode::NO_CONTENT)
}
