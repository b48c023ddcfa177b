//! Notification recipient endpoint

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, NotificationRequest, NotificationResponse};

/// POST /api/retrievefornotifications
pub async fn retrieve_for_notifications(
    State(state): State<AppState>,
    Json(request): Json<NotificationRequest>,
) -> Result<Json<NotificationResponse>, ApiError> {
    debug!(teacher = %request.teacher(), "Retrieving notification recipients");

    let recipients = state
        .registration_service
        .retrieve_for_notifications(request.teacher(), request.notification())
        .await?;

    Ok(Json(NotificationResponse { recipients }))
}
