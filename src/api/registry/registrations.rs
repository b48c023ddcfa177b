//! Registration endpoints

use axum::{extract::State, http::StatusCode};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::query::values_of;
use crate::api::types::{ApiError, CommonStudentsResponse, Json, Query, RegisterRequest};

const TEACHER_PARAM: &str = "teacher";

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<StatusCode, ApiError> {
    debug!(
        teacher = %request.teacher(),
        students = request.students().len(),
        "Registering students"
    );

    state
        .registration_service
        .register(request.teacher(), request.students())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/commonstudents?teacher=...&teacher=...
pub async fn common_students(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<CommonStudentsResponse>, ApiError> {
    let teachers = values_of(&params, TEACHER_PARAM);
    debug!(teachers = ?teachers, "Querying common students");

    let students = state.registration_service.common_students(&teachers).await?;

    Ok(Json(CommonStudentsResponse { students }))
}
