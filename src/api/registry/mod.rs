//! Registration API endpoints, mounted under `/api`

pub mod notifications;
pub mod registrations;
pub mod students;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create the registration API router
pub fn create_registry_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(registrations::register))
        .route("/commonstudents", get(registrations::common_students))
        .route("/suspend", post(students::suspend))
        .route(
            "/retrievefornotifications",
            post(notifications::retrieve_for_notifications),
        )
}
