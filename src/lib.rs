//! Classroom Registry API
//!
//! Teachers register students, suspend students, query the students common
//! to a set of teachers, and retrieve the active students who should receive
//! a notification (registered or @-mentioned).

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use config::{DatabaseConfig, StorageBackend, StorageConfig};
use domain::Student;
use infrastructure::registration::{
    InMemoryRegistrationRepository, PostgresRegistrationRepository, RegistrationService,
};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

/// Create the application state for the configured storage backend
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    info!("Storage backend: {:?}", config.storage.backend);

    let state = match config.storage.backend {
        StorageBackend::Postgres => {
            let pool = connect_postgres(&config.database).await?;
            let repository = PostgresRegistrationRepository::new(pool);
            AppState::new(Arc::new(RegistrationService::new(Arc::new(repository))))
        }
        StorageBackend::Memory => {
            let repository = in_memory_repository(&config.storage);
            AppState::new(Arc::new(RegistrationService::new(Arc::new(repository))))
        }
    };

    Ok(state)
}

async fn connect_postgres(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&config.connection_url())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;

    info!("PostgreSQL connection established");
    Ok(pool)
}

fn in_memory_repository(config: &StorageConfig) -> InMemoryRegistrationRepository {
    info!(
        teachers = config.seed_teachers.len(),
        students = config.seed_students.len(),
        "Using in-memory storage"
    );

    InMemoryRegistrationRepository::with_directory(
        config.seed_teachers.iter().cloned(),
        config.seed_students.iter().map(Student::new),
    )
}
