//! Registration infrastructure module
//!
//! Provides the registration service along with PostgreSQL and in-memory
//! repository implementations.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresRegistrationRepository;
pub use repository::InMemoryRegistrationRepository;
pub use service::RegistrationService;
