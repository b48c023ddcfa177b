//! Application state for shared services

use std::sync::Arc;

use crate::domain::{DomainError, RegistrationRepository};
use crate::infrastructure::registration::RegistrationService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub registration_service: Arc<dyn RegistrationServiceTrait>,
}

impl AppState {
    pub fn new(registration_service: Arc<dyn RegistrationServiceTrait>) -> Self {
        Self {
            registration_service,
        }
    }
}

/// Trait for registration service operations
#[async_trait::async_trait]
pub trait RegistrationServiceTrait: Send + Sync {
    async fn register(&self, teacher: &str, students: &[String]) -> Result<(), DomainError>;
    async fn common_students(&self, teachers: &[String]) -> Result<Vec<String>, DomainError>;
    async fn suspend(&self, student: &str) -> Result<(), DomainError>;
    async fn retrieve_for_notifications(
        &self,
        teacher: &str,
        notification: &str,
    ) -> Result<Vec<String>, DomainError>;
    async fn ping(&self) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R: RegistrationRepository + 'static> RegistrationServiceTrait for RegistrationService<R> {
    async fn register(&self, teacher: &str, students: &[String]) -> Result<(), DomainError> {
        RegistrationService::register(self, teacher, students).await
    }

    async fn common_students(&self, teachers: &[String]) -> Result<Vec<String>, DomainError> {
        RegistrationService::common_students(self, teachers).await
    }

    async fn suspend(&self, student: &str) -> Result<(), DomainError> {
        RegistrationService::suspend(self, student).await
    }

    async fn retrieve_for_notifications(
        &self,
        teacher: &str,
        notification: &str,
    ) -> Result<Vec<String>, DomainError> {
        RegistrationService::retrieve_for_notifications(self, teacher, notification).await
    }

    async fn ping(&self) -> Result<(), DomainError> {
        RegistrationService::ping(self).await
    }
}
