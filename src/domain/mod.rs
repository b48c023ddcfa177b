//! Domain layer - Core business logic and entities

pub mod error;
pub mod registration;

pub use error::DomainError;
pub use registration::{
    parse_mentions, ForeignKey, InsertOutcome, Registration, RegistrationRepository,
    RegistrationValidationError, Student,
};

impl From<RegistrationValidationError> for DomainError {
    fn from(err: RegistrationValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}
