//! Registration domain
//!
//! Entities, precondition checks, mention parsing and the repository trait
//! backing teacher/student registrations.

mod entity;
mod mention;
mod repository;
mod validation;

pub use entity::{Registration, Student};
pub use mention::parse_mentions;
pub use repository::{ForeignKey, InsertOutcome, RegistrationRepository};
pub use validation::{
    validate_notification, validate_registration, validate_student, validate_teachers,
    RegistrationValidationError,
};

#[cfg(test)]
pub use repository::MockRegistrationRepository;
