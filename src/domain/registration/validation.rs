//! Request precondition checks
//!
//! Violations are caller-input errors and are reported before any data access.

use thiserror::Error;

/// Errors raised when a required field is missing or empty
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationValidationError {
    #[error("Both 'teacher' and 'students' fields are required in the request body")]
    MissingRegistrationFields,

    #[error("At least one teacher is required in the query parameter")]
    MissingTeachers,

    #[error("'student' is required in the request body")]
    MissingStudent,

    #[error("Both 'teacher' and 'notification' fields are required in the request body")]
    MissingNotificationFields,
}

pub fn validate_registration(
    teacher: &str,
    students: &[String],
) -> Result<(), RegistrationValidationError> {
    if teacher.is_empty() || students.is_empty() {
        return Err(RegistrationValidationError::MissingRegistrationFields);
    }

    Ok(())
}

pub fn validate_teachers(teachers: &[String]) -> Result<(), RegistrationValidationError> {
    if teachers.is_empty() {
        return Err(RegistrationValidationError::MissingTeachers);
    }

    Ok(())
}

pub fn validate_student(student: &str) -> Result<(), RegistrationValidationError> {
    if student.is_empty() {
        return Err(RegistrationValidationError::MissingStudent);
    }

    Ok(())
}

pub fn validate_notification(
    teacher: &str,
    notification: &str,
) -> Result<(), RegistrationValidationError> {
    if teacher.is_empty() || notification.is_empty() {
        return Err(RegistrationValidationError::MissingNotificationFields);
    }

    Ok(())
}
