use thiserror::Error;

/// Core domain errors
///
/// The `Display` output of each variant is the message returned to API
/// callers, so it carries no category prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{student} is already registered with this teacher")]
    DuplicateRegistration { student: String },

    #[error("Teacher {teacher} does not exist in the database")]
    UnknownTeacher { teacher: String },

    #[error("Student {student} does not exist in the database")]
    UnknownStudent { student: String },

    #[error("{message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn duplicate_registration(student: impl Into<String>) -> Self {
        Self::DuplicateRegistration {
            student: student.into(),
        }
    }

    pub fn unknown_teacher(teacher: impl Into<String>) -> Self {
        Self::UnknownTeacher {
            teacher: teacher.into(),
        }
    }

    pub fn unknown_student(student: impl Into<String>) -> Self {
        Self::UnknownStudent {
            student: student.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
