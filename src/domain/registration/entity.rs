//! Registration entities and related types

use serde::{Deserialize, Serialize};

/// Student account snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique email-like identifier
    email: String,
    /// Suspended students never receive notifications
    #[serde(default)]
    is_suspended: bool,
}

impl Student {
    /// Create a new, active student
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            is_suspended: false,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_suspended(&self) -> bool {
        self.is_suspended
    }

    /// Check if the student may receive notifications
    pub fn is_active(&self) -> bool {
        !self.is_suspended
    }

    /// Suspend the student. Suspending twice is a no-op.
    pub fn suspend(&mut self) {
        self.is_suspended = true;
    }
}

/// A (teacher, student) relationship record
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Registration {
    teacher: String,
    student: String,
}

impl Registration {
    pub fn new(teacher: impl Into<String>, student: impl Into<String>) -> Self {
        Self {
            teacher: teacher.into(),
            student: student.into(),
        }
    }

    pub fn teacher(&self) -> &str {
        &self.teacher
    }

    pub fn student(&self) -> &str {
        &self.student
    }
}
