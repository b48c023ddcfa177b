//! Registration repository trait

use async_trait::async_trait;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Which side of a registration referenced a missing record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignKey {
    Teacher,
    Student,
}

/// Result of attempting to insert a registration
///
/// Constraint violations are reported as values so callers never need to
/// inspect driver-specific error shapes. Any other failure is returned as
/// `DomainError::Storage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// The (teacher, student) pair already exists
    DuplicateKey,
    ForeignKeyViolation(ForeignKey),
}

/// Data access for teachers, students and their registrations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Insert a single (teacher, student) registration
    async fn insert_registration(
        &self,
        teacher: &str,
        student: &str,
    ) -> Result<InsertOutcome, DomainError>;

    /// Non-suspended students registered with `teacher`
    async fn registered_non_suspended(&self, teacher: &str) -> Result<Vec<String>, DomainError>;

    /// Non-suspended students whose identifier is in `students`
    async fn non_suspended_among(&self, students: &[String]) -> Result<Vec<String>, DomainError>;

    /// Students registered with exactly `threshold` distinct teachers out of `teachers`
    async fn common_students(
        &self,
        teachers: &[String],
        threshold: usize,
    ) -> Result<Vec<String>, DomainError>;

    /// Mark a student as suspended, returning the number of rows affected
    async fn update_suspended(&self, student: &str) -> Result<u64, DomainError>;

    /// Verify the backing store is reachable
    async fn ping(&self) -> Result<(), DomainError>;
}
