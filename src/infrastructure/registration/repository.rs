//! In-memory registration repository implementation

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::registration::{
    ForeignKey, InsertOutcome, Registration, RegistrationRepository, Student,
};
use crate::domain::DomainError;

/// In-memory implementation of RegistrationRepository
#[derive(Debug, Default)]
pub struct InMemoryRegistrationRepository {
    teachers: Arc<RwLock<BTreeSet<String>>>,
    students: Arc<RwLock<BTreeMap<String, Student>>>,
    registrations: Arc<RwLock<BTreeSet<Registration>>>,
}

impl InMemoryRegistrationRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with known teachers and students
    pub fn with_directory<T>(
        teachers: impl IntoIterator<Item = T>,
        students: impl IntoIterator<Item = Student>,
    ) -> Self
    where
        T: Into<String>,
    {
        let teachers: BTreeSet<String> = teachers.into_iter().map(Into::into).collect();
        let students: BTreeMap<String, Student> = students
            .into_iter()
            .map(|s| (s.email().to_string(), s))
            .collect();

        Self {
            teachers: Arc::new(RwLock::new(teachers)),
            students: Arc::new(RwLock::new(students)),
            registrations: Arc::new(RwLock::new(BTreeSet::new())),
        }
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrationRepository {
    async fn insert_registration(
        &self,
        teacher: &str,
        student: &str,
    ) -> Result<InsertOutcome, DomainError> {
        let mut registrations = self.registrations.write().await;
        let registration = Registration::new(teacher, student);

        if registrations.contains(&registration) {
            return Ok(InsertOutcome::DuplicateKey);
        }

        if !self.teachers.read().await.contains(teacher) {
            return Ok(InsertOutcome::ForeignKeyViolation(ForeignKey::Teacher));
        }

        if !self.students.read().await.contains_key(student) {
            return Ok(InsertOutcome::ForeignKeyViolation(ForeignKey::Student));
        }

        registrations.insert(registration);
        Ok(InsertOutcome::Inserted)
    }

    async fn registered_non_suspended(&self, teacher: &str) -> Result<Vec<String>, DomainError> {
        let registrations = self.registrations.read().await;
        let students = self.students.read().await;

        let result = registrations
            .iter()
            .filter(|r| r.teacher() == teacher)
            .filter(|r| students.get(r.student()).is_some_and(Student::is_active))
            .map(|r| r.student().to_string())
            .collect();

        Ok(result)
    }

    async fn non_suspended_among(&self, students: &[String]) -> Result<Vec<String>, DomainError> {
        let known = self.students.read().await;
        let wanted: BTreeSet<&str> = students.iter().map(String::as_str).collect();

        let result = wanted
            .into_iter()
            .filter(|email| known.get(*email).is_some_and(Student::is_active))
            .map(String::from)
            .collect();

        Ok(result)
    }

    async fn common_students(
        &self,
        teachers: &[String],
        threshold: usize,
    ) -> Result<Vec<String>, DomainError> {
        let registrations = self.registrations.read().await;
        let mut teachers_by_student: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

        for registration in registrations
            .iter()
            .filter(|r| teachers.iter().any(|t| t == r.teacher()))
        {
            teachers_by_student
                .entry(registration.student())
                .or_default()
                .insert(registration.teacher());
        }

        let result = teachers_by_student
            .into_iter()
            .filter(|(_, distinct)| distinct.len() == threshold)
            .map(|(student, _)| student.to_string())
            .collect();

        Ok(result)
    }

    async fn update_suspended(&self, student: &str) -> Result<u64, DomainError> {
        let mut students = self.students.write().await;

        match students.get_mut(student) {
            Some(s) => {
                s.suspend();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
