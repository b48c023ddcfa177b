//! Registration service: registrations, suspensions and notification recipients

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::registration::{
    parse_mentions, validate_notification, validate_registration, validate_student,
    validate_teachers, ForeignKey, InsertOutcome, RegistrationRepository,
};
use crate::domain::DomainError;

/// Service applying the registration rules over a repository
#[derive(Debug)]
pub struct RegistrationService<R: RegistrationRepository> {
    repository: Arc<R>,
}

impl<R: RegistrationRepository> RegistrationService<R> {
    /// Create a new registration service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register students with a teacher
    ///
    /// Students are inserted one at a time, in order. The first failure stops
    /// processing; registrations inserted before it are kept.
    pub async fn register(&self, teacher: &str, students: &[String]) -> Result<(), DomainError> {
        validate_registration(teacher, students)?;

        for student in students {
            let outcome = self.repository.insert_registration(teacher, student).await?;

            match outcome {
                InsertOutcome::Inserted => {
                    debug!(teacher = %teacher, student = %student, "Registration created");
                }
                InsertOutcome::DuplicateKey => {
                    warn!(teacher = %teacher, student = %student, "Duplicate registration");
                    return Err(DomainError::duplicate_registration(student));
                }
                InsertOutcome::ForeignKeyViolation(ForeignKey::Teacher) => {
                    warn!(teacher = %teacher, "Registration references unknown teacher");
                    return Err(DomainError::unknown_teacher(teacher));
                }
                InsertOutcome::ForeignKeyViolation(ForeignKey::Student) => {
                    warn!(student = %student, "Registration references unknown student");
                    return Err(DomainError::unknown_student(student));
                }
            }
        }

        info!(teacher = %teacher, count = students.len(), "Students registered");
        Ok(())
    }

    /// Students registered with every one of `teachers`
    ///
    /// The threshold is the number of identifiers passed, duplicates
    /// included, so repeating a teacher yields no students.
    pub async fn common_students(&self, teachers: &[String]) -> Result<Vec<String>, DomainError> {
        validate_teachers(teachers)?;

        self.repository
            .common_students(teachers, teachers.len())
            .await
    }

    /// Suspend a student
    pub async fn suspend(&self, student: &str) -> Result<(), DomainError> {
        validate_student(student)?;

        let affected = self.repository.update_suspended(student).await?;

        if affected == 0 {
            return Err(DomainError::unknown_student(student));
        }

        info!(student = %student, "Student suspended");
        Ok(())
    }

    /// Students who should receive a notification from `teacher`
    ///
    /// The union of the teacher's active registered students and the active
    /// students mentioned in the notification, deduplicated and sorted.
    pub async fn retrieve_for_notifications(
        &self,
        teacher: &str,
        notification: &str,
    ) -> Result<Vec<String>, DomainError> {
        validate_notification(teacher, notification)?;

        let mentioned: BTreeSet<String> = parse_mentions(notification).into_iter().collect();

        let mut recipients: BTreeSet<String> = self
            .repository
            .registered_non_suspended(teacher)
            .await?
            .into_iter()
            .collect();

        if !mentioned.is_empty() {
            let mentioned: Vec<String> = mentioned.into_iter().collect();
            recipients.extend(self.repository.non_suspended_among(&mentioned).await?);
        }

        debug!(teacher = %teacher, recipients = recipients.len(), "Resolved notification recipients");

        Ok(recipients.into_iter().collect())
    }

    /// Check that the repository is reachable
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registration::{MockRegistrationRepository, Student};
    use crate::infrastructure::registration::InMemoryRegistrationRepository;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn create_service() -> RegistrationService<InMemoryRegistrationRepository> {
        let repository = InMemoryRegistrationRepository::with_directory(
            ["teacher@example.com", "teacherken@gmail.com", "teacherjoe@gmail.com"],
            [
                "studentjon@example.com",
                "studenthon@example.com",
                "studentbob@gmail.com",
                "studentagnes@gmail.com",
                "studentmiche@gmail.com",
            ]
            .into_iter()
            .map(Student::new),
        );

        RegistrationService::new(Arc::new(repository))
    }

    #[tokio::test]
    async fn test_register_students() {
        let service = create_service();

        service
            .register(
                "teacher@example.com",
                &strings(&["studentjon@example.com", "studenthon@example.com"]),
            )
            .await
            .unwrap();

        let students = service
            .common_students(&strings(&["teacher@example.com"]))
            .await
            .unwrap();
        assert_eq!(
            students,
            strings(&["studenthon@example.com", "studentjon@example.com"])
        );
    }

    #[tokio::test]
    async fn test_register_requires_fields() {
        let service = create_service();

        let result = service.register("", &strings(&["studentjon@example.com"])).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));

        let result = service.register("teacher@example.com", &[]).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "Both 'teacher' and 'students' fields are required in the request body"
        );
    }

    #[tokio::test]
    async fn test_register_duplicate() {
        let service = create_service();
        let students = strings(&["studentjon@example.com"]);

        service.register("teacher@example.com", &students).await.unwrap();

        let result = service.register("teacher@example.com", &students).await;
        assert_eq!(
            result,
            Err(DomainError::duplicate_registration("studentjon@example.com"))
        );
    }

    #[tokio::test]
    async fn test_register_unknown_teacher() {
        let service = create_service();

        let result = service
            .register("nobody@example.com", &strings(&["studentjon@example.com"]))
            .await;
        assert_eq!(result, Err(DomainError::unknown_teacher("nobody@example.com")));
    }

    #[tokio::test]
    async fn test_register_unknown_student() {
        let service = create_service();

        let result = service
            .register("teacher@example.com", &strings(&["ghost@example.com"]))
            .await;
        assert_eq!(result, Err(DomainError::unknown_student("ghost@example.com")));
    }

    #[tokio::test]
    async fn test_register_keeps_earlier_inserts_on_failure() {
        let service = create_service();

        let result = service
            .register(
                "teacher@example.com",
                &strings(&[
                    "studentjon@example.com",
                    "ghost@example.com",
                    "studenthon@example.com",
                ]),
            )
            .await;
        assert_eq!(result, Err(DomainError::unknown_student("ghost@example.com")));

        let students = service
            .common_students(&strings(&["teacher@example.com"]))
            .await
            .unwrap();
        assert_eq!(students, strings(&["studentjon@example.com"]));
    }

    #[tokio::test]
    async fn test_register_stops_at_first_failure() {
        let mut repository = MockRegistrationRepository::new();
        let mut seq = Sequence::new();

        repository
            .expect_insert_registration()
            .with(eq("t@x.com"), eq("a@x.com"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(InsertOutcome::Inserted));
        repository
            .expect_insert_registration()
            .with(eq("t@x.com"), eq("b@x.com"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(InsertOutcome::DuplicateKey));

        let service = RegistrationService::new(Arc::new(repository));

        let result = service
            .register("t@x.com", &strings(&["a@x.com", "b@x.com", "c@x.com"]))
            .await;
        assert_eq!(result, Err(DomainError::duplicate_registration("b@x.com")));
    }

    #[tokio::test]
    async fn test_register_passes_storage_errors_through() {
        let mut repository = MockRegistrationRepository::new();
        repository
            .expect_insert_registration()
            .returning(|_, _| Err(DomainError::storage("connection reset by peer")));

        let service = RegistrationService::new(Arc::new(repository));

        let result = service.register("t@x.com", &strings(&["a@x.com"])).await;
        assert_eq!(result.unwrap_err().to_string(), "connection reset by peer");
    }

    #[tokio::test]
    async fn test_validation_happens_before_data_access() {
        // No expectations: any repository call would panic
        let repository = MockRegistrationRepository::new();
        let service = RegistrationService::new(Arc::new(repository));

        assert!(service.register("", &strings(&["a@x.com"])).await.is_err());
        assert!(service.common_students(&[]).await.is_err());
        assert!(service.suspend("").await.is_err());
        assert!(service.retrieve_for_notifications("t@x.com", "").await.is_err());
    }

    #[tokio::test]
    async fn test_common_students() {
        let service = create_service();

        service
            .register(
                "teacherken@gmail.com",
                &strings(&["studentbob@gmail.com", "studentagnes@gmail.com"]),
            )
            .await
            .unwrap();
        service
            .register(
                "teacherjoe@gmail.com",
                &strings(&["studentagnes@gmail.com", "studentmiche@gmail.com"]),
            )
            .await
            .unwrap();

        let students = service
            .common_students(&strings(&["teacherken@gmail.com", "teacherjoe@gmail.com"]))
            .await
            .unwrap();
        assert_eq!(students, strings(&["studentagnes@gmail.com"]));
    }

    #[tokio::test]
    async fn test_common_students_repeated_teacher_matches_nothing() {
        let service = create_service();

        service
            .register("teacherken@gmail.com", &strings(&["studentbob@gmail.com"]))
            .await
            .unwrap();

        // Known quirk: the threshold counts the repeated identifier twice
        let students = service
            .common_students(&strings(&["teacherken@gmail.com", "teacherken@gmail.com"]))
            .await
            .unwrap();
        assert!(students.is_empty());
    }

    #[tokio::test]
    async fn test_common_students_uses_raw_length_as_threshold() {
        let mut repository = MockRegistrationRepository::new();
        repository
            .expect_common_students()
            .withf(|teachers, threshold| teachers.len() == 3 && *threshold == 3)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = RegistrationService::new(Arc::new(repository));

        let students = service
            .common_students(&strings(&["a@x.com", "b@x.com", "a@x.com"]))
            .await
            .unwrap();
        assert!(students.is_empty());
    }

    #[tokio::test]
    async fn test_suspend() {
        let service = create_service();

        service.suspend("studentjon@example.com").await.unwrap();
        // Suspending again succeeds silently
        service.suspend("studentjon@example.com").await.unwrap();
    }

    #[tokio::test]
    async fn test_suspend_unknown_student() {
        let service = create_service();

        let result = service.suspend("ghost@example.com").await;
        assert_eq!(result, Err(DomainError::unknown_student("ghost@example.com")));
    }

    #[tokio::test]
    async fn test_retrieve_for_notifications_with_mentions() {
        let service = create_service();

        service
            .register("teacherken@gmail.com", &strings(&["studentbob@gmail.com"]))
            .await
            .unwrap();

        let recipients = service
            .retrieve_for_notifications(
                "teacherken@gmail.com",
                "Hello students! @studentagnes@gmail.com @studentmiche@gmail.com",
            )
            .await
            .unwrap();

        assert_eq!(
            recipients,
            strings(&[
                "studentagnes@gmail.com",
                "studentbob@gmail.com",
                "studentmiche@gmail.com",
            ])
        );
    }

    #[tokio::test]
    async fn test_retrieve_for_notifications_excludes_suspended() {
        let service = create_service();

        service
            .register(
                "teacher@example.com",
                &strings(&["studentjon@example.com", "studenthon@example.com"]),
            )
            .await
            .unwrap();
        service.suspend("studentjon@example.com").await.unwrap();
        service.suspend("studentagnes@gmail.com").await.unwrap();

        let recipients = service
            .retrieve_for_notifications(
                "teacher@example.com",
                "Hey @studentjon@example.com @studentagnes@gmail.com",
            )
            .await
            .unwrap();
        assert_eq!(recipients, strings(&["studenthon@example.com"]));
    }

    #[tokio::test]
    async fn test_retrieve_for_notifications_deduplicates() {
        let service = create_service();

        service
            .register("teacherken@gmail.com", &strings(&["studentbob@gmail.com"]))
            .await
            .unwrap();

        let recipients = service
            .retrieve_for_notifications(
                "teacherken@gmail.com",
                "@studentbob@gmail.com @studentbob@gmail.com",
            )
            .await
            .unwrap();
        assert_eq!(recipients, strings(&["studentbob@gmail.com"]));
    }

    #[tokio::test]
    async fn test_retrieve_for_notifications_without_mentions_skips_lookup() {
        let mut repository = MockRegistrationRepository::new();
        repository
            .expect_registered_non_suspended()
            .with(eq("t@x.com"))
            .times(1)
            .returning(|_| Ok(vec!["b@x.com".to_string(), "a@x.com".to_string()]));
        repository.expect_non_suspended_among().times(0);

        let service = RegistrationService::new(Arc::new(repository));

        let recipients = service
            .retrieve_for_notifications("t@x.com", "Hey everybody")
            .await
            .unwrap();
        assert_eq!(recipients, strings(&["a@x.com", "b@x.com"]));
    }

    #[tokio::test]
    async fn test_retrieve_for_notifications_ignores_unknown_mentions() {
        let service = create_service();

        let recipients = service
            .retrieve_for_notifications("teacherken@gmail.com", "hi @ghost@example.com")
            .await
            .unwrap();
        assert!(recipients.is_empty());
    }
}
