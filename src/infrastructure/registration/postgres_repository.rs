//! PostgreSQL registration repository implementation

use async_trait::async_trait;
use sqlx::error::DatabaseError;
use sqlx::{PgPool, Row};

use crate::domain::registration::{ForeignKey, InsertOutcome, RegistrationRepository};
use crate::domain::DomainError;

const TEACHER_FOREIGN_KEY: &str = "registrations_teacher_email_fkey";
const STUDENT_FOREIGN_KEY: &str = "registrations_student_email_fkey";

/// PostgreSQL implementation of RegistrationRepository
#[derive(Debug, Clone)]
pub struct PostgresRegistrationRepository {
    pool: PgPool,
}

impl PostgresRegistrationRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for PostgresRegistrationRepository {
    async fn insert_registration(
        &self,
        teacher: &str,
        student: &str,
    ) -> Result<InsertOutcome, DomainError> {
        let result = sqlx::query(
            "INSERT INTO registrations (teacher_email, student_email) VALUES ($1, $2)",
        )
        .bind(teacher)
        .bind(student)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(sqlx::Error::Database(db_err)) => match classify_insert_error(&*db_err) {
                Some(outcome) => Ok(outcome),
                None => Err(DomainError::storage(db_err.to_string())),
            },
            Err(e) => Err(DomainError::storage(e.to_string())),
        }
    }

    async fn registered_non_suspended(&self, teacher: &str) -> Result<Vec<String>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT DISTINCT r.student_email
            FROM registrations r
            JOIN students s ON r.student_email = s.student_email
            WHERE r.teacher_email = $1 AND s.is_suspended = false
            "#,
        )
        .bind(teacher)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(e.to_string()))?;

        rows_to_emails(&rows)
    }

    async fn non_suspended_among(&self, students: &[String]) -> Result<Vec<String>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT DISTINCT student_email
            FROM students
            WHERE student_email = ANY($1) AND is_suspended = false
            "#,
        )
        .bind(students)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(e.to_string()))?;

        rows_to_emails(&rows)
    }

    async fn common_students(
        &self,
        teachers: &[String],
        threshold: usize,
    ) -> Result<Vec<String>, DomainError> {
        let threshold = i64::try_from(threshold)
            .map_err(|_| DomainError::storage("Too many teachers in query"))?;

        let rows = sqlx::query(
            r#"
            SELECT student_email
            FROM registrations
            WHERE teacher_email = ANY($1)
            GROUP BY student_email
            HAVING COUNT(DISTINCT teacher_email) = $2
            ORDER BY student_email
            "#,
        )
        .bind(teachers)
        .bind(threshold)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(e.to_string()))?;

        rows_to_emails(&rows)
    }

    async fn update_suspended(&self, student: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("UPDATE students SET is_suspended = true WHERE student_email = $1")
            .bind(student)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        Ok(())
    }
}

/// Map a constraint violation to an insert outcome, if it is one we know
fn classify_insert_error(err: &dyn DatabaseError) -> Option<InsertOutcome> {
    classify_violation(err.is_unique_violation(), err.constraint())
}

fn classify_violation(is_unique: bool, constraint: Option<&str>) -> Option<InsertOutcome> {
    if is_unique {
        return Some(InsertOutcome::DuplicateKey);
    }

    match constraint? {
        TEACHER_FOREIGN_KEY => Some(InsertOutcome::ForeignKeyViolation(ForeignKey::Teacher)),
        STUDENT_FOREIGN_KEY => Some(InsertOutcome::ForeignKeyViolation(ForeignKey::Student)),
        _ => None,
    }
}

fn rows_to_emails(rows: &[sqlx::postgres::PgRow]) -> Result<Vec<String>, DomainError> {
    rows.iter()
        .map(|row| {
            row.try_get::<String, _>("student_email")
                .map_err(|e| DomainError::storage(e.to_string()))
        })
        .collect()
}
