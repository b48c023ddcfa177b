//! Request and response bodies for the registration endpoints

use serde::{Deserialize, Serialize};

/// POST /api/register
///
/// Absent and `null` fields both decode as `None` and read back as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub teacher: Option<String>,
    #[serde(default)]
    pub students: Option<Vec<String>>,
}

impl RegisterRequest {
    pub fn teacher(&self) -> &str {
        self.teacher.as_deref().unwrap_or_default()
    }

    pub fn students(&self) -> &[String] {
        self.students.as_deref().unwrap_or_default()
    }
}

/// POST /api/suspend
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuspendRequest {
    #[serde(default)]
    pub student: Option<String>,
}

impl SuspendRequest {
    pub fn student(&self) -> &str {
        self.student.as_deref().unwrap_or_default()
    }
}

/// POST /api/retrievefornotifications
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationRequest {
    #[serde(default)]
    pub teacher: Option<String>,
    #[serde(default)]
    pub notification: Option<String>,
}

impl NotificationRequest {
    pub fn teacher(&self) -> &str {
        self.teacher.as_deref().unwrap_or_default()
    }

    pub fn notification(&self) -> &str {
        self.notification.as_deref().unwrap_or_default()
    }
}

/// GET /api/commonstudents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonStudentsResponse {
    pub students: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub recipients: Vec<String>,
}
