//! API request/response types and extractors

pub mod error;
pub mod json;
pub mod query;
pub mod registration;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use query::Query;
pub use registration::{
    CommonStudentsResponse, NotificationRequest, NotificationResponse, RegisterRequest,
    SuspendRequest,
};
