//! Infrastructure layer - Storage and service implementations

pub mod logging;
pub mod registration;
