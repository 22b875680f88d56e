use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during course operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CourseError {
    #[error("Course not found: {0}")]
    NotFound(String),
    #[error("Course validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CourseError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound { id, .. } => CourseError::NotFound(id),
            FrameworkError::Rejected(reason) => CourseError::ValidationError(reason),
            other => CourseError::ActorCommunicationError(other.to_string()),
        }
    }
}
