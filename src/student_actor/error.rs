use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during student operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StudentError {
    #[error("Student not found: {0}")]
    NotFound(String),
    #[error("Student already exists: {0}")]
    AlreadyExists(String),
    #[error("Student validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for StudentError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound { id, .. } => StudentError::NotFound(id),
            FrameworkError::Conflict { key, .. } => StudentError::AlreadyExists(key),
            FrameworkError::Rejected(reason) => StudentError::ValidationError(reason),
            other => StudentError::ActorCommunicationError(other.to_string()),
        }
    }
}
