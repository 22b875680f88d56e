use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinError;

use crate::course_actor::CourseError;

/// Errors raised while starting, running, or stopping the storefront.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Catalog seeding failed: {0}")]
    Seed(#[from] CourseError),
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] JoinError),
    #[error("Actors still running {0:?} after shutdown began")]
    ShutdownTimeout(Duration),
}
