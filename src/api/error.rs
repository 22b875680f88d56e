//! # API Errors
//!
//! Every handler failure ends up as one of these, and each maps to exactly one
//! response shape. Internal details are logged, never returned.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::course_actor::CourseError;
use crate::order_actor::OrderError;
use crate::student_actor::StudentError;
use crate::validation::{FieldError, ValidationErrors};

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input (400)
    #[error("{message}: {errors}")]
    Validation {
        message: &'static str,
        errors: ValidationErrors,
    },

    /// Unknown id (404)
    #[error("{0}")]
    NotFound(&'static str),

    /// Duplicate unique key (409)
    #[error("{0}")]
    Conflict(&'static str),

    /// Anything unexpected (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Adapter for `map_err` on request conversions.
    pub fn invalid(message: &'static str) -> impl FnOnce(ValidationErrors) -> ApiError {
        move |errors| ApiError::Validation { message, errors }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [FieldError]>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Validation { message, errors } => ErrorBody {
                message: *message,
                errors: Some(errors.errors()),
            },
            ApiError::NotFound(message) | ApiError::Conflict(message) => ErrorBody {
                message: *message,
                errors: None,
            },
            ApiError::Internal(detail) => {
                error!(%detail, "Request failed");
                ErrorBody {
                    message: "Internal server error",
                    errors: None,
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: "Invalid request body",
            errors: ValidationErrors::single("body", rejection.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation {
            message: "Invalid path parameter",
            errors: ValidationErrors::single("id", rejection.body_text()),
        }
    }
}

impl From<CourseError> for ApiError {
    fn from(e: CourseError) -> Self {
        match e {
            CourseError::NotFound(_) => ApiError::NotFound("Course not found"),
            CourseError::ValidationError(reason) => ApiError::Validation {
                message: "Invalid course data",
                errors: ValidationErrors::single("course", reason),
            },
            CourseError::ActorCommunicationError(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<StudentError> for ApiError {
    fn from(e: StudentError) -> Self {
        match e {
            StudentError::NotFound(_) => ApiError::NotFound("Student not found"),
            StudentError::AlreadyExists(_) => ApiError::Conflict("Student already exists"),
            StudentError::ValidationError(reason) => ApiError::Validation {
                message: "Invalid student data",
                errors: ValidationErrors::single("student", reason),
            },
            StudentError::ActorCommunicationError(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => ApiError::NotFound("Order not found"),
            OrderError::Course(e) => e.into(),
            OrderError::Student(e) => e.into(),
            OrderError::ValidationError(reason) => ApiError::Validation {
                message: "Invalid order data",
                errors: ValidationErrors::single("order", reason),
            },
            OrderError::ActorCommunicationError(detail) => ApiError::Internal(detail),
        }
    }
}
