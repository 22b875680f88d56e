//! Field-level input checks shared by every request type.
//!
//! Checks accumulate into [`ValidationErrors`] so a caller sees every problem
//! with a submission at once instead of one per round trip.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// One problem with one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[error("invalid input: {}", summarize(.0))]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records a missing value. The default stands in so checking can continue.
    pub fn required<T: Default>(&mut self, field: &str, value: Option<T>) -> T {
        value.unwrap_or_else(|| {
            self.add(field, "is required");
            T::default()
        })
    }

    /// Required, trimmed, non-empty text.
    pub fn text(&mut self, field: &str, value: Option<String>) -> String {
        match value {
            Some(value) => self.non_blank(field, value),
            None => {
                self.add(field, "is required");
                String::new()
            }
        }
    }

    /// Optional text that, when present, must not be blank.
    pub fn optional_text(&mut self, field: &str, value: Option<String>) -> Option<String> {
        value.map(|value| self.non_blank(field, value))
    }

    fn non_blank(&mut self, field: &str, value: String) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.add(field, "must not be empty");
        }
        trimmed.to_string()
    }

    /// Counts characters, not bytes. Empty values are assumed already reported.
    pub fn min_chars(&mut self, field: &str, value: &str, min: usize) {
        if !value.is_empty() && value.chars().count() < min {
            self.add(field, format!("must be at least {min} characters"));
        }
    }

    pub fn email(&mut self, field: &str, value: &str) {
        if !value.is_empty() && !EMAIL.is_match(value) {
            self.add(field, "must be a valid email address");
        }
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn finish<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}
