use chrono::{DateTime, Utc};
use serde::Serialize;

pub type StudentId = u64;

/// Represents a registered student. Created on first purchase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for registering a new student.
#[derive(Debug, Clone)]
pub struct StudentCreate {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

impl StudentCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            mobile: mobile.into(),
        }
    }
}
