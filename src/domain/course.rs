use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

pub type CourseId = u64;

/// Whether a course is still offered in the catalog.
///
/// Courses are never removed; withdrawing one flips it to `Inactive` so orders
/// that reference it keep resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseState {
    #[default]
    Active,
    Inactive,
}

impl CourseState {
    pub fn from_flag(is_active: bool) -> Self {
        if is_active {
            CourseState::Active
        } else {
            CourseState::Inactive
        }
    }

    pub fn is_active(self) -> bool {
        self == CourseState::Active
    }
}

// On the wire the state is the `isActive` boolean.
impl Serialize for CourseState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_active())
    }
}

/// A course listed in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    /// Selling price in whole rupees.
    pub price: u32,
    /// List price shown struck through next to `price`.
    pub original_price: u32,
    pub duration: String,
    pub level: String,
    pub features: Vec<String>,
    #[serde(rename = "isActive")]
    pub state: CourseState,
    pub created_at: DateTime<Utc>,
}
