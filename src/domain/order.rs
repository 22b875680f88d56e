use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Course, CourseId, Student, StudentId};

pub type OrderId = u64;

/// Manual payment verification state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [OrderStatus::Pending, OrderStatus::Verified, OrderStatus::Rejected];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Verified => "verified",
            OrderStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown order status '{s}'"))
    }
}

/// Represents a course purchase awaiting (or past) payment verification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub student_id: StudentId,
    pub course_id: CourseId,
    /// Bank transfer reference supplied by the buyer.
    pub utr_number: String,
    /// Course price at the time of purchase.
    pub amount: u32,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub utr_number: String,
    pub amount: u32,
    /// Defaults to [`OrderStatus::Pending`].
    pub status: Option<OrderStatus>,
}

/// A validated checkout submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub course_id: CourseId,
    pub utr_number: String,
}

/// Everything produced by a successful purchase.
#[derive(Debug, Clone)]
pub struct Enrollment {
    /// The submission as entered, which may differ from an existing student's record.
    pub purchase: Purchase,
    pub order: Order,
    pub student: Student,
    pub course: Course,
}
