//! Typed handles over the record store actors.

#[macro_use]
mod macros;

mod course_client;
mod order_client;
mod student_client;

pub use course_client::CourseClient;
pub use order_client::OrderClient;
pub use student_client::StudentClient;
