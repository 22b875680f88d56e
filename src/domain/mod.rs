pub mod course;
pub mod order;
pub mod student;

pub use course::*;
pub use order::*;
pub use student::*;
