//! Order records and their payment verification status.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
