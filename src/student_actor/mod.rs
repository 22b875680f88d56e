//! Student registry: one record per email address.

pub mod entity;
pub mod error;

pub use error::*;
