//! Course-specific domain logic: catalog edits and withdrawal from sale.

mod actions;
mod dtos;
pub mod entity;
pub mod error;

pub use actions::*;
pub use dtos::*;
pub use error::*;
