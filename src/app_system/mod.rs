//! System orchestration, startup, and shutdown logic.

pub mod config;
pub mod error;
pub mod seed;
pub mod storefront_system;
pub mod telemetry;

pub use config::*;
pub use error::*;
pub use storefront_system::*;
pub use telemetry::*;
