//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod user_system;

pub use config::*;
pub use error::*;
pub use telemetry::*;
pub use user_system::*;
