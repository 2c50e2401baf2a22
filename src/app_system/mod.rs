//! System orchestration, configuration, startup, and shutdown logic.

pub mod cafe_system;
pub mod config;
pub mod logging;

pub use cafe_system::*;
pub use config::*;
pub use logging::*;
