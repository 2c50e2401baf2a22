//! Menu-specific store logic: draft validation, stock adjustment and the
//! error type surfaced to callers.

mod actions;
mod dtos;
pub mod entity;
pub mod error;

pub use actions::*;
pub use dtos::*;
pub use error::*;
