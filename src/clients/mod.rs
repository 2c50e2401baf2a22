//! Typed handles over the generic `ResourceClient`, one per domain actor.

mod menu_client;

pub use menu_client::MenuClient;
