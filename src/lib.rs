//! # Café Menu
//!
//! In-memory menu and inventory store for a café, run as a tokio actor.
//!
//! - [`actor_framework`] - generic `ResourceActor`/`ResourceClient` pair with
//!   insertion-ordered storage and simulated latency
//! - [`menu_actor`] - what a menu item is to the store: draft validation,
//!   stock adjustment, [`MenuError`](menu_actor::MenuError)
//! - [`clients`] - [`MenuClient`](clients::MenuClient), the typed handle callers hold
//! - [`domain`] - [`MenuItem`](domain::MenuItem), categories, and the pure
//!   filter/aggregate views
//! - [`controller`] - headless screen state driving the command, re-fetch, derive cycle
//! - [`app_system`] - settings, tracing setup, and the [`CafeSystem`](app_system::CafeSystem) coordinator
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use cafe_menu::app_system::{CafeSystem, Settings};
//! use cafe_menu::domain::Category;
//! use cafe_menu::menu_actor::MenuDraft;
//!
//! let system = CafeSystem::new(&Settings::default());
//! let latte = system
//!     .menu_client
//!     .create_menu_item(MenuDraft::new("Latte", Category::Coffee, "30000", "20", ""))
//!     .await?;
//! system.menu_client.adjust_stock(latte.id, -2).await?;
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod controller;
pub mod domain;
pub mod menu_actor;

#[cfg(test)]
mod mock_framework;
