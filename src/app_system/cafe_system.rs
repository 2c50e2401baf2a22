use tracing::{error, info};
use crate::actor_framework::ResourceActor;
use crate::clients::MenuClient;
use crate::controller::ViewController;
use crate::domain::{seed_menu, MenuItem};
use super::config::Settings;

/// Owns the menu store task and hands out clients to it.
///
/// Built once at process start; consumers receive a [`MenuClient`] (or a
/// [`ViewController`] wrapping one) instead of reaching for a global.
pub struct CafeSystem {
    pub menu_client: MenuClient,
    low_stock_threshold: i64,
    handle: tokio::task::JoinHandle<()>,
}

impl CafeSystem {
    /// Spawns the store actor. Must be called inside a tokio runtime.
    pub fn new(settings: &Settings) -> Self {
        let seed = if settings.seed_menu { seed_menu() } else { Vec::new() };
        let mut next_id = seed.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        let next_menu_id = move || {
            let id = next_id;
            next_id += 1;
            id
        };

        let (menu_actor, menu_resource_client) = ResourceActor::<MenuItem>::new(settings.buffer_size, next_menu_id);
        let menu_actor = menu_actor.with_latency(settings.latency()).with_entities(seed);
        let menu_client = MenuClient::new(menu_resource_client, settings.stock_policy);
        let handle = tokio::spawn(menu_actor.run());

        info!(
            latency_ms = settings.latency_ms,
            seeded = settings.seed_menu,
            stock_policy = ?settings.stock_policy,
            "Menu store started"
        );

        Self {
            menu_client,
            low_stock_threshold: settings.low_stock_threshold,
            handle,
        }
    }

    /// A fresh controller bound to this system's store.
    pub fn view_controller(&self) -> ViewController {
        ViewController::new(self.menu_client.clone(), self.low_stock_threshold)
    }

    /// Closes the store once every outstanding client clone is gone.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // The actor stops when the last sender is dropped.
        drop(self.menu_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
