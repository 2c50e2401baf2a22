use std::path::PathBuf;

use cafe_menu::app_system::{load_settings, setup_tracing, CafeSystem};
use cafe_menu::domain::{Category, CategoryFilter};
use cafe_menu::menu_actor::MenuDraft;
use clap::Parser;
use tracing::{error, info, warn, Instrument};

/// Runs a short session against a freshly seeded café menu store.
#[derive(Debug, Parser)]
#[command(name = "cafe_menu", version)]
struct Cli {
    /// TOML settings file (defaults to ./cafe.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the simulated store latency
    #[arg(long)]
    latency_ms: Option<u64>,
    /// Search term applied to name and description
    #[arg(long, default_value = "")]
    search: String,
    /// All, Coffee, Non-Coffee, Pastry or Snack
    #[arg(long, default_value = "All")]
    category: CategoryFilter,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref()).map_err(|e| e.to_string())?;
    if let Some(latency_ms) = cli.latency_ms {
        settings.latency_ms = latency_ms;
    }

    // Setup tracing once for the entire application
    setup_tracing(&settings.log_filter);

    info!("Starting café menu session");

    let system = CafeSystem::new(&settings);
    let mut view = system.view_controller();

    view.refresh().await.map_err(|e| e.to_string())?;
    info!(items = view.items().len(), "Menu loaded");

    // Add a new item through the form, as a user would
    let span = tracing::info_span!("menu_creation");
    let latte = async {
        let form = view.form_mut();
        form.name = "Latte".into();
        form.category = Category::Coffee;
        form.price = "30000".into();
        form.stock = "20".into();
        form.description = "Espresso dengan susu".into();
        view.submit().await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    info!(id = latte.id, price = latte.price, stock = latte.stock, "Latte added");

    // Sell a few espressos straight through the client
    match system.menu_client.adjust_stock(1, -10).await {
        Ok(item) => info!(name = %item.name, stock = item.stock, "Stock sold"),
        Err(e) => warn!(error = %e, "Could not sell stock"),
    }
    view.refresh().await.map_err(|e| e.to_string())?;

    // Editing an item that does not exist leaves the menu as it was
    if let Err(e) = system
        .menu_client
        .update_menu_item(99, MenuDraft::new("Ghost", Category::Snack, "1", "1", ""))
        .await
    {
        error!(error = %e, "Update rejected");
    }

    view.set_search(cli.search);
    view.set_category_filter(cli.category);
    for item in view.visible_items() {
        info!(
            id = item.id,
            name = %item.name,
            category = %item.category,
            price = item.price,
            stock = item.stock,
            "Menu item"
        );
    }

    let stats = view.stats();
    info!(
        item_count = stats.item_count,
        total_stock = %stats.total_stock,
        total_value = %stats.total_value,
        "Inventory summary"
    );
    for item in view.low_stock_items() {
        warn!(name = %item.name, stock = item.stock, "Running low");
    }

    drop(view);
    system.shutdown().await?;

    info!("Session completed successfully");
    Ok(())
}
