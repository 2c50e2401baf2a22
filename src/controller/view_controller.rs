use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};
use crate::clients::MenuClient;
use crate::domain::{aggregate, filter, low_stock, CategoryFilter, MenuItem, MenuStats};
use crate::menu_actor::MenuError;
use super::form::MenuForm;

/// Marks a command as in flight until dropped, even when the command's future
/// is dropped before it completes.
struct InFlight(Arc<AtomicBool>);

impl InFlight {
    fn start(flag: &Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(Arc::clone(flag))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// State behind the menu screen.
///
/// Every command goes to the store, and on success the whole collection is
/// fetched again; derived views are always computed from the last snapshot
/// that was fetched successfully.
pub struct ViewController {
    client: MenuClient,
    items: Vec<MenuItem>,
    loading: Arc<AtomicBool>,
    form: MenuForm,
    editing_id: Option<u64>,
    search_term: String,
    category_filter: CategoryFilter,
    low_stock_threshold: i64,
    last_error: Option<MenuError>,
}

impl ViewController {
    pub fn new(client: MenuClient, low_stock_threshold: i64) -> Self {
        Self {
            client,
            items: Vec::new(),
            loading: Arc::new(AtomicBool::new(false)),
            form: MenuForm::default(),
            editing_id: None,
            search_term: String::new(),
            category_filter: CategoryFilter::All,
            low_stock_threshold,
            last_error: None,
        }
    }

    // --- Accessors ---

    pub fn items(&self) -> &[MenuItem] { &self.items }
    pub fn is_loading(&self) -> bool { self.loading.load(Ordering::SeqCst) }
    pub fn form(&self) -> &MenuForm { &self.form }
    pub fn form_mut(&mut self) -> &mut MenuForm { &mut self.form }
    pub fn editing_id(&self) -> Option<u64> { self.editing_id }
    pub fn search_term(&self) -> &str { &self.search_term }
    pub fn category_filter(&self) -> CategoryFilter { self.category_filter }
    pub fn last_error(&self) -> Option<&MenuError> { self.last_error.as_ref() }

    // --- Commands ---

    /// Fetches the collection. On failure the previous items stay on screen.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), MenuError> {
        let _in_flight = InFlight::start(&self.loading);
        self.fetch().await
    }

    /// Creates a new item, or updates the one being edited, from the form.
    #[instrument(skip(self), fields(editing_id = ?self.editing_id))]
    pub async fn submit(&mut self) -> Result<MenuItem, MenuError> {
        if !self.form.is_complete() {
            warn!("Form incomplete, nothing submitted");
            return Err(self.record(MenuError::ValidationError(
                "name, price and stock are required".to_string(),
            )));
        }

        let _in_flight = InFlight::start(&self.loading);
        let draft = self.form.to_draft();
        let result = match self.editing_id {
            Some(id) => self.client.update_menu_item(id, draft).await,
            None => self.client.create_menu_item(draft).await,
        };
        match result {
            Ok(item) => {
                info!(id = item.id, name = %item.name, "Menu item saved");
                self.form = MenuForm::default();
                self.editing_id = None;
                self.last_error = None;
                // The save stands even if the re-fetch fails.
                let _ = self.fetch().await;
                Ok(item)
            }
            Err(e) => {
                error!(error = %e, "Error saving menu");
                Err(self.record(e))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: u64) -> Result<(), MenuError> {
        let _in_flight = InFlight::start(&self.loading);
        match self.client.delete_menu_item(id).await {
            Ok(()) => {
                info!("Menu item deleted");
                if self.editing_id == Some(id) {
                    self.cancel_edit();
                }
                self.last_error = None;
                let _ = self.fetch().await;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error deleting menu");
                Err(self.record(e))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn adjust_stock(&mut self, id: u64, delta: i64) -> Result<MenuItem, MenuError> {
        let _in_flight = InFlight::start(&self.loading);
        match self.client.adjust_stock(id, delta).await {
            Ok(item) => {
                info!(stock = item.stock, "Stock adjusted");
                self.last_error = None;
                let _ = self.fetch().await;
                Ok(item)
            }
            Err(e) => Err(self.record(e)),
        }
    }

    /// Loads `item` into the form and marks it as the edit target.
    pub fn begin_edit(&mut self, item: &MenuItem) {
        debug!(id = item.id, "Editing menu item");
        self.form = MenuForm::from_item(item);
        self.editing_id = Some(item.id);
    }

    pub fn cancel_edit(&mut self) {
        self.form = MenuForm::default();
        self.editing_id = None;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_category_filter(&mut self, category_filter: CategoryFilter) {
        self.category_filter = category_filter;
    }

    // --- Derived views ---

    pub fn visible_items(&self) -> Vec<MenuItem> {
        filter(&self.items, &self.search_term, self.category_filter)
    }

    /// Totals over the whole collection, whatever the current filter.
    pub fn stats(&self) -> MenuStats {
        aggregate(&self.items)
    }

    pub fn low_stock_items(&self) -> Vec<MenuItem> {
        low_stock(&self.items, self.low_stock_threshold)
    }

    async fn fetch(&mut self) -> Result<(), MenuError> {
        match self.client.list_menu().await {
            Ok(items) => {
                debug!(count = items.len(), "Menu fetched");
                self.items = items;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error fetching menu");
                Err(self.record(e))
            }
        }
    }

    fn record(&mut self, e: MenuError) -> MenuError {
        self.last_error = Some(e.clone());
        e
    }
}
