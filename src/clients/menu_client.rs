use tracing::{debug, error, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::MenuItem;
use crate::menu_actor::{MenuAction, MenuActionResult, MenuDraft, MenuError, StockPolicy};

/// Client for interacting with the menu store actor.
///
/// Cheap to clone; every clone talks to the same store, which handles one
/// request at a time.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
    stock_policy: StockPolicy,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>, stock_policy: StockPolicy) -> Self {
        Self { inner, stock_policy }
    }

    pub fn stock_policy(&self) -> StockPolicy {
        self.stock_policy
    }

    /// All items in insertion order.
    #[instrument(skip(self))]
    pub async fn list_menu(&self) -> Result<Vec<MenuItem>, MenuError> {
        debug!("Sending request");
        self.inner.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_menu_item(&self, id: u64) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.get(id).await
    }

    #[instrument(fields(name = %draft.name, category = %draft.category), skip(self, draft))]
    pub async fn create_menu_item(&self, draft: MenuDraft) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.create(draft).await
    }

    /// Replaces every mutable field of item `id` with the draft's values.
    #[instrument(fields(name = %draft.name), skip(self, draft))]
    pub async fn update_menu_item(&self, id: u64, draft: MenuDraft) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, draft).await
    }

    #[instrument(skip(self))]
    pub async fn delete_menu_item(&self, id: u64) -> Result<(), MenuError> {
        debug!("Sending request");
        self.inner.delete(id).await
    }

    /// Adds `delta` to the stock of item `id` under this client's stock policy.
    #[instrument(skip(self))]
    pub async fn adjust_stock(&self, id: u64, delta: i64) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        let action = MenuAction::AdjustStock { delta, policy: self.stock_policy };
        match self.inner.perform_action(id, action).await {
            Ok(MenuActionResult::AdjustStock(item)) => Ok(item),
            Err(e) => {
                error!(error = %e, "Stock adjustment failed");
                Err(e)
            }
        }
    }
}
