use crate::actor_framework::Entity;
use crate::domain::MenuItem;
use super::actions::{MenuAction, MenuActionResult, StockPolicy};
use super::dtos::MenuDraft;
use super::error::MenuError;

impl Entity for MenuItem {
    type Id = u64;
    type CreateParams = MenuDraft;
    type Patch = MenuDraft;
    type Action = MenuAction;
    type ActionResult = MenuActionResult;
    type Error = MenuError;

    fn id(&self) -> &u64 { &self.id }

    /// Builds a new item from a validated draft.
    ///
    /// # Errors
    /// `MenuError::ValidationError` when the draft does not validate.
    fn from_create_params(id: u64, params: MenuDraft) -> Result<Self, MenuError> {
        let fields = params.validate()?;
        Ok(Self {
            id,
            name: fields.name,
            category: fields.category,
            price: fields.price,
            stock: fields.stock,
            description: fields.description,
        })
    }

    fn not_found(id: &u64) -> MenuError {
        MenuError::NotFound(*id)
    }

    /// Replaces every mutable field. The id stays.
    fn on_update(&mut self, patch: MenuDraft) -> Result<(), MenuError> {
        let fields = patch.validate()?;
        self.name = fields.name;
        self.category = fields.category;
        self.price = fields.price;
        self.stock = fields.stock;
        self.description = fields.description;
        Ok(())
    }

    fn handle_action(&mut self, action: MenuAction) -> Result<MenuActionResult, MenuError> {
        match action {
            MenuAction::AdjustStock { delta, policy } => {
                let adjusted = self.stock.checked_add(delta).ok_or_else(|| {
                    MenuError::ValidationError(format!("stock adjustment by {delta} overflows"))
                })?;
                if policy == StockPolicy::RejectNegative && adjusted < 0 {
                    return Err(MenuError::InsufficientStock {
                        requested: delta.saturating_neg(),
                        available: self.stock,
                    });
                }
                self.stock = adjusted;
                Ok(MenuActionResult::AdjustStock(self.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{seed_menu, Category};

    fn espresso() -> MenuItem {
        seed_menu().remove(0)
    }

    #[test]
    fn test_adjust_stock_round_trip() {
        let mut item = espresso();
        let up = MenuAction::AdjustStock { delta: 5, policy: StockPolicy::AllowNegative };
        let down = MenuAction::AdjustStock { delta: -5, policy: StockPolicy::AllowNegative };
        item.handle_action(up).unwrap();
        assert_eq!(item.stock, 55);
        item.handle_action(down).unwrap();
        assert_eq!(item.stock, 50);
    }

    #[test]
    fn test_adjust_stock_below_zero_depends_on_policy() {
        let mut item = espresso();
        let rejected = item.handle_action(MenuAction::AdjustStock { delta: -60, policy: StockPolicy::RejectNegative });
        assert_eq!(rejected.unwrap_err(), MenuError::InsufficientStock { requested: 60, available: 50 });
        assert_eq!(item.stock, 50);

        item.handle_action(MenuAction::AdjustStock { delta: -60, policy: StockPolicy::AllowNegative }).unwrap();
        assert_eq!(item.stock, -10);
    }

    #[test]
    fn test_adjust_stock_overflow_is_rejected() {
        let mut item = espresso();
        let result = item.handle_action(MenuAction::AdjustStock { delta: i64::MAX, policy: StockPolicy::AllowNegative });
        assert!(matches!(result, Err(MenuError::ValidationError(_))));
        assert_eq!(item.stock, 50);
    }

    #[test]
    fn test_invalid_update_leaves_item_unchanged() {
        let mut item = espresso();
        let before = item.clone();
        let result = item.on_update(MenuDraft::new("Ristretto", Category::Coffee, "cheap", "10", ""));
        assert!(matches!(result, Err(MenuError::ValidationError(_))));
        assert_eq!(item, before);
    }

    #[test]
    fn test_update_keeps_id() {
        let mut item = espresso();
        item.on_update(MenuDraft::new("Ristretto", Category::Coffee, "27000", "12", "Short shot")).unwrap();
        assert_eq!(item, MenuItem::new(1, "Ristretto", Category::Coffee, 27_000, 12, "Short shot"));
    }
}
