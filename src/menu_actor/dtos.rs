use crate::domain::Category;
use super::error::MenuError;

/// Caller-supplied fields for creating or replacing a menu item.
///
/// Price and stock arrive as text, exactly as typed into a form, and are
/// parsed by [`MenuDraft::validate`] before the store is touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuDraft {
    pub name: String,
    pub category: Category,
    pub price: String,
    pub stock: String,
    pub description: String,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuFields {
    pub name: String,
    pub category: Category,
    pub price: u64,
    pub stock: i64,
    pub description: String,
}

impl MenuDraft {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        price: impl Into<String>,
        stock: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            price: price.into(),
            stock: stock.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<MenuFields, MenuError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(MenuError::ValidationError("name is required".to_string()));
        }
        let price = self.price.trim().parse::<u64>().map_err(|_| {
            MenuError::ValidationError(format!("price must be a non-negative integer, got {:?}", self.price))
        })?;
        let stock = self.stock.trim().parse::<i64>().map_err(|_| {
            MenuError::ValidationError(format!("stock must be an integer, got {:?}", self.stock))
        })?;
        Ok(MenuFields {
            name: name.to_string(),
            category: self.category,
            price,
            stock,
            description: self.description.clone(),
        })
    }
}
