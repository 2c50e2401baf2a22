use crate::domain::{Category, MenuItem};
use crate::menu_actor::MenuDraft;

/// Text fields of the add/edit form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuForm {
    pub name: String,
    pub category: Category,
    pub price: String,
    pub stock: String,
    pub description: String,
}

impl MenuForm {
    /// Prefills the form for editing `item`.
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category,
            price: item.price.to_string(),
            stock: item.stock.to_string(),
            description: item.description.clone(),
        }
    }

    /// Presence check done before anything is sent to the store.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.price.trim().is_empty() && !self.stock.trim().is_empty()
    }

    pub fn to_draft(&self) -> MenuDraft {
        MenuDraft {
            name: self.name.clone(),
            category: self.category,
            price: self.price.clone(),
            stock: self.stock.clone(),
            description: self.description.clone(),
        }
    }
}
