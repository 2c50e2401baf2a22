use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fixed set of menu categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Coffee,
    NonCoffee,
    Pastry,
    Snack,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Coffee, Category::NonCoffee, Category::Pastry, Category::Snack];

    pub fn label(self) -> &'static str {
        match self {
            Category::Coffee => "Coffee",
            Category::NonCoffee => "Non-Coffee",
            Category::Pastry => "Pastry",
            Category::Snack => "Snack",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One sellable product on the café menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    pub category: Category,
    /// Smallest currency unit.
    pub price: u64,
    /// Signed on purpose: a negative count is a backorder.
    pub stock: i64,
    pub description: String,
}

impl MenuItem {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        category: Category,
        price: u64,
        stock: i64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            price,
            stock,
            description: description.into(),
        }
    }

    /// Value of the units on hand, `price * stock`.
    pub fn inventory_value(&self) -> i128 {
        i128::from(self.price) * i128::from(self.stock)
    }
}

/// The menu the café opens with. Ids run 1..=4, so the store continues at 5.
pub fn seed_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(1, "Espresso", Category::Coffee, 25_000, 50, "Kopi espresso murni dengan rasa yang kuat"),
        MenuItem::new(2, "Cappuccino", Category::Coffee, 35_000, 45, "Espresso dengan susu panas dan foam"),
        MenuItem::new(3, "Croissant", Category::Pastry, 20_000, 30, "Pastry mentega berlapis renyah"),
        MenuItem::new(4, "Matcha Latte", Category::NonCoffee, 40_000, 35, "Teh hijau Jepang dengan susu"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_labels_case_insensitively() {
        assert_eq!("Non-Coffee".parse::<Category>(), Ok(Category::NonCoffee));
        assert_eq!(" pastry ".parse::<Category>(), Ok(Category::Pastry));
        assert_eq!("tea".parse::<Category>(), Err(UnknownCategory("tea".into())));
    }

    #[test]
    fn test_category_display_round_trips() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<u64> = seed_menu().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_inventory_value_handles_backorders() {
        let item = MenuItem::new(1, "Espresso", Category::Coffee, 25_000, -2, "");
        assert_eq!(item.inventory_value(), -50_000);
    }
}
