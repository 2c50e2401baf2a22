//! Pure computations over a snapshot of the menu: search/category filtering and
//! the aggregate figures shown above the list.

use std::fmt;
use std::str::FromStr;

use super::menu_item::{Category, MenuItem, UnknownCategory};

/// Category selector of the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Aggregates over a list of items. Plain integers, no currency formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuStats {
    pub item_count: usize,
    /// Sum of `i64` stocks; cannot overflow below 2^64 items.
    pub total_stock: i128,
    /// Saturates at `i128::MIN`/`i128::MAX`.
    pub total_value: i128,
}

/// Keeps items whose name or description contains `search_term` (case-insensitive)
/// and whose category passes `category_filter`. Input order is preserved.
pub fn filter(items: &[MenuItem], search_term: &str, category_filter: CategoryFilter) -> Vec<MenuItem> {
    let needle = search_term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .filter(|item| category_filter.matches(item.category))
        .cloned()
        .collect()
}

pub fn aggregate(items: &[MenuItem]) -> MenuStats {
    items.iter().fold(MenuStats::default(), |stats, item| MenuStats {
        item_count: stats.item_count + 1,
        total_stock: stats.total_stock + i128::from(item.stock),
        total_value: stats.total_value.saturating_add(item.inventory_value()),
    })
}

/// Items running short: `stock < threshold`.
pub fn low_stock(items: &[MenuItem], threshold: i64) -> Vec<MenuItem> {
    items.iter().filter(|item| item.stock < threshold).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed_menu;
    use crate::menu_actor::MenuDraft;

    fn names(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_empty_search_and_all_is_identity() {
        let items = seed_menu();
        assert_eq!(filter(&items, "", CategoryFilter::All), items);
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let items = seed_menu();
        assert_eq!(names(&filter(&items, "matcha", CategoryFilter::All)), vec!["Matcha Latte"]);
        assert_eq!(names(&filter(&items, "ESPRESSO", CategoryFilter::All)), vec!["Espresso", "Cappuccino"]);
    }

    #[test]
    fn test_search_matches_description() {
        let items = seed_menu();
        assert_eq!(names(&filter(&items, "susu", CategoryFilter::All)), vec!["Cappuccino", "Matcha Latte"]);
    }

    #[test]
    fn test_search_and_category_combine() {
        let items = seed_menu();
        let hits = filter(&items, "susu", Category::NonCoffee.into());
        assert_eq!(names(&hits), vec!["Matcha Latte"]);
        assert!(filter(&items, "", Category::Snack.into()).is_empty());
    }

    #[test]
    fn test_aggregate_of_empty_is_zero() {
        assert_eq!(aggregate(&[]), MenuStats { item_count: 0, total_stock: 0, total_value: 0 });
    }

    #[test]
    fn test_aggregate_of_seed_menu() {
        let stats = aggregate(&seed_menu());
        assert_eq!(stats.item_count, 4);
        assert_eq!(stats.total_stock, 160);
        // 25000*50 + 35000*45 + 20000*30 + 40000*35
        assert_eq!(stats.total_value, 4_825_000);
    }

    #[test]
    fn test_aggregate_survives_extreme_stock() {
        let huge = MenuDraft::new("Bulk beans", Category::Coffee, "1", "9223372036854775807", "")
            .validate()
            .unwrap();
        let items = vec![
            MenuItem::new(1, huge.name, huge.category, huge.price, huge.stock, ""),
            MenuItem::new(2, "Espresso", Category::Coffee, 25_000, 1, ""),
        ];
        let stats = aggregate(&items);
        assert_eq!(stats.total_stock, i128::from(i64::MAX) + 1);
        assert_eq!(stats.total_value, i128::from(i64::MAX) + 25_000);

        let priciest = MenuItem::new(3, "Gold leaf", Category::Snack, u64::MAX, i64::MAX, "");
        let stats = aggregate(&[priciest.clone(), priciest.clone(), priciest]);
        assert_eq!(stats.total_value, i128::MAX);
    }

    #[test]
    fn test_low_stock_uses_strict_threshold() {
        let mut items = seed_menu();
        items[2].stock = 9;
        items[3].stock = 10;
        assert_eq!(names(&low_stock(&items, 10)), vec!["Croissant"]);
    }

    #[test]
    fn test_category_filter_parsing() {
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!("snack".parse::<CategoryFilter>(), Ok(CategoryFilter::Only(Category::Snack)));
        assert!("Tea".parse::<CategoryFilter>().is_err());
    }
}
