use serde::Deserialize;
use thiserror::Error;

/// What adjust-stock does when the result would drop below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockPolicy {
    /// Negative stock is kept and reads as a backorder.
    #[default]
    AllowNegative,
    /// The adjustment is refused with `MenuError::InsufficientStock`.
    RejectNegative,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown stock policy: {0}")]
pub struct UnknownStockPolicy(pub String);

impl std::str::FromStr for StockPolicy {
    type Err = UnknownStockPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "allow-negative" => Ok(StockPolicy::AllowNegative),
            "reject-negative" => Ok(StockPolicy::RejectNegative),
            _ => Err(UnknownStockPolicy(s.to_string())),
        }
    }
}

/// Custom actions for menu items beyond plain CRUD.
#[derive(Debug, Clone)]
pub enum MenuAction {
    /// Adds `delta` (possibly negative) to the stock in place.
    ///
    /// # Errors
    /// With `StockPolicy::RejectNegative`, fails when the result would be below zero.
    AdjustStock { delta: i64, policy: StockPolicy },
}

/// Results from MenuActions - variants match 1:1 with MenuAction
#[derive(Debug, Clone)]
pub enum MenuActionResult {
    /// Snapshot of the item after the adjustment
    AdjustStock(crate::domain::MenuItem),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_policy_parses_kebab_case_names() {
        assert_eq!("reject-negative".parse::<StockPolicy>(), Ok(StockPolicy::RejectNegative));
        assert_eq!(" allow-negative ".parse::<StockPolicy>(), Ok(StockPolicy::AllowNegative));
        assert_eq!("clamp".parse::<StockPolicy>(), Err(UnknownStockPolicy("clamp".into())));
    }
}
