//! Catalog filter selection.
//!
//! [`FoodFilters`] is the query descriptor handed to the catalog source. It
//! changes only through [`FoodFilters::apply`]; the single value derived
//! locally is the category list from [`category_options`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Food;

/// Label shown for "no category filter".
pub const ALL_CATEGORIES: &str = "All";

const DEFAULT_MAX_PRICE: i64 = 1000;

/// Current filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodFilters {
    /// Empty means every category.
    pub category: String,
    pub min_price: Decimal,
    pub max_price: Decimal,
    /// Empty means source order.
    pub sort_by: String,
    pub search: String,
}

impl Default for FoodFilters {
    fn default() -> Self {
        Self {
            category: String::new(),
            min_price: Decimal::ZERO,
            max_price: Decimal::from(DEFAULT_MAX_PRICE),
            sort_by: String::new(),
            search: String::new(),
        }
    }
}

/// A partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPatch {
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort_by: Option<String>,
    pub search: Option<String>,
}

/// A single filter transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Merge the provided fields into the selection.
    Set(FilterPatch),
    /// Restore the defaults.
    Reset,
    /// Pick a category chip; [`ALL_CATEGORIES`] clears the category.
    SelectCategory(String),
    /// Submit search text.
    Search(String),
}

impl FoodFilters {
    /// Apply one transition.
    pub fn apply(&mut self, action: FilterAction) {
        match action {
            FilterAction::Set(patch) => self.merge(patch),
            FilterAction::Reset => *self = Self::default(),
            FilterAction::SelectCategory(label) => {
                self.category = if label == ALL_CATEGORIES {
                    String::new()
                } else {
                    label
                };
            }
            FilterAction::Search(text) => self.search = text,
        }
    }

    fn merge(&mut self, patch: FilterPatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(min_price) = patch.min_price {
            self.min_price = min_price;
        }
        if let Some(max_price) = patch.max_price {
            self.max_price = max_price;
        }
        if let Some(sort_by) = patch.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(search) = patch.search {
            self.search = search;
        }
    }

    /// Whether `label` is the currently selected category chip.
    #[must_use]
    pub fn is_selected(&self, label: &str) -> bool {
        self.category == label || (label == ALL_CATEGORIES && self.category.is_empty())
    }
}

/// Distinct categories in `foods`, first-seen order, with "All" in front.
#[must_use]
pub fn category_options(foods: &[Food]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for food in foods {
        if !options.iter().skip(1).any(|c| c == &food.category) {
            options.push(food.category.clone());
        }
    }
    options
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Price;

    fn food(id: &str, category: &str) -> Food {
        Food::new(id, id, Price::new(Decimal::ONE).unwrap(), category)
    }

    #[test]
    fn test_defaults() {
        let filters = FoodFilters::default();
        assert_eq!(filters.category, "");
        assert_eq!(filters.min_price, Decimal::ZERO);
        assert_eq!(filters.max_price, Decimal::from(1000));
        assert_eq!(filters.sort_by, "");
        assert_eq!(filters.search, "");
    }

    #[test]
    fn test_set_preserves_unspecified_fields() {
        let mut filters = FoodFilters::default();
        filters.apply(FilterAction::Search("pizza".into()));
        filters.apply(FilterAction::Set(FilterPatch {
            max_price: Some(Decimal::from(50)),
            ..FilterPatch::default()
        }));

        assert_eq!(filters.search, "pizza");
        assert_eq!(filters.max_price, Decimal::from(50));
        assert_eq!(filters.min_price, Decimal::ZERO);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut filters = FoodFilters {
            category: "Drinks".into(),
            min_price: Decimal::from(5),
            max_price: Decimal::from(9),
            sort_by: "price_desc".into(),
            search: "tea".into(),
        };
        filters.apply(FilterAction::Reset);
        assert_eq!(filters, FoodFilters::default());
    }

    #[test]
    fn test_select_all_clears_category() {
        let mut filters = FoodFilters::default();
        filters.apply(FilterAction::SelectCategory("Drinks".into()));
        assert_eq!(filters.category, "Drinks");
        assert!(filters.is_selected("Drinks"));
        assert!(!filters.is_selected(ALL_CATEGORIES));

        filters.apply(FilterAction::SelectCategory(ALL_CATEGORIES.into()));
        assert_eq!(filters.category, "");
        assert!(filters.is_selected(ALL_CATEGORIES));
    }

    #[test]
    fn test_category_options() {
        let foods = vec![
            food("1", "Pizza"),
            food("2", "Drinks"),
            food("3", "Pizza"),
            food("4", "Dessert"),
        ];
        assert_eq!(
            category_options(&foods),
            ["All", "Pizza", "Drinks", "Dessert"]
        );
        assert_eq!(category_options(&[]), ["All"]);
    }

    #[test]
    fn test_wire_names() {
        let value = serde_json::to_value(FoodFilters::default()).unwrap();
        assert!(value.get("minPrice").is_some());
        assert!(value.get("sortBy").is_some());
    }
}
