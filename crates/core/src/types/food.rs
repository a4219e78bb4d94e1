//! Catalog records and cart line items.
//!
//! Wire names follow the payload format written by the mobile app
//! (`_id`, `isAvailable`), so carts saved by older builds still decode.

use serde::{Deserialize, Serialize};

use super::{FoodId, Price};

/// A catalog entry, read-only from the cart's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    #[serde(rename = "_id")]
    pub id: FoodId,
    pub name: String,
    pub price: Price,
    pub category: String,
    /// Missing in older payloads; treated as available.
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

const fn default_available() -> bool {
    true
}

impl Food {
    /// Create an available food without an image.
    #[must_use]
    pub fn new(
        id: impl Into<FoodId>,
        name: impl Into<String>,
        price: Price,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
            is_available: true,
            image: None,
        }
    }
}

/// A [`Food`] in the cart, with the number of units ordered.
///
/// Serialized flat: every `Food` field plus `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub food: Food,
    /// Signed: `set_quantity` stores whatever the caller passes, including
    /// zero and negative values.
    pub quantity: i64,
}

impl CartItem {
    /// A fresh line for `food` with quantity 1.
    #[must_use]
    pub const fn new(food: Food) -> Self {
        Self { food, quantity: 1 }
    }

    #[must_use]
    pub const fn id(&self) -> &FoodId {
        &self.food.id
    }

    /// `price * quantity`, exact.
    #[must_use]
    pub fn line_total(&self) -> rust_decimal::Decimal {
        self.food.price.times(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn burger() -> Food {
        Food::new("f1", "Burger", "10".parse().unwrap(), "Fast Food")
    }

    #[test]
    fn test_decodes_app_payload() {
        let json = r#"[{"_id":"f1","name":"Burger","price":10,"category":"Fast Food","isAvailable":true,"image":"https://cdn/burger.png","quantity":2}]"#;
        let items: Vec<CartItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 1);
        let item = items.first().unwrap();
        assert_eq!(item.id().as_str(), "f1");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.food.price.amount(), Decimal::from(10));
        assert_eq!(item.food.image.as_deref(), Some("https://cdn/burger.png"));
    }

    #[test]
    fn test_availability_defaults_to_true() {
        let json = r#"{"_id":"f2","name":"Tea","price":"1.5","category":"Drinks"}"#;
        let food: Food = serde_json::from_str(json).unwrap();
        assert!(food.is_available);
        assert!(food.image.is_none());
    }

    #[test]
    fn test_cart_item_keeps_every_food_field() {
        let mut food = burger();
        food.is_available = false;
        food.image = Some("img.png".to_string());
        let item = CartItem {
            food,
            quantity: 3,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["_id"], "f1");
        assert_eq!(value["isAvailable"], false);
        assert_eq!(value["image"], "img.png");
        assert_eq!(value["quantity"], 3);

        let back: CartItem = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_line_total() {
        let item = CartItem {
            food: burger(),
            quantity: 3,
        };
        assert_eq!(item.line_total(), Decimal::from(30));
    }
}
