//! Order summary shown under the cart.

use rust_decimal::Decimal;

use crate::cart::Cart;

/// Orders at or above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Amounts derived from the cart for checkout display. All unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    /// How much more would qualify the order for free shipping, if any.
    pub free_shipping_shortfall: Option<Decimal>,
}

impl OrderSummary {
    /// Summarize `cart`. Shipping and tax are currently always zero.
    #[must_use]
    pub fn of(cart: &Cart) -> Self {
        let subtotal = cart.total_price();
        let shipping = Decimal::ZERO;
        let tax = Decimal::ZERO;
        let free_shipping_shortfall =
            (subtotal < FREE_SHIPPING_THRESHOLD).then(|| FREE_SHIPPING_THRESHOLD - subtotal);

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal.saturating_add(shipping).saturating_add(tax),
            free_shipping_shortfall,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::cart::CartAction;
    use crate::types::{CartItem, Food, Price};

    fn cart_with(price: &str, quantity: i64) -> Cart {
        let food = Food::new("f1", "Biryani", Price::from_str(price).unwrap(), "Rice");
        Cart::with_items(vec![CartItem { food, quantity }])
    }

    #[test]
    fn test_shortfall_below_threshold() {
        let summary = OrderSummary::of(&cart_with("120.25", 2));

        assert_eq!(summary.subtotal, Decimal::from_str("240.50").unwrap());
        assert_eq!(summary.total, summary.subtotal);
        assert_eq!(summary.shipping, Decimal::ZERO);
        assert_eq!(summary.tax, Decimal::ZERO);
        assert_eq!(
            summary.free_shipping_shortfall,
            Some(Decimal::from_str("259.50").unwrap())
        );
    }

    #[test]
    fn test_no_shortfall_at_threshold() {
        assert_eq!(OrderSummary::of(&cart_with("250", 2)).free_shipping_shortfall, None);
        assert_eq!(OrderSummary::of(&cart_with("600", 1)).free_shipping_shortfall, None);
    }

    #[test]
    fn test_empty_cart_is_all_shortfall() {
        let mut cart = cart_with("10", 1);
        cart.apply(CartAction::Clear);

        let summary = OrderSummary::of(&cart);

        assert_eq!(summary.total, Decimal::ZERO);
        assert_eq!(summary.free_shipping_shortfall, Some(FREE_SHIPPING_THRESHOLD));
    }
}
