//! Plain-text rendering of the cart and catalog.
//!
//! The only place the CLI writes to stdout; logs go to stderr.

#![allow(clippy::print_stdout)]

use foodcart_core::{Cart, CurrencyCode, Food, FoodFilters, OrderSummary, format_amount};

/// Print the cart with line totals and the order summary.
pub fn cart(cart: &Cart, currency: CurrencyCode) {
    if cart.is_empty() {
        println!("Your cart is empty");
    } else {
        println!("Your Cart ({})", cart.total_quantity());
        for item in cart.items() {
            println!(
                "  {:<10} {:<28} {:>10} x {:<4} {:>12}",
                item.id(),
                item.food.name,
                item.food.price.display(currency),
                item.quantity,
                format_amount(item.line_total(), currency),
            );
        }
        summary(&OrderSummary::of(cart), currency);
    }

    if let Some(fault) = cart.error() {
        println!("warning: {fault}");
    }
}

fn summary(summary: &OrderSummary, currency: CurrencyCode) {
    let shipping = if summary.shipping.is_zero() {
        "Free".to_string()
    } else {
        format_amount(summary.shipping, currency)
    };

    println!();
    println!("Order Summary");
    println!("  {:<10} {:>12}", "Subtotal", format_amount(summary.subtotal, currency));
    println!("  {:<10} {:>12}", "Shipping", shipping);
    println!("  {:<10} {:>12}", "Tax", format_amount(summary.tax, currency));
    println!("  {:<10} {:>12}", "Total", format_amount(summary.total, currency));
    if let Some(shortfall) = summary.free_shipping_shortfall {
        println!(
            "Add {} more to get free shipping",
            format_amount(shortfall, currency)
        );
    }
}

/// Print a catalog result with its category chips.
pub fn catalog(foods: &[Food], categories: &[String], filters: &FoodFilters, currency: CurrencyCode) {
    let chips: Vec<String> = categories
        .iter()
        .map(|label| {
            if filters.is_selected(label) {
                format!("[{label}]")
            } else {
                label.clone()
            }
        })
        .collect();
    println!("{}", chips.join("  "));

    if foods.is_empty() {
        println!("No items match your filters");
        return;
    }
    for food in foods {
        let availability = if food.is_available { "" } else { " (unavailable)" };
        println!(
            "  {:<10} {:<28} {:<12} {:>10}{availability}",
            food.id,
            food.name,
            food.category,
            food.price.display(currency),
        );
    }
}
