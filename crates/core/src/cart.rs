//! Cart state and its transitions.
//!
//! Every mutation of a [`Cart`] goes through [`Cart::apply`] with a
//! [`CartAction`]. Each transition recomputes both totals from the full item
//! list, so the totals can never drift from the items no matter what order
//! actions arrive in.

use core::fmt;

use rust_decimal::Decimal;

use crate::types::{CartItem, Food, FoodId};

/// A single cart transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Replace all items wholesale (normally with the items loaded from
    /// storage). Repeated IDs are merged into the first occurrence with their
    /// quantities summed.
    Initialize(Vec<CartItem>),
    /// Increment the matching item, or append a new one with quantity 1.
    Add(Food),
    /// Delete the matching item. No-op when absent.
    Remove(FoodId),
    /// Overwrite the quantity of the matching item. Non-positive values are
    /// stored as given; the item is not removed. No-op when absent.
    SetQuantity { id: FoodId, quantity: i64 },
    /// Step the quantity by `delta`; the item is removed if the result is not
    /// positive. No-op when absent.
    AdjustQuantity { id: FoodId, delta: i64 },
    /// Remove every item.
    Clear,
}

impl CartAction {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Initialize(_) => "initialize",
            Self::Add(_) => "add",
            Self::Remove(_) => "remove",
            Self::SetQuantity { .. } => "set_quantity",
            Self::AdjustQuantity { .. } => "adjust_quantity",
            Self::Clear => "clear",
        }
    }
}

/// Which kind of operation a [`CartFault`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Reading or decoding the stored cart at startup.
    Load,
    /// Writing the cart to storage after a transition.
    Save,
}

/// The last failed operation, kept until an operation of the same kind
/// succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartFault {
    pub kind: FaultKind,
    pub message: String,
}

impl fmt::Display for CartFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The authoritative in-memory cart.
///
/// Fields are private: items change only through [`Cart::apply`], and the
/// status fields only through the loading/fault setters used by the engine
/// that owns the cart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    total_quantity: i64,
    total_price: Decimal,
    loading: bool,
    error: Option<CartFault>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A cart seeded with `items`, totals computed.
    #[must_use]
    pub fn with_items(items: Vec<CartItem>) -> Self {
        let mut cart = Self::new();
        cart.apply(CartAction::Initialize(items));
        cart
    }

    /// Apply one transition and recompute totals.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::Initialize(items) => {
                self.items = Vec::with_capacity(items.len());
                for item in items {
                    match self.position(&item.food.id) {
                        Some(index) => {
                            if let Some(existing) = self.items.get_mut(index) {
                                existing.quantity = existing.quantity.saturating_add(item.quantity);
                            }
                        }
                        None => self.items.push(item),
                    }
                }
            }
            CartAction::Add(food) => match self.position(&food.id) {
                Some(index) => {
                    if let Some(item) = self.items.get_mut(index) {
                        item.quantity = item.quantity.saturating_add(1);
                    }
                }
                None => self.items.push(CartItem::new(food)),
            },
            CartAction::Remove(id) => self.items.retain(|item| item.food.id != id),
            CartAction::SetQuantity { id, quantity } => {
                if let Some(item) = self.items.iter_mut().find(|item| item.food.id == id) {
                    item.quantity = quantity;
                }
            }
            CartAction::AdjustQuantity { id, delta } => {
                if let Some(index) = self.position(&id) {
                    let current = self.items.get(index).map_or(0, |item| item.quantity);
                    let next = current.saturating_add(delta);
                    if next > 0 {
                        if let Some(item) = self.items.get_mut(index) {
                            item.quantity = next;
                        }
                    } else {
                        self.items.remove(index);
                    }
                }
            }
            CartAction::Clear => self.items.clear(),
        }
        self.recompute_totals();
    }

    fn position(&self, id: &FoodId) -> Option<usize> {
        self.items.iter().position(|item| &item.food.id == id)
    }

    fn recompute_totals(&mut self) {
        self.total_quantity = self
            .items
            .iter()
            .fold(0_i64, |acc, item| acc.saturating_add(item.quantity));
        self.total_price = self
            .items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.line_total()));
    }

    /// Items in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Look up an item by food ID.
    #[must_use]
    pub fn item(&self, id: &FoodId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.food.id == id)
    }

    /// Sum of item quantities.
    #[must_use]
    pub const fn total_quantity(&self) -> i64 {
        self.total_quantity
    }

    /// Sum of `price * quantity`, unrounded.
    #[must_use]
    pub const fn total_price(&self) -> Decimal {
        self.total_price
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True only while the initial load from storage is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn error(&self) -> Option<&CartFault> {
        self.error.as_ref()
    }

    pub const fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Record a failure, replacing any earlier fault.
    pub fn record_fault(&mut self, kind: FaultKind, message: impl Into<String>) {
        self.error = Some(CartFault {
            kind,
            message: message.into(),
        });
    }

    /// Clear the fault if it came from an operation of `kind`.
    pub fn clear_fault(&mut self, kind: FaultKind) {
        if self.error.as_ref().is_some_and(|fault| fault.kind == kind) {
            self.error = None;
        }
    }
}
