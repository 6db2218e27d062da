//! Cart and line item types.

use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// Display fields and the unit price are snapshotted at add time; they are
/// not re-synced with the catalog on later cart views. The product id doubles
/// as the line key: a cart holds at most one item per id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Catalog product id (also the line-item key).
    pub id: i64,
    /// Product title at add time.
    pub title: String,
    /// Unit price at add time.
    pub price: f64,
    /// Thumbnail URL at add time.
    pub thumbnail: String,
    /// Quantity, always >= 1 once stored.
    pub quantity: i64,
}

/// A shopping cart: an ordered, id-unique sequence of line items.
///
/// Insertion order reflects the order items were first added. The mutation
/// primitives are pure: each returns a new `Cart`, leaving the receiver
/// untouched, so a rejected request never commits a half-applied state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create a cart from existing line items.
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Insert-or-accumulate keyed by product id.
    ///
    /// If an item with the incoming id exists, its quantity is increased by
    /// the incoming quantity (accumulate, not overwrite) and it keeps its
    /// position. Otherwise the incoming item is appended. The incoming
    /// quantity must already be resolved against stock (see
    /// [`resolve_quantity`](crate::cart::resolve_quantity)); this primitive
    /// does not clamp.
    pub fn upsert(&self, incoming: CartItem) -> Cart {
        if self.items.iter().any(|item| item.id == incoming.id) {
            let items = self
                .items
                .iter()
                .map(|item| {
                    if item.id == incoming.id {
                        CartItem {
                            quantity: item.quantity + incoming.quantity,
                            ..item.clone()
                        }
                    } else {
                        item.clone()
                    }
                })
                .collect();
            return Cart { items };
        }

        let mut items = self.items.clone();
        items.push(incoming);
        Cart { items }
    }

    /// Replace the quantity of the item with the given id.
    ///
    /// A quantity <= 0 removes the item entirely; removal is a special case
    /// of update, not a separate path the caller has to pick. An unknown id
    /// is a no-op. Unaffected items keep their position.
    pub fn with_quantity(&self, id: i64, quantity: i64) -> Cart {
        if quantity <= 0 {
            return self.without(id);
        }

        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    CartItem {
                        quantity,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Cart { items }
    }

    /// Remove the item with the given id; no-op when absent.
    pub fn without(&self, id: i64) -> Cart {
        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        Cart { items }
    }

    /// Get an item by product id.
    pub fn get(&self, id: i64) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
