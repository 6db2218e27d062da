//! Cart pricing calculations.

use crate::cart::Cart;
use serde::{Deserialize, Serialize};

/// Tax rate applied to the subtotal.
pub const TAX_RATE: f64 = 0.10;

/// Flat shipping fee, charged once per non-empty cart.
pub const SHIPPING_FEE: f64 = 9.99;

/// Complete pricing breakdown for a cart.
///
/// Derived, never persisted: recomputed from the cart on every read.
/// Amounts are kept unrounded; the formatting layer rounds at display time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PricingBreakdown {
    /// Sum of `price * quantity` over all line items.
    pub subtotal: f64,
    /// `subtotal * TAX_RATE`.
    pub tax: f64,
    /// `SHIPPING_FEE` when the cart has at least one item, otherwise 0.
    pub shipping: f64,
    /// `subtotal + tax + shipping`.
    pub total: f64,
}

impl PricingBreakdown {
    /// Compute the breakdown for a cart.
    pub fn for_cart(cart: &Cart) -> Self {
        let subtotal: f64 = cart
            .items()
            .iter()
            .map(|item| item.price * item.quantity as f64)
            .sum();
        let tax = subtotal * TAX_RATE;
        let shipping = if cart.is_empty() { 0.0 } else { SHIPPING_FEE };

        Self {
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
        }
    }
}
