//! Shopping cart: line items, mutation primitives, pricing, quantity
//! resolution.

mod cart;
mod pricing;
mod quantity;

pub use cart::{Cart, CartItem};
pub use pricing::{PricingBreakdown, SHIPPING_FEE, TAX_RATE};
pub use quantity::{resolve_quantity, MAX_QUANTITY_PER_ADD};
