//! Domain logic for the storefront.
//!
//! This crate holds everything that can be computed without I/O:
//!
//! - **Cart**: line items keyed by product id, with pure mutation primitives
//! - **Pricing**: subtotal/tax/shipping/total derivation
//! - **Browse**: sort directives and page windowing for the catalog listing
//! - **Format**: display formatting for prices and category names
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::cart::{Cart, CartItem};
//! use storefront_commerce::cart::PricingBreakdown;
//!
//! let cart = Cart::default().upsert(CartItem {
//!     id: 1,
//!     title: "Essence Mascara".to_string(),
//!     price: 9.99,
//!     thumbnail: "https://cdn.example.com/1.webp".to_string(),
//!     quantity: 2,
//! });
//!
//! let pricing = PricingBreakdown::for_cart(&cart);
//! assert!((pricing.subtotal - 19.98).abs() < 1e-9);
//! ```

pub mod browse;
pub mod cart;
pub mod error;
pub mod format;

pub use error::CommerceError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::browse::{Pagination, SortKey, PAGE_SIZE};
    pub use crate::cart::{
        resolve_quantity, Cart, CartItem, PricingBreakdown, MAX_QUANTITY_PER_ADD, SHIPPING_FEE,
        TAX_RATE,
    };
    pub use crate::error::CommerceError;
    pub use crate::format::{display_name, format_price};
}
