//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart operations.
///
/// The cart mutation primitives themselves are total; only quantity
/// resolution against live stock can fail.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommerceError {
    /// The product has zero stock at resolution time.
    #[error("Product is out of stock")]
    OutOfStock,
}
