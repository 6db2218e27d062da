//! Server-side resolution of client-requested quantities.

use crate::error::CommerceError;

/// Upper bound on the quantity accepted in a single add, independent of
/// stock.
pub const MAX_QUANTITY_PER_ADD: i64 = 99;

/// Resolve a client-supplied quantity against the product's current stock.
///
/// The requested value is whatever arrived on the wire: possibly fractional,
/// negative, or not finite at all. Normalisation is truncation; a non-finite
/// request defaults to 1. The result is clamped to
/// `[1, min(stock, MAX_QUANTITY_PER_ADD)]`.
///
/// A stock of exactly 0 is a conflict: the add should be rejected outright
/// rather than producing a clamped item.
pub fn resolve_quantity(requested: f64, stock: i64) -> Result<i64, CommerceError> {
    if stock <= 0 {
        return Err(CommerceError::OutOfStock);
    }

    let normalized = if requested.is_finite() {
        requested.trunc() as i64
    } else {
        1
    };

    Ok(normalized.clamp(1, stock.min(MAX_QUANTITY_PER_ADD)))
}
