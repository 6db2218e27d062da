//! Sort options for the catalog listing.

use serde::{Deserialize, Serialize};

/// How a listing page is ordered.
///
/// Each key maps to the `sortBy`/`order` directive the remote catalog
/// understands; `Featured` is the catalog's natural order and sends nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Catalog default order.
    #[default]
    Featured,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first.
    RatingDesc,
}

impl SortKey {
    /// All keys, in the order they are offered to the user.
    pub const ALL: [SortKey; 4] = [
        SortKey::Featured,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
    ];

    /// Parse a query-string value; anything unknown falls back to `Featured`.
    pub fn parse(value: &str) -> Self {
        match value {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "rating-desc" => SortKey::RatingDesc,
            _ => SortKey::Featured,
        }
    }

    /// The query-string value for this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating-desc",
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::RatingDesc => "Top Rated",
        }
    }

    /// The backend sort directive as a `(sortBy, order)` pair.
    pub fn query(&self) -> Option<(&'static str, &'static str)> {
        match self {
            SortKey::Featured => None,
            SortKey::PriceAsc => Some(("price", "asc")),
            SortKey::PriceDesc => Some(("price", "desc")),
            SortKey::RatingDesc => Some(("rating", "desc")),
        }
    }
}
