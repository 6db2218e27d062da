//! Wire types for the remote catalog API.

use serde::{Deserialize, Serialize};

/// A customer review attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub rating: f64,
    pub comment: String,
    pub date: String,
    pub reviewer_name: String,
    pub reviewer_email: String,
}

/// A catalog product.
///
/// Listing responses omit some of the detail fields, so everything beyond
/// the card basics is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
}

/// One page of a product listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: i64,
    #[serde(default)]
    pub skip: i64,
    #[serde(default)]
    pub limit: i64,
}

/// A category entry as the catalog returns it.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CategoryEntry {
    pub slug: String,
}
