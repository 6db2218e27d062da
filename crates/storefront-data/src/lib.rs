//! HTTP client for the remote product catalog service.
//!
//! The catalog is an external collaborator: every request fetches fresh
//! data, with no caching layer and no retries. A failed upstream call
//! surfaces as a [`FetchError`] for that one request.

mod client;
mod error;
mod product;
mod query;

pub use client::CatalogClient;
pub use error::FetchError;
pub use product::{Product, ProductPage, Review};
pub use query::ProductQuery;
