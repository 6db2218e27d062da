//! The catalog HTTP client.

use reqwest::{StatusCode, Url};

use crate::product::CategoryEntry;
use crate::{FetchError, Product, ProductPage, ProductQuery};

/// Client for the remote product catalog service.
///
/// Read-only, uncached: every call issues a fresh request. A failing call is
/// reported once and never retried; the caller decides what the failure
/// means for its request.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base: Url,
    http: reqwest::Client,
}

impl CatalogClient {
    /// Create a client against a catalog base URL.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let base = Url::parse(base_url).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    /// List products with optional category filter, sort and pagination.
    pub async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage, FetchError> {
        let url = query.endpoint_url(&self.base)?;
        tracing::debug!(%url, "listing products");

        let response = self.http.get(url).send().await?;
        let response = check_status(response)?;
        let page = response
            .json::<ProductPage>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(page)
    }

    /// Fetch one product by id, including detail fields such as stock,
    /// images and reviews.
    pub async fn get_product(&self, id: i64) -> Result<Product, FetchError> {
        let url = self
            .base
            .join(&format!("products/{id}"))
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        tracing::debug!(%url, "fetching product");

        let response = self.http.get(url).send().await?;
        let response = check_status(response)?;
        let product = response
            .json::<Product>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(product)
    }

    /// List category slugs, lexicographically sorted.
    pub async fn list_categories(&self) -> Result<Vec<String>, FetchError> {
        let url = self
            .base
            .join("products/categories")
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        tracing::debug!(%url, "listing categories");

        let response = self.http.get(url).send().await?;
        let response = check_status(response)?;
        let entries = response
            .json::<Vec<CategoryEntry>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        let mut categories: Vec<String> = entries.into_iter().map(|c| c.slug).collect();
        categories.sort();
        Ok(categories)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound);
    }
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "catalog returned an error");
        return Err(FetchError::Upstream {
            status: status.as_u16(),
        });
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(CatalogClient::new("not a url").is_err());
    }

    #[test]
    fn test_accepts_base_with_and_without_trailing_slash() {
        assert!(CatalogClient::new("https://dummyjson.com").is_ok());
        assert!(CatalogClient::new("https://dummyjson.com/").is_ok());
    }
}
