//! Listing query parameters and endpoint construction.

use reqwest::Url;

use storefront_commerce::browse::SortKey;

use crate::FetchError;

/// Parameters for a product listing request.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Category filter; `None` or `"all"` lists the whole catalog.
    pub category: Option<String>,
    /// Page size; sent only when positive.
    pub limit: i64,
    /// Items to skip; sent only when positive.
    pub skip: i64,
    /// Sort directive.
    pub sort: SortKey,
}

impl ProductQuery {
    /// Query for one listing page.
    pub fn page(category: Option<String>, sort: SortKey, limit: i64, skip: i64) -> Self {
        Self {
            category,
            limit,
            skip,
            sort,
        }
    }

    /// Whether the category filter actually narrows the listing.
    fn filtered_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != "all")
    }

    /// Build the full endpoint URL against a base.
    pub fn endpoint_url(&self, base: &Url) -> Result<Url, FetchError> {
        let mut url = match self.filtered_category() {
            Some(category) => {
                let mut url = base.clone();
                url.path_segments_mut()
                    .map_err(|_| FetchError::Decode("catalog base URL cannot be a base".into()))?
                    .pop_if_empty()
                    .extend(["products", "category", category]);
                url
            }
            None => base
                .join("products")
                .map_err(|e| FetchError::Decode(e.to_string()))?,
        };

        {
            let mut params = url.query_pairs_mut();
            if self.limit > 0 {
                params.append_pair("limit", &self.limit.to_string());
            }
            if self.skip > 0 {
                params.append_pair("skip", &self.skip.to_string());
            }
            if let Some((sort_by, order)) = self.sort.query() {
                params.append_pair("sortBy", sort_by);
                params.append_pair("order", order);
            }
        }

        // An empty query renders as a trailing `?` otherwise.
        if url.query() == Some("") {
            url.set_query(None);
        }

        Ok(url)
    }
}
