//! Catalog browsing helpers: sort directives and pagination.

mod pagination;
mod sort;

pub use pagination::{Pagination, PAGE_SIZE};
pub use sort::SortKey;
