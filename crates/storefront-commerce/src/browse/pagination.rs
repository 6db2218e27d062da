//! Listing pagination and page-control windowing.

use serde::{Deserialize, Serialize};

/// Products shown per listing page.
pub const PAGE_SIZE: i64 = 9;

/// Pagination info for a listing page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed; requests below 1 are clamped).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of items across all pages.
    pub total: i64,
    /// Total number of pages, at least 1.
    pub total_pages: i64,
    /// 1-indexed number of the first item on this page (0 when empty).
    pub start_item: i64,
    /// 1-indexed number of the last item on this page (0 when empty).
    pub end_item: i64,
}

impl Pagination {
    /// Create pagination info for the default page size.
    pub fn new(page: i64, total: i64) -> Self {
        Self::with_page_size(page, total, PAGE_SIZE)
    }

    /// Create pagination info for an explicit page size.
    pub fn with_page_size(page: i64, total: i64, per_page: i64) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };
        let skip = (page - 1) * per_page;

        let (start_item, end_item) = if total == 0 {
            (0, 0)
        } else {
            (skip + 1, (page * per_page).min(total))
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            start_item,
            end_item,
        }
    }

    /// Offset of this page's first item, for the catalog's `skip` parameter.
    pub fn skip(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Page numbers to render in the page controls.
    ///
    /// Five slots: first page, a triple, last page. The triple hugs the
    /// start on pages 1-2, hugs the end on the last two pages, and is
    /// centred on the current page everywhere else. With five or fewer
    /// pages every page is shown.
    pub fn visible_pages(&self) -> Vec<i64> {
        if self.total_pages <= 5 {
            return (1..=self.total_pages).collect();
        }

        let mut pages = vec![1];

        if self.page <= 2 {
            pages.extend([2, 3, 4]);
        } else if self.page >= self.total_pages - 1 {
            pages.extend([
                self.total_pages - 3,
                self.total_pages - 2,
                self.total_pages - 1,
            ]);
        } else {
            pages.extend([self.page - 1, self.page, self.page + 1]);
        }

        pages.push(self.total_pages);
        pages
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basics() {
        let p = Pagination::new(2, 45);
        assert_eq!(p.total_pages, 5);
        assert_eq!(p.skip(), 9);
        assert!(p.has_next());
        assert!(p.has_prev());
    }

    #[test]
    fn test_page_clamped_to_one() {
        let p = Pagination::new(0, 45);
        assert_eq!(p.page, 1);
        let p = Pagination::new(-3, 45);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn test_page_size_clamped_to_one() {
        let p = Pagination::with_page_size(1, 10, 0);
        assert_eq!(p.per_page, 1);
        assert_eq!(p.total_pages, 10);

        let p = Pagination::with_page_size(1, 10, -9);
        assert_eq!(p.per_page, 1);
    }

    #[test]
    fn test_empty_listing() {
        let p = Pagination::new(1, 0);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.start_item, 0);
        assert_eq!(p.end_item, 0);
        assert!(!p.has_next());
        assert!(!p.has_prev());
    }

    #[test]
    fn test_item_numbers() {
        let p = Pagination::new(2, 45);
        assert_eq!(p.start_item, 10);
        assert_eq!(p.end_item, 18);

        // Short final page.
        let p = Pagination::new(5, 40);
        assert_eq!(p.start_item, 37);
        assert_eq!(p.end_item, 40);
    }

    #[test]
    fn test_visible_pages_few_pages_shows_all() {
        assert_eq!(Pagination::new(1, 27).visible_pages(), vec![1, 2, 3]);
        assert_eq!(
            Pagination::new(3, 45).visible_pages(),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn test_visible_pages_near_start() {
        let p = Pagination::with_page_size(1, 100, 10);
        assert_eq!(p.visible_pages(), vec![1, 2, 3, 4, 10]);
        let p = Pagination::with_page_size(2, 100, 10);
        assert_eq!(p.visible_pages(), vec![1, 2, 3, 4, 10]);
    }

    #[test]
    fn test_visible_pages_in_middle() {
        let p = Pagination::with_page_size(5, 100, 10);
        assert_eq!(p.visible_pages(), vec![1, 4, 5, 6, 10]);
    }

    #[test]
    fn test_visible_pages_near_end() {
        let p = Pagination::with_page_size(9, 100, 10);
        assert_eq!(p.visible_pages(), vec![1, 7, 8, 9, 10]);
        let p = Pagination::with_page_size(10, 100, 10);
        assert_eq!(p.visible_pages(), vec![1, 7, 8, 9, 10]);
    }
}
