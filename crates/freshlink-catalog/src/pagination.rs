//! "Load more" pagination over an already filtered and sorted list.

use serde::Serialize;

/// First `page * page_size` elements of `filtered`, clamped to its length.
#[must_use]
pub fn visible<T>(filtered: &[T], page: usize, page_size: usize) -> &[T] {
    let count = page.saturating_mul(page_size).min(filtered.len());
    &filtered[..count]
}

/// `true` while some filtered items are not yet visible.
#[must_use]
pub fn has_more<T>(filtered: &[T], visible: &[T]) -> bool {
    visible.len() < filtered.len()
}

/// Page counter for one listing page. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationWindow {
    page: usize,
    page_size: usize,
}

impl PaginationWindow {
    /// A window on page 1. A zero page size is treated as 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Move to the next page if `total` items are not all visible yet.
    /// Returns whether the page advanced.
    pub fn advance(&mut self, total: usize) -> bool {
        if self.visible_count(total) >= total {
            return false;
        }
        self.page += 1;
        true
    }

    #[must_use]
    pub fn visible_count(&self, total: usize) -> usize {
        self.page.saturating_mul(self.page_size).min(total)
    }

    #[must_use]
    pub fn slice<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        visible(filtered, self.page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_length_is_min_of_page_times_size_and_len() {
        let list: Vec<u32> = (0..45).collect();
        for page in 1..5 {
            for size in [1, 8, 20, 100] {
                assert_eq!(visible(&list, page, size).len(), (page * size).min(list.len()));
            }
        }
    }

    #[test]
    fn visible_is_a_prefix() {
        let list = [1, 2, 3, 4, 5];
        assert_eq!(visible(&list, 1, 2), &[1, 2]);
        assert_eq!(visible(&list, 2, 2), &[1, 2, 3, 4]);
        assert_eq!(visible(&list, 9, 2), &list);
    }

    #[test]
    fn products_page_of_ten_has_nothing_more() {
        let list: Vec<u32> = (0..10).collect();
        assert!(!has_more(&list, visible(&list, 1, 20)));
    }

    #[test]
    fn vendors_page_of_nine_needs_two_pages() {
        let list: Vec<u32> = (0..9).collect();
        let mut window = PaginationWindow::new(8);
        assert!(has_more(&list, window.slice(&list)));

        assert!(window.advance(list.len()));
        assert_eq!(window.page(), 2);
        assert!(!has_more(&list, window.slice(&list)));
        assert!(!window.advance(list.len()));
        assert_eq!(window.page(), 2);
    }

    #[test]
    fn unbounded_page_size_does_not_overflow() {
        let list = [1, 2, 3];
        let mut window = PaginationWindow::new(usize::MAX);
        assert_eq!(window.slice(&list).len(), 3);
        assert!(!window.advance(list.len()));
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut window = PaginationWindow::new(2);
        window.advance(10);
        window.advance(10);
        assert_eq!(window.page(), 3);
        window.reset();
        assert_eq!(window.page(), 1);
    }
}
