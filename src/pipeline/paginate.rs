use serde::Serialize;

/// Fixed-size paging over a filtered collection.
///
/// `current_page` is 1-based and always within `1..=total_pages()`.
/// Requests outside that range saturate at the nearest bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paginator {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
}

impl Paginator {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            total_items: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page).max(1)
    }

    /// Point at a new collection size and go back to the first page.
    pub fn reset(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    pub fn go_to_page(&mut self, page: i64) {
        let last = self.total_pages() as i64;
        let clamped = page.clamp(1, last);
        if clamped != page {
            tracing::debug!("Page {page} out of range, showing page {clamped} of {last}");
        }
        self.current_page = clamped as usize;
    }

    pub fn first(&mut self) {
        self.go_to_page(1);
    }

    pub fn previous(&mut self) {
        self.go_to_page(self.current_page as i64 - 1);
    }

    pub fn next(&mut self) {
        self.go_to_page(self.current_page as i64 + 1);
    }

    pub fn last(&mut self) {
        self.go_to_page(self.total_pages() as i64);
    }

    /// Zero-based `[start, end)` of the current page.
    pub fn bounds(&self) -> (usize, usize) {
        let start = ((self.current_page - 1) * self.items_per_page).min(self.total_items);
        let end = (start + self.items_per_page).min(self.total_items);
        (start, end)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.bounds();
        let end = end.min(items.len());
        &items[start.min(end)..end]
    }
}
