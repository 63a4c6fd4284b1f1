//! Pagination Model
//!
//! Which pagination buttons exist, which are disabled and where they lead.

/// Numbered buttons are shown for pages within this distance of the current page
pub const PAGE_WINDOW_RADIUS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self { page, total_pages }
    }

    /// Pages in `1..=total_pages` within the window around `page`
    pub fn numbered_pages(&self) -> Vec<u32> {
        let low = self.page.saturating_sub(PAGE_WINDOW_RADIUS).max(1);
        let high = self.page.saturating_add(PAGE_WINDOW_RADIUS).min(self.total_pages);
        (low..=high).collect()
    }

    pub fn is_active(&self, page: u32) -> bool {
        self.page == page
    }

    pub fn first_disabled(&self) -> bool {
        self.page <= 1
    }

    pub fn prev_disabled(&self) -> bool {
        self.first_disabled()
    }

    /// Also disabled on a stale page beyond the last one
    pub fn next_disabled(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Enabled on a stale page beyond the last one, disabled when there are no pages
    pub fn last_disabled(&self) -> bool {
        self.total_pages == 0 || self.page == self.total_pages
    }

    pub fn first(&self) -> Option<u32> {
        (!self.first_disabled()).then_some(1)
    }

    pub fn prev(&self) -> Option<u32> {
        (!self.prev_disabled()).then(|| self.page - 1)
    }

    pub fn next(&self) -> Option<u32> {
        (!self.next_disabled()).then(|| self.page + 1)
    }

    pub fn last(&self) -> Option<u32> {
        (!self.last_disabled()).then_some(self.total_pages)
    }
}
