//! List Query
//!
//! Page number, page size and sort order for the Ideas list,
//! plus the counts derived from them.

use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;
use crate::models::Idea;

/// Sort order, rendered as the API sort key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// `-published_at`
    #[default]
    Newest,
    /// `published_at`
    Oldest,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Newest, SortOrder::Oldest];

    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Newest => "-published_at",
            SortOrder::Oldest => "published_at",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest",
            SortOrder::Oldest => "Oldest",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_param() == s.trim())
            .ok_or_else(|| QueryError::SortKey(s.to_string()))
    }
}

/// Items per page, restricted to the sizes offered in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u32);

impl PageSize {
    pub const OPTIONS: [u32; 3] = [10, 20, 50];

    pub fn new(size: u32) -> Option<Self> {
        Self::OPTIONS.contains(&size).then_some(Self(size))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(10)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageSize {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(PageSize::new)
            .ok_or_else(|| QueryError::PageSize(s.to_string()))
    }
}

/// Parse a 1-based page number
pub fn parse_page(s: &str) -> Result<u32, QueryError> {
    s.trim()
        .parse::<u32>()
        .ok()
        .filter(|page| *page >= 1)
        .ok_or_else(|| QueryError::Page(s.to_string()))
}

/// Current list position and ordering
///
/// Changing the page size or sort order always goes back to page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    page: u32,
    page_size: PageSize,
    sort: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PageSize::default(),
            sort: SortOrder::default(),
        }
    }
}

impl ListQuery {
    pub fn new(page: u32, page_size: PageSize, sort: SortOrder) -> Self {
        Self {
            page: page.max(1),
            page_size,
            sort,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.page = 1;
    }

    /// `ceil(total_items / page_size)`
    pub fn total_pages(&self, total_items: u64) -> u32 {
        let pages = total_items.div_ceil(u64::from(self.page_size.get()));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// 1-based `[first, last]` item numbers shown on the current page
    pub fn visible_range(&self, total_items: u64) -> (u64, u64) {
        let size = u64::from(self.page_size.get());
        let page = u64::from(self.page);
        let start = (page - 1) * size + 1;
        let end = (page * size).min(total_items);
        (start, end)
    }
}

/// One fetched page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListResult {
    pub items: Vec<Idea>,
    /// Server-reported count across all pages
    pub total_items: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: u32) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[test]
    fn test_defaults() {
        let query = ListQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size().get(), 10);
        assert_eq!(query.sort(), SortOrder::Newest);
        assert_eq!(query.sort().as_param(), "-published_at");
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut query = ListQuery::new(4, size(10), SortOrder::Newest);
        query.set_page_size(size(20));
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size().get(), 20);

        // Same size still resets
        query.set_page(3);
        query.set_page_size(size(20));
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_sort_change_resets_page() {
        let mut query = ListQuery::new(5, size(50), SortOrder::Newest);
        query.set_sort(SortOrder::Oldest);
        assert_eq!(query.page(), 1);
        assert_eq!(query.sort(), SortOrder::Oldest);
        assert_eq!(query.page_size().get(), 50);
    }

    #[test]
    fn test_page_never_zero() {
        let mut query = ListQuery::new(0, size(10), SortOrder::Newest);
        assert_eq!(query.page(), 1);
        query.set_page(0);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_total_pages() {
        let query = ListQuery::new(1, size(10), SortOrder::Newest);
        assert_eq!(query.total_pages(25), 3);
        assert_eq!(query.total_pages(30), 3);
        assert_eq!(query.total_pages(31), 4);
        assert_eq!(query.total_pages(0), 0);
    }

    #[test]
    fn test_visible_range() {
        let query = ListQuery::new(2, size(10), SortOrder::Newest);
        assert_eq!(query.visible_range(25), (11, 20));

        let last = ListQuery::new(3, size(10), SortOrder::Newest);
        assert_eq!(last.visible_range(25), (21, 25));

        let fifty = ListQuery::new(1, size(50), SortOrder::Oldest);
        assert_eq!(fifty.visible_range(12), (1, 12));
    }

    #[test]
    fn test_visible_range_follows_formula_for_every_page() {
        for n in PageSize::OPTIONS {
            for page in 1..=6u32 {
                let query = ListQuery::new(page, size(n), SortOrder::Newest);
                let (start, end) = query.visible_range(137);
                assert_eq!(start, u64::from((page - 1) * n + 1));
                assert_eq!(end, u64::from(page * n).min(137));
            }
        }
    }

    #[test]
    fn test_empty_result_range() {
        assert_eq!(ListQuery::default().visible_range(0), (1, 0));
    }

    #[test]
    fn test_parse_sort_order() {
        assert_eq!("-published_at".parse::<SortOrder>().unwrap(), SortOrder::Newest);
        assert_eq!("published_at".parse::<SortOrder>().unwrap(), SortOrder::Oldest);
        assert!("title".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_parse_page_size() {
        assert_eq!("20".parse::<PageSize>().unwrap().get(), 20);
        assert!("15".parse::<PageSize>().is_err());
        assert!("abc".parse::<PageSize>().is_err());
        assert!(PageSize::new(0).is_none());
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page("3").unwrap(), 3);
        assert!(parse_page("0").is_err());
        assert!(parse_page("-2").is_err());
        assert!(parse_page("").is_err());
    }
}
