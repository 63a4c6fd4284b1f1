//! List View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::RequestTicket;
use crate::context::AppContext;
use crate::error::FetchError;
use crate::models::Idea;
use crate::query::{ListQuery, ListResult, PageSize, SortOrder};

/// Ideas list state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct IdeasState {
    /// Ideas on the current page
    pub ideas: Vec<Idea>,
    /// Server-reported total across all pages
    pub total_items: u64,
    /// Page, size and sort; any change triggers a fetch
    pub query: ListQuery,
}

impl IdeasState {
    pub fn new(query: ListQuery) -> Self {
        Self {
            query,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type IdeasStore = Store<IdeasState>;

/// Get the ideas store from context
pub fn use_ideas_store() -> IdeasStore {
    expect_context::<IdeasStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the current page wholesale
pub fn store_apply_result(store: &IdeasStore, result: ListResult) {
    store.ideas().set(result.items);
    store.total_items().set(result.total_items);
}

/// What happened to a finished fetch
#[derive(Debug)]
pub enum FetchOutcome {
    Applied { count: usize, total_items: u64 },
    /// A newer request was issued meanwhile
    Stale,
    Failed(FetchError),
}

/// Apply a finished fetch only if it is the latest request.
/// Stale results and errors leave the current page as it is.
pub fn store_apply_if_current(
    store: &IdeasStore,
    ctx: &AppContext,
    ticket: RequestTicket,
    fetched: Result<ListResult, FetchError>,
) -> FetchOutcome {
    match fetched {
        Ok(result) if ctx.is_current(ticket) => {
            let outcome = FetchOutcome::Applied {
                count: result.items.len(),
                total_items: result.total_items,
            };
            store_apply_result(store, result);
            outcome
        }
        Ok(_) => FetchOutcome::Stale,
        Err(e) => FetchOutcome::Failed(e),
    }
}

pub fn store_set_page(store: &IdeasStore, page: u32) {
    store.query().update(|q| q.set_page(page));
}

/// Also resets to page 1
pub fn store_set_page_size(store: &IdeasStore, page_size: PageSize) {
    store.query().update(|q| q.set_page_size(page_size));
}

/// Also resets to page 1
pub fn store_set_sort(store: &IdeasStore, sort: SortOrder) {
    store.query().update(|q| q.set_sort(sort));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::models::IdeaId;

    #[test]
    fn test_store_helpers_keep_query_invariant() {
        let owner = Owner::new();
        owner.with(|| {
            let start = ListQuery::new(4, PageSize::default(), SortOrder::Newest);
            let store = Store::new(IdeasState::new(start));

            store_set_page(&store, 6);
            assert_eq!(store.query().get_untracked().page(), 6);

            store_set_page_size(&store, PageSize::new(50).unwrap());
            assert_eq!(store.query().get_untracked().page(), 1);

            store_set_page(&store, 2);
            store_set_sort(&store, SortOrder::Oldest);
            let query = store.query().get_untracked();
            assert_eq!(query.page(), 1);
            assert_eq!(query.sort(), SortOrder::Oldest);
            assert_eq!(query.page_size().get(), 50);
        });
    }

    fn page_of(ids: &[u64], total_items: u64) -> ListResult {
        let items = ids
            .iter()
            .map(|id| serde_json::from_value(serde_json::json!({"id": id, "title": "t"})).unwrap())
            .collect();
        ListResult { items, total_items }
    }

    #[test]
    fn test_current_fetch_replaces_page() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(IdeasState::default());
            let ctx = AppContext::new(ApiConfig::new("https://x.test"));
            let ticket = ctx.begin_request().unwrap();

            let outcome = store_apply_if_current(&store, &ctx, ticket, Ok(page_of(&[1, 2, 3], 25)));
            assert!(matches!(outcome, FetchOutcome::Applied { count: 3, total_items: 25 }));
            assert_eq!(store.ideas().get_untracked().len(), 3);
            assert_eq!(store.total_items().get_untracked(), 25);
        });
    }

    #[test]
    fn test_stale_fetch_is_dropped() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(IdeasState::default());
            let ctx = AppContext::new(ApiConfig::new("https://x.test"));
            let older = ctx.begin_request().unwrap();
            let newer = ctx.begin_request().unwrap();

            // Newer request resolves first, the older one lands afterwards
            store_apply_if_current(&store, &ctx, newer, Ok(page_of(&[11, 12], 40)));
            let outcome = store_apply_if_current(&store, &ctx, older, Ok(page_of(&[1, 2, 3], 25)));

            assert!(matches!(outcome, FetchOutcome::Stale));
            let ideas = store.ideas().get_untracked();
            assert_eq!(ideas.len(), 2);
            assert_eq!(ideas[0].id, IdeaId::Number(11));
            assert_eq!(store.total_items().get_untracked(), 40);
        });
    }

    #[test]
    fn test_failed_fetch_keeps_previous_page() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(IdeasState::default());
            let ctx = AppContext::new(ApiConfig::new("https://x.test"));
            let first = ctx.begin_request().unwrap();
            store_apply_if_current(&store, &ctx, first, Ok(page_of(&[1, 2], 12)));

            let second = ctx.begin_request().unwrap();
            let outcome = store_apply_if_current(&store, &ctx, second, Err(FetchError::Status(502)));

            assert!(matches!(outcome, FetchOutcome::Failed(FetchError::Status(502))));
            assert_eq!(store.ideas().get_untracked().len(), 2);
            assert_eq!(store.total_items().get_untracked(), 12);
        });
    }

    #[test]
    fn test_apply_result_replaces_page() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(IdeasState::default());
            let ideas: Vec<Idea> = serde_json::from_value(serde_json::json!([
                {"id": 1, "title": "a"},
                {"id": 2, "title": "b"}
            ]))
            .unwrap();

            store_apply_result(&store, ListResult { items: ideas, total_items: 25 });
            assert_eq!(store.ideas().get_untracked().len(), 2);
            assert_eq!(store.total_items().get_untracked(), 25);

            store_apply_result(&store, ListResult::default());
            assert!(store.ideas().get_untracked().is_empty());
            assert_eq!(store.total_items().get_untracked(), 0);
        });
    }
}
