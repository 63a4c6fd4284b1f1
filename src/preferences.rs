//! Preference Store
//!
//! Persists the list position (page, page size, sort) in browser storage so
//! a reload starts where the user left off.

use crate::query::{parse_page, ListQuery, PageSize, SortOrder};

pub const PAGE_KEY: &str = "page";
pub const PAGE_SIZE_KEY: &str = "pageSize";
pub const SORT_KEY: &str = "sort";

/// String key-value storage
///
/// Read and write failures are swallowed: a missing value means "use default".
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Build the initial query, field by field, from stored values
pub fn load_query(store: &impl PreferenceStore) -> ListQuery {
    let page = store
        .get(PAGE_KEY)
        .and_then(|v| parse_page(&v).ok())
        .unwrap_or(1);
    let page_size = store
        .get(PAGE_SIZE_KEY)
        .and_then(|v| v.parse::<PageSize>().ok())
        .unwrap_or_default();
    let sort = store
        .get(SORT_KEY)
        .and_then(|v| v.parse::<SortOrder>().ok())
        .unwrap_or_default();

    ListQuery::new(page, page_size, sort)
}

/// Mirror the current query into the store
pub fn save_query(store: &impl PreferenceStore, query: &ListQuery) {
    store.set(PAGE_KEY, &query.page().to_string());
    store.set(PAGE_SIZE_KEY, &query.page_size().to_string());
    store.set(SORT_KEY, query.sort().as_param());
}

#[cfg(test)]
pub use memory::MemoryStore;

#[cfg(test)]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::PreferenceStore;

    /// In-memory store for tests
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        pub fn with(entries: &[(&str, &str)]) -> Self {
            let store = Self::default();
            for (key, value) in entries {
                store.set(key, value);
            }
            store
        }
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }
}
