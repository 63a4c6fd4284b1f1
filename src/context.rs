//! Application Context
//!
//! Shared non-reactive state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::{RequestSequence, RequestTicket};
use crate::config::ApiConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Content API location
    api: StoredValue<ApiConfig>,
    /// Tickets for in-flight fetches
    requests: StoredValue<RequestSequence>,
}

impl AppContext {
    pub fn new(api: ApiConfig) -> Self {
        Self {
            api: StoredValue::new(api),
            requests: StoredValue::new(RequestSequence::default()),
        }
    }

    pub fn api(&self) -> ApiConfig {
        self.api.get_value()
    }

    /// Start a new fetch; older tickets become stale
    ///
    /// `None` once the owning reactive scope has been disposed.
    pub fn begin_request(&self) -> Option<RequestTicket> {
        self.requests.try_update_value(|seq| seq.issue())
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.requests
            .try_with_value(|seq| seq.is_current(ticket))
            .unwrap_or(false)
    }
}
