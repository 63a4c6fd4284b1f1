//! List Toolbar Component
//!
//! Visible range summary plus page size and sort selectors.

use leptos::prelude::*;

use crate::query::{PageSize, SortOrder};
use crate::store::{store_set_page_size, store_set_sort, use_ideas_store, IdeasStateStoreFields};

#[component]
pub fn ListToolbar() -> impl IntoView {
    let store = use_ideas_store();

    let summary = move || {
        let total = store.total_items().get();
        let (start, end) = store.query().get().visible_range(total);
        format!("Showing {} – {} of {}", start, end, total)
    };

    let on_size_change = move |ev: web_sys::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<PageSize>() {
            store_set_page_size(&store, size);
        }
    };

    let on_sort_change = move |ev: web_sys::Event| {
        if let Ok(sort) = event_target_value(&ev).parse::<SortOrder>() {
            store_set_sort(&store, sort);
        }
    };

    view! {
        <div class="list-toolbar">
            <div class="list-summary">{summary}</div>
            <div class="list-controls">
                <label>"Show per page:"</label>
                <select class="control-select" on:change=on_size_change>
                    {PageSize::OPTIONS
                        .iter()
                        .map(|&n| {
                            let selected = move || store.query().get().page_size().get() == n;
                            view! { <option value=n.to_string() prop:selected=selected>{n}</option> }
                        })
                        .collect_view()}
                </select>
                <label>"Sort by:"</label>
                <select class="control-select" on:change=on_sort_change>
                    {SortOrder::ALL
                        .iter()
                        .map(|&order| {
                            let selected = move || store.query().get().sort() == order;
                            view! { <option value=order.as_param() prop:selected=selected>{order.label()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
