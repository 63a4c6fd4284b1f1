//! Pagination Bar Component
//!
//! First/prev, a sliding window of page numbers, next/last.

use leptos::prelude::*;

use crate::pagination::Pagination;
use crate::store::{store_set_page, use_ideas_store, IdeasStateStoreFields};

fn nav_class(disabled: bool) -> &'static str {
    if disabled {
        "page-btn disabled"
    } else {
        "page-btn"
    }
}

#[component]
pub fn PaginationBar() -> impl IntoView {
    let store = use_ideas_store();

    let pager = Memo::new(move |_| {
        let query = store.query().get();
        let total_pages = query.total_pages(store.total_items().get());
        Pagination::new(query.page(), total_pages)
    });

    let go = move |target: Option<u32>| {
        if let Some(page) = target {
            store_set_page(&store, page);
        }
    };

    view! {
        <div class="pagination">
            <button
                class=move || nav_class(pager.get().first_disabled())
                disabled=move || pager.get().first_disabled()
                on:click=move |_| go(pager.get_untracked().first())
            >
                "«"
            </button>
            <button
                class=move || nav_class(pager.get().prev_disabled())
                disabled=move || pager.get().prev_disabled()
                on:click=move |_| go(pager.get_untracked().prev())
            >
                "‹"
            </button>

            <For
                each=move || pager.get().numbered_pages()
                key=|n| *n
                children=move |n| {
                    let page_class = move || {
                        if pager.get().is_active(n) { "page-btn number active" } else { "page-btn number" }
                    };
                    view! {
                        <button class=page_class on:click=move |_| go(Some(n))>
                            {n}
                        </button>
                    }
                }
            />

            <button
                class=move || nav_class(pager.get().next_disabled())
                disabled=move || pager.get().next_disabled()
                on:click=move |_| go(pager.get_untracked().next())
            >
                "›"
            </button>
            <button
                class=move || nav_class(pager.get().last_disabled())
                disabled=move || pager.get().last_disabled()
                on:click=move |_| go(pager.get_untracked().last())
            >
                "»"
            </button>
        </div>
    }
}
