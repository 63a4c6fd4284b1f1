//! Ideas List App
//!
//! Sticky header, parallax banner, and the paginated card grid.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_scroll::{bind_window_scroll, create_scroll_signals};
use reactive_stores::Store;

use crate::api;
use crate::components::{IdeaCard, ListToolbar, PaginationBar, ParallaxBanner, SiteHeader};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::preferences::{load_query, save_query, BrowserStorage};
use crate::store::{store_apply_if_current, FetchOutcome, IdeasState, IdeasStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let prefs = BrowserStorage;

    // State
    let store = Store::new(IdeasState::new(load_query(&prefs)));
    let ctx = AppContext::new(ApiConfig::from_build_env());
    let scroll = create_scroll_signals();

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    bind_window_scroll(scroll);

    // Persist and refetch whenever page, size or sort changes
    Effect::new(move |_| {
        let query = store.query().get();
        save_query(&prefs, &query);

        let Some(ticket) = ctx.begin_request() else {
            return;
        };
        let api_config = ctx.api();
        web_sys::console::log_1(
            &format!(
                "[IdeasList] Fetching page {} (size {}, sort {})",
                query.page(),
                query.page_size(),
                query.sort()
            )
            .into(),
        );

        spawn_local(async move {
            let fetched = api::fetch_ideas(&api_config, &query).await;
            match store_apply_if_current(&store, &ctx, ticket, fetched) {
                FetchOutcome::Applied { count, total_items } => {
                    web_sys::console::log_1(
                        &format!("[IdeasList] Loaded {} ideas, {} total", count, total_items).into(),
                    );
                }
                FetchOutcome::Stale => {
                    web_sys::console::log_1(
                        &format!("[IdeasList] Dropping stale response for page {}", query.page()).into(),
                    );
                }
                FetchOutcome::Failed(e) => {
                    web_sys::console::error_1(&format!("[IdeasList] Error fetching ideas: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="page">
            <SiteHeader visible=scroll.header_visible_read />

            <ParallaxBanner scroll_y=scroll.scroll_y_read />

            <main class="content">
                <ListToolbar />

                <div class="idea-grid">
                    <For
                        each=move || store.ideas().get()
                        key=|idea| idea.id.clone()
                        children=move |idea| view! { <IdeaCard idea=idea /> }
                    />
                </div>

                <PaginationBar />
            </main>
        </div>
    }
}
