//! Sticky Site Header
//!
//! Brand and top navigation. Slides out of view while scrolling down.

use leptos::prelude::*;

pub const NAV_ITEMS: [&str; 6] = ["Work", "About", "Services", "Ideas", "Careers", "Contact"];
pub const ACTIVE_NAV: &str = "Ideas";

#[component]
pub fn SiteHeader(visible: ReadSignal<bool>) -> impl IntoView {
    let header_class = move || {
        if visible.get() {
            "site-header"
        } else {
            "site-header hidden"
        }
    };

    view! {
        <header class=header_class>
            <div class="site-header-inner">
                <div class="brand">"Suitmedia"</div>
                <nav class="site-nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|menu| {
                            let class = if *menu == ACTIVE_NAV { "nav-link active" } else { "nav-link" };
                            view! { <a href="#" class=class>{*menu}</a> }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
