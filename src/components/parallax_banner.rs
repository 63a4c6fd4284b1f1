//! Parallax Banner Component

use leptos::prelude::*;
use leptos_scroll::parallax_offset;

pub const BANNER_IMAGE: &str = "/images/header-ideas.jpg";

#[component]
pub fn ParallaxBanner(scroll_y: ReadSignal<f64>) -> impl IntoView {
    let transform = move || format!("translateY({}px)", parallax_offset(scroll_y.get()));

    view! {
        <div
            class="banner"
            style:background-image=format!("url({})", BANNER_IMAGE)
            style:transform=transform
        >
            <div class="banner-overlay">
                <h1>"Ideas"</h1>
                <p>"Where all our great things begin."</p>
            </div>
            <div class="banner-slant"></div>
        </div>
    }
}
