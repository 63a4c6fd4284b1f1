use leptos::prelude::*;

use crate::context::AppContext;
use crate::image::{resolve_image, ImageSource, PLACEHOLDER_TEXT};
use crate::models::Idea;

/// Grid card: image (or placeholder), date and title
#[component]
pub fn IdeaCard(idea: Idea) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let image = resolve_image(&idea, &ctx.api());
    let date = idea.published_label();
    let title = idea.title;
    let tooltip = title.clone();

    let media = match image {
        ImageSource::Url(src) => view! {
            <img class="card-image" src=src alt=title.clone() loading="lazy" />
        }
        .into_any(),
        ImageSource::Placeholder => view! {
            <div class="card-image placeholder">{PLACEHOLDER_TEXT}</div>
        }
        .into_any(),
    };

    view! {
        <div class="idea-card">
            {media}
            <div class="card-date">{date}</div>
            <div class="card-title" title=tooltip>{title}</div>
        </div>
    }
}
