//! UI Components
//!
//! Leptos components for the Ideas page.

mod site_header;
mod parallax_banner;
mod list_toolbar;
mod idea_card;
mod pagination_bar;

pub use site_header::SiteHeader;
pub use parallax_banner::ParallaxBanner;
pub use list_toolbar::ListToolbar;
pub use idea_card::IdeaCard;
pub use pagination_bar::PaginationBar;
