//! Image Resolution
//!
//! Picks the card image for an idea: small, then medium, then a placeholder.

use crate::config::ApiConfig;
use crate::models::Idea;

pub const PLACEHOLDER_TEXT: &str = "Image not available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    Placeholder,
}

pub fn resolve_image(idea: &Idea, api: &ApiConfig) -> ImageSource {
    idea.small_image_path()
        .or_else(|| idea.medium_image_path())
        .map(|path| ImageSource::Url(api.asset_url(path)))
        .unwrap_or(ImageSource::Placeholder)
}
