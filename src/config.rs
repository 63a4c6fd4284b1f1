//! Build-time Configuration
//!
//! `IDEAS_API_BASE` is baked in at compile time. Without it the page talks to
//! its own origin, which is what the dev proxy in `Trunk.toml` expects.

/// Content API location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn from_build_env() -> Self {
        match option_env!("IDEAS_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::new(base),
            _ => Self::new(current_origin().unwrap_or_default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an API path such as `/api/ideas`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Absolute URL of an asset path returned by the API
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }
}

fn current_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
