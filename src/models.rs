//! Frontend Models
//!
//! Data structures matching the content API payload.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::query::ListResult;

/// Idea identifier (the API is not consistent about number vs string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum IdeaId {
    Number(u64),
    Text(String),
}

/// Idea data structure (matches API)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Idea {
    pub id: IdeaId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub published_at: String,
    /// Kept as raw JSON: the API sends `{data: {url}}`, `[]` or nothing
    #[serde(default)]
    pub small_image: Option<Value>,
    #[serde(default)]
    pub medium_image: Option<Value>,
}

impl Idea {
    pub fn small_image_path(&self) -> Option<&str> {
        image_path(self.small_image.as_ref())
    }

    pub fn medium_image_path(&self) -> Option<&str> {
        image_path(self.medium_image.as_ref())
    }

    /// Publication date for display, raw value if it cannot be parsed
    pub fn published_label(&self) -> String {
        format_published_date(&self.published_at)
    }
}

/// Missing and `null` strings both read as ""
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{ "data": { "url": "..." } }` -> url, when it is a non-empty string
fn image_path(field: Option<&Value>) -> Option<&str> {
    field?
        .get("data")?
        .get("url")?
        .as_str()
        .filter(|url| !url.is_empty())
}

pub fn format_published_date(raw: &str) -> String {
    const DISPLAY: &str = "%-d %B %Y";
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DISPLAY).to_string();
    }
    raw.to_string()
}

/// `GET /api/ideas` response body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdeasResponse {
    #[serde(default)]
    pub data: Vec<Idea>,
    #[serde(default)]
    pub meta: Option<ResponseMeta>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMeta {
    #[serde(default)]
    pub total: Option<u64>,
}

impl From<IdeasResponse> for ListResult {
    fn from(response: IdeasResponse) -> Self {
        let total_items = response.meta.and_then(|meta| meta.total).unwrap_or(0);
        ListResult {
            items: response.data,
            total_items,
        }
    }
}
