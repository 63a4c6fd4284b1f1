//! Ideas Endpoint
//!
//! `GET /api/ideas` with pagination, sort and image appends.

use reqwest::header::ACCEPT;
use reqwest::Url;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::models::IdeasResponse;
use crate::query::{ListQuery, ListResult};

pub const IDEAS_PATH: &str = "/api/ideas";

/// Image variants requested alongside each idea
pub const IMAGE_APPENDS: [&str; 2] = ["small_image", "medium_image"];

pub fn ideas_url(api: &ApiConfig, query: &ListQuery) -> Result<Url, FetchError> {
    let mut url = Url::parse(&api.endpoint(IDEAS_PATH))
        .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("page[number]", &query.page().to_string());
        pairs.append_pair("page[size]", &query.page_size().to_string());
        pairs.append_pair("sort", query.sort().as_param());
        for append in IMAGE_APPENDS {
            pairs.append_pair("append[]", append);
        }
    }

    Ok(url)
}

/// Fetch one page of ideas
pub async fn fetch_ideas(api: &ApiConfig, query: &ListQuery) -> Result<ListResult, FetchError> {
    let url = ideas_url(api, query)?;

    let response = reqwest::Client::new()
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    parse_ideas_body(&body)
}

pub fn parse_ideas_body(body: &str) -> Result<ListResult, FetchError> {
    let parsed: IdeasResponse = serde_json::from_str(body)?;
    Ok(parsed.into())
}
