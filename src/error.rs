//! Error Types

use thiserror::Error;

/// Failure to parse a persisted or user-supplied query value
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid page number '{0}'")]
    Page(String),

    #[error("unsupported page size '{0}'")]
    PageSize(String),

    #[error("unknown sort key '{0}'")]
    SortKey(String),
}

/// Failure while fetching a page of ideas
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
