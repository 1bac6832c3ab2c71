use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Failed to prepare database directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("History limit must be a positive integer")]
    InvalidLimit,

    #[error("Unknown check status stored in database: {0}")]
    InvalidStatus(String),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Timed out after {timeout:?} fetching {url}")]
    Timeout { url: String, timeout: Duration },

    #[error("HTTP error {status} fetching {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Version string is empty")]
    Empty,

    #[error("Invalid version {version:?}: component {component:?} is not a non-negative integer")]
    InvalidComponent { version: String, component: String },
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("No version found in response from {url}")]
    NoVersionFound { url: String },

    #[error(transparent)]
    InvalidVersion(#[from] VersionError),
}
