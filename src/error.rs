use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while turning command line options into a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The dependency name contains characters npm does not allow.
    #[error("Dependency name {0} is not a valid NPM package name.")]
    InvalidDependency(String),

    /// Neither `--token` nor `GITHUB_TOKEN` supplied a credential.
    #[error("No GitHub token provided.")]
    MissingToken,
}

/// Errors raised by the code search client.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} on page {page}: {message}")]
    Api {
        status: StatusCode,
        page: u32,
        message: String,
    },

    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Search(#[from] SearchError),
}
