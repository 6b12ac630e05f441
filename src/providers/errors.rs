// 3rd party crates
use thiserror::Error;

// Project imports
use crate::utility::http::HttpError;

/// Custom error type for IP provider lookups.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("fail to parse JSON response from {url}: {source}\n{body}")]
    InvalidJson {
        url: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}
