// 3rd party crates
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("HTTP client error: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("failed to GET HTTP request to {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("fail to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("fail to GET response from: {url}\nStatus: {status}\nResponse body: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
}
