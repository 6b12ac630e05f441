// Standard library
use std::time::Duration;

// 3rd party crates
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

// Project imports
use crate::settings::types::Http;

use super::errors::HttpError;

/// Builds the client every provider shares for the lifetime of a run.
pub fn create_client(http: &Http) -> Result<Client, HttpError> {
    Client::builder()
        .timeout(Duration::from_secs(http.timeout_secs))
        .user_agent(http.user_agent.as_str())
        .build()
        .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            HttpError::ClientBuild(e)
        })
}

/// Sends a GET request and returns the response body.
///
/// Anything but `200 OK` is an error which carries the status and the body.
pub async fn http_get(client: &Client, url: &str) -> Result<String, HttpError> {
    debug!(url = %url, "Sending GET request");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| HttpError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    let body = response.text().await.map_err(|source| HttpError::Body {
        url: url.to_string(),
        source,
    })?;

    if status != StatusCode::OK {
        return Err(HttpError::Status {
            url: url.to_string(),
            status,
            body,
        });
    }

    debug!(url = %url, bytes = body.len(), "Received response");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> Client {
        create_client(&Http::default()).expect("client")
    }

    #[tokio::test]
    async fn returns_body_on_ok() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_body("203.0.113.7")
            .create_async()
            .await;

        let body = http_get(&test_client(), &server.url()).await.unwrap();

        assert_eq!(body, "203.0.113.7");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_ok_status_carries_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(503)
            .with_body("maintenance")
            .create_async()
            .await;

        let err = http_get(&test_client(), &server.url()).await.unwrap_err();

        match &err {
            HttpError::Status { status, body, .. } => {
                assert_eq!(*status, StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_request_error() {
        let err = http_get(&test_client(), "http://127.0.0.1:1/")
            .await
            .unwrap_err();

        assert!(matches!(err, HttpError::Request { .. }));
    }
}
