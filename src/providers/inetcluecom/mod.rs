//! inetclue.com, plain HTML page. The address is scraped out of the markup.

// Standard library
use std::net::IpAddr;
use std::sync::LazyLock;

// 3rd party crates
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::Serialize;

// Project imports
use crate::providers::constants::INETCLUECOM_URL;
use crate::providers::functions::{log_response, parse_ip};
use crate::providers::{IpProvider, ProviderError};
use crate::utility::http::http_get;
use crate::utility::normalizer::normalize_ipv4;

static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)){3}")
        .expect("IPv4 pattern is valid")
});

pub struct InetClueCom {
    pub endpoint_url: String,
    client: Client,
}

#[derive(Debug, Default, Serialize)]
pub struct Response {
    pub provider: String,
    #[serde(rename = "origin")]
    pub ip: String,
}

/// Returns the first IPv4 address found in `html`, zero padding trimmed.
/// Returns an empty string when there is none.
pub fn scrape_ipv4(html: &str) -> String {
    let found = IPV4_PATTERN
        .find(html)
        .map(|m| m.as_str())
        .unwrap_or_default();

    normalize_ipv4(found)
}

impl InetClueCom {
    pub fn new(client: Client) -> Self {
        Self {
            endpoint_url: INETCLUECOM_URL.to_string(),
            client,
        }
    }
}

#[async_trait]
impl IpProvider for InetClueCom {
    async fn get_ip(&self) -> Result<Option<IpAddr>, ProviderError> {
        let body = http_get(&self.client, &self.endpoint_url).await?;

        let response = Response {
            provider: self.endpoint_url.clone(),
            ip: scrape_ipv4(&body),
        };
        log_response(&self.endpoint_url, &response);

        Ok(parse_ip(&response.ip))
    }

    fn name(&self) -> &str {
        &self.endpoint_url
    }

    fn set_endpoint(&mut self, url: &str) {
        self.endpoint_url = url.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::types::Http;
    use crate::utility::http::create_client;

    #[test]
    fn scrape_finds_first_address() {
        let html = r#"<p>Your IP: <b>123.123.123.123</b></p><p>proxy 10.0.0.1</p>"#;
        assert_eq!(scrape_ipv4(html), "123.123.123.123");
    }

    #[test]
    fn scrape_trims_zero_padding() {
        assert_eq!(scrape_ipv4("IP: 001.010.100.101"), "1.10.100.101");
    }

    #[test]
    fn scrape_without_address_is_empty() {
        assert_eq!(scrape_ipv4("<html>nothing here</html>"), "");
    }

    #[tokio::test]
    async fn get_ip_scrapes_the_page() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_body("<html><body><h1>Your IP is 203.0.113.7</h1></body></html>")
            .create_async()
            .await;

        let mut provider = InetClueCom::new(create_client(&Http::default()).unwrap());
        provider.set_endpoint(&server.url());

        assert_eq!(provider.get_ip().await.unwrap(), "203.0.113.7".parse().ok());
    }
}
