//! inet-ip.info, JSON API with GeoIP details.

// Standard library
use std::net::IpAddr;

// 3rd party crates
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

// Project imports
use crate::providers::constants::INETIPINFO_URL;
use crate::providers::functions::{log_response, parse_ip};
use crate::providers::{IpProvider, ProviderError};
use crate::utility::http::http_get;

pub struct InetIpInfo {
    pub endpoint_url: String,
    client: Client,
}

/// Body returned by inet-ip.info.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Response {
    #[serde(default)]
    pub provider: String,
    #[serde(rename = "ipAddress", default)]
    pub ip_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asn: Option<Asn>,
    // GeoIP record, kept only for the debug dump.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Asn {
    #[serde(default)]
    pub autonomous_system_organization: String,
    #[serde(default)]
    pub autonomous_system_number: u32,
}

impl InetIpInfo {
    pub fn new(client: Client) -> Self {
        Self {
            endpoint_url: INETIPINFO_URL.to_string(),
            client,
        }
    }
}

#[async_trait]
impl IpProvider for InetIpInfo {
    async fn get_ip(&self) -> Result<Option<IpAddr>, ProviderError> {
        let body = http_get(&self.client, &self.endpoint_url).await?;

        let mut response: Response =
            serde_json::from_str(&body).map_err(|source| ProviderError::InvalidJson {
                url: self.endpoint_url.clone(),
                body: body.clone(),
                source,
            })?;
        response.provider = self.endpoint_url.clone();
        log_response(&self.endpoint_url, &response);

        Ok(parse_ip(&response.ip_address))
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

    async fn provider_for(server: &mockito::ServerGuard) -> InetIpInfo {
        let mut provider = InetIpInfo::new(create_client(&Http::default()).unwrap());
        provider.set_endpoint(&server.url());
        provider
    }

    #[tokio::test]
    async fn parses_ip_address_field() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_body(
                r#"{
                    "ipAddress": "123.123.123.123",
                    "asn": {
                        "AutonomousSystemNumber": 2516,
                        "AutonomousSystemOrganization": "KDDI CORPORATION"
                    },
                    "city": {"Country": {"IsoCode": "JP"}}
                }"#,
            )
            .create_async()
            .await;

        let ip = provider_for(&server).await.get_ip().await.unwrap();

        assert_eq!(ip, "123.123.123.123".parse().ok());
    }

    #[tokio::test]
    async fn missing_address_is_none() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_body(r#"{"license": "GeoLite2"}"#)
            .create_async()
            .await;

        let ip = provider_for(&server).await.get_ip().await.unwrap();

        assert_eq!(ip, None);
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = provider_for(&server).await.get_ip().await.unwrap_err();

        assert!(matches!(err, ProviderError::InvalidJson { .. }));
        assert!(err.to_string().contains("fail to parse JSON response"));
        assert!(err.to_string().contains("not json"));
    }
}
