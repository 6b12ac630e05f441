//! ipinfo.io, JSON API.

// Standard library
use std::net::IpAddr;

// 3rd party crates
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

// Project imports
use crate::providers::constants::IPINFOIO_URL;
use crate::providers::functions::{log_response, parse_ip};
use crate::providers::{IpProvider, ProviderError};
use crate::utility::http::http_get;

pub struct IpInfoIo {
    pub endpoint_url: String,
    client: Client,
}

/// Body returned by ipinfo.io.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Response {
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "loc", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "org", default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(rename = "postal", default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl IpInfoIo {
    pub fn new(client: Client) -> Self {
        Self {
            endpoint_url: IPINFOIO_URL.to_string(),
            client,
        }
    }
}

#[async_trait]
impl IpProvider for IpInfoIo {
    async fn get_ip(&self) -> Result<Option<IpAddr>, ProviderError> {
        let body = http_get(&self.client, &self.endpoint_url).await?;

        // A body which is not JSON simply yields no address.
        let mut response: Response = serde_json::from_str(&body).unwrap_or_default();
        response.provider = self.endpoint_url.clone();
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
