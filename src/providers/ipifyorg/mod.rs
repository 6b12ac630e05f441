//! ipify.org, JSON API.
//!
//! Free plan limits: 1000 requests a day or 50,000 a month.

// Standard library
use std::net::IpAddr;

// 3rd party crates
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

// Project imports
use crate::providers::constants::IPIFYORG_URL;
use crate::providers::functions::{log_response, parse_ip};
use crate::providers::{IpProvider, ProviderError};
use crate::utility::http::http_get;

pub struct IpifyOrg {
    pub endpoint_url: String,
    client: Client,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Response {
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub ip: String,
}

impl IpifyOrg {
    pub fn new(client: Client) -> Self {
        Self {
            endpoint_url: IPIFYORG_URL.to_string(),
            client,
        }
    }
}

#[async_trait]
impl IpProvider for IpifyOrg {
    async fn get_ip(&self) -> Result<Option<IpAddr>, ProviderError> {
        let body = http_get(&self.client, &self.endpoint_url).await?;

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
