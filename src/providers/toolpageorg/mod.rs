//! en.toolpage.org, HTML page with a key/value table.

// Standard library
use std::net::IpAddr;
use std::sync::LazyLock;

// 3rd party crates
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::Serialize;

// Project imports
use crate::providers::constants::TOOLPAGEORG_URL;
use crate::providers::functions::{log_response, parse_ip};
use crate::providers::{IpProvider, ProviderError};
use crate::utility::http::http_get;
use crate::utility::normalizer::normalize_ipv4;

// A cell carrying the `outputTableKey` class followed by its value cell.
static TABLE_ROW_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<td[^>]*\bclass="[^"]*\boutputTableKey\b[^"]*"[^>]*>(.*?)</td>\s*<td[^>]*>(.*?)</td>"#,
    )
    .expect("table row pattern is valid")
});

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Text content of a cell, markup removed.
fn cell_text(cell: &str) -> String {
    TAG_PATTERN.replace_all(cell, "").trim().to_string()
}

pub struct ToolPageOrg {
    pub endpoint_url: String,
    client: Client,
}

#[derive(Debug, Default, Serialize)]
pub struct Response {
    pub provider: String,
    pub ip: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hostname: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ip_version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub remote_port: String,
}

impl Response {
    /// Reads the output table of the page. Unknown keys are ignored.
    pub fn from_html(provider: &str, html: &str) -> Self {
        let mut response = Response {
            provider: provider.to_string(),
            ..Default::default()
        };

        for row in TABLE_ROW_PATTERN.captures_iter(html) {
            let value = cell_text(&row[2]);
            match cell_text(&row[1]).as_str() {
                "IP Address:" => response.ip = value,
                "Host Name:" => response.hostname = value,
                "IP Version:" => response.ip_version = value,
                "Remote Port:" => response.remote_port = value,
                _ => {}
            }
        }

        response
    }
}

impl ToolPageOrg {
    pub fn new(client: Client) -> Self {
        Self {
            endpoint_url: TOOLPAGEORG_URL.to_string(),
            client,
        }
    }
}

#[async_trait]
impl IpProvider for ToolPageOrg {
    async fn get_ip(&self) -> Result<Option<IpAddr>, ProviderError> {
        let body = http_get(&self.client, &self.endpoint_url).await?;

        let response = Response::from_html(&self.endpoint_url, &body);
        log_response(&self.endpoint_url, &response);

        Ok(parse_ip(&normalize_ipv4(&response.ip)))
    }

    fn name(&self) -> &str {
        &self.endpoint_url
    }

    fn set_endpoint(&mut self, url: &str) {
        self.endpoint_url = url.to_string();
    }
}
