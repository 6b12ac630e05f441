// Standard library
use std::net::IpAddr;

// 3rd party crates
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

// Project imports
use crate::settings::types::Providers;

use super::constants::{
    INETCLUECOM_KEY, INETIPINFO_KEY, IPIFYORG_KEY, IPINFOIO_KEY, TOOLPAGEORG_KEY,
};
use super::inetcluecom::InetClueCom;
use super::inetipinfo::InetIpInfo;
use super::ipifyorg::IpifyOrg;
use super::ipinfoio::IpInfoIo;
use super::toolpageorg::ToolPageOrg;
use super::traits::IpProvider;

/// Returns every known provider, keyed, with its default endpoint.
///
/// Note that a new provider must be added here to be used.
pub fn get_all(client: &Client) -> Vec<(&'static str, Box<dyn IpProvider>)> {
    vec![
        (IPINFOIO_KEY, Box::new(IpInfoIo::new(client.clone())) as Box<dyn IpProvider>),
        (INETIPINFO_KEY, Box::new(InetIpInfo::new(client.clone())) as Box<dyn IpProvider>),
        (INETCLUECOM_KEY, Box::new(InetClueCom::new(client.clone())) as Box<dyn IpProvider>),
        (TOOLPAGEORG_KEY, Box::new(ToolPageOrg::new(client.clone())) as Box<dyn IpProvider>),
        (IPIFYORG_KEY, Box::new(IpifyOrg::new(client.clone())) as Box<dyn IpProvider>),
    ]
}

/// Builds the provider registry from the settings, skipping disabled
/// providers and applying endpoint overrides.
pub fn build_registry(config: &Providers, client: &Client) -> Vec<Box<dyn IpProvider>> {
    let mut registry: Vec<Box<dyn IpProvider>> = Vec::new();

    for (key, mut provider) in get_all(client) {
        if config.disabled.iter().any(|disabled| disabled == key) {
            debug!(provider = key, "Provider disabled by configuration");
            continue;
        }

        if let Some(url) = config.endpoints.get(key) {
            info!(provider = key, endpoint = %url, "Overriding provider endpoint");
            provider.set_endpoint(url);
        }

        registry.push(provider);
    }

    registry
}

/// Parses the address a provider extracted. Empty or invalid text means no address.
pub(super) fn parse_ip(text: &str) -> Option<IpAddr> {
    text.trim().parse().ok()
}

/// Dumps a provider response as pretty JSON for debugging.
pub(super) fn log_response<T: Serialize>(provider: &str, response: &T) {
    match serde_json::to_string_pretty(response) {
        Ok(json) => debug!(provider = %provider, "Response info:\n{}", json),
        Err(e) => debug!(provider = %provider, "Failed to format response info: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::types::Http;
    use crate::utility::http::create_client;

    fn names(registry: &[Box<dyn IpProvider>]) -> Vec<String> {
        registry.iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn registry_contains_every_provider_by_default() {
        let client = create_client(&Http::default()).unwrap();
        let registry = build_registry(&Providers::default(), &client);

        assert_eq!(
            names(&registry),
            vec![
                "https://ipinfo.io/",
                "https://inet-ip.info/json",
                "http://inetclue.com/",
                "https://en.toolpage.org/tool/ip-address",
                "https://api64.ipify.org?format=json",
            ]
        );
    }

    #[test]
    fn registry_honors_disabled_and_endpoints() {
        let client = create_client(&Http::default()).unwrap();
        let mut config = Providers::default();
        config.disabled = vec![INETCLUECOM_KEY.into(), TOOLPAGEORG_KEY.into()];
        config
            .endpoints
            .insert(IPIFYORG_KEY.into(), "http://127.0.0.1:8080/".into());

        let registry = build_registry(&config, &client);

        assert_eq!(
            names(&registry),
            vec![
                "https://ipinfo.io/",
                "https://inet-ip.info/json",
                "http://127.0.0.1:8080/",
            ]
        );
    }

    #[test]
    fn parse_ip_accepts_v4_and_v6_only() {
        assert_eq!(parse_ip(" 203.0.113.7\n"), "203.0.113.7".parse().ok());
        assert_eq!(parse_ip("2001:db8::1"), "2001:db8::1".parse().ok());
        assert_eq!(parse_ip(""), None);
        assert_eq!(parse_ip("not an ip"), None);
    }
}
