// Standard library
use std::net::IpAddr;

// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::ProviderError;

/// Core trait that all IP providers must implement.
/// A provider wraps one third-party "what is my IP" service and reports the
/// public address it observed for the caller.
///
/// # Implementation Requirements
///
/// Implementors must provide:
/// - A single lookup of the public address
/// - A name used in logs and error messages
/// - A way to point the provider at another endpoint
///
/// # Example Implementation
///
/// ```rust,ignore
/// # use async_trait::async_trait;
/// # use std::net::IpAddr;
/// struct Fixed {
///     endpoint_url: String,
/// }
///
/// #[async_trait]
/// impl IpProvider for Fixed {
///     async fn get_ip(&self) -> Result<Option<IpAddr>, ProviderError> {
///         Ok("203.0.113.7".parse().ok())
///     }
///
///     fn name(&self) -> &str {
///         &self.endpoint_url
///     }
///
///     fn set_endpoint(&mut self, url: &str) {
///         self.endpoint_url = url.to_string();
///     }
/// }
/// ```
#[async_trait]
pub trait IpProvider: Send + Sync {
    /// Asks the service for the caller's public IP address.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ip))` - The service reported a parsable address
    /// * `Ok(None)` - The service answered but no address could be extracted
    /// * `Err(ProviderError)` - Transport, status or parse failure
    async fn get_ip(&self) -> Result<Option<IpAddr>, ProviderError>;

    /// Gets the provider's name.
    ///
    /// Providers are named after their current endpoint URL, so an
    /// overridden endpoint shows up as such in the logs.
    fn name(&self) -> &str;

    /// Overrides the default endpoint URL.
    fn set_endpoint(&mut self, url: &str);
}
