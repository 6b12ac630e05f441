// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("Quorum must be greater than 0")]
    ZeroQuorum,
    #[error("HTTP timeout must be greater than 0, got {0}")]
    InvalidTimeout(u64),
    #[error("Unknown provider '{0}'")]
    UnknownProvider(String),
    #[error("No providers are enabled")]
    NoProvidersEnabled,
}
