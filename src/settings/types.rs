// Standard library
use std::collections::HashMap;
use std::path::PathBuf;

// 3rd party crates
use serde::Deserialize;

// Current module imports
use super::constants::{
    default_log_level, default_pause_secs, default_quorum, default_timeout_secs,
    default_user_agent,
};

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Consensus {
    /// Number of providers that must agree on the address
    #[serde(default = "default_quorum")]
    pub quorum: usize,
    /// Cool-down after a successful lookup (in seconds)
    #[serde(default = "default_pause_secs")]
    pub pause_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Http {
    /// Per-request timeout (in seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Providers {
    /// Keys of providers which are never queried
    #[serde(default)]
    pub disabled: Vec<String>,
    /// Endpoint URL overrides keyed by provider
    #[serde(default)]
    pub endpoints: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub consensus: Consensus,
    #[serde(default)]
    pub http: Http,
    #[serde(default)]
    pub providers: Providers,
}

/// Settings which passed [`Settings::validate`].
#[derive(Debug)]
pub struct ValidatedSettings(pub(super) Settings);

/// Manages the application settings.
pub struct ConfigManager {
    pub settings: Settings,
    pub config_path: PathBuf,
}
