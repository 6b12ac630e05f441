/// Environment variable pointing at a configuration file.
pub const CONFIG_PATH_ENV: &str = "WHEREAMI_CONFIG_PATH";

/// Prefix of environment variables overriding single settings,
/// e.g. `WHEREAMI__CONSENSUS__QUORUM=2`.
pub const ENV_PREFIX: &str = "WHEREAMI";
pub const ENV_SEPARATOR: &str = "__";

/// Default settings
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_QUORUM: usize = 3;
pub const DEFAULT_PAUSE_SECS: u64 = 1;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("whereami/", env!("CARGO_PKG_VERSION"));

/// Example configuration
pub const DEFAULT_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "warn"

[consensus]
# Number of providers that must report the same address
quorum = 3
# Seconds to wait after a successful lookup
pause_secs = 1

[http]
timeout_secs = 10

[providers]
# Keys of providers to skip: ipinfoio, inetipinfo, inetcluecom, toolpageorg, ipifyorg
disabled = []

# Optional endpoint overrides, keyed by provider
[providers.endpoints]
# ipifyorg = "https://api64.ipify.org?format=json"
"#;

pub fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

pub fn default_quorum() -> usize {
    DEFAULT_QUORUM
}

pub fn default_pause_secs() -> u64 {
    DEFAULT_PAUSE_SECS
}

pub fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

pub fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
