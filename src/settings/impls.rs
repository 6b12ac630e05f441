// Standard library
use std::path::{Path, PathBuf};
use std::{env, fs};

// 3rd party crates
use config::{Config, ConfigError, Environment, File};
use tracing::{error, info};

// Project imports
use crate::providers::constants::PROVIDER_KEYS;

// Current module imports
use super::constants::{
    default_log_level, default_pause_secs, default_quorum, default_timeout_secs,
    default_user_agent, CONFIG_PATH_ENV, DEFAULT_CONFIG, ENV_PREFIX, ENV_SEPARATOR,
};
use super::errors::ValidationError;
use super::types::{ConfigManager, Consensus, Http, Log, Settings, ValidatedSettings};

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Consensus {
    fn default() -> Self {
        Self {
            quorum: default_quorum(),
            pause_secs: default_pause_secs(),
        }
    }
}

impl Default for Http {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Settings {
    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // Validate log level
        match self.get_log_level().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(ValidationError::InvalidLogLevel(self.log.level.clone())),
        }

        if self.consensus.quorum == 0 {
            return Err(ValidationError::ZeroQuorum);
        }

        if self.http.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout(self.http.timeout_secs));
        }

        // Every referenced provider must exist
        let referenced = self
            .providers
            .disabled
            .iter()
            .chain(self.providers.endpoints.keys());
        for key in referenced {
            if !PROVIDER_KEYS.contains(&key.as_str()) {
                return Err(ValidationError::UnknownProvider(key.clone()));
            }
        }

        let disabled = &self.providers.disabled;
        if PROVIDER_KEYS
            .iter()
            .all(|key| disabled.iter().any(|d| d == key))
        {
            return Err(ValidationError::NoProvidersEnabled);
        }

        Ok(())
    }
}

impl ConfigManager {
    /// Creates a new `ConfigManager` instance by loading and validating the configuration.
    ///
    /// `path` takes precedence over `WHEREAMI_CONFIG_PATH` and the per-user config directory.
    pub fn new(path: Option<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let config_path: PathBuf = match path {
            Some(path) => path,
            None => Self::get_config_path()?,
        };
        Self::ensure_config_file_exists(&config_path)?;

        let settings: Settings = Self::load_settings(&config_path)?;

        // Validate settings before proceeding
        let validated_settings = ValidatedSettings::new(settings).map_err(|e| {
            error!("Configuration validation failed: {}", e);
            e
        })?;

        Ok(ConfigManager {
            settings: validated_settings.into_inner(),
            config_path,
        })
    }

    /// Determines the configuration file path.
    fn get_config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            Ok(PathBuf::from(path))
        } else if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join("whereami").join("config.toml"))
        } else {
            let msg: &str = "Could not determine the configuration directory";
            error!("{}", msg);
            Err(ConfigError::Message(msg.into()))
        }
    }

    /// Ensures that the configuration file exists, creating it if necessary.
    fn ensure_config_file_exists(config_path: &Path) -> Result<(), ConfigError> {
        if !config_path.exists() {
            if let Some(parent_dir) = config_path.parent() {
                fs::create_dir_all(parent_dir).map_err(|e| {
                    let msg: String = format!("Failed to create configuration directory: {}", e);
                    error!("{}", msg);
                    ConfigError::Message(msg)
                })?;
            }
            fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
                let msg: String = format!("Failed to create default configuration file: {}", e);
                error!("{}", msg);
                ConfigError::Message(msg)
            })?;
            info!("Default configuration file created at: {:?}", config_path);
        }
        Ok(())
    }

    /// Loads the settings from the configuration file and environment variables.
    fn load_settings(config_path: &Path) -> Result<Settings, ConfigError> {
        let config_file: &str = config_path.to_str().ok_or_else(|| {
            let msg: &str = "Configuration file path contains invalid UTF-8 characters";
            error!("{}", msg);
            ConfigError::Message(msg.into())
        })?;

        let settings: Config = Config::builder()
            .add_source(File::with_name(config_file))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    pub fn get_log_level(&self) -> String {
        self.settings.get_log_level()
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(ValidatedSettings(settings))
    }

    pub fn into_inner(self) -> Settings {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();

        assert!(settings.validate().is_ok());
        assert_eq!(settings.consensus.quorum, 3);
        assert_eq!(settings.consensus.pause_secs, 1);
        assert_eq!(settings.get_log_level(), "warn");
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut settings = Settings::default();
        settings.log.level = "loud".into();

        assert!(matches!(
            settings.validate(),
            Err(ValidationError::InvalidLogLevel(level)) if level == "loud"
        ));
    }

    #[test]
    fn rejects_zero_quorum_and_timeout() {
        let mut settings = Settings::default();
        settings.consensus.quorum = 0;
        assert!(matches!(settings.validate(), Err(ValidationError::ZeroQuorum)));

        let mut settings = Settings::default();
        settings.http.timeout_secs = 0;
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::InvalidTimeout(0))
        ));
    }

    #[test]
    fn rejects_unknown_provider_keys() {
        let mut settings = Settings::default();
        settings
            .providers
            .endpoints
            .insert("example".into(), "http://localhost/".into());

        assert!(matches!(
            settings.validate(),
            Err(ValidationError::UnknownProvider(key)) if key == "example"
        ));
    }

    #[test]
    fn rejects_disabling_every_provider() {
        let mut settings = Settings::default();
        settings.providers.disabled = PROVIDER_KEYS.iter().map(|key| key.to_string()).collect();

        assert!(matches!(
            settings.validate(),
            Err(ValidationError::NoProvidersEnabled)
        ));

        // one provider left is enough
        settings.providers.disabled.pop();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn loads_settings_from_file() {
        let (_dir, path) = write_config(
            r#"
            [log]
            level = "DEBUG"

            [consensus]
            quorum = 2

            [providers]
            disabled = ["toolpageorg"]

            [providers.endpoints]
            ipifyorg = "http://localhost:8080/"
            "#,
        );

        let manager = ConfigManager::new(Some(path)).unwrap();
        let settings = manager.get_settings();

        assert_eq!(settings.get_log_level(), "debug");
        assert_eq!(settings.consensus.quorum, 2);
        assert_eq!(settings.consensus.pause_secs, 1);
        assert_eq!(settings.http.timeout_secs, 10);
        assert_eq!(settings.providers.disabled, vec!["toolpageorg".to_string()]);
        assert_eq!(
            settings.providers.endpoints.get("ipifyorg").map(String::as_str),
            Some("http://localhost:8080/")
        );
    }

    #[test]
    fn creates_default_file_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let manager = ConfigManager::new(Some(path.clone())).unwrap();

        assert!(path.exists());
        assert_eq!(manager.get_log_level(), "warn");
        assert_eq!(manager.get_settings().consensus.quorum, 3);
    }

    #[test]
    fn invalid_file_is_rejected() {
        let (_dir, path) = write_config("[consensus]\nquorum = 0\n");

        assert!(ConfigManager::new(Some(path)).is_err());
    }
}
