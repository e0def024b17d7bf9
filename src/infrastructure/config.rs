use crate::domain::{config::GlobusConfig, error::{GlobusCliError, GlobusResult}};
use std::fs;
use std::path::{Path, PathBuf};

pub const TRANSFER_TOKEN_ENV: &str = "GLOBUS_CLI_TRANSFER_TOKEN";
pub const TIMER_TOKEN_ENV: &str = "GLOBUS_CLI_TIMER_TOKEN";
pub const TRANSFER_URL_ENV: &str = "GLOBUS_CLI_TRANSFER_URL";
pub const TIMER_URL_ENV: &str = "GLOBUS_CLI_TIMER_URL";

/// Configuration manager
pub struct ConfigManager {
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Use the default per-user configuration file
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Use an explicit configuration file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    /// `~/.config/globus-cli/config.toml`
    fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("globus-cli").join("config.toml"))
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load the configuration file, then apply environment overrides
    pub fn load_config(&self) -> GlobusResult<GlobusConfig> {
        let mut config = match &self.config_path {
            Some(path) if path.exists() => self.load_config_from_path(path)?,
            Some(path) => {
                tracing::debug!(path = %path.display(), "no configuration file, using defaults");
                GlobusConfig::default()
            }
            None => GlobusConfig::default(),
        };

        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> GlobusResult<GlobusConfig> {
        let content = fs::read_to_string(path).map_err(|e| GlobusCliError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| GlobusCliError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment values win over the configuration file; blank values are ignored
pub fn apply_env_overrides<F>(config: &mut GlobusConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| env(key).filter(|value| !value.trim().is_empty());

    if let Some(token) = get(TRANSFER_TOKEN_ENV) {
        config.tokens.transfer_access_token = Some(token);
    }
    if let Some(token) = get(TIMER_TOKEN_ENV) {
        config.tokens.timer_access_token = Some(token);
    }
    if let Some(url) = get(TRANSFER_URL_ENV) {
        config.environment.transfer_url = url;
    }
    if let Some(url) = get(TIMER_URL_ENV) {
        config.environment.timer_url = url;
    }
}
