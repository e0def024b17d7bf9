use serde::{Deserialize, Serialize};

/// Globus CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobusConfig {
    /// Global configuration
    #[serde(default)]
    pub global: GlobalConfig,
    /// Service locations
    #[serde(default)]
    pub environment: EnvironmentConfig,
    /// Access tokens per resource server
    #[serde(default)]
    pub tokens: TokenConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// HTTP request timeout in milliseconds
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

/// Base URLs of the Globus services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default = "default_transfer_url")]
    pub transfer_url: String,
    #[serde(default = "default_timer_url")]
    pub timer_url: String,
}

/// Bearer tokens obtained out of band
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_access_token: Option<String>,
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_timeout() -> u64 {
    30_000
}

fn default_transfer_url() -> String {
    "https://transfer.api.globus.org/v0.10/".to_string()
}

fn default_timer_url() -> String {
    "https://timer.automate.globus.org/".to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            timeout_ms: default_timeout(),
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            transfer_url: default_transfer_url(),
            timer_url: default_timer_url(),
        }
    }
}

impl TokenConfig {
    /// Treats blank tokens as absent
    pub fn transfer(&self) -> Option<&str> {
        non_blank(self.transfer_access_token.as_deref())
    }

    pub fn timer(&self) -> Option<&str> {
        non_blank(self.timer_access_token.as_deref())
    }
}

fn non_blank(token: Option<&str>) -> Option<&str> {
    token.map(str::trim).filter(|t| !t.is_empty())
}
