use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Upstream API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API (e.g., "https://api.github.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// User-Agent sent with every request; GitHub rejects requests without one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Accept header (default: "application/vnd.github+json").
    #[serde(default = "default_accept")]
    pub accept: String,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Digit group separator for profile counters (default: ',').
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: char,
}

fn default_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    format!("ghfinder/{}", env!("CARGO_PKG_VERSION"))
}

fn default_accept() -> String {
    "application/vnd.github+json".to_string()
}

fn default_connect_timeout() -> u32 {
    10
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_thousands_separator() -> char {
    ','
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            accept: default_accept(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            thousands_separator: default_thousands_separator(),
        }
    }
}
