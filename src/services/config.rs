use crate::domain::constants::{DEFAULT_MAIL_RECIPIENT, DEFAULT_REQUEST_TIMEOUT_MS};
use serde::Deserialize;
use std::path::Path;

pub const ENDPOINT_ENV: &str = "CONNOISSEUR_ORDER_ENDPOINT";

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub orders: OrdersConfig,
}

#[derive(Debug, Deserialize)]
pub struct OrdersConfig {
    /// Where completed checkouts are sent. Unset disables order sync.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_mail_recipient")]
    pub mail_recipient: String,
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_ms: default_timeout_ms(),
            mail_recipient: default_mail_recipient(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

fn default_mail_recipient() -> String {
    DEFAULT_MAIL_RECIPIENT.to_string()
}

pub fn load_config(dir: &Path) -> anyhow::Result<ConfigFile> {
    let path = dir.join("config.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// CLI flag, then environment, then config file. A blank value at the
/// winning level disables order sync.
pub fn resolve_endpoint(
    flag: Option<&str>,
    env: Option<String>,
    file: &ConfigFile,
) -> Option<String> {
    flag.map(str::to_string)
        .or(env)
        .or_else(|| file.orders.endpoint.clone())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
