//! Configuration management for the SignalFire CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use signalfire::SignalFireClient;
use std::env;
use std::fs;
use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// SignalFire server URL.
    pub server_url: Option<String>,
    /// Credentials for servers using userpass auth.
    pub auth: Option<AuthConfig>,
}

/// Userpass credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl Config {
    /// Server URL, preferring an explicit override.
    pub fn effective_server_url(&self, server_override: Option<&str>) -> String {
        server_override
            .map(str::to_owned)
            .or_else(|| self.server_url.clone())
            .unwrap_or_else(|| signalfire::client::DEFAULT_BASE_URL.to_owned())
    }
}

/// Get the configuration file path.
pub fn config_path() -> Result<PathBuf> {
    let exe_path = env::current_exe().context("Could not determine executable path")?;
    let exe_dir = exe_path
        .parent()
        .context("Could not determine executable directory")?;

    Ok(exe_dir.join("signalfire.toml"))
}

/// Load configuration from file.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path).context("Failed to read config file")?;

    toml::from_str(&content).context("Failed to parse config file")
}

/// Save configuration to file.
pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;

    fs::write(&path, content).context("Failed to write config file")?;

    Ok(())
}

/// Build a SignalFire client from the current configuration.
pub fn build_client(server_override: Option<&str>) -> Result<SignalFireClient> {
    let config = load_config()?;

    SignalFireClient::builder()
        .base_url(config.effective_server_url(server_override))
        .build()
        .context("Failed to build SignalFire client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_server_url() {
        let config = Config::default();
        assert_eq!(
            config.effective_server_url(None),
            signalfire::client::DEFAULT_BASE_URL
        );

        let config = Config {
            server_url: Some("https://signalfire.ops:11001".into()),
            auth: None,
        };
        assert_eq!(config.effective_server_url(None), "https://signalfire.ops:11001");
        assert_eq!(
            config.effective_server_url(Some("http://localhost:8080")),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str(
            r#"
server_url = "http://10.0.0.4:11001"

[auth]
username = "admin"
password = "password"
"#,
        )
        .unwrap();

        assert_eq!(config.server_url.as_deref(), Some("http://10.0.0.4:11001"));
        assert_eq!(config.auth.map(|a| a.username), Some("admin".to_owned()));
    }
}
