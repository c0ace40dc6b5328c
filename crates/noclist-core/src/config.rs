use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Retry parameters (optional `[retry]` section in config.toml).
///
/// The strategy itself is fixed: a bounded number of attempts with the same
/// delay between each of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts per stage (including the first).
    pub max_attempts: u32,
    /// Delay between attempts in seconds (e.g. 0.25 = 250ms).
    pub backoff_secs: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_secs: 1.0,
        }
    }
}

impl RetryConfig {
    pub fn backoff(&self) -> Duration {
        Duration::from_secs_f64(self.backoff_secs)
    }
}

/// Client configuration loaded from `~/.config/noclist/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NocConfig {
    /// Scheme, host and port of the server, e.g. `http://localhost:8888`.
    pub base_url: String,
    /// Path of the token endpoint.
    pub auth_path: String,
    /// Path of the users endpoint; also the resource bound into the checksum.
    pub users_path: String,
    /// Response header carrying the authentication token.
    pub token_header: String,
    /// Request header carrying the checksum on the users call.
    pub checksum_header: String,
    pub retry: RetryConfig,
}

impl Default for NocConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8888".to_string(),
            auth_path: "/auth".to_string(),
            users_path: "/users".to_string(),
            token_header: "Badsec-Authentication-Token".to_string(),
            checksum_header: "X-Request-Checksum".to_string(),
            retry: RetryConfig::default(),
        }
    }
}

impl NocConfig {
    /// Full URL for an endpoint path on the configured server.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url)
            .with_context(|| format!("invalid base_url {:?}", self.base_url))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            bail!("base_url must be http or https, got {}", parsed.scheme());
        }
        for (name, path) in [("auth_path", &self.auth_path), ("users_path", &self.users_path)] {
            if !path.starts_with('/') {
                bail!("{} must start with '/', got {:?}", name, path);
            }
        }
        if self.token_header.trim().is_empty() {
            bail!("token_header must not be empty");
        }
        if self.checksum_header.trim().is_empty() {
            bail!("checksum_header must not be empty");
        }
        if self.retry.max_attempts == 0 {
            bail!("retry.max_attempts must be at least 1");
        }
        if !self.retry.backoff_secs.is_finite() || self.retry.backoff_secs < 0.0 {
            bail!("retry.backoff_secs must be a non-negative number");
        }
        Ok(())
    }
}

/// Location of an existing config file under the XDG config home, if any.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("noclist")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Parse and validate a config file.
pub fn load_from_path(path: &Path) -> Result<NocConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: NocConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration: the explicit path if given, else the XDG file if it
/// exists, else built-in defaults. Never writes to disk.
pub fn load(explicit: Option<&Path>) -> Result<NocConfig> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }
    match config_path()? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load_from_path(&path)
        }
        None => Ok(NocConfig::default()),
    }
}
