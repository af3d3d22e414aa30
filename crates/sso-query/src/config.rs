//! Configuration for catalog access and query defaults
//!
//! Resolution order: built-in defaults, then a TOML file, then environment
//! variables (`EXTERNAL_TAP_URL`, or `EXTERNAL_INSTANCE_URL` + `TAP_ROUTE`,
//! and `ACCESS_TOKEN`).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::query::JoinTarget;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SsoConfig {
    /// TAP service configuration
    #[serde(default)]
    pub tap: TapConfig,
    /// Query defaults
    #[serde(default)]
    pub query: QueryDefaults,
}

/// TAP service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TapConfig {
    /// Service base URL (endpoints `/async`, `/sync` hang off it)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token for the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// HTTP request timeout in seconds (per request, not per job)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Delay between job phase polls in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Result serialization requested from the service
    #[serde(default = "default_response_format")]
    pub response_format: String,
}

fn default_base_url() -> String {
    "https://data.lsst.cloud/api/ssotap".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_response_format() -> String {
    "csv".to_string()
}

/// Route appended to `EXTERNAL_INSTANCE_URL` when `TAP_ROUTE` is unset
pub const DEFAULT_TAP_ROUTE: &str = "/api/ssotap";

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
            poll_interval_ms: default_poll_interval_ms(),
            response_format: default_response_format(),
        }
    }
}

impl TapConfig {
    /// Poll interval as a Duration
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.poll_interval_ms)
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

/// Defaults applied to queries that don't specify them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryDefaults {
    /// Catalog schema holding `MPCORB` (e.g. "dp03_catalogs_10yr")
    #[serde(default = "default_catalog")]
    pub catalog: String,
    /// Table to join when none is requested
    #[serde(default)]
    pub join: Option<JoinTarget>,
    /// Row limit when none is requested
    #[serde(default)]
    pub limit: Option<u64>,
}

fn default_catalog() -> String {
    "dp03_catalogs_10yr".to_string()
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            join: None,
            limit: None,
        }
    }
}

impl SsoConfig {
    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let config: SsoConfig = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Default config file location (`<config dir>/sso-query/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sso-query").join("config.toml"))
    }

    /// Defaults, overlaid with `path` (or the default file if present), then the environment
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => {
                    tracing::debug!("Loading config from {}", path.display());
                    Self::load(path)?
                }
                None => Self::default(),
            },
        };
        config.apply_env();
        Ok(config)
    }

    /// Overlay service URL and token from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Overlay service URL and token from a variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty("EXTERNAL_TAP_URL") {
            self.tap.base_url = url.trim_end_matches('/').to_string();
        } else if let Some(instance) = non_empty("EXTERNAL_INSTANCE_URL") {
            let route = non_empty("TAP_ROUTE").unwrap_or_else(|| DEFAULT_TAP_ROUTE.to_string());
            self.tap.base_url = format!(
                "{}/{}",
                instance.trim_end_matches('/'),
                route.trim_start_matches('/').trim_end_matches('/')
            );
        }

        if let Some(token) = non_empty("ACCESS_TOKEN") {
            self.tap.access_token = Some(token);
        }
    }

    /// Whether the resolved service is reachable with credentials
    ///
    /// Requires an `https://` URL and a Gafaelfawr token (`gt-` prefix).
    pub fn check_access(&self) -> bool {
        self.tap.base_url.starts_with("https://")
            && self
                .tap
                .access_token
                .as_deref()
                .is_some_and(|token| token.starts_with("gt-"))
    }

    fn validate(&self) -> Result<()> {
        if self.tap.base_url.trim().is_empty() {
            return Err(Error::config("tap.base_url must not be empty"));
        }
        if self.tap.timeout_secs == 0 {
            return Err(Error::config("tap.timeout_secs must be positive"));
        }
        if self.query.limit == Some(0) {
            return Err(Error::config("query.limit must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SsoConfig::default();
        assert_eq!(config.query.catalog, "dp03_catalogs_10yr");
        assert_eq!(config.tap.response_format, "csv");
        assert!(config.tap.access_token.is_none());
        assert!(!config.check_access());
    }

    #[test]
    fn test_instance_url_and_route() {
        let mut config = SsoConfig::default();
        config.apply_env_from(env(&[
            ("EXTERNAL_INSTANCE_URL", "https://shout.at.cloud.com/"),
            ("ACCESS_TOKEN", "gt-letmein"),
            ("TAP_ROUTE", "/api/tap"),
        ]));
        assert_eq!(config.tap.base_url, "https://shout.at.cloud.com/api/tap");
        assert!(config.check_access());
    }

    #[test]
    fn test_tap_url_wins() {
        let mut config = SsoConfig::default();
        config.apply_env_from(env(&[
            ("EXTERNAL_TAP_URL", "https://shout.at.cloud.com/api/tap"),
            ("EXTERNAL_INSTANCE_URL", "https://elsewhere.example/"),
            ("ACCESS_TOKEN", "gt-letmein"),
        ]));
        assert_eq!(config.tap.base_url, "https://shout.at.cloud.com/api/tap");
        assert!(config.check_access());
    }

    #[test]
    fn test_no_token_no_access() {
        let mut config = SsoConfig::default();
        config.apply_env_from(env(&[
            ("EXTERNAL_INSTANCE_URL", "https://shout.at.cloud.com/"),
            ("TAP_ROUTE", "/api/tap"),
        ]));
        assert!(!config.check_access());

        config.tap.access_token = Some("letmein".to_string());
        assert!(!config.check_access());
    }

    #[test]
    fn test_http_url_no_access() {
        let mut config = SsoConfig::default();
        config.apply_env_from(env(&[
            ("EXTERNAL_TAP_URL", "http://localhost:8080/tap"),
            ("ACCESS_TOKEN", "gt-letmein"),
        ]));
        assert!(!config.check_access());
    }

    #[test]
    fn test_load_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[tap]
base_url = "https://example.org/tap"
poll_interval_ms = 250

[query]
catalog = "dp1_catalogs_10yr"
join = "SSObject"
limit = 1000
"#
        )
        .unwrap();

        let config = SsoConfig::load(file.path()).unwrap();
        assert_eq!(config.tap.base_url, "https://example.org/tap");
        assert_eq!(config.tap.poll_interval_ms, 250);
        assert_eq!(config.tap.timeout_secs, 300);
        assert_eq!(config.query.catalog, "dp1_catalogs_10yr");
        assert_eq!(config.query.join, Some(JoinTarget::SsObject));
        assert_eq!(config.query.limit, Some(1000));
    }

    #[test]
    fn test_load_rejects_zero_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[query]\nlimit = 0").unwrap();
        assert!(matches!(SsoConfig::load(file.path()), Err(Error::Config(_))));
    }
}
