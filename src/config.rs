use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Telecare";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Value shipped in `.env` templates. Treated the same as an absent key.
pub const OPENAI_KEY_PLACEHOLDER: &str = "your_openai_api_key_here";

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OPENAI_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot determine home directory; set TELECARE_DB_PATH")]
    NoHomeDir,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "telecare=info,telecare_lib=info,axum=warn"
}

/// Get the application data directory
/// ~/Telecare/ on all platforms
pub fn app_data_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(APP_NAME))
}

/// Default SQLite database location.
pub fn default_db_path() -> Result<PathBuf, ConfigError> {
    Ok(app_data_dir()?.join("telecare.db"))
}

/// Settings for the remote text-generation strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl RemoteConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: usable_api_key(api_key),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            timeout_secs: DEFAULT_OPENAI_TIMEOUT_SECS,
        }
    }

    /// The credential, if one is usable. Blank and placeholder keys never reach here.
    pub fn credential(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Full process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub remote: RemoteConfig,
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut remote = RemoteConfig::new(lookup("OPENAI_API_KEY"));
        if let Some(url) = non_blank(lookup("OPENAI_BASE_URL")) {
            remote.base_url = url;
        }
        if let Some(model) = non_blank(lookup("OPENAI_MODEL")) {
            remote.model = model;
        }
        if let Some(raw) = non_blank(lookup("OPENAI_TIMEOUT_SECS")) {
            remote.timeout_secs = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "OPENAI_TIMEOUT_SECS",
                value: raw.clone(),
            })?;
        }

        let raw_addr =
            non_blank(lookup("TELECARE_BIND_ADDR")).unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = raw_addr.parse().map_err(|_| ConfigError::InvalidValue {
            key: "TELECARE_BIND_ADDR",
            value: raw_addr.clone(),
        })?;

        let db_path = match non_blank(lookup("TELECARE_DB_PATH")) {
            Some(path) => PathBuf::from(path),
            None => default_db_path()?,
        };

        Ok(Self {
            remote,
            bind_addr,
            db_path,
        })
    }
}

/// Drop blank and placeholder credentials.
pub fn usable_api_key(raw: Option<String>) -> Option<String> {
    non_blank(raw).filter(|key| key != OPENAI_KEY_PLACEHOLDER)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn app_name_is_telecare() {
        assert_eq!(APP_NAME, "Telecare");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn placeholder_key_is_not_configured() {
        let remote = RemoteConfig::new(Some(OPENAI_KEY_PLACEHOLDER.into()));
        assert!(!remote.is_configured());
        assert!(remote.credential().is_none());
    }

    #[test]
    fn blank_key_is_not_configured() {
        assert!(!RemoteConfig::new(Some("   ".into())).is_configured());
        assert!(!RemoteConfig::new(None).is_configured());
    }

    #[test]
    fn real_key_is_configured() {
        let remote = RemoteConfig::new(Some("sk-test-123".into()));
        assert!(remote.is_configured());
        assert_eq!(remote.credential(), Some("sk-test-123"));
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[("TELECARE_DB_PATH", "/tmp/t.db")]))
            .unwrap();
        assert!(!config.remote.is_configured());
        assert_eq!(config.remote.base_url, DEFAULT_OPENAI_BASE_URL);
        assert_eq!(config.remote.model, DEFAULT_OPENAI_MODEL);
        assert_eq!(config.remote.timeout_secs, DEFAULT_OPENAI_TIMEOUT_SECS);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.db_path, PathBuf::from("/tmp/t.db"));
    }

    #[test]
    fn overrides_are_read() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-live"),
            ("OPENAI_BASE_URL", "http://127.0.0.1:9999"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("OPENAI_TIMEOUT_SECS", "5"),
            ("TELECARE_BIND_ADDR", "0.0.0.0:8080"),
            ("TELECARE_DB_PATH", "/var/lib/telecare.db"),
        ]))
        .unwrap();
        assert_eq!(config.remote.credential(), Some("sk-live"));
        assert_eq!(config.remote.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.remote.model, "gpt-4o-mini");
        assert_eq!(config.remote.timeout_secs, 5);
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("OPENAI_TIMEOUT_SECS", "soon"),
            ("TELECARE_DB_PATH", "/tmp/t.db"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "OPENAI_TIMEOUT_SECS", .. }
        ));
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("TELECARE_BIND_ADDR", "localhost"),
            ("TELECARE_DB_PATH", "/tmp/t.db"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "TELECARE_BIND_ADDR", .. }
        ));
    }
}
