//! # Client configuration: `safepath.toml` + environment
//!
//! Defines where the backend lives and where a native consumer keeps its session.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080/api"   # every resource path is appended to this
//!
//! [session]
//! dir = "/home/me/.local/share/safepath"   # optional; consumers pick a default
//! ```
//!
//! ## Resolution order
//!
//! 1. [`ClientConfig::default`], pointing at a locally running backend.
//! 2. A TOML file, when the consumer passes one to [`ClientConfig::load`].
//! 3. The `SAFEPATH_API_URL` environment variable (a `.env` file is honoured via
//!    `dotenvy`), which always wins for the base URL.
//!
//! All structs derive `Default` so a missing or empty file equals the default
//! configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Environment variable overriding [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "SAFEPATH_API_URL";

/// Top-level configuration stored in `safepath.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address that every request path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Where a native consumer persists its session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory for file-backed session storage. `None` lets the consumer decide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            session: SessionConfig::default(),
        }
    }

    /// Builder method to set the session directory.
    pub fn with_session_dir(mut self, dir: PathBuf) -> Self {
        self.session.dir = Some(dir);
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "safepath.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read an optional TOML file, then apply environment overrides.
    ///
    /// A missing file is not an error; an unreadable or invalid one is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| ApiError::Config(format!("{}: {}", path.display(), e)))?;
                Self::from_toml(&text)
                    .map_err(|e| ApiError::Config(format!("{}: {}", path.display(), e)))?
            }
            Some(path) => {
                tracing::debug!("Config file {} not found, using defaults", path.display());
                Self::default()
            }
            None => Self::default(),
        };

        dotenvy::dotenv().ok();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.api.base_url = url;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert!(config.session.dir.is_none());
        assert_eq!(ClientConfig::from_toml("").unwrap(), config);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("https://safepath.example/api")
            .with_session_dir(PathBuf::from("/tmp/safepath"));
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_partial_toml() {
        let config = ClientConfig::from_toml("[session]\ndir = \"/var/lib/safepath\"\n").unwrap();
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.session.dir, Some(PathBuf::from("/var/lib/safepath")));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ClientConfig::filename());
        std::fs::write(&path, "[api\nbase_url = 1").unwrap();
        assert!(matches!(
            ClientConfig::load(Some(path.as_path())),
            Err(ApiError::Config(_))
        ));
    }
}
