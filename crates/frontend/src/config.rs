//! Application configuration

use certportal_core::credentials::FileCredentialStore;
use certportal_http::client::{DEFAULT_BASE_URL, PortalClient};
use certportal_http::error::ClientError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend API configuration
    pub api: ApiConfig,

    /// Credential persistence configuration
    pub storage: StorageConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend API
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Override for the client's User-Agent header
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// Credential persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the persisted credential document
    pub credentials_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            credentials_file: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("certportal")
                .join("credentials.json"),
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix("CERTPORTAL"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration with defaults and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let settings = config::Config::builder()
            .set_default("api.base_url", defaults.api.base_url)?
            .set_default("api.timeout_secs", defaults.api.timeout_secs)?
            .set_default(
                "storage.credentials_file",
                defaults.storage.credentials_file.to_string_lossy().to_string(),
            )?
            .add_source(config::Environment::with_prefix("CERTPORTAL"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Build an API client wired to the configured credential store
    pub fn client(&self) -> Result<PortalClient, ClientError> {
        let store = FileCredentialStore::new(&self.storage.credentials_file);
        let mut builder = PortalClient::builder()
            .base_url(self.api.base_url.as_str())
            .timeout(Duration::from_secs(self.api.timeout_secs))
            .credentials(Arc::new(store));
        if let Some(agent) = &self.api.user_agent {
            builder = builder.user_agent(agent.as_str());
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, 30);
        assert!(
            config
                .storage
                .credentials_file
                .ends_with("certportal/credentials.json")
        );
    }

    #[test]
    fn loads_from_a_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("certportal.toml");
        std::fs::write(
            &path,
            r#"
[api]
base_url = "http://10.0.0.5:8000"
timeout_secs = 5

[storage]
credentials_file = "/var/lib/certportal/credentials.json"
"#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(
            config.storage.credentials_file,
            PathBuf::from("/var/lib/certportal/credentials.json")
        );
    }

    #[test]
    fn configured_client_builds() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            storage: StorageConfig {
                credentials_file: dir.path().join("credentials.json"),
            },
            ..AppConfig::default()
        };
        let client = config.client().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }
}
