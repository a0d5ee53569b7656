use anyhow::{Context, Result};
use northwind_core::config::timeout_from_secs;
use northwind_core::{BackendConfig, NorthwindService, ToolCatalog};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub backend: BackendSection,
}

/// `[backend]` table. Environment variables take precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendSection {
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ServerConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        // Load config file if it exists, otherwise use defaults
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .context("Failed to read configuration file")?;
            toml::from_str(&content).context("Failed to parse configuration file")
        } else {
            tracing::info!("Configuration file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Backend settings from the file, overridden by the process environment.
    pub fn backend_config(&self) -> Result<BackendConfig> {
        self.backend_config_with(|key| std::env::var(key).ok())
    }

    pub fn backend_config_with<F>(&self, lookup: F) -> Result<BackendConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = BackendConfig::default();
        if let Some(url) = self.backend.base_url.as_ref().filter(|u| !u.is_empty()) {
            config.base_url = Some(url.clone());
        }
        if let Some(secs) = self.backend.timeout_secs {
            config.timeout = timeout_from_secs(secs);
        }

        config
            .apply_lookup(lookup)
            .context("Invalid backend configuration")?;
        Ok(config)
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<NorthwindService>,
}

impl AppState {
    pub fn new(backend: BackendConfig) -> Result<Self> {
        let catalog = Arc::new(ToolCatalog::northwind());
        let service = Arc::new(
            NorthwindService::new(catalog, backend).context("Failed to create backend client")?,
        );

        Ok(Self { service })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::load(&dir.path().join("northwind.toml")).unwrap();
        assert!(config.backend.base_url.is_none());

        let backend = config.backend_config_with(no_env).unwrap();
        assert!(backend.base_url.is_none());
        assert_eq!(backend.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("northwind.toml");
        std::fs::write(
            &path,
            "[backend]\nbase_url = \"http://file.example\"\ntimeout_secs = 0\n",
        )
        .unwrap();

        let config = ServerConfig::load(&path).unwrap();
        let backend = config.backend_config_with(no_env).unwrap();
        assert_eq!(backend.base_url.as_deref(), Some("http://file.example"));
        assert_eq!(backend.timeout, None);
    }

    #[test]
    fn test_env_overrides_file() {
        let config = ServerConfig {
            backend: BackendSection {
                base_url: Some("http://file.example".to_string()),
                timeout_secs: Some(10),
            },
        };

        let backend = config
            .backend_config_with(|key| match key {
                "NORTHWIND_API" => Some("http://env.example".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(backend.base_url.as_deref(), Some("http://env.example"));
        assert_eq!(backend.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("northwind.toml");
        std::fs::write(&path, "[backend\n").unwrap();

        assert!(ServerConfig::load(&path).is_err());
    }
}
