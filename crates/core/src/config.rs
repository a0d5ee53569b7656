//! Backend configuration, resolved once at startup.

use crate::error::{NorthwindError, NorthwindResult};
use std::time::Duration;

/// Base URL of the Northwind REST API.
pub const ENV_API_BASE_URL: &str = "NORTHWIND_API";

/// Outbound request deadline in seconds; `0` disables it.
pub const ENV_API_TIMEOUT_SECS: &str = "NORTHWIND_API_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// `None` when unconfigured. Front ends keep serving and report the
    /// misconfiguration per call.
    pub base_url: Option<String>,
    /// `None` means no deadline.
    pub timeout: Option<Duration>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Default::default()
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> NorthwindResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> NorthwindResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_lookup(lookup)?;
        Ok(config)
    }

    /// Override fields with whatever the lookup provides. Empty values are
    /// treated as unset.
    pub fn apply_lookup<F>(&mut self, lookup: F) -> NorthwindResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = non_empty(lookup(ENV_API_BASE_URL)) {
            self.base_url = Some(base_url);
        }

        if let Some(raw) = non_empty(lookup(ENV_API_TIMEOUT_SECS)) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                NorthwindError::Config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_API_TIMEOUT_SECS, raw
                ))
            })?;
            self.timeout = timeout_from_secs(secs);
        }

        Ok(())
    }

    pub fn base_url(&self) -> NorthwindResult<&str> {
        self.base_url.as_deref().ok_or(NorthwindError::MissingBaseUrl)
    }
}

/// `0` disables the deadline.
pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BackendConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.base_url.is_none());
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(matches!(config.base_url(), Err(NorthwindError::MissingBaseUrl)));
    }

    #[test]
    fn test_base_url_from_env() {
        let config =
            BackendConfig::from_lookup(lookup(&[("NORTHWIND_API", "http://api.example")])).unwrap();
        assert_eq!(config.base_url().unwrap(), "http://api.example");
    }

    #[test]
    fn test_empty_base_url_is_unset() {
        let config = BackendConfig::from_lookup(lookup(&[("NORTHWIND_API", "")])).unwrap();
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_timeout_override() {
        let config =
            BackendConfig::from_lookup(lookup(&[("NORTHWIND_API_TIMEOUT_SECS", "5")])).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));

        let config =
            BackendConfig::from_lookup(lookup(&[("NORTHWIND_API_TIMEOUT_SECS", "0")])).unwrap();
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_invalid_timeout() {
        let err = BackendConfig::from_lookup(lookup(&[("NORTHWIND_API_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, NorthwindError::Config(_)));
    }

    #[test]
    fn test_apply_lookup_keeps_existing_values() {
        let mut config = BackendConfig::new("http://from-file");
        config.apply_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://from-file"));

        config
            .apply_lookup(lookup(&[("NORTHWIND_API", "http://from-env")]))
            .unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://from-env"));
    }
}
