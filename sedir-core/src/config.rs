//! Centralized configuration for the directory.
//!
//! Settings come from defaults, an optional JSON file and `SEDIR_*`
//! environment overrides, in that order.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::homepage::ConfigSource;
use crate::{Result, SedirError};

/// Central configuration for all directory components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub api: ApiConfig,
    pub server: ServerConfig,
    /// Known places for resolving location text to coordinates.
    pub places: Vec<PlaceConfig>,
}

/// Search API settings.
///
/// Results are suppressed until `api_root` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root URL of the search API
    pub api_root: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_root: None,
            timeout_secs: 10,
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// A named place with known coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceConfig {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl PlaceConfig {
    pub fn new(name: &str, lat: f64, lon: f64) -> Self {
        Self {
            name: name.to_string(),
            lat,
            lon,
        }
    }
}

impl SiteConfig {
    /// Creates configuration from defaults plus environment variable overrides.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Loads configuration from a JSON file. Missing sections take defaults.
    ///
    /// # Errors
    ///
    /// - `SedirError::Io` - The file could not be read
    /// - `SedirError::ConfigParse` - The file is not valid JSON for this schema
    /// - `SedirError::Configuration` - The file parsed but holds unusable values
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `SEDIR_*` environment variables on top of `self`.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up through `lookup`. Unparseable values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup("SEDIR_API_ROOT") {
            self.api.api_root = Some(root).filter(|r| !r.is_empty());
        }

        if let Some(timeout) = lookup("SEDIR_API_TIMEOUT") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                self.api.timeout_secs = seconds;
            }
        }

        if let Some(host) = lookup("SEDIR_HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("SEDIR_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                self.server.port = port;
            }
        }

        self
    }

    /// Adds the Ottawa-area places used by the demo directory.
    pub fn with_default_places(mut self) -> Self {
        if self.places.is_empty() {
            self.places = vec![
                PlaceConfig::new("Ottawa", 45.4215, -75.6972),
                PlaceConfig::new("Gatineau", 45.4765, -75.7013),
                PlaceConfig::new("Kanata", 45.3088, -75.8987),
                PlaceConfig::new("Nepean", 45.3349, -75.7241),
                PlaceConfig::new("Orleans", 45.4700, -75.5150),
                PlaceConfig::new("Vanier", 45.4370, -75.6610),
            ];
        }
        self
    }

    /// Creates a configuration for tests: API root set, default places.
    pub fn for_testing() -> Self {
        Self {
            api: ApiConfig {
                api_root: Some("http://127.0.0.1:9/api".to_string()),
                timeout_secs: 1,
            },
            ..Default::default()
        }
        .with_default_places()
    }

    fn validate(&self) -> Result<()> {
        if self.api.timeout_secs == 0 {
            return Err(SedirError::Configuration {
                reason: "api.timeout_secs must be greater than zero".to_string(),
            });
        }

        for place in &self.places {
            if place.name.trim().is_empty() {
                return Err(SedirError::Configuration {
                    reason: "place names must not be empty".to_string(),
                });
            }
            if !(-90.0..=90.0).contains(&place.lat) || !(-180.0..=180.0).contains(&place.lon) {
                return Err(SedirError::Configuration {
                    reason: format!("coordinates for '{}' are out of range", place.name),
                });
            }
        }

        Ok(())
    }
}

impl ConfigSource for ApiConfig {
    fn api_root(&self) -> Option<&str> {
        self.api_root.as_deref().filter(|root| !root.is_empty())
    }
}

impl ConfigSource for SiteConfig {
    fn api_root(&self) -> Option<&str> {
        self.api.api_root()
    }
}

/// Configuration shared between request handlers.
///
/// The API root may arrive after startup; readers take a snapshot per request.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<SiteConfig>>,
}

impl SharedConfig {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Copy of the current configuration.
    pub fn snapshot(&self) -> SiteConfig {
        self.inner.read().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.read().api_root().is_some()
    }

    pub fn set_api_root(&self, api_root: Option<String>) {
        self.inner.write().api.api_root = api_root;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = SiteConfig::default();

        assert_eq!(config.api.api_root, None);
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert!(config.places.is_empty());
        assert_eq!(config.api_root(), None);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("SEDIR_API_ROOT", "https://api.example.org"),
            ("SEDIR_PORT", "8080"),
            ("SEDIR_API_TIMEOUT", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let config =
            SiteConfig::default().with_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_root(), Some("https://api.example.org"));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_empty_api_root_override_unsets() {
        let config = SiteConfig::for_testing().with_overrides(|key| {
            (key == "SEDIR_API_ROOT").then(String::new)
        });
        assert_eq!(config.api_root(), None);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"api": {{"api_root": "https://api.example.org"}}, "places": [{{"name": "Ottawa", "lat": 45.42, "lon": -75.69}}]}}"#
        )
        .unwrap();

        let config = SiteConfig::load(file.path()).unwrap();

        assert_eq!(config.api_root(), Some("https://api.example.org"));
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.places, vec![PlaceConfig::new("Ottawa", 45.42, -75.69)]);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        assert!(matches!(
            SiteConfig::load(file.path()),
            Err(SedirError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_load_rejects_out_of_range_place() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"places": [{{"name": "Nowhere", "lat": 123.0, "lon": 0.0}}]}}"#).unwrap();

        let err = SiteConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, SedirError::Configuration { .. }));
        assert!(err.user_message().contains("Nowhere"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SiteConfig::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(SedirError::Io(_))));
    }

    #[test]
    fn test_default_places_do_not_replace_configured_ones() {
        let config = SiteConfig {
            places: vec![PlaceConfig::new("Perth", 44.9, -76.25)],
            ..Default::default()
        }
        .with_default_places();

        assert_eq!(config.places.len(), 1);
        assert!(SiteConfig::default().with_default_places().places.len() > 1);
    }

    #[test]
    fn test_shared_config_updates_are_visible() {
        let shared = SharedConfig::default();
        let handle = shared.clone();
        assert!(!shared.is_loaded());

        handle.set_api_root(Some("https://api.example.org".to_string()));

        assert!(shared.is_loaded());
        assert_eq!(shared.snapshot().api_root(), Some("https://api.example.org"));
    }
}
