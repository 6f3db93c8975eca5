use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Runtime configuration for the recipe finder
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// Dataset location: a file path, or an http(s) URL
    #[serde(default = "default_data")]
    pub data: String,
    /// Request timeout in seconds when `data` is a URL
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Initial address used when none is given on the command line
    #[serde(default)]
    pub address: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            data: default_data(),
            timeout: default_timeout(),
            address: String::new(),
        }
    }
}

// Default value functions
fn default_data() -> String {
    "data/recipes.json".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__DATA
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Whether `data` should be fetched over HTTP rather than read from disk
    pub fn is_remote(&self) -> bool {
        self.data.starts_with("http://") || self.data.starts_with("https://")
    }
}

/// Load configuration from file and environment variables
///
/// See [`FinderConfig::load`] for the lookup order.
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore as separator: RECIPE_FINDER__TIMEOUT
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = FinderConfig::default();
        assert_eq!(config.data, "data/recipes.json");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.address.is_empty());
        assert!(!config.is_remote());
    }

    #[test]
    fn test_is_remote() {
        let config = FinderConfig {
            data: "https://recipes.example/data/recipes.json".to_string(),
            ..Default::default()
        };
        assert!(config.is_remote());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let settings = Config::builder()
            .set_override("timeout", 5)
            .unwrap()
            .build()
            .unwrap();

        let config: FinderConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.timeout, 5);
        assert_eq!(config.data, "data/recipes.json");
    }

    #[test]
    fn test_load_config_without_file() {
        // No config.toml in the test working directory; defaults apply
        let result = load_config();
        assert!(result.is_ok());
    }
}
