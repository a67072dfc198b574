use std::env;
use std::path::PathBuf;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub log_level: String,
    pub environment: String,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_level: "info".to_string(),
            environment: "development".to_string(),
            currency_symbol: "₽".to_string(),
        }
    }
}

impl Config {
    /// Reads the environment. Call [`Config::validate`] once overrides are applied.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let defaults = Config::default();
        let config = Config {
            catalog_path: env::var("CATALOG_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            log_level: env::var("LOG_LEVEL")
                .unwrap_or(defaults.log_level)
                .to_lowercase(),
            environment: env::var("APP_ENV").unwrap_or(defaults.environment),
            currency_symbol: env::var("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
        };

        Ok(config)
    }

    pub fn with_catalog_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.catalog_path = path;
        }
        self
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(anyhow::anyhow!(
                "LOG_LEVEL must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }

        if self.currency_symbol.trim().is_empty() {
            return Err(anyhow::anyhow!("CURRENCY_SYMBOL must not be empty"));
        }

        if self.is_production() && self.catalog_path.is_none() {
            return Err(anyhow::anyhow!("CATALOG_PATH is not set in production"));
        }

        if let Some(path) = &self.catalog_path {
            if !path.is_file() {
                return Err(anyhow::anyhow!(
                    "CATALOG_PATH '{}' does not point to a file",
                    path.display()
                ));
            }
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(!config.is_production());
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_catalog_file_is_rejected() {
        let config = Config::default()
            .with_catalog_path(Some(PathBuf::from("/definitely/not/here.json")));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_catalog_path_replaces_stale_env_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let stale = Config {
            catalog_path: Some(PathBuf::from("/definitely/not/here.json")),
            ..Config::default()
        };
        assert!(stale.validate().is_err());

        let config = stale.with_catalog_path(Some(file.path().to_path_buf()));
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_production_requires_catalog_file() {
        let config = Config {
            environment: "production".to_string(),
            ..Config::default()
        };
        assert!(config.is_production());
        assert!(config.validate().is_err());

        let file = tempfile::NamedTempFile::new().unwrap();
        let config = config.with_catalog_path(Some(file.path().to_path_buf()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_catalog_path_keeps_existing_on_none() {
        let config = Config {
            catalog_path: Some(PathBuf::from("catalog.json")),
            ..Config::default()
        }
        .with_catalog_path(None);

        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.json")));
    }
}
