use pricebook_catalog::SignatureScheme;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub accounts: BTreeMap<String, AccountConfig>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CacheConfig {
    #[serde(default)]
    pub key_scheme: SignatureScheme,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// Product name -> price
    #[serde(default)]
    pub products: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AccountConfig {
    /// Defaults to the login when omitted
    pub owner: Option<String>,
    pub balance: u64,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::from(dir.join("default")))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::from(dir.join(&run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::from(dir.join("local")).required(false))
            // Eg.. `PRICEBOOK_CACHE__KEY_SCHEME=concatenated`
            .add_source(
                config::Environment::with_prefix("PRICEBOOK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        s.try_deserialize()
    }

    /// Build a configuration from TOML text alone, without files or environment
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
