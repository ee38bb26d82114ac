//! Configuration for Products API

use core_config::{
    app_info, cors::CorsConfig, env_bool, server::ServerConfig, AppInfo, ConfigError, FromEnv,
};
use std::env;
use std::path::PathBuf;

pub use core_config::Environment;

/// How the in-memory store is populated at start-up
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedConfig {
    /// `PRODUCTS_SEED`, defaults to true
    pub enabled: bool,
    /// `PRODUCTS_FIXTURES`: JSON array of products to seed instead of the built-in ones
    pub fixtures_path: Option<PathBuf>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fixtures_path: None,
        }
    }
}

impl FromEnv for SeedConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let enabled = env_bool("PRODUCTS_SEED", true)?;
        let fixtures_path = env::var("PRODUCTS_FIXTURES")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            enabled,
            fixtures_path,
        })
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    pub seed: SeedConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let cors = CorsConfig::from_env()?;
        let seed = SeedConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            cors,
            environment,
            seed,
        })
    }
}

impl Default for Config {
    /// Development defaults with a permissive CORS policy and the built-in seed.
    fn default() -> Self {
        Self {
            app: app_info!(),
            server: ServerConfig::default(),
            cors: CorsConfig::permissive(),
            environment: Environment::Development,
            seed: SeedConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 6] = [
        "APP_ENV",
        "HOST",
        "PORT",
        "CORS_ALLOWED_ORIGIN",
        "PRODUCTS_SEED",
        "PRODUCTS_FIXTURES",
    ];

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars_unset(VARS, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.app.name, "products_api");
            assert_eq!(config.server.address(), "0.0.0.0:3003");
            assert!(config.cors.is_permissive());
            assert_eq!(config.environment, Environment::Development);
            assert_eq!(config.seed, SeedConfig::default());
        });
    }

    #[test]
    fn test_config_reads_seed_settings() {
        temp_env::with_vars(
            [
                ("PRODUCTS_SEED", Some("false")),
                ("PRODUCTS_FIXTURES", Some("/tmp/products.json")),
            ],
            || {
                let seed = SeedConfig::from_env().unwrap();
                assert!(!seed.enabled);
                assert_eq!(seed.fixtures_path, Some(PathBuf::from("/tmp/products.json")));
            },
        );
    }

    #[test]
    fn test_config_rejects_invalid_port() {
        temp_env::with_var("PORT", Some("eighty"), || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn test_config_rejects_invalid_seed_flag() {
        temp_env::with_var("PRODUCTS_SEED", Some("maybe"), || {
            assert!(matches!(
                SeedConfig::from_env(),
                Err(ConfigError::ParseError { .. })
            ));
        });
    }
}
