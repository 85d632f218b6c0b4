//! # Config
//!
//! Define and implement config options for module

use anyhow::Result;
use config::{ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;

/// struct holding configuration options
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// port to be used for the REST server
    pub docker_port_rest: u16,

    /// base URL of the upstream flight data API
    pub airlabs_base_url: String,

    /// API key for the upstream flight data API
    pub airlabs_api_key: String,

    /// timeout in seconds for upstream requests
    pub request_timeout_seconds: u64,

    /// serve canned records from the fixtures directory instead of the
    /// upstream API
    pub use_fixtures: bool,

    /// directory holding `flight_*.json` and `airport_*.json` fixture files
    pub fixtures_dir: String,

    /// path to log configuration YAML file
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        log::warn!("(default) Creating Config object with default values.");
        Self::new()
    }
}

impl Config {
    /// Default values for Config
    pub fn new() -> Self {
        Config {
            docker_port_rest: 8000,
            airlabs_base_url: String::from("https://airlabs.co/api/v9"),
            airlabs_api_key: String::from(""),
            request_timeout_seconds: 10,
            use_fixtures: false,
            fixtures_dir: String::from("fixtures"),
            log_config: String::from("log4rs.yaml"),
        }
    }

    /// Create a new `Config` object using environment variables
    pub fn try_from_env() -> Result<Self, ConfigError> {
        // read .env file if present
        dotenv().ok();
        let default_config = Config::default();

        config::Config::builder()
            .set_default("docker_port_rest", default_config.docker_port_rest)?
            .set_default("airlabs_base_url", default_config.airlabs_base_url)?
            .set_default("airlabs_api_key", default_config.airlabs_api_key)?
            .set_default(
                "request_timeout_seconds",
                default_config.request_timeout_seconds,
            )?
            .set_default("use_fixtures", default_config.use_fixtures)?
            .set_default("fixtures_dir", default_config.fixtures_dir)?
            .set_default("log_config", default_config.log_config)?
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}
