//! Datastore configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MAKTABA_DATASTORE_URL` - Base URL of the hosted data store's REST
//!   endpoint (e.g., `https://xyz.example.co/rest/v1`)
//! - `MAKTABA_DATASTORE_KEY` - API key used for both the `apikey` header
//!   and bearer authentication

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Connection settings for the hosted data store.
#[derive(Debug, Clone)]
pub struct DatastoreConfig {
    /// Base URL of the store's REST endpoint, without a trailing slash.
    pub base_url: String,
    /// API key (secret).
    pub api_key: SecretString,
}

impl DatastoreConfig {
    /// Load configuration from the environment.
    ///
    /// A `.env` file in the working directory is honored if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or the
    /// URL is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url = require("MAKTABA_DATASTORE_URL")?;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidEnvVar(
                "MAKTABA_DATASTORE_URL".to_owned(),
                "must be an http(s) URL".to_owned(),
            ));
        }

        let api_key = require("MAKTABA_DATASTORE_KEY")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_owned()))
}
