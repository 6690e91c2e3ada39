//! Configuration module
//!
//! Process-level configuration for the client: project keys, CDN and API
//! hosts, and the validity window for signed delivery URLs. Values are read
//! from `UPCDN_*` environment variables with documented defaults.

use std::env;

use crate::error::UpcdnError;

const DEFAULT_API_BASE: &str = "https://api.upcdn.io";
const DEFAULT_CDN_BASE: &str = "cdn.upcdn.io";
const DEFAULT_SIGNED_URL_TTL_SECS: u64 = 300;

/// Client configuration shared by the API client and URL builders.
#[derive(Clone, Debug)]
pub struct Config {
    /// Public project key, sent with every API request
    pub public_key: String,
    /// Secret project key; required for REST auth and URL signing
    pub secret_key: Option<String>,
    /// REST API base URL
    pub api_base: String,
    /// CDN host (no scheme) used for delivery URLs
    pub cdn_base: String,
    /// Validity window for signed URLs, in seconds
    pub signed_url_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `UPCDN_PUBLIC_KEY` is required. `UPCDN_SECRET_KEY`, `UPCDN_API_BASE`,
    /// `UPCDN_CDN_BASE`, and `UPCDN_SIGNED_URL_TTL_SECS` are optional.
    /// A `.env` file is loaded first if present.
    pub fn from_env() -> Result<Self, UpcdnError> {
        dotenvy::dotenv().ok();

        let public_key = env::var("UPCDN_PUBLIC_KEY")
            .map_err(|_| UpcdnError::MissingEnv("UPCDN_PUBLIC_KEY"))?;

        let secret_key = env::var("UPCDN_SECRET_KEY").ok().filter(|s| !s.is_empty());

        let api_base =
            env::var("UPCDN_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let cdn_base =
            env::var("UPCDN_CDN_BASE").unwrap_or_else(|_| DEFAULT_CDN_BASE.to_string());

        let signed_url_ttl_secs = env::var("UPCDN_SIGNED_URL_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SIGNED_URL_TTL_SECS);

        Ok(Config {
            public_key,
            secret_key,
            api_base,
            cdn_base,
            signed_url_ttl_secs,
        })
    }

    /// Build a config directly from keys, using default hosts.
    pub fn new(public_key: impl Into<String>, secret_key: Option<String>) -> Self {
        Config {
            public_key: public_key.into(),
            secret_key,
            api_base: DEFAULT_API_BASE.to_string(),
            cdn_base: DEFAULT_CDN_BASE.to_string(),
            signed_url_ttl_secs: DEFAULT_SIGNED_URL_TTL_SECS,
        }
    }
}
