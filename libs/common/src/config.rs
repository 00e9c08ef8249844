//! Configuration for consumers of the contract catalog
//!
//! The catalog only describes payloads; this module tells consumers where the
//! backend that speaks them lives.

use crate::error::{ContractError, ContractResult};
use std::env;
use tracing::{debug, warn};
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Backend API configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every route is resolved against. Always ends with `/`.
    pub base_url: Url,
    /// Advisory request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Create a config for the given base URL with the default timeout
    pub fn new(base_url: &str) -> ContractResult<Self> {
        Ok(Self {
            base_url: normalize_base(base_url)?,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Create a new ApiConfig from environment variables
    ///
    /// # Environment Variables
    /// - `CATALOG_API_BASE_URL`: backend base URL (default: "http://localhost:8080")
    /// - `CATALOG_API_TIMEOUT_SECS`: request timeout in seconds (default: 30)
    pub fn from_env() -> ContractResult<Self> {
        let base_url =
            env::var("CATALOG_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match env::var("CATALOG_API_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(
                    "Ignoring invalid CATALOG_API_TIMEOUT_SECS value {:?}, using {}",
                    raw, DEFAULT_TIMEOUT_SECS
                );
                DEFAULT_TIMEOUT_SECS
            }),
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            base_url: normalize_base(&base_url)?,
            timeout_secs,
        };
        debug!("Loaded API config with base URL {}", config.base_url);

        Ok(config)
    }

    /// Resolve a route path against the base URL.
    ///
    /// Leading slashes on `path` are ignored so that a base URL carrying a
    /// path prefix (e.g. `https://host/catalog/`) keeps it.
    pub fn join(&self, path: &str) -> ContractResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

fn normalize_base(raw: &str) -> ContractResult<Url> {
    let mut url = Url::parse(raw)?;

    if url.cannot_be_a_base() {
        return Err(ContractError::Configuration(format!(
            "{} cannot be used as a base URL",
            raw
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
