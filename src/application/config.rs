/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{DEV_BASE_URL, PROD_BASE_URL, REMOTE_SERVER_CREDENTIAL};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use url::Url;

/// Which server the application talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Local server on `http://localhost:1234`
    Development,
    /// Hosted server on `https://app.hyprnote.com`
    Production,
}

impl BuildMode {
    /// Build mode fixed at compile time: debug builds are development builds
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    /// Literal base URL for this mode
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            BuildMode::Development => DEV_BASE_URL,
            BuildMode::Production => PROD_BASE_URL,
        }
    }

    /// Returns true for development builds
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, BuildMode::Development)
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Development => write!(f, "development"),
            BuildMode::Production => write!(f, "production"),
        }
    }
}

impl FromStr for BuildMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(BuildMode::Development),
            "production" | "prod" => Ok(BuildMode::Production),
            other => Err(AppError::InvalidInput(format!("unknown build mode: {other}"))),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Root address every API path is resolved against
    pub base_url: String,
    /// Request timeout in seconds, `None` leaves requests unbounded
    pub timeout: Option<u64>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the desktop API client
pub struct Config {
    /// Build mode the base URL was derived from
    pub build_mode: BuildMode,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Vault key holding the bearer token
    pub credential_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Reads `APP_BUILD_MODE`, `APP_API_BASE_URL`, `APP_API_TIMEOUT_SECS` and
    /// `APP_CREDENTIAL_KEY`, falling back to the compile-time build mode and its
    /// base URL.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let build_mode = get_env_or_default("APP_BUILD_MODE", BuildMode::current());
        let base_url = get_env_or_default("APP_API_BASE_URL", build_mode.base_url().to_string());

        Config {
            build_mode,
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_none("APP_API_TIMEOUT_SECS"),
            },
            credential_key: get_env_or_default(
                "APP_CREDENTIAL_KEY",
                REMOTE_SERVER_CREDENTIAL.to_string(),
            ),
        }
    }

    /// Creates a configuration for `mode` without looking at the environment
    #[must_use]
    pub fn for_mode(mode: BuildMode) -> Self {
        Config {
            build_mode: mode,
            rest_api: RestApiConfig {
                base_url: mode.base_url().to_string(),
                timeout: None,
            },
            credential_key: REMOTE_SERVER_CREDENTIAL.to_string(),
        }
    }

    /// Parsed base URL
    ///
    /// # Errors
    /// Returns `AppError::InvalidUrl` when `rest_api.base_url` is malformed
    pub fn base_url(&self) -> Result<Url, AppError> {
        Ok(Url::parse(&self.rest_api.base_url)?)
    }
}
