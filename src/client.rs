/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Process-wide API client
//!
//! The application builds its client once at startup with [`init_client`] and
//! reaches it from anywhere through [`client`]. The instance is immutable
//! once set.
//!
//! # Example
//! ```ignore
//! use desktop_client::prelude::*;
//!
//! let store: Arc<dyn CredentialStore> = Arc::new(EnvCredentialStore::new());
//! init_client(ClientConfig::with_store(&Config::new(), store)?);
//!
//! let me: serde_json::Value = client()?.get("/api/me").await?;
//! ```

use crate::application::client::{ApiClient, ClientConfig, create_client};
use crate::application::config::BuildMode;
use crate::error::AppError;
use once_cell::sync::{Lazy, OnceCell};
use tracing::{info, warn};

static CLIENT: OnceCell<ApiClient> = OnceCell::new();

static BASE_URL: Lazy<&'static str> = Lazy::new(|| BuildMode::current().base_url());

/// Base URL selected by the compile-time build mode
#[must_use]
pub fn base_url() -> &'static str {
    *BASE_URL
}

/// Builds the process-wide client on first call
///
/// Later calls return the existing instance and ignore `config`.
pub fn init_client(config: ClientConfig) -> &'static ApiClient {
    let mut created = false;
    let client = CLIENT.get_or_init(|| {
        created = true;
        create_client(config)
    });
    if created {
        info!("API client initialized for {}", client.base_url());
    } else {
        warn!("API client already initialized, ignoring new configuration");
    }
    client
}

/// The process-wide client
///
/// # Errors
/// Returns `AppError::ClientNotInitialized` before [`init_client`] has run
pub fn client() -> Result<&'static ApiClient, AppError> {
    CLIENT.get().ok_or(AppError::ClientNotInitialized)
}
