/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Desktop Client Prelude
//!
//! Brings the commonly used types, traits and functions into scope.
//!
//! ```rust
//! use desktop_client::prelude::*;
//!
//! let config = Config::for_mode(BuildMode::Development);
//! let url = get_integration_url(&config.base_url().unwrap(), IntegrationProvider::Salesforce);
//! assert_eq!(url, "http://localhost:1234/integration?provider=salesforce");
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Build mode and client configuration
pub use crate::application::config::{BuildMode, Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION
// ============================================================================

/// Credential stores and token providers
pub use crate::application::auth::{
    CredentialStore, EnvCredentialStore, MemoryCredentialStore, StaticTokenProvider,
    TokenProvider, VaultTokenProvider,
};

// ============================================================================
// CLIENT
// ============================================================================

/// Client construction
pub use crate::application::client::{ApiClient, ClientConfig, create_client};

/// Process-wide client
pub use crate::client::{base_url, client, init_client};

/// Integration links
pub use crate::application::integration::{IntegrationProvider, get_integration_url};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::Method;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
pub use url::Url;
