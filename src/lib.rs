/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Desktop Client
//!
//! API client configuration for the desktop application.
//!
//! The crate composes three collaborators into a single [`ApiClient`]:
//!
//! - a fetch implementation (`reqwest::Client`),
//! - an authentication callback that reads the `"remote-server"` credential from
//!   the secure credential store and sends it as a bearer token,
//! - a base URL selected by the build mode (`http://localhost:1234` in
//!   development, `https://app.hyprnote.com` in production).
//!
//! It also provides [`get_integration_url`] to build the link that starts a
//! third-party integration flow.
//!
//! ## Example
//!
//! ```ignore
//! use desktop_client::prelude::*;
//!
//! let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
//! let client = init_client(ClientConfig::with_store(&Config::new(), store)?);
//!
//! let url = client.integration_url(IntegrationProvider::Salesforce);
//! let profile: serde_json::Value = client.get("/api/me").await?;
//! ```
//!
//! [`ApiClient`]: application::client::ApiClient
//! [`get_integration_url`]: application::integration::get_integration_url

/// Authentication, client configuration and integration links
pub mod application;

/// Process-wide client instance
pub mod client;

/// Constants shared across the crate
pub mod constants;

/// Error types
pub mod error;

/// Commonly used types and traits
pub mod prelude;

/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
