/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Authentication for the desktop API client
//!
//! The bearer token lives in the application's secure credential store. A
//! [`TokenProvider`] is asked for a token before every request; the
//! [`VaultTokenProvider`] reads it fresh from a [`CredentialStore`] each time
//! and never fails: a missing credential or a store error both yield `None`,
//! and the request is sent without an `Authorization` header.

use crate::application::config::Config;
use crate::constants::{CREDENTIAL_ENV_PREFIX, REMOTE_SERVER_CREDENTIAL};
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Secure storage holding named credentials
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Looks up the credential stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - The credential is stored
    /// * `Ok(None)` - Nothing is stored under `key`
    /// * `Err(AppError)` - The store could not be read
    async fn get_from_vault(&self, key: &str) -> Result<Option<String>, AppError>;
}

/// Supplies the bearer token attached to outgoing requests
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns the token for the next request, or `None` to send it unauthenticated
    async fn token(&self) -> Option<String>;
}

/// In-process credential store
#[derive(Debug, Default, Clone)]
pub struct MemoryCredentialStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value
    pub async fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.write().await.insert(key.into(), value.into());
    }

    /// Removes the credential under `key`, returning it if present
    pub async fn remove(&self, key: &str) -> Option<String> {
        self.entries.write().await.remove(key)
    }

    /// Removes every stored credential
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get_from_vault(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.read().await.get(key).cloned())
    }
}

/// Credential store backed by environment variables
///
/// `remote-server` is read from `APP_CREDENTIAL_REMOTE_SERVER`.
#[derive(Debug, Clone)]
pub struct EnvCredentialStore {
    prefix: String,
}

impl EnvCredentialStore {
    /// Creates a store using the default `APP_CREDENTIAL_` prefix
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix(CREDENTIAL_ENV_PREFIX)
    }

    /// Creates a store using a custom variable prefix
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Environment variable name for `key`
    #[must_use]
    pub fn var_name(&self, key: &str) -> String {
        let suffix: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}{}", self.prefix, suffix)
    }
}

impl Default for EnvCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for EnvCredentialStore {
    async fn get_from_vault(&self, key: &str) -> Result<Option<String>, AppError> {
        let name = self.var_name(key);
        match env::var(&name) {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(AppError::Vault(format!("{name}: {e}"))),
        }
    }
}

/// Token provider that reads the bearer token from a credential store on every call
#[derive(Clone)]
pub struct VaultTokenProvider {
    store: Arc<dyn CredentialStore>,
    key: String,
}

impl VaultTokenProvider {
    /// Creates a provider reading `key` from `store`
    pub fn new(store: Arc<dyn CredentialStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Creates a provider reading the `remote-server` credential
    pub fn remote_server(store: Arc<dyn CredentialStore>) -> Self {
        Self::new(store, REMOTE_SERVER_CREDENTIAL)
    }

    /// Creates a provider reading the credential named by `config.credential_key`
    pub fn from_config(store: Arc<dyn CredentialStore>, config: &Config) -> Self {
        Self::new(store, config.credential_key.clone())
    }

    /// Vault key this provider reads
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl TokenProvider for VaultTokenProvider {
    async fn token(&self) -> Option<String> {
        match self.store.get_from_vault(&self.key).await {
            Ok(Some(token)) => Some(token),
            Ok(None) => {
                debug!("No credential stored under '{}'", self.key);
                None
            }
            Err(e) => {
                warn!(
                    "Failed to read credential '{}', sending unauthenticated: {}",
                    self.key, e
                );
                None
            }
        }
    }
}

impl std::fmt::Debug for VaultTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultTokenProvider")
            .field("key", &self.key)
            .field("store", &"CredentialStore")
            .finish()
    }
}

/// Token provider returning a fixed token, or none at all
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider(Option<String>);

impl StaticTokenProvider {
    /// Always returns `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// Never returns a token
    #[must_use]
    pub fn anonymous() -> Self {
        Self(None)
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Option<String> {
        self.0.clone()
    }
}
