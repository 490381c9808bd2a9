/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! API client for the desktop application
//!
//! [`ClientConfig`] bundles the three collaborators the client is built from:
//! the HTTP client used to send requests, the [`TokenProvider`] consulted
//! before every request, and the base URL. [`create_client`] turns it into an
//! [`ApiClient`].
//!
//! The client performs no retries and no rate limiting. A non-success status
//! is returned to the caller as an [`AppError`].

use crate::application::auth::{CredentialStore, TokenProvider, VaultTokenProvider};
use crate::application::config::Config;
use crate::application::integration::{IntegrationProvider, get_integration_url};
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::{Client as HttpInternalClient, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Collaborators an [`ApiClient`] is built from
#[derive(Clone)]
pub struct ClientConfig {
    /// HTTP client used to send requests
    pub http_client: HttpInternalClient,
    /// Bearer token source, asked once per request
    pub auth: Arc<dyn TokenProvider>,
    /// Root address every path is resolved against
    pub base_url: Url,
}

impl ClientConfig {
    /// Builds a client configuration from `config` and a token provider
    ///
    /// # Errors
    /// * `AppError::InvalidUrl` - The configured base URL is malformed
    /// * `AppError::Network` - The HTTP client could not be built
    pub fn new(config: &Config, auth: Arc<dyn TokenProvider>) -> Result<Self, AppError> {
        let mut builder = HttpInternalClient::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.rest_api.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http_client: builder.build()?,
            auth,
            base_url: config.base_url()?,
        })
    }

    /// Builds a client configuration whose token comes from `store` under
    /// `config.credential_key`
    ///
    /// # Errors
    /// Same as [`ClientConfig::new`]
    pub fn with_store(config: &Config, store: Arc<dyn CredentialStore>) -> Result<Self, AppError> {
        let auth = Arc::new(VaultTokenProvider::from_config(store, config));
        Self::new(config, auth)
    }

    /// Replaces the HTTP client used to send requests
    #[must_use]
    pub fn with_http_client(mut self, http_client: HttpInternalClient) -> Self {
        self.http_client = http_client;
        self
    }

    /// Replaces the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("auth", &"TokenProvider")
            .finish()
    }
}

/// Creates an [`ApiClient`] from its configuration
#[must_use]
pub fn create_client(config: ClientConfig) -> ApiClient {
    ApiClient::new(config)
}

/// Client for the application's remote API
///
/// Cloning is cheap and every clone shares the same configuration.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: Arc<ClientConfig>,
}

impl ApiClient {
    /// Creates a client from its configuration
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        debug!("Creating API client for {}", config.base_url);
        Self {
            config: Arc::new(config),
        }
    }

    /// Base URL requests are resolved against
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// URL that starts the integration flow for `provider`
    #[must_use]
    pub fn integration_url(&self, provider: IntegrationProvider) -> String {
        get_integration_url(&self.config.base_url, provider)
    }

    /// Token the next request would carry
    pub async fn current_token(&self) -> Option<String> {
        self.config.auth.token().await
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<()>).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes a PATCH request with a JSON body
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::DELETE, path, None::<()>).await
    }

    /// Makes a request and decodes the JSON response
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Path relative to the base URL, or an absolute `http(s)` URL
    /// * `body` - Optional body, sent as JSON
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response; an empty body decodes as `null`
    /// * `Err(AppError)` - Transport failure, non-success status or bad JSON
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, AppError> {
        let response = self.request_internal(method, path, &body).await?;
        self.parse_response(response).await
    }

    /// Resolves `path` against the base URL
    ///
    /// # Errors
    /// Returns `AppError::InvalidUrl` when the result is not a valid URL
    pub fn resolve(&self, path: &str) -> Result<Url, AppError> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(Url::parse(path)?);
        }

        let (path, query) = match path.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (path, None),
        };

        let mut url = self.config.base_url.clone();
        let joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url.set_query(query);
        url.set_fragment(None);
        Ok(url)
    }

    async fn request_internal<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &Option<B>,
    ) -> Result<Response, AppError> {
        let url = self.resolve(path)?;
        debug!("{} {}", method, url);

        let mut request = self
            .config
            .http_client
            .request(method, url)
            .header("Accept", "application/json");

        match self.config.auth.token().await {
            Some(token) => request = request.bearer_auth(token),
            None => debug!("No bearer token available, sending unauthenticated"),
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}", status);
            debug!("Error response body: {}", body);
            return Err(AppError::from_status(status));
        }

        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
