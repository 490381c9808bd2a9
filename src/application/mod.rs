/// Credential store and bearer token providers
pub mod auth;
/// HTTP client wired with auth and base URL
pub mod client;
/// Build mode and client configuration
pub mod config;
/// Third-party integration links
pub mod integration;
