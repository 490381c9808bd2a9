/// Base URL of the API server when running a development build
pub const DEV_BASE_URL: &str = "http://localhost:1234";
/// Base URL of the API server for production builds
pub const PROD_BASE_URL: &str = "https://app.hyprnote.com";
/// Name under which the remote server bearer token is kept in the vault
pub const REMOTE_SERVER_CREDENTIAL: &str = "remote-server";
/// Path that starts a third-party integration flow
pub const INTEGRATION_PATH: &str = "/integration";
/// Query parameter carrying the integration provider identifier
pub const INTEGRATION_PROVIDER_PARAM: &str = "provider";
/// Prefix of the environment variables read by `EnvCredentialStore`
pub const CREDENTIAL_ENV_PREFIX: &str = "APP_CREDENTIAL_";
/// User agent string sent with every request to identify this client
pub const USER_AGENT: &str = concat!("desktop-client/", env!("CARGO_PKG_VERSION"));
