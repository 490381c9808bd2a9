use desktop_client::application::config::{BuildMode, Config, RestApiConfig};
use desktop_client::constants::{DEV_BASE_URL, PROD_BASE_URL};
use std::env;

#[test]
fn test_development_base_url() {
    let config = Config::for_mode(BuildMode::Development);
    assert_eq!(config.rest_api.base_url, "http://localhost:1234");
    assert_eq!(config.base_url().unwrap().as_str(), "http://localhost:1234/");
}

#[test]
fn test_production_base_url() {
    let config = Config::for_mode(BuildMode::Production);
    assert_eq!(config.rest_api.base_url, "https://app.hyprnote.com");
}

#[test]
fn test_build_mode_display() {
    assert_eq!(BuildMode::Development.to_string(), "development");
    assert_eq!(BuildMode::Production.to_string(), "production");
}

#[test]
fn test_config_serialization() {
    let config = Config {
        build_mode: BuildMode::Production,
        rest_api: RestApiConfig {
            base_url: PROD_BASE_URL.to_string(),
            timeout: Some(15),
        },
        credential_key: "remote-server".to_string(),
    };

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"build_mode\":\"production\""));

    let deserialized: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.build_mode, BuildMode::Production);
    assert_eq!(deserialized.rest_api.timeout, Some(15));
}

#[test]
fn test_config_display() {
    let config = Config::for_mode(BuildMode::Development);
    let display = format!("{}", config);
    assert!(display.contains(DEV_BASE_URL));
}

// Every Config::new() check lives in this one test so the environment is not
// mutated concurrently by other tests in this binary.
#[test]
fn test_config_new_from_environment() {
    unsafe {
        env::remove_var("APP_API_BASE_URL");
        env::remove_var("APP_API_TIMEOUT_SECS");
        env::remove_var("APP_CREDENTIAL_KEY");
        env::set_var("APP_BUILD_MODE", "production");
    }
    let config = Config::new();
    assert_eq!(config.build_mode, BuildMode::Production);
    assert_eq!(config.rest_api.base_url, PROD_BASE_URL);
    assert_eq!(config.rest_api.timeout, None);
    assert_eq!(config.credential_key, "remote-server");

    unsafe {
        env::set_var("APP_BUILD_MODE", "dev");
        env::set_var("APP_API_TIMEOUT_SECS", "20");
    }
    let config = Config::new();
    assert_eq!(config.rest_api.base_url, DEV_BASE_URL);
    assert_eq!(config.rest_api.timeout, Some(20));

    unsafe {
        env::set_var("APP_API_BASE_URL", "https://staging.example.com");
        env::set_var("APP_CREDENTIAL_KEY", "staging-server");
    }
    let config = Config::new();
    assert_eq!(config.rest_api.base_url, "https://staging.example.com");
    assert_eq!(config.credential_key, "staging-server");

    unsafe {
        env::set_var("APP_API_TIMEOUT_SECS", "abc");
    }
    let config = Config::new();
    assert_eq!(config.rest_api.timeout, None);

    unsafe {
        env::set_var("APP_BUILD_MODE", "nonsense");
        env::remove_var("APP_API_BASE_URL");
    }
    let config = Config::new();
    assert_eq!(config.build_mode, BuildMode::current());

    unsafe {
        env::remove_var("APP_BUILD_MODE");
        env::remove_var("APP_API_TIMEOUT_SECS");
        env::remove_var("APP_CREDENTIAL_KEY");
    }
}
