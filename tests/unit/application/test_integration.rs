use desktop_client::application::config::{BuildMode, Config};
use desktop_client::application::integration::{IntegrationProvider, get_integration_url};
use url::Url;

#[test]
fn test_salesforce_integration_url() {
    let base = Config::for_mode(BuildMode::Development).base_url().unwrap();
    assert_eq!(
        get_integration_url(&base, IntegrationProvider::Salesforce),
        "http://localhost:1234/integration?provider=salesforce"
    );
}

#[test]
fn test_integration_url_for_every_provider() {
    let base = Config::for_mode(BuildMode::Production).base_url().unwrap();
    for provider in IntegrationProvider::ALL {
        assert_eq!(
            get_integration_url(&base, provider),
            format!("https://app.hyprnote.com/integration?provider={provider}")
        );
    }
}

#[test]
fn test_integration_url_is_pure() {
    let base = Url::parse("http://localhost:1234").unwrap();
    let first = get_integration_url(&base, IntegrationProvider::Hubspot);
    let second = get_integration_url(&base, IntegrationProvider::Hubspot);
    assert_eq!(first, second);
    assert_eq!(base.as_str(), "http://localhost:1234/");
}

#[test]
fn test_unknown_provider_rejected() {
    let err = "dropbox".parse::<IntegrationProvider>().unwrap_err();
    assert_eq!(err.to_string(), "invalid input: unknown integration provider: dropbox");
}
