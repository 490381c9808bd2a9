use desktop_client::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_unauthorized() {
    assert_eq!(AppError::Unauthorized.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_not_found() {
    assert_eq!(AppError::NotFound.to_string(), "not found");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_GATEWAY);
    assert!(error.to_string().contains("502"));
}

#[test]
fn test_app_error_display_vault() {
    let error = AppError::Vault("locked".to_string());
    assert_eq!(error.to_string(), "vault error: locked");
}

#[test]
fn test_app_error_display_not_initialized() {
    assert_eq!(
        AppError::ClientNotInitialized.to_string(),
        "client not initialized"
    );
}

#[test]
fn test_app_error_from_status() {
    assert!(matches!(
        AppError::from_status(StatusCode::UNAUTHORIZED),
        AppError::Unauthorized
    ));
    assert!(matches!(
        AppError::from_status(StatusCode::NOT_FOUND),
        AppError::NotFound
    ));
    assert!(matches!(
        AppError::from_status(StatusCode::TOO_MANY_REQUESTS),
        AppError::RateLimitExceeded
    ));
    assert!(matches!(
        AppError::from_status(StatusCode::INTERNAL_SERVER_ERROR),
        AppError::Unexpected(StatusCode::INTERNAL_SERVER_ERROR)
    ));
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
    let app_error: AppError = serde_error.into();
    assert!(matches!(app_error, AppError::Json(_)));
}

#[test]
fn test_app_error_from_url_parse() {
    let parse_error = url::Url::parse("::").unwrap_err();
    let app_error: AppError = parse_error.into();
    assert!(app_error.to_string().starts_with("invalid url"));
}
