use desktop_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("DC_TEST_VAR_STRING", "test_value");
    }
    let result: String = get_env_or_default("DC_TEST_VAR_STRING", "default".to_string());
    assert_eq!(result, "test_value");
    unsafe {
        env::remove_var("DC_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    let result: String = get_env_or_default("DC_MISSING_VAR", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("DC_TEST_VAR_INVALID", "not_a_number");
    }
    let result: u64 = get_env_or_default("DC_TEST_VAR_INVALID", 99);
    assert_eq!(result, 99);
    unsafe {
        env::remove_var("DC_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_with_existing_var() {
    unsafe {
        env::set_var("DC_TEST_VAR_OPTION", "30");
    }
    let result: Option<u64> = get_env_or_none("DC_TEST_VAR_OPTION");
    assert_eq!(result, Some(30));
    unsafe {
        env::remove_var("DC_TEST_VAR_OPTION");
    }
}

#[test]
fn test_get_env_or_none_with_empty_var() {
    unsafe {
        env::set_var("DC_TEST_VAR_EMPTY", "  ");
    }
    let result: Option<String> = get_env_or_none("DC_TEST_VAR_EMPTY");
    assert_eq!(result, None);
    unsafe {
        env::remove_var("DC_TEST_VAR_EMPTY");
    }
}

#[test]
fn test_get_env_or_none_with_missing_var() {
    let result: Option<u64> = get_env_or_none("DC_MISSING_VAR_OPTION");
    assert_eq!(result, None);
}
