/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads `env_var` and parses it
///
/// Missing or blank variables give `None` silently; values that fail to parse
/// are logged at `error!` and also give `None`.
fn parse_env<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    let raw = env::var(env_var).ok()?;
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            error!("Failed to parse {}={:?}: {:?}, ignoring it", env_var, raw, e);
            None
        }
    }
}

/// Gets an environment variable or returns `default` when it is missing or invalid
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - Value used when the variable is unset, blank or unparsable
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    parse_env(env_var).unwrap_or(default)
}

/// Gets an environment variable and parses it, returning `None` if missing or invalid
///
/// Blank values count as missing. Invalid values are logged.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    parse_env(env_var)
}
