/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{error, warn};

/// Reads an environment variable, parsing it into `T`
///
/// Falls back to `default` when the variable is unset, blank or unparseable.
/// A parse failure is logged since it usually means a typo in `.env`.
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value to use when the variable cannot be used
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) if val.trim().is_empty() => default,
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}={:?}: {:?}, using default", env_var, val, e);
            default
        }),
        Err(_) => default,
    }
}

/// Reads a secret from the environment
///
/// Returns `None` and logs a warning when the variable is missing or blank.
pub fn get_env_secret(env_var: &str) -> Option<String> {
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => Some(val.trim().to_string()),
        _ => {
            warn!("{} not found in environment variables or .env file", env_var);
            None
        }
    }
}
