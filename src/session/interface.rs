/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use chrono::Duration;
use std::fmt;

/// Key-value storage backing the client session
///
/// Plays the role of the browser cookie jar and local storage: the bearer
/// token and a handful of session-derived values live here. Implementations
/// must replace values atomically; a reader sees either the old or the new
/// value, never a partial write.
pub trait SessionStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent or expired
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value
    ///
    /// When `ttl` is set the value expires after that duration.
    fn set(&self, key: &str, value: &str, ttl: Option<Duration>);

    /// Removes the value stored under `key`
    fn remove(&self, key: &str);

    /// Removes every key in `keys` in a single step
    fn remove_all(&self, keys: &[&str]) {
        for key in keys {
            self.remove(key);
        }
    }
}

/// Opaque bearer token proving an authenticated session
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a raw token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token
    #[must_use]
    pub fn token(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header for this credential
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens must not leak into logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
