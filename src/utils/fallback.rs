use crate::error::ResourceResult;
use tracing::error;

/// Default-on-failure helpers for presentation code
///
/// Each method logs the swallowed error with the given context before
/// returning the fallback, so failures stay visible in the logs.
pub trait FallbackExt<T> {
    /// Returns the value, or `T::default()` on failure
    fn or_default_logged(self, context: &str) -> T
    where
        T: Default;

    /// Returns `Some(value)`, or `None` on failure
    fn ok_logged(self, context: &str) -> Option<T>;
}

impl<T> FallbackExt<T> for ResourceResult<T> {
    fn or_default_logged(self, context: &str) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|e| {
            error!("{}: {}", context, e);
            T::default()
        })
    }

    fn ok_logged(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                error!("{}: {}", context, e);
                None
            }
        }
    }
}

/// Collapses a unit result into a success flag, logging the failure
pub fn succeeded(result: ResourceResult<()>, context: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            error!("{}: {}", context, e);
            false
        }
    }
}
