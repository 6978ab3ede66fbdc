//! Builder methods for creating errors with context

use super::types::Error;
use std::fmt::Debug;

impl Error {
    /// Create a missing value error
    #[must_use]
    pub fn missing_value(context: impl Into<String>) -> Self {
        Error::MissingValue {
            context: context.into(),
        }
    }

    /// Create a missing key error from the key's debug representation
    #[must_use]
    pub fn missing_key<K: Debug + ?Sized>(key: &K) -> Self {
        Error::MissingKey {
            key: format!("{key:?}"),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Wrap this error with a context message
    #[must_use]
    pub fn with_context(self, message: impl Into<String>) -> Self {
        Error::Context {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error, or any error it wraps, is a missing value or key
    pub fn is_absence(&self) -> bool {
        match self {
            Error::MissingValue { .. } | Error::MissingKey { .. } => true,
            Error::Configuration { .. } => false,
            Error::Context { source, .. } => source.is_absence(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_uses_debug_rendering() {
        let err = Error::missing_key("alpha");
        assert_eq!(err.to_string(), "key \"alpha\" is not present in the map");
    }

    #[test]
    fn test_context_wraps_source() {
        let err = Error::missing_value("port").with_context("loading settings");
        assert_eq!(
            err.to_string(),
            "loading settings: expected a value for port, found nothing"
        );
        assert!(err.is_absence());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_configuration_is_not_absence() {
        assert!(!Error::configuration("bad filter").is_absence());
    }
}
