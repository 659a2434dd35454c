//! Pipeline Error Type
//!
//! A single propagated-failure kind: downstream handlers raise it,
//! filters pass it through unchanged to whoever delivered the event.

use thiserror::Error;

/// Error raised by a handler while processing an event.
///
/// Filters never construct this type. When a forwarded event fails
/// downstream, the error surfaces out of the same `event` call that
/// triggered it, exactly as if the filter were absent.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct SaxError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl SaxError {
    /// Create an error with a message
    pub fn new(message: impl Into<String>) -> Self {
        SaxError {
            message: message.into(),
            source: None,
        }
    }

    /// Create an error wrapping an underlying cause
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        SaxError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_message() {
        let err = SaxError::new("sink closed");
        assert_eq!(err.message(), "sink closed");
        assert_eq!(err.to_string(), "sink closed");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_with_source() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe gone");
        let err = SaxError::with_source("write failed", io);
        assert_eq!(err.to_string(), "write failed");
        assert_eq!(err.source().unwrap().to_string(), "pipe gone");
    }
}
