//! Error types for the mock logger

pub type Result<T> = std::result::Result<T, MockLoggerError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MockLoggerError {
    /// A level argument named something outside the six known levels
    #[error("unsupported log level: {level}")]
    UnsupportedLevel { level: String },

    /// A pattern was neither an exact string nor a regular expression
    #[error("pattern must be a regexp or string")]
    InvalidPattern { found: String },
}

impl MockLoggerError {
    /// Create an unsupported level error
    pub fn unsupported_level(level: impl Into<String>) -> Self {
        MockLoggerError::UnsupportedLevel {
            level: level.into(),
        }
    }

    /// Create an invalid pattern error, `found` describing what was supplied
    pub fn invalid_pattern(found: impl Into<String>) -> Self {
        MockLoggerError::InvalidPattern {
            found: found.into(),
        }
    }
}
