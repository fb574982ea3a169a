//! Patterns used to search recorded messages
//!
//! A [`Pattern`] is either an exact string, compared by equality, or a
//! regular expression, tested with a search anywhere in the message.
//! Anything else is rejected with [`MockLoggerError::InvalidPattern`] when it
//! is converted, so the query methods only ever see the two valid shapes.

use super::error::{MockLoggerError, Result};
use regex::Regex;
use serde_json::Value;

#[derive(Debug, Clone)]
pub enum Pattern {
    Exact(String),
    Regex(Regex),
}

impl Pattern {
    /// Compile `source` into a regex pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use mock_logger_system::Pattern;
    ///
    /// let pattern = Pattern::regex(r" 2$").unwrap();
    /// assert!(pattern.matches("info message 2"));
    /// assert!(Pattern::regex("(").is_err());
    /// ```
    pub fn regex(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(Pattern::Regex)
            .map_err(|e| MockLoggerError::invalid_pattern(format!("regex `{}`: {}", source, e)))
    }

    pub fn matches(&self, message: &str) -> bool {
        match self {
            Pattern::Exact(text) => message == text,
            Pattern::Regex(re) => re.is_match(message),
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Pattern::Exact(a), Pattern::Exact(b)) => a == b,
            (Pattern::Regex(a), Pattern::Regex(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Pattern::Exact(text.to_string())
    }
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        Pattern::Exact(text)
    }
}

impl From<&String> for Pattern {
    fn from(text: &String) -> Self {
        Pattern::Exact(text.clone())
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Pattern::Regex(re)
    }
}

impl From<&Regex> for Pattern {
    fn from(re: &Regex) -> Self {
        Pattern::Regex(re.clone())
    }
}

/// Convert a dynamically typed value into a pattern.
///
/// A JSON string is an exact pattern and `{"regex": "<source>"}` is a regex
/// pattern. Numbers, booleans, null, arrays and any other object are rejected.
impl TryFrom<Value> for Pattern {
    type Error = MockLoggerError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Pattern::Exact(text)),
            Value::Object(map) if map.len() == 1 => match map.get("regex") {
                Some(Value::String(source)) => Pattern::regex(source),
                _ => Err(MockLoggerError::invalid_pattern("object")),
            },
            other => Err(MockLoggerError::invalid_pattern(json_kind(&other))),
        }
    }
}

impl TryFrom<&Value> for Pattern {
    type Error = MockLoggerError;

    fn try_from(value: &Value) -> Result<Self> {
        Pattern::try_from(value.clone())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Anything accepted where a pattern is expected.
///
/// Conversion happens at the call boundary, so an invalid input fails the
/// same way no matter which query method received it.
pub trait IntoPattern {
    fn into_pattern(self) -> Result<Pattern>;
}

impl IntoPattern for Pattern {
    fn into_pattern(self) -> Result<Pattern> {
        Ok(self)
    }
}

impl IntoPattern for &Pattern {
    fn into_pattern(self) -> Result<Pattern> {
        Ok(self.clone())
    }
}

impl IntoPattern for &str {
    fn into_pattern(self) -> Result<Pattern> {
        Ok(self.into())
    }
}

impl IntoPattern for String {
    fn into_pattern(self) -> Result<Pattern> {
        Ok(self.into())
    }
}

impl IntoPattern for &String {
    fn into_pattern(self) -> Result<Pattern> {
        Ok(self.into())
    }
}

impl IntoPattern for Regex {
    fn into_pattern(self) -> Result<Pattern> {
        Ok(self.into())
    }
}

impl IntoPattern for &Regex {
    fn into_pattern(self) -> Result<Pattern> {
        Ok(self.into())
    }
}

impl IntoPattern for Value {
    fn into_pattern(self) -> Result<Pattern> {
        Pattern::try_from(self)
    }
}

impl IntoPattern for &Value {
    fn into_pattern(self) -> Result<Pattern> {
        Pattern::try_from(self)
    }
}
