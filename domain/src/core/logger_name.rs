//! Logger name value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Name of the root logger
pub const ROOT_LOGGER_NAME: &str = "ROOT";

/// Identity of a logger (Value Object)
///
/// Usually a module path or dotted class-like name. The bridge only passes it
/// through so the engine can tag emitted events; nothing is indexed by it
/// except the factory cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerName(Arc<str>);

impl LoggerName {
    /// Create a logger name, rejecting empty or whitespace-only input
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let name = name.as_ref();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyLoggerName);
        }
        Ok(Self(Arc::from(name)))
    }

    /// The root logger's name
    pub fn root() -> Self {
        Self(Arc::from(ROOT_LOGGER_NAME))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        &*self.0 == ROOT_LOGGER_NAME
    }
}

impl TryFrom<String> for LoggerName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LoggerName> for String {
    fn from(value: LoggerName) -> Self {
        value.0.to_string()
    }
}

impl std::fmt::Display for LoggerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for LoggerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_name_rejects_blank() {
        assert_eq!(LoggerName::new("  "), Err(DomainError::EmptyLoggerName));
        assert_eq!(LoggerName::new(""), Err(DomainError::EmptyLoggerName));
    }

    #[test]
    fn test_logger_name_display() {
        let name = LoggerName::new("app::db").unwrap();
        assert_eq!(name.to_string(), "app::db");
        assert!(!name.is_root());
    }

    #[test]
    fn test_root_logger_name() {
        let root = LoggerName::root();
        assert_eq!(root.as_str(), ROOT_LOGGER_NAME);
        assert!(root.is_root());
    }

    #[test]
    fn test_logger_name_serde_validates() {
        let parsed: LoggerName = serde_json::from_str("\"svc.http\"").unwrap();
        assert_eq!(parsed.as_str(), "svc.http");
        assert!(serde_json::from_str::<LoggerName>("\"\"").is_err());
    }
}
