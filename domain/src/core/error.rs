//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown log level: {0}")]
    InvalidLevel(String),

    #[error("Logger name cannot be empty")]
    EmptyLoggerName,

    #[error("Marker name cannot be empty")]
    EmptyMarkerName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_display() {
        let error = DomainError::InvalidLevel("verbose".to_string());
        assert_eq!(error.to_string(), "Unknown log level: verbose");
    }

    #[test]
    fn test_empty_name_display() {
        assert_eq!(
            DomainError::EmptyLoggerName.to_string(),
            "Logger name cannot be empty"
        );
    }
}
