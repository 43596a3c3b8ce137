//! Severity level value object

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Severity of a log call (Value Object)
///
/// Ordered from most verbose to most severe, so `level >= threshold`
/// reads as "at least as severe as".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// All levels, most verbose first
    pub const ALL: [Level; 5] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    /// Get the canonical upper-case name of this level
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Check whether this level passes a minimum-severity threshold
    pub fn passes(&self, threshold: Level) -> bool {
        *self >= threshold
    }
}

impl Default for Level {
    /// Returns the default threshold (INFO)
    fn default() -> Self {
        Level::Info
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Level {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(DomainError::InvalidLevel(s.to_string())),
        }
    }
}

impl Serialize for Level {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.as_str().to_ascii_lowercase())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_level_parse_is_case_insensitive() {
        assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!(" Warning ".parse::<Level>().unwrap(), Level::Warn);
    }

    #[test]
    fn test_level_parse_rejects_unknown() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err, DomainError::InvalidLevel("verbose".to_string()));
    }

    #[test]
    fn test_level_passes_threshold() {
        assert!(Level::Error.passes(Level::Warn));
        assert!(Level::Warn.passes(Level::Warn));
        assert!(!Level::Debug.passes(Level::Info));
    }

    #[test]
    fn test_level_serde_uses_lowercase() {
        let json = serde_json::to_string(&Level::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
        let parsed: Level = serde_json::from_str("\"ERROR\"").unwrap();
        assert_eq!(parsed, Level::Error);
    }

    #[test]
    fn test_level_default_is_info() {
        assert_eq!(Level::default(), Level::Info);
    }
}
