//! Core domain concepts shared by events and adapters.
//!
//! - [`level::Level`]: the five severity levels
//! - [`logger_name::LoggerName`]: identity of a logger
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod level;
pub mod logger_name;
