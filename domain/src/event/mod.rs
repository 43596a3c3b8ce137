//! Log event values passed through the bridge.
//!
//! - [`log_event::LogEvent`]: a complete event for the fluent calling convention
//! - [`marker::Marker`]: named tags with optional references
//! - [`throwable::Throwable`]: an error attached to a call

pub mod log_event;
pub mod marker;
pub mod throwable;
