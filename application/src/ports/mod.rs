//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts on both sides of the bridge: the facade's
//! logger capability set (inbound) and the engine's entry points (outbound).

pub mod engine_resolver;
pub mod facade;
pub mod logging_engine;
