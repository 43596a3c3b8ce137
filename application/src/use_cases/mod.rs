//! Use cases: binding the engine and adapting facade calls onto it.

pub mod engine_binding;
pub mod event_builder;
pub mod logger_adapter;
pub mod logger_factory;
