//! Message patterns and placeholder rendering.

pub mod pattern;

pub use pattern::{MessagePattern, render};
