//! Utility modules for configuration, error handling, and math helpers.

pub mod config;
pub mod error;
pub mod math;

// Re-export commonly used error types for convenience
pub use error::{AggregateError, OutputError};
pub use math::safe_divide;
