//! Shared utilities
//!
//! Logging and progress reporting used by the CLI layer.

pub mod logger;
pub mod progress;
