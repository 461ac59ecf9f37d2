//! Datekit - thin date/time convenience helpers built on chrono
//!
//! This library wraps the chrono primitives most callers reach for anyway:
//! rendering a date-time as text, parsing it back, measuring the elapsed
//! time between two values, and computing a date a number of days away from
//! a reference day.
//!
//! Format patterns travel with every call as a validated
//! [`utils::datetime::FormatSpec`]; no function reads or writes shared
//! formatting state, so the whole API is safe to use from concurrent callers.
//!
//! # Modules
//!
//! * [`config`] - Default format patterns loadable from a TOML file
//! * [`constants`] - Shared default pattern definitions
//! * [`error`] - The [`DateError`] taxonomy
//! * [`utils`] - The formatting, parsing, elapsed and offset helpers

/// Configuration module for default format patterns
pub mod config;

/// Crate constants and default format patterns
pub mod constants;

/// Error types shared by all operations
pub mod error;

/// Date/time formatting, parsing and arithmetic helpers
pub mod utils;

// Re-export the types most callers need
pub use error::DateError;
pub use utils::datetime::FormatSpec;
