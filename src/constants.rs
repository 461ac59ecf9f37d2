//! Constants used throughout the crate
//!
//! This module centralizes the default format patterns so that config
//! defaults and callers agree on a single definition.

/// Default pattern for calendar dates (no time-of-day component)
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default pattern for date-time values
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
