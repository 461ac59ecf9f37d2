//! Utility modules for the datekit crate.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date-time formatting, parsing and elapsed-duration helpers
//! - [`date`] - Calendar-date offsets relative to today or a reference date
//!
//! All utilities are pure functions over chrono value types. Nothing here
//! holds state between calls: format patterns travel with every call as a
//! [`datetime::FormatSpec`], so instances can be shared freely.

pub mod date;
pub mod datetime;
