//! Date-time formatting, parsing and elapsed-duration helpers
//!
//! All functions here take the format specification explicitly; the crate
//! holds no "current format" state, so sharing across callers is safe.

use chrono::format::{Fixed, Item, StrftimeItems};
use chrono::NaiveDateTime;

use crate::error::DateError;

/// A validated, immutable strftime format pattern.
///
/// Construction rejects blank patterns, tokens chrono does not recognize,
/// and timezone tokens a naive date-time cannot render, so formatting with
/// an accepted spec cannot fail later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    pattern: String,
}

impl FormatSpec {
    /// Validate a pattern and wrap it as a `FormatSpec`.
    ///
    /// # Arguments
    /// * `pattern` - strftime pattern, e.g. `"%Y-%m-%d %H:%M"`
    ///
    /// # Returns
    /// * `Result<FormatSpec, DateError>` - the spec, or `InvalidArgument` if
    ///   the pattern is blank, contains an unrecognized token, or contains a
    ///   timezone token
    pub fn new(pattern: impl Into<String>) -> Result<Self, DateError> {
        let pattern = pattern.into();
        if pattern.trim().is_empty() {
            return Err(DateError::InvalidArgument("no format pattern provided".to_string()));
        }
        // chrono only reports bad tokens when the pattern is used, and
        // formatting with one panics at display time. Checking here keeps
        // format_datetime infallible.
        for item in StrftimeItems::new(&pattern) {
            if matches!(item, Item::Error) {
                return Err(DateError::InvalidArgument(format!(
                    "unrecognized token in format pattern '{pattern}'"
                )));
            }
            // Offset/timezone tokens also panic at display time: naive
            // date-times carry no offset to render them from.
            if requires_offset(&item) {
                return Err(DateError::InvalidArgument(format!(
                    "timezone token in format pattern '{pattern}' is not supported for naive date-times"
                )));
            }
        }
        Ok(Self { pattern })
    }

    /// The underlying strftime pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Whether formatting this item needs a UTC offset, which naive values lack.
fn requires_offset(item: &Item<'_>) -> bool {
    matches!(
        item,
        Item::Fixed(
            Fixed::TimezoneName
                | Fixed::TimezoneOffset
                | Fixed::TimezoneOffsetColon
                | Fixed::TimezoneOffsetColonZ
                | Fixed::TimezoneOffsetDoubleColon
                | Fixed::TimezoneOffsetTripleColon
                | Fixed::TimezoneOffsetZ
                | Fixed::RFC2822
                | Fixed::RFC3339
        )
    )
}

/// Render a date-time value as text using the spec's pattern.
pub fn format_datetime(datetime: NaiveDateTime, spec: &FormatSpec) -> String {
    datetime.format(spec.pattern()).to_string()
}

/// Parse text into a date-time value using the spec's pattern.
///
/// # Arguments
/// * `text` - textual date-time, e.g. `"2024-01-15 09:30"`
/// * `spec` - the pattern the text must match
///
/// # Returns
/// * `Result<NaiveDateTime, DateError>` - parsed value, `InvalidArgument` if
///   the text is empty or blank, or the chrono parse error if it does not
///   match the pattern
pub fn parse_datetime(text: &str, spec: &FormatSpec) -> Result<NaiveDateTime, DateError> {
    if text.trim().is_empty() {
        return Err(DateError::InvalidArgument("no date text provided".to_string()));
    }
    let datetime = NaiveDateTime::parse_from_str(text, spec.pattern())?;
    Ok(datetime)
}

/// Minutes elapsed from `start` to `end`, truncated toward zero.
///
/// Negative when `end` precedes `start`.
pub fn elapsed_minutes(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    end.signed_duration_since(start).num_minutes()
}

/// Whole hours elapsed from `start` to `end`, truncated toward zero.
pub fn elapsed_hours(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    end.signed_duration_since(start).num_hours()
}

/// Whole days elapsed from `start` to `end`, truncated toward zero.
pub fn elapsed_days(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    end.signed_duration_since(start).num_days()
}
