//! Error types for date/time operations.

/// Common error type for all date/time operations.
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    /// A required argument was empty, blank, non-positive or otherwise
    /// unusable. Raised before any chrono call is made.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Text did not match the format pattern. Propagated from chrono
    /// unchanged rather than wrapped in a local message.
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),
}
