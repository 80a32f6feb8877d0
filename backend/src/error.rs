//! Error types for the timeline boundary.
//!
//! The layout pipeline itself is total. These errors come from the edges:
//! turning wire data into periods and loading configuration.

/// Result type for fallible timeline operations
pub type TimelineResult<T> = Result<T, TimelineError>;

/// Error type for timeline input and configuration handling
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimelineError {
    /// Configuration file could not be read, parsed, or validated.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A date string could not be interpreted as a calendar date.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate { value: String, message: String },

    /// A period violates its own invariants (e.g. ends before it starts).
    #[error("Invalid period {id}: {message}")]
    InvalidPeriod { id: String, message: String },
}

impl TimelineError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid date error.
    pub fn invalid_date(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an invalid period error.
    pub fn invalid_period(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPeriod {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Whether the error was caused by caller-supplied input.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidDate { .. } | Self::InvalidPeriod { .. })
    }
}
