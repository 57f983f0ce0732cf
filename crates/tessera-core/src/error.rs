//! Error types for the core visual primitives.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when constructing visual primitives.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// A color string could not be parsed.
    #[error("Invalid color: {value}")]
    InvalidColor {
        /// The offending input.
        value: String,
    },

    /// A color scale needs more control points than were supplied.
    #[error("Color scale needs at least {needed} stops, got {got}")]
    InsufficientStops {
        /// Minimum number of stops required.
        needed: usize,
        /// Number of stops supplied.
        got: usize,
    },

    /// A color scale's control points are invalid.
    #[error("Invalid color scale: {reason}")]
    InvalidScale {
        /// The reason the scale is invalid.
        reason: String,
    },
}

impl CoreError {
    /// Create an invalid color error.
    #[must_use]
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Create an invalid scale error.
    #[must_use]
    pub fn invalid_scale(reason: impl Into<String>) -> Self {
        Self::InvalidScale {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_color("#zzz");
        assert!(err.to_string().contains("#zzz"));

        let err = CoreError::InsufficientStops { needed: 2, got: 1 };
        assert!(err.to_string().contains("at least 2"));

        let err = CoreError::invalid_scale("stops not ascending");
        assert!(err.to_string().contains("not ascending"));
    }
}
