//! Error types for the heatmap engine.
//!
//! The engine itself has no failure modes beyond degraded/missing data,
//! which it treats as values. Errors exist only at construction
//! boundaries: holding builders and layout configuration.

use thiserror::Error;

/// Result type for heatmap operations.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Errors that can occur while constructing heatmap inputs.
#[derive(Error, Debug, Clone)]
pub enum HeatmapError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Invalid holding data.
    #[error("Invalid holding '{ticker}': {reason}")]
    InvalidHolding {
        /// The holding ticker.
        ticker: String,
        /// The reason the holding is invalid.
        reason: String,
    },

    /// Invalid layout configuration.
    #[error("Invalid layout config: {reason}")]
    InvalidConfig {
        /// The reason the configuration is invalid.
        reason: String,
    },
}

impl HeatmapError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid holding error.
    #[must_use]
    pub fn invalid_holding(ticker: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHolding {
            ticker: ticker.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid config error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HeatmapError::missing_field("ticker");
        assert!(err.to_string().contains("ticker"));

        let err = HeatmapError::invalid_holding("AAPL", "negative market value");
        assert!(err.to_string().contains("AAPL"));
        assert!(err.to_string().contains("negative market value"));

        let err = HeatmapError::invalid_config("header_fraction out of range");
        assert!(err.to_string().contains("header_fraction"));
    }
}
