//! Error types for the feed layer.

use thiserror::Error;

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors that can occur in the feed layer.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The holdings payload could not be parsed.
    #[error("Failed to parse holdings payload: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err: FeedError = serde_json::from_str::<Vec<i32>>("not json")
            .unwrap_err()
            .into();
        assert!(err.to_string().contains("parse holdings payload"));
    }
}
