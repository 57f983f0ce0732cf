//! Display-label formatting for metric values.

use serde::{Deserialize, Serialize};

/// Label shown for a missing metric value.
pub const MISSING_LABEL: &str = "n/a";

/// How a metric value is rendered as a tile/header label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum LabelFormat {
    /// Signed percentage with two decimals, e.g. `+3.25%`.
    #[default]
    SignedPercent,

    /// Signed dimensionless score with one decimal, e.g. `-1.4`.
    SignedScore,
}

impl LabelFormat {
    /// Formats a known metric value.
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        match self {
            Self::SignedPercent => format!("{value:+.2}%"),
            Self::SignedScore => format!("{value:+.1}"),
        }
    }

    /// Formats an optional metric value, using [`MISSING_LABEL`] for `None`.
    #[must_use]
    pub fn format(&self, value: Option<f64>) -> String {
        match value.filter(|v| v.is_finite()) {
            Some(v) => self.format_value(v),
            None => MISSING_LABEL.to_string(),
        }
    }
}
