//! Selectable performance metrics and their descriptors.
//!
//! A [`MetricDescriptor`] bundles the metric-specific pieces (clamp
//! range, color stops, label format) so a single sizing/coloring/tree
//! implementation serves every heatmap variant.

use serde::{Deserialize, Serialize};
use tessera_core::{Color, ColorScale, LabelFormat};

/// The performance metric driving tile sizing and coloring.
///
/// Serializes as its wire key (`"dailyChange"`, `"priceChange5d"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricId {
    /// Intraday price change, percent.
    #[default]
    DailyChange,

    /// Five-session price change, percent.
    PriceChange5d,

    /// Twenty-one-session price change, percent.
    PriceChange21d,

    /// Weekly relative-momentum score.
    PortfolioMomentum5d,

    /// Monthly relative-momentum score.
    PortfolioMomentum21d,
}

impl MetricId {
    /// All selectable metrics, in dropdown order.
    pub const ALL: [MetricId; 5] = [
        Self::DailyChange,
        Self::PriceChange5d,
        Self::PriceChange21d,
        Self::PortfolioMomentum5d,
        Self::PortfolioMomentum21d,
    ];

    /// Returns a human-readable name for the metric.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::DailyChange => "Daily Change",
            Self::PriceChange5d => "5-Day Change",
            Self::PriceChange21d => "21-Day Change",
            Self::PortfolioMomentum5d => "Weekly Momentum",
            Self::PortfolioMomentum21d => "Monthly Momentum",
        }
    }

    /// Returns a short code for the metric.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::DailyChange => "1D",
            Self::PriceChange5d => "5D",
            Self::PriceChange21d => "21D",
            Self::PortfolioMomentum5d => "MOM5",
            Self::PortfolioMomentum21d => "MOM21",
        }
    }

    /// Returns the wire key used by the dashboard contract.
    #[must_use]
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::DailyChange => "dailyChange",
            Self::PriceChange5d => "priceChange5d",
            Self::PriceChange21d => "priceChange21d",
            Self::PortfolioMomentum5d => "portfolioMomentum5d",
            Self::PortfolioMomentum21d => "portfolioMomentum21d",
        }
    }

    /// Parses a wire key, case-insensitively.
    #[must_use]
    pub fn parse_key(key: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_key().eq_ignore_ascii_case(key))
    }

    /// Returns true for momentum-style metrics (dimensionless scores).
    #[must_use]
    pub fn is_momentum(&self) -> bool {
        matches!(self, Self::PortfolioMomentum5d | Self::PortfolioMomentum21d)
    }
}

impl std::fmt::Display for MetricId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Metric-specific tuning for sizing, coloring, and labeling.
///
/// The clamp ranges below are tuned by inspection, not derived; they are
/// kept as overridable fields rather than inlined constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDescriptor {
    /// The metric this descriptor tunes.
    pub id: MetricId,

    /// Symmetric clamp range for the move multiplier: values are clamped
    /// to `[-clamp_range, clamp_range]` before normalization.
    pub clamp_range: f64,

    /// Color scale mapping metric values to display colors.
    pub scale: ColorScale,

    /// Label format for tile/header labels.
    pub format: LabelFormat,
}

impl MetricDescriptor {
    /// Returns the tuned descriptor for a metric.
    #[must_use]
    pub fn for_metric(id: MetricId) -> Self {
        let (clamp_range, scale, format) = match id {
            MetricId::DailyChange => (6.0, ColorScale::price_change(), LabelFormat::SignedPercent),
            MetricId::PriceChange5d => {
                (10.0, ColorScale::price_change(), LabelFormat::SignedPercent)
            }
            MetricId::PriceChange21d => {
                (18.0, ColorScale::price_change(), LabelFormat::SignedPercent)
            }
            MetricId::PortfolioMomentum5d | MetricId::PortfolioMomentum21d => {
                (2.5, ColorScale::momentum(), LabelFormat::SignedScore)
            }
        };

        Self {
            id,
            clamp_range,
            scale,
            format,
        }
    }

    /// Overrides the clamp range.
    #[must_use]
    pub fn with_clamp_range(mut self, range: f64) -> Self {
        self.clamp_range = range;
        self
    }

    /// Overrides the color scale.
    #[must_use]
    pub fn with_scale(mut self, scale: ColorScale) -> Self {
        self.scale = scale;
        self
    }

    /// Overrides the label format.
    #[must_use]
    pub fn with_format(mut self, format: LabelFormat) -> Self {
        self.format = format;
        self
    }

    /// Resolves the display color for a metric value.
    #[must_use]
    pub fn color_for(&self, value: Option<f64>) -> Color {
        self.scale.color_for(value)
    }

    /// Formats the display label for a metric value.
    #[must_use]
    pub fn label_for(&self, value: Option<f64>) -> String {
        self.format.format(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(MetricId::default(), MetricId::DailyChange);
    }

    #[test]
    fn test_key_round_trip() {
        for metric in MetricId::ALL {
            assert_eq!(MetricId::parse_key(metric.as_key()), Some(metric));
        }
        assert_eq!(MetricId::parse_key("DAILYCHANGE"), Some(MetricId::DailyChange));
        assert_eq!(MetricId::parse_key("bogus"), None);
    }

    #[test]
    fn test_serde_matches_wire_keys() {
        for metric in MetricId::ALL {
            let json = serde_json::to_string(&metric).unwrap();
            assert_eq!(json, format!("\"{}\"", metric.as_key()));
        }
    }

    #[test]
    fn test_is_momentum() {
        assert!(!MetricId::DailyChange.is_momentum());
        assert!(!MetricId::PriceChange21d.is_momentum());
        assert!(MetricId::PortfolioMomentum5d.is_momentum());
        assert!(MetricId::PortfolioMomentum21d.is_momentum());
    }

    #[test]
    fn test_descriptor_families() {
        let daily = MetricDescriptor::for_metric(MetricId::DailyChange);
        assert_eq!(daily.format, LabelFormat::SignedPercent);
        assert_eq!(daily.clamp_range, 6.0);

        let momentum = MetricDescriptor::for_metric(MetricId::PortfolioMomentum21d);
        assert_eq!(momentum.format, LabelFormat::SignedScore);
        assert_eq!(momentum.scale, ColorScale::momentum());
    }

    #[test]
    fn test_descriptor_overrides() {
        let descriptor = MetricDescriptor::for_metric(MetricId::DailyChange)
            .with_clamp_range(4.0)
            .with_format(LabelFormat::SignedScore);

        assert_eq!(descriptor.clamp_range, 4.0);
        assert_eq!(descriptor.format, LabelFormat::SignedScore);
        assert_eq!(descriptor.id, MetricId::DailyChange);
    }

    #[test]
    fn test_labels() {
        let daily = MetricDescriptor::for_metric(MetricId::DailyChange);
        assert_eq!(daily.label_for(Some(2.5)), "+2.50%");
        assert_eq!(daily.label_for(None), "n/a");

        let momentum = MetricDescriptor::for_metric(MetricId::PortfolioMomentum5d);
        assert_eq!(momentum.label_for(Some(-1.23)), "-1.2");
    }
}
