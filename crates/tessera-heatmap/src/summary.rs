//! Visible-scope summary for the strip above the heatmap.

use crate::aggregate::sector_label;
use crate::parallel::maybe_parallel_fold;
use crate::types::{Holding, LayoutConfig, MetricId};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals for the currently visible scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleSummary {
    /// The drilled sector, or `None` for the overview.
    pub scope: Option<String>,

    /// Total market value of visible holdings.
    pub total_market_value: Decimal,

    /// Capital-weighted average of the active metric over visible
    /// holdings with a known value; `None` when none have one.
    pub weighted_change: Option<f64>,

    /// Number of visible holdings.
    pub holding_count: usize,
}

/// Computes the summary for the visible scope.
///
/// A `zoomed_sector` that matches no holding falls back to the overview
/// scope, mirroring the treemap builder, so the summary strip and the
/// tree never disagree about what is visible.
#[must_use]
pub fn visible_summary(
    holdings: &[Holding],
    metric: MetricId,
    zoomed_sector: Option<&str>,
    config: &LayoutConfig,
) -> VisibleSummary {
    let eligible: Vec<&Holding> = holdings
        .iter()
        .filter(|h| h.market_value > Decimal::ZERO)
        .collect();

    let scope = zoomed_sector
        .filter(|name| eligible.iter().any(|h| sector_label(h) == *name))
        .map(str::to_string);

    let visible: Vec<&Holding> = match scope.as_deref() {
        Some(name) => eligible
            .iter()
            .copied()
            .filter(|h| sector_label(h) == name)
            .collect(),
        None => eligible,
    };

    let total_market_value: Decimal = visible.iter().map(|h| h.market_value).sum();

    let (sum_weighted, sum_weights) = maybe_parallel_fold(
        &visible,
        config,
        (0.0_f64, 0.0_f64),
        |(sum_w, sum_wt), h| {
            if let Some(value) = h.metric_value(metric) {
                let weight = h.market_value.to_f64().unwrap_or(0.0);
                (sum_w + value * weight, sum_wt + weight)
            } else {
                (sum_w, sum_wt)
            }
        },
        |(a, b), (c, d)| (a + c, b + d),
    );

    let weighted_change = if sum_weights > 0.0 {
        Some(sum_weighted / sum_weights)
    } else {
        None
    };

    VisibleSummary {
        scope,
        total_market_value,
        weighted_change,
        holding_count: visible.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MetricValues;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    fn holding(ticker: &str, mv: Decimal, sector: &str, daily: Option<f64>) -> Holding {
        let mut builder = Holding::builder()
            .ticker(ticker)
            .market_value(mv)
            .sector(sector);
        if let Some(pct) = daily {
            builder = builder.metrics(MetricValues::new().with_daily_change(pct));
        }
        builder.build().unwrap()
    }

    fn sample() -> Vec<Holding> {
        vec![
            holding("AAA", dec!(100), "Tech", Some(2.0)),
            holding("BBB", dec!(300), "Tech", Some(-2.0)),
            holding("CCC", dec!(600), "Energy", None),
        ]
    }

    #[test]
    fn test_overview_scope() {
        let summary = visible_summary(
            &sample(),
            MetricId::DailyChange,
            None,
            &LayoutConfig::default(),
        );

        assert_eq!(summary.scope, None);
        assert_eq!(summary.total_market_value, dec!(1000));
        assert_eq!(summary.holding_count, 3);
        // CCC's capital is visible but not in the weighted change
        assert_relative_eq!(
            summary.weighted_change.unwrap(),
            (2.0 * 100.0 - 2.0 * 300.0) / 400.0
        );
    }

    #[test]
    fn test_drilled_scope() {
        let summary = visible_summary(
            &sample(),
            MetricId::DailyChange,
            Some("Tech"),
            &LayoutConfig::default(),
        );

        assert_eq!(summary.scope.as_deref(), Some("Tech"));
        assert_eq!(summary.total_market_value, dec!(400));
        assert_eq!(summary.holding_count, 2);
    }

    #[test]
    fn test_all_unknown_scope_has_no_change() {
        let summary = visible_summary(
            &sample(),
            MetricId::DailyChange,
            Some("Energy"),
            &LayoutConfig::default(),
        );

        assert_eq!(summary.total_market_value, dec!(600));
        assert_eq!(summary.weighted_change, None);
    }

    #[test]
    fn test_unknown_sector_falls_back_to_overview() {
        let summary = visible_summary(
            &sample(),
            MetricId::DailyChange,
            Some("Gone"),
            &LayoutConfig::default(),
        );

        assert_eq!(summary.scope, None);
        assert_eq!(summary.total_market_value, dec!(1000));
    }

    #[test]
    fn test_empty_holdings() {
        let summary = visible_summary(&[], MetricId::DailyChange, None, &LayoutConfig::default());

        assert_eq!(summary.total_market_value, Decimal::ZERO);
        assert_eq!(summary.weighted_change, None);
        assert_eq!(summary.holding_count, 0);
    }
}
