//! Canonical holding representation consumed by the layout engine.
//!
//! Holdings arrive already normalized: a single reporting currency,
//! filtered to the eligible universe. The engine never fetches or
//! converts anything itself.

use super::MetricId;
use crate::error::{HeatmapError, HeatmapResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Optional performance metrics for a holding.
///
/// Absence means "unknown", never zero. Unknown values are excluded from
/// weighted averages but the holding itself stays in the visual tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricValues {
    /// Intraday change, in percent.
    pub daily_change_pct: Option<f64>,

    /// Five-session price change, in percent.
    pub five_day_change_pct: Option<f64>,

    /// Twenty-one-session price change, in percent.
    pub twenty_one_day_change_pct: Option<f64>,

    /// Weekly relative-momentum score (dimensionless).
    pub momentum_weekly: Option<f64>,

    /// Monthly relative-momentum score (dimensionless).
    pub momentum_monthly: Option<f64>,
}

impl MetricValues {
    /// Creates new empty metrics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the intraday change.
    #[must_use]
    pub fn with_daily_change(mut self, pct: f64) -> Self {
        self.daily_change_pct = Some(pct);
        self
    }

    /// Sets the five-day price change.
    #[must_use]
    pub fn with_five_day_change(mut self, pct: f64) -> Self {
        self.five_day_change_pct = Some(pct);
        self
    }

    /// Sets the twenty-one-day price change.
    #[must_use]
    pub fn with_twenty_one_day_change(mut self, pct: f64) -> Self {
        self.twenty_one_day_change_pct = Some(pct);
        self
    }

    /// Sets the weekly momentum score.
    #[must_use]
    pub fn with_momentum_weekly(mut self, score: f64) -> Self {
        self.momentum_weekly = Some(score);
        self
    }

    /// Sets the monthly momentum score.
    #[must_use]
    pub fn with_momentum_monthly(mut self, score: f64) -> Self {
        self.momentum_monthly = Some(score);
        self
    }

    /// Returns the value for the given metric, if known.
    #[must_use]
    pub fn get(&self, metric: MetricId) -> Option<f64> {
        match metric {
            MetricId::DailyChange => self.daily_change_pct,
            MetricId::PriceChange5d => self.five_day_change_pct,
            MetricId::PriceChange21d => self.twenty_one_day_change_pct,
            MetricId::PortfolioMomentum5d => self.momentum_weekly,
            MetricId::PortfolioMomentum21d => self.momentum_monthly,
        }
    }

    /// Returns all values as an array for validation.
    fn values(&self) -> [Option<f64>; 5] {
        [
            self.daily_change_pct,
            self.five_day_change_pct,
            self.twenty_one_day_change_pct,
            self.momentum_weekly,
            self.momentum_monthly,
        ]
    }
}

/// A single normalized holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol, unique within a snapshot.
    pub ticker: String,

    /// Market value in the reporting currency. Never negative.
    pub market_value: Decimal,

    /// Sector label. `None` is grouped under the reserved `"Other"` label.
    pub sector: Option<String>,

    /// Optional performance metrics.
    pub metrics: MetricValues,
}

impl Holding {
    /// Creates a new holding builder.
    #[must_use]
    pub fn builder() -> HoldingBuilder {
        HoldingBuilder::new()
    }

    /// Market value as `f64` for visual-size arithmetic.
    #[must_use]
    pub fn market_value_f64(&self) -> f64 {
        self.market_value.to_f64().unwrap_or(0.0)
    }

    /// Returns the value of the given metric, if known.
    #[must_use]
    pub fn metric_value(&self, metric: MetricId) -> Option<f64> {
        self.metrics.get(metric)
    }
}

/// Builder for constructing a [`Holding`].
#[derive(Debug, Clone, Default)]
pub struct HoldingBuilder {
    ticker: Option<String>,
    market_value: Option<Decimal>,
    sector: Option<String>,
    metrics: MetricValues,
}

impl HoldingBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ticker symbol.
    #[must_use]
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Sets the market value.
    #[must_use]
    pub fn market_value(mut self, value: Decimal) -> Self {
        self.market_value = Some(value);
        self
    }

    /// Sets the sector label.
    #[must_use]
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Sets the performance metrics.
    #[must_use]
    pub fn metrics(mut self, metrics: MetricValues) -> Self {
        self.metrics = metrics;
        self
    }

    /// Builds the holding.
    ///
    /// Blank sector labels are normalized to `None` here, so downstream
    /// grouping only deals with one spelling of "missing".
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker is missing or blank, the market
    /// value is missing or negative, or any metric value is non-finite.
    pub fn build(self) -> HeatmapResult<Holding> {
        let ticker = self
            .ticker
            .ok_or_else(|| HeatmapError::missing_field("ticker"))?;

        if ticker.trim().is_empty() {
            return Err(HeatmapError::missing_field("ticker"));
        }

        let market_value = self
            .market_value
            .ok_or_else(|| HeatmapError::missing_field("market_value"))?;

        if market_value < Decimal::ZERO {
            return Err(HeatmapError::invalid_holding(
                &ticker,
                "market_value cannot be negative",
            ));
        }

        if self.metrics.values().iter().flatten().any(|v| !v.is_finite()) {
            return Err(HeatmapError::invalid_holding(
                &ticker,
                "metric values must be finite",
            ));
        }

        let sector = self
            .sector
            .filter(|s| !s.trim().is_empty());

        Ok(Holding {
            ticker,
            market_value,
            sector,
            metrics: self.metrics,
        })
    }
}
