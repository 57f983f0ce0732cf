//! Holdings normalization.
//!
//! Converts raw feed records into the canonical universe the layout
//! engine consumes: eligible equities only, positive market values,
//! finite metrics. Everything malformed is rejected or clamped here;
//! the engine's pure functions assume well-typed input.

use crate::record::RawHolding;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tessera_heatmap::{Holding, MetricValues};

/// Asset categories treated as equity-like. A record without a category
/// counts as equity: the holdings feed only serves the equity universe
/// and tags the exceptions.
const EQUITY_CATEGORIES: [&str; 4] = ["equity", "stock", "common", "adr"];

/// Returns true if the record belongs to the eligible universe:
/// equity-like and not a static asset.
#[must_use]
pub fn is_eligible(record: &RawHolding) -> bool {
    if record.static_asset == Some(true) {
        return false;
    }
    match record.category.as_deref() {
        None => true,
        Some(category) => EQUITY_CATEGORIES
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category.trim())),
    }
}

/// Normalizes raw records into canonical holdings.
///
/// Ineligible records, non-positive or non-finite market values, and
/// blank tickers are dropped (logged, never errors). Non-finite metric
/// values become unknown. Duplicate tickers keep the last record seen.
#[must_use]
pub fn normalize(records: &[RawHolding]) -> Vec<Holding> {
    let mut holdings: Vec<Holding> = Vec::with_capacity(records.len());
    let mut seen: HashMap<String, usize> = HashMap::new();

    for record in records {
        if !is_eligible(record) {
            tracing::debug!(ticker = %record.ticker, "skipping ineligible holding");
            continue;
        }

        if !record.market_value.is_finite() || record.market_value <= 0.0 {
            tracing::warn!(
                ticker = %record.ticker,
                market_value = record.market_value,
                "dropping holding with non-positive market value"
            );
            continue;
        }

        let Some(market_value) = Decimal::from_f64_retain(record.market_value) else {
            tracing::warn!(
                ticker = %record.ticker,
                market_value = record.market_value,
                "dropping holding with unrepresentable market value"
            );
            continue;
        };

        let metrics = sanitized_metrics(record);

        let mut builder = Holding::builder()
            .ticker(record.ticker.clone())
            .market_value(market_value)
            .metrics(metrics);
        if let Some(sector) = &record.sector {
            builder = builder.sector(sector.clone());
        }

        match builder.build() {
            Ok(holding) => {
                if let Some(&i) = seen.get(&holding.ticker) {
                    tracing::warn!(ticker = %holding.ticker, "duplicate ticker, keeping last");
                    holdings[i] = holding;
                } else {
                    seen.insert(holding.ticker.clone(), holdings.len());
                    holdings.push(holding);
                }
            }
            Err(e) => {
                tracing::warn!(ticker = %record.ticker, error = %e, "dropping invalid holding");
            }
        }
    }

    holdings
}

/// Copies metric values, turning non-finite readings into unknowns.
fn sanitized_metrics(record: &RawHolding) -> MetricValues {
    let finite = |v: Option<f64>| v.filter(|x| x.is_finite());

    MetricValues {
        daily_change_pct: finite(record.daily_change_percent),
        five_day_change_pct: finite(record.five_day_change_percent),
        twenty_one_day_change_pct: finite(record.twenty_one_day_change_percent),
        momentum_weekly: finite(record.momentum_weekly),
        momentum_monthly: finite(record.momentum_monthly),
    }
}
