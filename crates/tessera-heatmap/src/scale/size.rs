//! Tile sizing: capital weight blended with move magnitude.
//!
//! The visual area of a tile answers two questions at once: "how much
//! capital is this?" and "is something happening here?". Capital enters
//! through a square root, so holdings spanning orders of magnitude stay
//! on one screen; the day's move enters through a bounded multiplier.

use crate::types::{LayoutConfig, MetricDescriptor};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Square-root compression of a market value.
///
/// Without it, a mega-cap holding would visually erase everything else.
#[must_use]
pub fn base_magnitude(market_value: Decimal) -> f64 {
    market_value.to_f64().unwrap_or(0.0).max(0.0).sqrt()
}

/// The move multiplier for a metric value.
///
/// The value is clamped to the descriptor's symmetric range and
/// normalized to `[-1, 1]`. `move_weight` rewards any large move, up or
/// down; `direction_bias` (non-positive) additionally applies to the
/// downside magnitude, so an equal-magnitude down move yields a strictly
/// smaller tile than the up move. The result never drops below
/// `multiplier_floor`. Unknown values carry no bias: multiplier is
/// exactly 1.
#[must_use]
pub fn move_multiplier(
    metric_value: Option<f64>,
    descriptor: &MetricDescriptor,
    config: &LayoutConfig,
) -> f64 {
    let Some(value) = metric_value.filter(|v| v.is_finite()) else {
        return 1.0;
    };
    let range = descriptor.clamp_range;
    if range <= 0.0 {
        return 1.0;
    }

    let normalized = value.clamp(-range, range) / range;
    let downside = (-normalized).max(0.0);
    let raw = 1.0 + config.move_weight * normalized.abs() + config.direction_bias * downside;

    raw.max(config.multiplier_floor)
}

/// Visual area for one ticker tile.
#[must_use]
pub fn tile_size(
    market_value: Decimal,
    metric_value: Option<f64>,
    descriptor: &MetricDescriptor,
    config: &LayoutConfig,
) -> f64 {
    base_magnitude(market_value) * move_multiplier(metric_value, descriptor, config)
}

/// Header reservation for a sector.
///
/// The minimum keeps a sector label legible even for a sector consisting
/// of one tiny holding.
#[must_use]
pub fn header_size(tile_size_total: f64, fraction: f64, minimum: f64) -> f64 {
    (tile_size_total * fraction).max(minimum)
}
