//! Sector aggregation.
//!
//! Groups eligible holdings by sector and computes each group's totals,
//! capital-weighted metric, and member tiles.

use crate::parallel::maybe_parallel_map;
use crate::scale::{header_size, tile_size};
use crate::types::{Holding, LayoutConfig, MetricDescriptor, MetricId};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reserved sector label for holdings without a sector.
pub const OTHER_SECTOR: &str = "Other";

/// Returns the grouping label for a holding.
#[must_use]
pub fn sector_label(holding: &Holding) -> &str {
    match holding.sector.as_deref() {
        Some(s) if !s.trim().is_empty() => s,
        _ => OTHER_SECTOR,
    }
}

/// One ticker within a sector group, with its computed tile size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberTile {
    /// Ticker symbol.
    pub ticker: String,

    /// Market value in the reporting currency.
    pub market_value: Decimal,

    /// Value of the active metric, if known.
    pub metric_value: Option<f64>,

    /// Weekly momentum score, carried for tooltips.
    pub momentum_weekly: Option<f64>,

    /// Monthly momentum score, carried for tooltips.
    pub momentum_monthly: Option<f64>,

    /// Computed visual area for this tile.
    pub tile_size: f64,
}

/// Aggregated view of one sector, rebuilt on every recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorGroup {
    /// Sector label.
    pub sector: String,

    /// Total market value of all members.
    pub total_market_value: Decimal,

    /// Capital-weighted average of the active metric across members with
    /// a known value. `None` when no member has one. Members with unknown
    /// values still count toward market value and visual size.
    pub weighted_metric: Option<f64>,

    /// Sum of member tile sizes, excluding the header reservation.
    pub tile_size_total: f64,

    /// Total visual size at the overview header fraction:
    /// `tile_size_total` plus the header reservation.
    pub total_visual_size: f64,

    /// Member tiles, ordered by descending tile size.
    pub members: Vec<MemberTile>,
}

impl SectorGroup {
    /// Number of members in this sector.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Returns true if this sector has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Groups eligible holdings by sector.
///
/// Sector labels match case-sensitively; holdings without a label fall
/// under [`OTHER_SECTOR`]. Holdings with non-positive market value are
/// skipped entirely (they contribute nothing, not even to totals).
/// Group order is first appearance in the input; the treemap builder
/// imposes the final display order.
///
/// An empty input yields an empty output; there are no error conditions.
#[must_use]
pub fn aggregate_by_sector(
    holdings: &[Holding],
    metric: MetricId,
    config: &LayoutConfig,
) -> Vec<SectorGroup> {
    let descriptor = MetricDescriptor::for_metric(metric);
    aggregate_with_descriptor(holdings, &descriptor, config)
}

/// [`aggregate_by_sector`] with an explicit metric descriptor, for
/// callers overriding the tuned clamp range or color stops.
#[must_use]
pub fn aggregate_with_descriptor(
    holdings: &[Holding],
    descriptor: &MetricDescriptor,
    config: &LayoutConfig,
) -> Vec<SectorGroup> {
    let eligible: Vec<&Holding> = holdings
        .iter()
        .filter(|h| h.market_value > Decimal::ZERO)
        .collect();

    if eligible.is_empty() {
        return Vec::new();
    }

    // Tile sizes first; order matches `eligible` in both execution modes.
    let tiles: Vec<MemberTile> = maybe_parallel_map(&eligible, config, |h| {
        let metric_value = h.metric_value(descriptor.id);
        MemberTile {
            ticker: h.ticker.clone(),
            market_value: h.market_value,
            metric_value,
            momentum_weekly: h.metrics.momentum_weekly,
            momentum_monthly: h.metrics.momentum_monthly,
            tile_size: tile_size(h.market_value, metric_value, descriptor, config),
        }
    });

    // Group by sector label in first-seen order, so two recomputes over
    // the same snapshot yield identical output.
    let mut order: Vec<&str> = Vec::new();
    let mut grouped: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, h) in eligible.iter().enumerate() {
        let label = sector_label(h);
        match grouped.entry(label) {
            std::collections::hash_map::Entry::Occupied(mut e) => e.get_mut().push(i),
            std::collections::hash_map::Entry::Vacant(e) => {
                order.push(label);
                e.insert(vec![i]);
            }
        }
    }

    order
        .iter()
        .map(|label| build_group(label, &grouped[label], &tiles, config))
        .collect()
}

/// Assembles one sector group from member tile indices.
fn build_group(
    label: &str,
    indices: &[usize],
    tiles: &[MemberTile],
    config: &LayoutConfig,
) -> SectorGroup {
    let mut members: Vec<MemberTile> = indices.iter().map(|&i| tiles[i].clone()).collect();

    let total_market_value: Decimal = members.iter().map(|m| m.market_value).sum();
    let tile_size_total: f64 = members.iter().map(|m| m.tile_size).sum();
    let weighted_metric = weighted_metric(&members);

    // Largest tile first; stable sort keeps input order on ties.
    members.sort_by(|a, b| {
        b.tile_size
            .partial_cmp(&a.tile_size)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let total_visual_size = tile_size_total
        + header_size(
            tile_size_total,
            config.header_fraction,
            config.header_minimum,
        );

    SectorGroup {
        sector: label.to_string(),
        total_market_value,
        weighted_metric,
        tile_size_total,
        total_visual_size,
        members,
    }
}

/// Capital-weighted average over members with a known metric value.
fn weighted_metric(members: &[MemberTile]) -> Option<f64> {
    let mut sum = 0.0;
    let mut weight = 0.0;

    for m in members {
        if let Some(value) = m.metric_value {
            let w = m.market_value.to_f64().unwrap_or(0.0);
            sum += value * w;
            weight += w;
        }
    }

    if weight > 0.0 {
        Some(sum / weight)
    } else {
        None
    }
}
