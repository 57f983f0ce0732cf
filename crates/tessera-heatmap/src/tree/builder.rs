//! Treemap assembly.
//!
//! Turns aggregated sector groups into the render tree: overview mode
//! with every sector ordered by descending visual size, or drill-in mode
//! with a single sector under a slimmer header.

use super::node::{SectorHeader, TickerTile, Treemap, TreemapSector};
use crate::aggregate::{aggregate_with_descriptor, SectorGroup};
use crate::scale::header_size;
use crate::types::{Holding, LayoutConfig, MetricDescriptor, MetricId};

/// Builds the render tree for the given holdings and view.
///
/// With `zoomed_sector == None`, returns the overview: one root entry
/// per sector, largest first (ties keep first-seen input order). With a
/// known sector name, returns only that sector under the drill-in header
/// fraction. A `zoomed_sector` naming a sector that no longer exists
/// falls back to the overview rather than rendering an empty tree.
#[must_use]
pub fn build_treemap(
    holdings: &[Holding],
    metric: MetricId,
    zoomed_sector: Option<&str>,
    config: &LayoutConfig,
) -> Treemap {
    let descriptor = MetricDescriptor::for_metric(metric);
    build_with_descriptor(holdings, &descriptor, zoomed_sector, config)
}

/// [`build_treemap`] with an explicit metric descriptor.
#[must_use]
pub fn build_with_descriptor(
    holdings: &[Holding],
    descriptor: &MetricDescriptor,
    zoomed_sector: Option<&str>,
    config: &LayoutConfig,
) -> Treemap {
    let groups = aggregate_with_descriptor(holdings, descriptor, config);

    if let Some(name) = zoomed_sector {
        if let Some(group) = groups.iter().find(|g| g.sector == name) {
            return Treemap {
                sectors: vec![sector_subtree(
                    group,
                    descriptor,
                    config.drill_header_fraction,
                    config,
                )],
            };
        }
        // Sector disappeared (e.g. its last holding was sold): show the
        // overview instead of an empty tree.
    }

    let mut ordered: Vec<&SectorGroup> = groups.iter().collect();
    ordered.sort_by(|a, b| {
        b.total_visual_size
            .partial_cmp(&a.total_visual_size)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Treemap {
        sectors: ordered
            .into_iter()
            .map(|g| sector_subtree(g, descriptor, config.header_fraction, config))
            .collect(),
    }
}

/// Renders one sector group as a header plus its member tiles.
fn sector_subtree(
    group: &SectorGroup,
    descriptor: &MetricDescriptor,
    header_fraction: f64,
    config: &LayoutConfig,
) -> TreemapSector {
    let header = SectorHeader {
        sector: group.sector.clone(),
        visual_size: header_size(group.tile_size_total, header_fraction, config.header_minimum),
        aggregate_metric: group.weighted_metric,
        color: descriptor.color_for(group.weighted_metric),
        label: descriptor.label_for(group.weighted_metric),
    };

    let tiles = group
        .members
        .iter()
        .map(|m| TickerTile {
            ticker: m.ticker.clone(),
            visual_size: m.tile_size,
            metric_value: m.metric_value,
            momentum_weekly: m.momentum_weekly,
            momentum_monthly: m.momentum_monthly,
            color: descriptor.color_for(m.metric_value),
            label: descriptor.label_for(m.metric_value),
        })
        .collect();

    TreemapSector { header, tiles }
}
