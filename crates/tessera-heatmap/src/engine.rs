//! The recompute entry point.
//!
//! Every input change (holdings snapshot, metric switch, zoom) triggers
//! one synchronous, full rebuild of the render tree; there is no
//! incremental diffing. The rebuild is a pure function of its inputs.

use crate::summary::{visible_summary, VisibleSummary};
use crate::tree::{build_with_descriptor, Treemap};
use crate::types::{Holding, LayoutConfig, MetricDescriptor, MetricId};
use crate::view::ViewState;
use serde::{Deserialize, Serialize};

/// Everything the rendering surface needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapView {
    /// The metric driving sizing and coloring.
    pub metric: MetricId,

    /// The render tree.
    pub treemap: Treemap,

    /// Totals for the visible scope, shown above the visualization.
    pub summary: VisibleSummary,
}

/// Recomputes the full heatmap view.
///
/// Pure: identical inputs always yield an identical view.
#[must_use]
pub fn render_view(holdings: &[Holding], view: &ViewState, config: &LayoutConfig) -> HeatmapView {
    let descriptor = MetricDescriptor::for_metric(view.active_metric());
    render_with_descriptor(holdings, &descriptor, view, config)
}

/// [`render_view`] with an explicit metric descriptor.
#[must_use]
pub fn render_with_descriptor(
    holdings: &[Holding],
    descriptor: &MetricDescriptor,
    view: &ViewState,
    config: &LayoutConfig,
) -> HeatmapView {
    let treemap = build_with_descriptor(holdings, descriptor, view.zoomed_sector(), config);
    let summary = visible_summary(holdings, descriptor.id, view.zoomed_sector(), config);

    HeatmapView {
        metric: descriptor.id,
        treemap,
        summary,
    }
}
