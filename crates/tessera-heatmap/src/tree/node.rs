//! Render-tree node types.

use serde::{Deserialize, Serialize};
use tessera_core::Color;

/// The labeled rectangle grouping a sector's tiles.
///
/// `visual_size` is the header's own reservation; the sector's total
/// area is the header plus its member tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorHeader {
    /// Sector label.
    pub sector: String,

    /// Visual area reserved for the header itself.
    pub visual_size: f64,

    /// Capital-weighted metric across the sector's members, if known.
    pub aggregate_metric: Option<f64>,

    /// Resolved display color for the aggregate metric.
    pub color: Color,

    /// Formatted label for the aggregate metric.
    pub label: String,
}

/// One visual rectangle representing a single ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerTile {
    /// Ticker symbol.
    pub ticker: String,

    /// Visual area of this tile.
    pub visual_size: f64,

    /// Value of the active metric, if known.
    pub metric_value: Option<f64>,

    /// Weekly momentum score, carried for tooltips.
    pub momentum_weekly: Option<f64>,

    /// Monthly momentum score, carried for tooltips.
    pub momentum_monthly: Option<f64>,

    /// Resolved display color for the metric value.
    pub color: Color,

    /// Formatted label for the metric value.
    pub label: String,
}

/// A node of the render tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TreemapNode {
    /// A sector header. Always first among its siblings.
    #[serde(rename = "header")]
    SectorHeader(SectorHeader),

    /// A ticker tile.
    #[serde(rename = "tile")]
    TickerTile(TickerTile),
}

impl TreemapNode {
    /// Visual area of this node.
    #[must_use]
    pub fn visual_size(&self) -> f64 {
        match self {
            Self::SectorHeader(h) => h.visual_size,
            Self::TickerTile(t) => t.visual_size,
        }
    }

    /// Returns true for header nodes.
    #[must_use]
    pub fn is_header(&self) -> bool {
        matches!(self, Self::SectorHeader(_))
    }
}

/// One visible sector: its header plus member tiles.
///
/// Construction keeps the header structurally first among its siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreemapSector {
    /// The sector header.
    pub header: SectorHeader,

    /// Member tiles, ordered by descending visual size.
    pub tiles: Vec<TickerTile>,
}

impl TreemapSector {
    /// Total visual area: header reservation plus member tiles.
    #[must_use]
    pub fn total_visual_size(&self) -> f64 {
        self.header.visual_size + self.tiles.iter().map(|t| t.visual_size).sum::<f64>()
    }

    /// Flattens to the node list contract: header first, then tiles.
    #[must_use]
    pub fn nodes(&self) -> Vec<TreemapNode> {
        let mut nodes = Vec::with_capacity(1 + self.tiles.len());
        nodes.push(TreemapNode::SectorHeader(self.header.clone()));
        nodes.extend(self.tiles.iter().cloned().map(TreemapNode::TickerTile));
        nodes
    }
}

/// The full render tree: a single root list of visible sectors.
///
/// Overview mode holds every sector; drill-in mode holds exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treemap {
    /// Visible sectors, in display order.
    pub sectors: Vec<TreemapSector>,
}

impl Treemap {
    /// Returns true when there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// Looks up a visible sector by label.
    #[must_use]
    pub fn sector(&self, name: &str) -> Option<&TreemapSector> {
        self.sectors.iter().find(|s| s.header.sector == name)
    }

    /// Total number of ticker tiles across all visible sectors.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.sectors.iter().map(|s| s.tiles.len()).sum()
    }

    /// Total visual area of the visible tree.
    #[must_use]
    pub fn total_visual_size(&self) -> f64 {
        self.sectors.iter().map(TreemapSector::total_visual_size).sum()
    }
}
