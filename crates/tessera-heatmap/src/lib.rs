//! # Tessera Heatmap
//!
//! Portfolio heatmap layout engine.
//!
//! Turns a flat list of normalized holdings into a hierarchical,
//! proportionally-sized, color-coded render tree: sector groups
//! containing ticker tiles, with drill-in to a single sector and
//! re-keying of sizing/coloring to any selectable performance metric.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: all inputs explicit, no I/O, no caching
//! - **Full recompute**: any input change rebuilds the whole tree; no
//!   incremental diffing (fine for a few hundred holdings)
//! - **Missing data is a value**: unknown metrics render neutral and
//!   drop out of weighted averages, but the capital stays visible
//! - **One engine, many variants**: metric-specific tuning lives in a
//!   [`MetricDescriptor`], not in copy-pasted layout math
//!
//! ## Pipeline
//!
//! holdings + metric + zoom → [`aggregate`] → [`scale`] / colors →
//! [`tree`] → render surface. User interaction mutates [`ViewState`]
//! and re-runs [`render_view`].
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use tessera_heatmap::prelude::*;
//!
//! let holdings = vec![
//!     Holding::builder()
//!         .ticker("AAPL")
//!         .market_value(Decimal::from(250_000))
//!         .sector("Tech")
//!         .metrics(MetricValues::new().with_daily_change(1.8))
//!         .build()
//!         .unwrap(),
//! ];
//!
//! let view = ViewState::new();
//! let config = LayoutConfig::default();
//! let rendered = render_view(&holdings, &view, &config);
//!
//! assert_eq!(rendered.treemap.sectors.len(), 1);
//! ```
//!
//! ## Module Overview
//!
//! - [`aggregate`] - Sector grouping and capital-weighted metrics
//! - [`scale`] - Tile sizing (colors live in `tessera-core`)
//! - [`tree`] - Treemap assembly and render-tree types
//! - [`view`] - View state machine (metric selection, sector zoom)
//! - [`summary`] - Visible-scope totals
//! - [`engine`] - The full-recompute entry point
//! - [`types`] - Holding, metric, and config types
//!
//! ## Feature Flags
//!
//! - `parallel`: rayon-based parallel processing for large portfolios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod aggregate;
pub mod engine;
pub mod error;
pub mod parallel;
pub mod scale;
pub mod summary;
pub mod tree;
pub mod types;
pub mod view;

// Re-export error types at crate root
pub use error::{HeatmapError, HeatmapResult};

// Re-export main types
pub use types::{Holding, HoldingBuilder, LayoutConfig, MetricDescriptor, MetricId, MetricValues};

// Re-export the pipeline stages
pub use aggregate::{
    aggregate_by_sector, aggregate_with_descriptor, sector_label, MemberTile, SectorGroup,
    OTHER_SECTOR,
};
pub use engine::{render_view, render_with_descriptor, HeatmapView};
pub use scale::{base_magnitude, header_size, move_multiplier, tile_size};
pub use summary::{visible_summary, VisibleSummary};
pub use tree::{
    build_treemap, build_with_descriptor, SectorHeader, TickerTile, Treemap, TreemapNode,
    TreemapSector,
};
pub use view::ViewState;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use tessera_heatmap::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{HeatmapError, HeatmapResult};

    // Holding and config types
    pub use crate::types::{
        Holding, HoldingBuilder, LayoutConfig, MetricDescriptor, MetricId, MetricValues,
    };

    // Aggregation
    pub use crate::aggregate::{aggregate_by_sector, MemberTile, SectorGroup, OTHER_SECTOR};

    // Tree
    pub use crate::tree::{
        build_treemap, SectorHeader, TickerTile, Treemap, TreemapNode, TreemapSector,
    };

    // View and engine
    pub use crate::engine::{render_view, HeatmapView};
    pub use crate::summary::{visible_summary, VisibleSummary};
    pub use crate::view::ViewState;

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
    pub use tessera_core::{Color, ColorScale, ColorStop, LabelFormat};
}
