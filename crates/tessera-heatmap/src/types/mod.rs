//! Core types for the heatmap engine.

mod config;
mod holding;
mod metric;

pub use config::LayoutConfig;
pub use holding::{Holding, HoldingBuilder, MetricValues};
pub use metric::{MetricDescriptor, MetricId};
