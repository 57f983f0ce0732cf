//! View state: active metric and sector zoom.
//!
//! Owned exclusively by the UI event loop; mutated only in response to
//! discrete user actions, never concurrently. Every mutation is followed
//! by a full synchronous recompute of the render tree.

use crate::types::MetricId;
use serde::{Deserialize, Serialize};

/// The view state for one heatmap mount.
///
/// Two states: overview (all sectors) and drilled-in (a single sector).
/// Clicking a sector header in the overview drills into it; clicking the
/// header while drilled in (rendered as a "back" affordance) returns to
/// the overview. Clicking a different sector while drilled in is not a
/// supported transition. There is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    active_metric: MetricId,
    zoomed_sector: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Creates the mount-time state: daily change, overview.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active_metric: MetricId::DailyChange,
            zoomed_sector: None,
        }
    }

    /// The metric currently driving sizing and coloring.
    #[must_use]
    pub fn active_metric(&self) -> MetricId {
        self.active_metric
    }

    /// The drilled sector, if any.
    #[must_use]
    pub fn zoomed_sector(&self) -> Option<&str> {
        self.zoomed_sector.as_deref()
    }

    /// Returns true while drilled into a sector.
    #[must_use]
    pub fn is_drilled(&self) -> bool {
        self.zoomed_sector.is_some()
    }

    /// Switches the active metric. Zoom state is unaffected.
    pub fn select_metric(&mut self, metric: MetricId) {
        self.active_metric = metric;
    }

    /// Handles a click on a sector header.
    ///
    /// Returns true if the state changed. In the overview, any header
    /// click drills into that sector. While drilled in, only the zoomed
    /// sector's own header (the "back" affordance) is actionable.
    pub fn click_sector(&mut self, sector: &str) -> bool {
        match self.zoomed_sector.as_deref() {
            None => {
                self.zoomed_sector = Some(sector.to_string());
                true
            }
            Some(current) if current == sector => {
                self.zoomed_sector = None;
                true
            }
            Some(_) => false,
        }
    }
}
