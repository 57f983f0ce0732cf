//! As-of stamped holdings snapshots.
//!
//! The layout engine is a pure function of an already-resolved snapshot;
//! this type is the handoff between the fetch layer and the engine.

use crate::record::RawHolding;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tessera_heatmap::Holding;

/// A resolved set of normalized holdings at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// When the underlying data was fetched.
    pub as_of: DateTime<Utc>,

    /// Normalized, eligible holdings.
    pub holdings: Vec<Holding>,
}

impl Snapshot {
    /// Creates a snapshot from already-normalized holdings.
    #[must_use]
    pub fn new(holdings: Vec<Holding>, as_of: DateTime<Utc>) -> Self {
        Self { as_of, holdings }
    }

    /// Normalizes raw feed records into a snapshot.
    #[must_use]
    pub fn from_records(records: &[RawHolding], as_of: DateTime<Utc>) -> Self {
        Self {
            as_of,
            holdings: crate::normalize::normalize(records),
        }
    }

    /// Number of holdings in the snapshot.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if the snapshot has no holdings.
    ///
    /// An empty snapshot is a legitimate, renderable "no data" state,
    /// not a fault.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}
