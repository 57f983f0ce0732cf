//! In-memory TTL cache for fetched metric values.
//!
//! Owned by the fetch layer, never by the layout engine. Replaces the
//! ad-hoc per-page caches the dashboard grew over time with one explicit
//! component: values keyed by `(ticker, metric)` with staleness
//! tracking, so a metric switch can reuse recent fetches without
//! re-hitting the service.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use tessera_heatmap::MetricId;

/// Cache key: one metric for one ticker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetricKey {
    /// Ticker symbol.
    pub ticker: String,
    /// The cached metric.
    pub metric: MetricId,
}

impl MetricKey {
    /// Creates a new key.
    #[must_use]
    pub fn new(ticker: impl Into<String>, metric: MetricId) -> Self {
        Self {
            ticker: ticker.into(),
            metric,
        }
    }
}

struct CachedMetric {
    value: f64,
    received_at: Instant,
}

/// Metric cache with staleness tracking.
pub struct MetricCache {
    entries: DashMap<MetricKey, CachedMetric>,
    ttl: Duration,
}

impl MetricCache {
    /// Creates a new cache with the given time-to-live.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Stores a value, stamped now.
    pub fn put(&self, key: MetricKey, value: f64) {
        self.entries.insert(
            key,
            CachedMetric {
                value,
                received_at: Instant::now(),
            },
        );
    }

    /// Gets a value and whether it is still fresh.
    ///
    /// Stale values are returned rather than dropped: a stale number is
    /// still better paint than a blank tile while a refresh is in flight.
    #[must_use]
    pub fn get(&self, key: &MetricKey) -> Option<(f64, bool)> {
        self.entries
            .get(key)
            .map(|e| (e.value, e.received_at.elapsed() <= self.ttl))
    }

    /// Removes entries past their time-to-live.
    pub fn cleanup_stale(&self) {
        self.entries
            .retain(|_, e| e.received_at.elapsed() <= self.ttl);
    }

    /// Clears all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of cached entries, fresh or stale.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MetricCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(300)) // 5 minutes
    }
}
