//! Pool Metrics System
//!
//! Provides BTreeMap-based metrics reporting for the priced pool. Counters live in
//! [`CoreCacheMetrics`] (traffic common to any cache) and [`PricedPoolMetrics`]
//! (outcomes specific to price-ordered admission).
//!
//! # Why BTreeMap over HashMap?
//!
//! BTreeMap keeps metric names in a deterministic order, so reports from two runs
//! of the same workload compare line by line. With a couple of dozen keys the
//! O(log n) lookup cost is irrelevant.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod priced;

pub use priced::PricedPoolMetrics;

/// Common metrics tracked by the pool
#[derive(Debug, Default, Clone)]
pub struct CoreCacheMetrics {
    /// Total number of take requests made to the pool
    pub requests: u64,

    /// Number of take requests that returned a value
    pub cache_hits: u64,

    /// Number of values stored (admissions plus pushes)
    pub insertions: u64,

    /// Number of keys evicted by capacity pressure
    pub evictions: u64,

    /// Number of values discarded along with evicted keys
    pub values_evicted: u64,

    /// Number of values currently held across all stacks
    pub resident_values: u64,
}

impl CoreCacheMetrics {
    /// Creates an empty set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a take that returned a value.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
        self.resident_values = self.resident_values.saturating_sub(1);
    }

    /// Records a take that found nothing.
    ///
    /// Misses are derived as `requests - cache_hits`.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a value being stored.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
        self.resident_values += 1;
    }

    /// Records a key leaving the pool together with `value_count` values.
    ///
    /// # Arguments
    /// * `value_count` - Number of values stacked under the key when it left
    /// * `evicted` - `true` when capacity pressure caused the removal
    pub fn record_removal(&mut self, value_count: u64, evicted: bool) {
        if evicted {
            self.evictions += 1;
            self.values_evicted += value_count;
        }
        self.resident_values = self.resident_values.saturating_sub(value_count);
    }

    /// Resets the resident gauge after the pool was cleared.
    pub fn record_clear(&mut self) {
        self.resident_values = 0;
    }

    /// Fraction of takes that returned a value, or 0.0 with no requests.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of takes that found nothing, or 0.0 with no requests.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.cache_hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Convert core metrics to BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert(
            "cache_misses".to_string(),
            (self.requests - self.cache_hits) as f64,
        );
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("values_evicted".to_string(), self.values_evicted as f64);
        metrics.insert("resident_values".to_string(), self.resident_values as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        if self.insertions > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.insertions as f64,
            );
        }

        metrics
    }
}

/// Uniform metrics reporting interface.
///
/// Implemented by the pool and its concurrent wrapper so callers can collect
/// metrics without knowing which one they hold.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g. `"PRICED"`).
    fn algorithm_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_rates_without_requests() {
        let core = CoreCacheMetrics::new();
        assert_eq!(core.hit_rate(), 0.0);
        assert_eq!(core.miss_rate(), 0.0);
        assert!(!core.to_btreemap().contains_key("eviction_rate"));
    }

    #[test]
    fn test_core_hit_and_miss_accounting() {
        let mut core = CoreCacheMetrics::new();
        core.record_insertion();
        core.record_insertion();
        core.record_hit();
        core.record_miss();

        assert_eq!(core.requests, 2);
        assert_eq!(core.cache_hits, 1);
        assert_eq!(core.resident_values, 1);
        assert_eq!(core.hit_rate(), 0.5);

        let map = core.to_btreemap();
        assert_eq!(map["cache_misses"], 1.0);
        assert_eq!(map["insertions"], 2.0);
    }

    #[test]
    fn test_core_removal_only_counts_evictions_when_evicted() {
        let mut core = CoreCacheMetrics::new();
        for _ in 0..5 {
            core.record_insertion();
        }
        core.record_removal(2, false);
        assert_eq!(core.evictions, 0);
        assert_eq!(core.resident_values, 3);

        core.record_removal(3, true);
        assert_eq!(core.evictions, 1);
        assert_eq!(core.values_evicted, 3);
        assert_eq!(core.resident_values, 0);
    }
}
