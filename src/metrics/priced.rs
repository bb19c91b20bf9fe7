//! Priced Pool Metrics
//!
//! Metrics specific to price-ordered admission: how often keys were admitted,
//! outbid, repriced, or turned away.

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Priced-pool metrics (extends CoreCacheMetrics)
#[derive(Debug, Default, Clone)]
pub struct PricedPoolMetrics {
    /// Core metrics common to all caches
    pub core: CoreCacheMetrics,

    /// Number of new keys admitted (with or without an eviction)
    pub admissions: u64,

    /// Number of values pushed onto an already resident key
    pub pushes: u64,

    /// Number of price changes applied to resident keys
    pub reprices: u64,

    /// Number of puts refused because the key's stack was full
    pub rejected_full: u64,

    /// Number of puts refused because the price did not beat the pool minimum
    pub rejected_underpriced: u64,

    /// Number of takes that emptied a key's stack (the key stays resident)
    pub drained_takes: u64,

    /// Price of the most recently evicted key
    pub last_evicted_price: u64,

    /// Highest price ever evicted
    pub max_evicted_price: u64,
}

impl PricedPoolMetrics {
    /// Creates an empty set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new key entering the pool.
    pub fn record_admission(&mut self) {
        self.admissions += 1;
        self.core.record_insertion();
    }

    /// Records a value pushed onto a resident key.
    pub fn record_push(&mut self) {
        self.pushes += 1;
        self.core.record_insertion();
    }

    /// Records a resident key changing price.
    pub fn record_reprice(&mut self) {
        self.reprices += 1;
    }

    /// Records a push refused by the replica limit.
    pub fn record_rejected_full(&mut self) {
        self.rejected_full += 1;
    }

    /// Records an admission refused by price.
    pub fn record_rejected_underpriced(&mut self) {
        self.rejected_underpriced += 1;
    }

    /// Records an eviction of a key holding `value_count` values at `price`.
    pub fn record_eviction(&mut self, value_count: u64, price: u64) {
        self.core.record_removal(value_count, true);
        self.last_evicted_price = price;
        self.max_evicted_price = self.max_evicted_price.max(price);
    }

    /// Records a take. `drained` is set when the take emptied the stack.
    pub fn record_take(&mut self, hit: bool, drained: bool) {
        if hit {
            self.core.record_hit();
            if drained {
                self.drained_takes += 1;
            }
        } else {
            self.core.record_miss();
        }
    }

    /// Fraction of put attempts that stored nothing.
    pub fn rejection_rate(&self) -> f64 {
        let rejected = self.rejected_full + self.rejected_underpriced;
        let attempts = rejected + self.admissions + self.pushes;
        if attempts > 0 {
            rejected as f64 / attempts as f64
        } else {
            0.0
        }
    }

    /// Converts the metrics to a BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();

        metrics.insert("admissions".to_string(), self.admissions as f64);
        metrics.insert("pushes".to_string(), self.pushes as f64);
        metrics.insert("reprices".to_string(), self.reprices as f64);
        metrics.insert("rejected_full".to_string(), self.rejected_full as f64);
        metrics.insert(
            "rejected_underpriced".to_string(),
            self.rejected_underpriced as f64,
        );
        metrics.insert("rejection_rate".to_string(), self.rejection_rate());
        metrics.insert("drained_takes".to_string(), self.drained_takes as f64);
        metrics.insert(
            "last_evicted_price".to_string(),
            self.last_evicted_price as f64,
        );
        metrics.insert(
            "max_evicted_price".to_string(),
            self.max_evicted_price as f64,
        );

        metrics
    }
}

impl CacheMetrics for PricedPoolMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "PRICED"
    }
}
