//! Priced Cache Pool Implementation
//!
//! A bounded key/value pool in which every key carries a caller-supplied price. Each
//! key holds a small stack of values; when the pool is full, a new key is admitted only
//! if it outbids the cheapest resident key, which is then evicted.
//!
//! # Algorithm
//!
//! The pool keeps two views over the same set of resident keys:
//!
//! ```text
//!   index: BTreeSet<PricedKey>           entries: HashMap<K, PricedEntry>
//!   ┌─────────────────────────┐          ┌──────────────────────────────┐
//!   │ (1, "3")  ◀── minimum   │          │ "2" → price 2, [b]           │
//!   │ (1, "7")                │          │ "3" → price 1, [c]           │
//!   │ (2, "2")                │          │ "4" → price 4, [d]           │
//!   │ (4, "4")                │          │ "5" → price 5, [e]           │
//!   │ (5, "5")                │          │ "7" → price 1, [a]           │
//!   └─────────────────────────┘          └──────────────────────────────┘
//! ```
//!
//! - The ordered index answers "who is cheapest?" in O(log n).
//! - The hash map answers "is this key resident, at what price, with which values?" in O(1).
//!
//! Both always describe the same keys, and the price stored in an entry always matches
//! the price component of that key's `PricedKey`. A price change is applied to both in
//! one internal step, so callers never observe them disagreeing.
//!
//! # Put Semantics
//!
//! | Situation | Effect | Outcome |
//! |-----------|--------|---------|
//! | Key resident, stack below limit | reprice if needed, push | [`PutOutcome::Pushed`] |
//! | Key resident, stack full | reprice if needed, value dropped | [`PutOutcome::RejectedFull`] |
//! | Key new, free slot | admit with a one-value stack | [`PutOutcome::Admitted`] |
//! | Key new, pool full, price > minimum | evict minimum, admit, notify | [`PutOutcome::Replaced`] |
//! | Key new, pool full, price ≤ minimum | nothing | [`PutOutcome::RejectedUnderpriced`] |
//!
//! The admitting value is always stored, even with a replica limit of zero.
//!
//! # Residency vs. Values
//!
//! Taking the last value from a key does not remove the key. It keeps its slot and its
//! price, and competes in future eviction decisions like any other resident key.
//!
//! # Performance Characteristics
//!
//! - Put: O(log n) (O(1) when the price is unchanged and no eviction happens)
//! - Take: O(1)
//! - Minimum lookup: O(log n)
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. For concurrent access, wrap the pool in a
//! single lock covering whole calls, or enable the `concurrent` feature and use
//! `ConcurrentPricedPool`.

use crate::config::PricedPoolConfig;
use crate::entry::{PricedEntry, PricedKey};
use crate::listener::{Eviction, EvictionListener, Listeners};
use crate::metrics::{CacheMetrics, PricedPoolMetrics};
use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use tracing::{debug, trace};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Result of a [`PricedPool::put`].
///
/// Rejections are ordinary outcomes, not errors: the pool is left unchanged apart
/// from a reprice of an already resident key.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutOutcome<K, V> {
    /// The key was resident and the value was pushed onto its stack.
    Pushed,
    /// The key was new and took a free slot.
    Admitted,
    /// The key was new and took the slot of the evicted entry.
    Replaced(Eviction<K, V>),
    /// The key was resident but its stack was already at the replica limit.
    RejectedFull,
    /// The key was new, the pool was full, and its price did not beat the minimum.
    RejectedUnderpriced,
}

impl<K, V> PutOutcome<K, V> {
    /// Returns `true` if the value was stored.
    #[inline]
    pub fn is_stored(&self) -> bool {
        matches!(
            self,
            PutOutcome::Pushed | PutOutcome::Admitted | PutOutcome::Replaced(_)
        )
    }

    /// Returns the eviction this put caused, if any.
    #[inline]
    pub fn into_eviction(self) -> Option<Eviction<K, V>> {
        match self {
            PutOutcome::Replaced(eviction) => Some(eviction),
            _ => None,
        }
    }
}

/// A bounded, price-ordered pool holding a stack of values per key.
///
/// Keys must be `Ord` as well as `Hash + Eq`: when several resident keys share the
/// minimum price, the smallest key by its natural order is evicted first.
///
/// # Examples
///
/// ```
/// use priced_pool::PricedPool;
///
/// let mut pool = PricedPool::new(2, 2);
/// assert!(pool.try_put("a", 1, 10));
/// assert!(pool.try_put("b", 2, 20));
///
/// // Full pool: a cheaper newcomer is turned away...
/// assert!(!pool.try_put("c", 3, 5));
/// // ...a dearer one evicts the cheapest resident key.
/// assert!(pool.try_put("d", 4, 30));
/// assert!(!pool.contains_key(&"a"));
/// assert_eq!(pool.count(), 2);
/// ```
pub struct PricedPool<K, V, S = DefaultHashBuilder> {
    config: PricedPoolConfig,
    index: BTreeSet<PricedKey<K>>,
    entries: HashMap<K, PricedEntry<V>, S>,
    listeners: Listeners<K, V>,
    metrics: PricedPoolMetrics,
}

impl<K, V> PricedPool<K, V, DefaultHashBuilder>
where
    K: Hash + Eq + Ord,
{
    /// Creates an empty pool holding at most `capacity` keys and `replica_limit`
    /// values per key.
    pub fn new(capacity: usize, replica_limit: usize) -> Self {
        Self::from_config(PricedPoolConfig::new(capacity, replica_limit))
    }

    /// Creates an empty pool from a configuration.
    pub fn from_config(config: PricedPoolConfig) -> Self {
        Self::with_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K, V, S> PricedPool<K, V, S>
where
    K: Hash + Eq + Ord,
    S: BuildHasher,
{
    /// Creates an empty pool that hashes keys with `hash_builder`.
    pub fn with_hasher(config: PricedPoolConfig, hash_builder: S) -> Self {
        Self {
            config,
            index: BTreeSet::new(),
            entries: HashMap::with_hasher(hash_builder),
            listeners: Listeners::new(),
            metrics: PricedPoolMetrics::new(),
        }
    }

    /// Returns the maximum number of resident keys.
    #[inline]
    pub fn cap(&self) -> usize {
        self.config.capacity()
    }

    /// Returns the maximum number of values per key.
    #[inline]
    pub fn replica_limit(&self) -> usize {
        self.config.replica_limit()
    }

    /// Returns the configuration the pool was built with.
    #[inline]
    pub fn config(&self) -> PricedPoolConfig {
        self.config
    }

    /// Returns the number of resident keys, including keys with drained stacks.
    #[inline]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Same as [`count`](Self::count).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the pool's metrics.
    #[inline]
    pub fn metrics(&self) -> &PricedPoolMetrics {
        &self.metrics
    }

    /// Registers a listener called on every capacity eviction.
    ///
    /// Listeners are called in registration order. See [`EvictionListener`] for the
    /// panic behaviour.
    pub fn on_evict<L>(&mut self, listener: L)
    where
        L: EvictionListener<K, V> + Send + 'static,
    {
        self.listeners.register(Box::new(listener));
    }

    /// Returns the number of registered eviction listeners.
    #[inline]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if `key` is resident.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.entries.contains_key(key)
    }

    /// Returns the current price of a resident key.
    #[inline]
    pub fn price_of<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.entries.get(key).map(PricedEntry::price)
    }

    /// Returns how many values a resident key currently holds.
    ///
    /// A drained but resident key reports `Some(0)`.
    #[inline]
    pub fn depth<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.entries.get(key).map(PricedEntry::depth)
    }

    /// Returns the value the next [`try_take`](Self::try_take) would return, without
    /// removing it.
    #[inline]
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.entries.get(key).and_then(PricedEntry::peek)
    }

    /// Returns the lowest resident price, the bar a new key must beat once the pool
    /// is full.
    #[inline]
    pub fn min_price(&self) -> Option<u64> {
        self.index.first().map(|priced| priced.price)
    }

    /// Returns the current eviction candidate and its price.
    #[inline]
    pub fn peek_min(&self) -> Option<(&K, u64)> {
        self.index.first().map(|priced| (&priced.key, priced.price))
    }

    /// Iterates over resident keys in eviction order (ascending price, then key).
    ///
    /// Each item is the key, its price, and its values bottom first.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64, &[V])> + '_ {
        self.index.iter().filter_map(move |priced| {
            self.entries
                .get(&priced.key)
                .map(|entry| (&priced.key, priced.price, entry.values()))
        })
    }

    /// Puts `value` under `key` at `price` and reports whether it was stored.
    ///
    /// This is [`put`](Self::put) with the outcome reduced to a boolean.
    #[inline]
    pub fn try_put(&mut self, key: K, value: V, price: u64) -> bool
    where
        K: Clone,
    {
        self.put(key, value, price).is_stored()
    }

    /// Puts `value` under `key` at `price`.
    ///
    /// A resident key is moved to `price` first, whether or not the push then
    /// succeeds. A new key is admitted if there is a free slot, or if `price` is
    /// strictly greater than the current minimum, in which case the minimum entry is
    /// evicted and every listener is notified before this call returns.
    pub fn put(&mut self, key: K, value: V, price: u64) -> PutOutcome<K, V>
    where
        K: Clone,
    {
        if let Some(entry) = self.entries.get_mut(&key) {
            if reprice_entry(&mut self.index, entry, key, price) {
                self.metrics.record_reprice();
            }
            let limit = self.config.replica_limit();
            return match entry.push(value, limit) {
                Ok(()) => {
                    self.metrics.record_push();
                    trace!(price, depth = entry.depth(), "pushed value onto resident key");
                    PutOutcome::Pushed
                }
                Err(_) => {
                    self.metrics.record_rejected_full();
                    debug!(price, replica_limit = limit, "rejected put: stack full");
                    PutOutcome::RejectedFull
                }
            };
        }

        let mut evicted = None;
        if self.entries.len() >= self.config.capacity() {
            let Some(min_price) = self.min_price() else {
                self.metrics.record_rejected_underpriced();
                debug!(price, "rejected put: pool has no capacity");
                return PutOutcome::RejectedUnderpriced;
            };
            if price <= min_price {
                self.metrics.record_rejected_underpriced();
                debug!(price, min_price, "rejected put: price does not beat minimum");
                return PutOutcome::RejectedUnderpriced;
            }
            evicted = self.remove_min();
        }

        self.index.insert(PricedKey::new(key.clone(), price));
        self.entries.insert(key, PricedEntry::new(price, value));
        self.metrics.record_admission();

        match evicted {
            Some(eviction) => {
                self.metrics
                    .record_eviction(eviction.values.len() as u64, eviction.price);
                debug!(
                    price,
                    evicted_price = eviction.price,
                    evicted_values = eviction.values.len(),
                    "admitted key by evicting minimum"
                );
                self.listeners.notify(&eviction);
                PutOutcome::Replaced(eviction)
            }
            None => {
                trace!(price, len = self.entries.len(), "admitted key into free slot");
                PutOutcome::Admitted
            }
        }
    }

    /// Takes the most recently pushed value of `key`.
    ///
    /// Returns `None` if the key is not resident or its stack is empty. Taking the
    /// last value leaves the key resident.
    pub fn try_take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let taken = self
            .entries
            .get_mut(key)
            .and_then(|entry| entry.pop().map(|value| (value, entry.is_drained())));

        match taken {
            Some((value, drained)) => {
                self.metrics.record_take(true, drained);
                Some(value)
            }
            None => {
                self.metrics.record_take(false, false);
                None
            }
        }
    }

    /// Moves a resident key to `price` without pushing a value.
    ///
    /// Returns `false` if the key is not resident. Never evicts and never notifies.
    pub fn reprice(&mut self, key: K, price: u64) -> bool {
        match self.entries.get_mut(&key) {
            Some(entry) => {
                if reprice_entry(&mut self.index, entry, key, price) {
                    self.metrics.record_reprice();
                }
                true
            }
            None => false,
        }
    }

    /// Removes a resident key, returning its values (newest first) and price.
    ///
    /// This is not an eviction: listeners are not notified.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(Vec<V>, u64)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (key, entry) = self.entries.remove_entry(key)?;
        let price = entry.price();
        let removed = self.index.remove(&PricedKey::new(key, price));
        debug_assert!(removed, "price index out of sync with entries");

        let values = entry.into_values();
        self.metrics.core.record_removal(values.len() as u64, false);
        Some((values, price))
    }

    /// Removes and returns the current eviction candidate.
    ///
    /// This is not an eviction: listeners are not notified.
    pub fn pop(&mut self) -> Option<Eviction<K, V>> {
        let eviction = self.remove_min()?;
        self.metrics
            .core
            .record_removal(eviction.values.len() as u64, false);
        Some(eviction)
    }

    /// Removes every key. Listeners stay registered and are not notified.
    pub fn clear(&mut self) {
        self.index.clear();
        self.entries.clear();
        self.metrics.core.record_clear();
    }

    fn remove_min(&mut self) -> Option<Eviction<K, V>> {
        let PricedKey { price, key } = self.index.pop_first()?;
        let entry = self.entries.remove(&key);
        debug_assert!(entry.is_some(), "price index out of sync with entries");

        let values = entry.map(PricedEntry::into_values).unwrap_or_default();
        Some(Eviction { key, values, price })
    }
}

/// Moves `key` from its current price to `price` in both the index and its entry.
///
/// Returns `true` if the price changed.
fn reprice_entry<K: Ord, V>(
    index: &mut BTreeSet<PricedKey<K>>,
    entry: &mut PricedEntry<V>,
    key: K,
    price: u64,
) -> bool {
    let old_price = entry.price();
    if old_price == price {
        return false;
    }

    let probe = PricedKey::new(key, old_price);
    let taken = index.take(&probe);
    debug_assert!(taken.is_some(), "price index out of sync with entries");

    let mut priced = taken.unwrap_or(probe);
    priced.price = price;
    index.insert(priced);
    entry.set_price(price);

    debug!(old_price, price, "repriced resident key");
    true
}

impl<K, V, S> CacheMetrics for PricedPool<K, V, S>
where
    K: Hash + Eq + Ord,
    S: BuildHasher,
{
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K: Ord, V, S> core::fmt::Debug for PricedPool<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PricedPool")
            .field("capacity", &self.config.capacity())
            .field("replica_limit", &self.config.replica_limit())
            .field("len", &self.entries.len())
            .field("min_price", &self.index.first().map(|priced| priced.price))
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    extern crate std;
    use std::string::ToString;
    use std::sync::{Arc, Mutex};

    type EvictionLog<K, V> = Arc<Mutex<Vec<(K, Vec<V>, u64)>>>;

    fn record_evictions<K, V>(pool: &mut PricedPool<K, V>) -> EvictionLog<K, V>
    where
        K: Hash + Eq + Ord + Clone + Send + 'static,
        V: Clone + Send + 'static,
    {
        let log: EvictionLog<K, V> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        pool.on_evict(move |key: &K, values: &[V], price: u64| {
            sink.lock().unwrap().push((key.clone(), values.to_vec(), price));
        });
        log
    }

    fn assert_consistent<K, V, S>(pool: &PricedPool<K, V, S>)
    where
        K: Hash + Eq + Ord,
        S: BuildHasher,
    {
        assert_eq!(pool.index.len(), pool.entries.len());
        assert!(pool.entries.len() <= pool.config.capacity());
        for priced in pool.index.iter() {
            let entry = pool.entries.get(&priced.key).expect("indexed key has entry");
            assert_eq!(entry.price(), priced.price);
            assert!(entry.depth() <= pool.config.replica_limit().max(1));
        }
    }

    #[test]
    fn test_priced_basic_operations() {
        let mut pool = PricedPool::new(3, 2);

        assert!(pool.try_put("a", 1, 5));
        assert!(pool.try_put("b", 2, 6));
        assert_eq!(pool.count(), 2);
        assert_eq!(pool.price_of(&"a"), Some(5));
        assert_eq!(pool.peek(&"b"), Some(&2));
        assert_eq!(pool.min_price(), Some(5));
        assert_eq!(pool.peek_min(), Some((&"a", 5)));

        assert_eq!(pool.try_take(&"a"), Some(1));
        assert_eq!(pool.try_take(&"a"), None);
        assert!(pool.contains_key(&"a"));
        assert_eq!(pool.depth(&"a"), Some(0));
        assert_consistent(&pool);
    }

    #[test]
    fn test_priced_outcomes() {
        let mut pool = PricedPool::new(1, 1);

        assert_eq!(pool.put("a", 1, 5), PutOutcome::Admitted);
        assert_eq!(pool.put("a", 2, 5), PutOutcome::RejectedFull);
        assert_eq!(pool.put("b", 3, 5), PutOutcome::RejectedUnderpriced);
        assert_eq!(
            pool.put("c", 4, 6),
            PutOutcome::Replaced(Eviction {
                key: "a",
                values: vec![1],
                price: 5,
            })
        );
        pool.try_take(&"c");
        assert_eq!(pool.put("c", 5, 6), PutOutcome::Pushed);
        assert_consistent(&pool);
    }

    #[test]
    fn test_priced_reprice_on_full_stack_still_applies() {
        let mut pool = PricedPool::new(2, 1);
        pool.try_put("a", 1, 1);
        pool.try_put("b", 2, 2);

        assert!(!pool.try_put("a", 9, 10));
        assert_eq!(pool.price_of(&"a"), Some(10));
        assert_eq!(pool.peek(&"a"), Some(&1));
        assert_eq!(pool.peek_min(), Some((&"b", 2)));
        assert_eq!(pool.metrics().reprices, 1);
        assert_consistent(&pool);
    }

    #[test]
    fn test_priced_eviction_picks_smallest_key_on_tie() {
        let mut pool = PricedPool::new(3, 1);
        let log = record_evictions(&mut pool);

        pool.try_put("m", 1, 1);
        pool.try_put("c", 2, 1);
        pool.try_put("x", 3, 1);
        assert!(pool.try_put("new", 4, 2));

        assert_eq!(*log.lock().unwrap(), vec![("c", vec![2], 1)]);
        assert!(!pool.contains_key(&"c"));
        assert_consistent(&pool);
    }

    #[test]
    fn test_priced_listener_sees_pool_after_update() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);

        let mut pool: PricedPool<u32, u32> = PricedPool::new(1, 4);
        pool.on_evict(move |key: &u32, values: &[u32], price: u64| {
            *sink.lock().unwrap() = Some((*key, values.to_vec(), price));
        });

        pool.try_put(1, 10, 1);
        pool.try_put(1, 11, 1);
        pool.try_take(&1);
        pool.try_put(1, 12, 1);
        pool.try_put(2, 20, 2);

        assert_eq!(*seen.lock().unwrap(), Some((1, vec![12, 10], 1)));
        assert_eq!(pool.count(), 1);
    }

    #[test]
    fn test_priced_no_notification_on_pop_remove_or_clear() {
        let mut pool = PricedPool::new(3, 2);
        let log = record_evictions(&mut pool);

        pool.try_put(1, "a", 1);
        pool.try_put(2, "b", 2);
        pool.try_put(3, "c", 3);

        let popped = pool.pop().unwrap();
        assert_eq!((popped.key, popped.price), (1, 1));
        assert_eq!(pool.remove(&2), Some((vec!["b"], 2)));
        assert_eq!(pool.remove(&2), None);
        pool.clear();

        assert!(pool.is_empty());
        assert!(log.lock().unwrap().is_empty());
        assert_eq!(pool.listener_count(), 1);
        assert_consistent(&pool);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "price index out of sync")]
    fn test_priced_pop_detects_desynced_index() {
        let mut pool = PricedPool::new(2, 1);
        pool.try_put("a", 1, 1);
        pool.entries.remove(&"a");
        let _ = pool.pop();
    }

    #[test]
    fn test_priced_debug_output() {
        let mut pool: PricedPool<&str, u8> = PricedPool::new(4, 2);
        pool.try_put("a", 1, 3);
        pool.try_put("b", 2, 7);

        let debug = std::format!("{pool:?}");
        assert!(debug.starts_with("PricedPool"));
        assert!(debug.contains("len: 2"));
        assert!(debug.contains("min_price: Some(3)"));
    }

    #[test]
    fn test_priced_zero_capacity_rejects_everything() {
        let mut pool: PricedPool<&str, i32> = PricedPool::new(0, 3);
        assert_eq!(pool.put("a", 1, u64::MAX), PutOutcome::RejectedUnderpriced);
        assert_eq!(pool.count(), 0);
        assert_eq!(pool.try_take(&"a"), None);
    }

    #[test]
    fn test_priced_zero_replica_limit_seeds_once() {
        let mut pool = PricedPool::new(2, 0);
        assert!(pool.try_put("a", 1, 1));
        assert!(!pool.try_put("a", 2, 1));
        assert_eq!(pool.try_take(&"a"), Some(1));
        assert!(!pool.try_put("a", 3, 1));
        assert_consistent(&pool);
    }

    #[test]
    fn test_priced_reprice_method() {
        let mut pool = PricedPool::new(2, 1);
        pool.try_put("a", 1, 1);
        pool.try_put("b", 2, 2);

        assert!(pool.reprice("a", 3));
        assert!(!pool.reprice("zzz", 3));
        let order: Vec<_> = pool.iter().map(|(k, p, _)| (*k, p)).collect();
        assert_eq!(order, vec![("b", 2), ("a", 3)]);
        assert_consistent(&pool);
    }

    #[test]
    fn test_priced_string_keys_borrowed_lookup() {
        let mut pool: PricedPool<String, u8> = PricedPool::new(2, 2);
        pool.try_put("alpha".to_string(), 1, 1);
        assert!(pool.contains_key("alpha"));
        assert_eq!(pool.try_take("alpha"), Some(1));
        assert_eq!(pool.remove("alpha"), Some((vec![], 1)));
    }

    #[test]
    fn test_priced_metrics_report() {
        let mut pool = PricedPool::new(1, 1);
        pool.try_put("a", 1, 1);
        pool.try_put("a", 2, 1);
        pool.try_put("b", 3, 0);
        pool.try_put("c", 4, 2);
        pool.try_take(&"c");
        pool.try_take(&"c");

        let metrics = CacheMetrics::metrics(&pool);
        assert_eq!(metrics["admissions"], 2.0);
        assert_eq!(metrics["rejected_full"], 1.0);
        assert_eq!(metrics["rejected_underpriced"], 1.0);
        assert_eq!(metrics["evictions"], 1.0);
        assert_eq!(metrics["cache_hits"], 1.0);
        assert_eq!(metrics["drained_takes"], 1.0);
        assert_eq!(metrics["resident_values"], 0.0);
        assert_eq!(pool.algorithm_name(), "PRICED");
    }

    #[test]
    fn test_priced_concurrent_access() {
        use scoped_threadpool::Pool;

        let pool = Mutex::new(PricedPool::new(64, 4));
        let mut workers = Pool::new(4);

        workers.scoped(|scope| {
            for t in 0..4u64 {
                let pool = &pool;
                scope.execute(move || {
                    for i in 0..200u64 {
                        let mut guard = pool.lock().unwrap();
                        guard.try_put(i % 100, (t, i), (i * 7 + t) % 50);
                        let _ = guard.try_take(&(i % 100));
                    }
                });
            }
        });

        let guard = pool.lock().unwrap();
        assert!(guard.count() <= 64);
        assert_consistent(&*guard);
    }
}
