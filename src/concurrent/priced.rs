//! Concurrent Priced Pool Implementation
//!
//! Provides a thread-safe priced pool behind a single lock. Every method holds the
//! lock for its whole duration, so a reprice and the push or eviction that follows it
//! are never observed half-done.

use crate::config::PricedPoolConfig;
use crate::listener::{Eviction, EvictionListener};
use crate::metrics::{CacheMetrics, PricedPoolMetrics};
use crate::pool::{PricedPool, PutOutcome};
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe [`PricedPool`] guarded by one `parking_lot::Mutex`.
///
/// Eviction listeners run while the lock is held. A listener must not call back into
/// the same pool, or it will deadlock.
pub struct ConcurrentPricedPool<K, V, S = DefaultHashBuilder> {
    inner: Mutex<PricedPool<K, V, S>>,
}

impl<K, V> ConcurrentPricedPool<K, V, DefaultHashBuilder>
where
    K: Hash + Eq + Ord + Clone,
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

impl<K, V, S> ConcurrentPricedPool<K, V, S>
where
    K: Hash + Eq + Ord + Clone,
    S: BuildHasher,
{
    /// Creates an empty pool that hashes keys with `hash_builder`.
    pub fn with_hasher(config: PricedPoolConfig, hash_builder: S) -> Self {
        Self {
            inner: Mutex::new(PricedPool::with_hasher(config, hash_builder)),
        }
    }

    /// Wraps an existing pool, keeping its contents and listeners.
    pub fn from_pool(pool: PricedPool<K, V, S>) -> Self {
        Self {
            inner: Mutex::new(pool),
        }
    }

    /// Unwraps the inner pool.
    pub fn into_inner(self) -> PricedPool<K, V, S> {
        self.inner.into_inner()
    }

    /// Returns the maximum number of resident keys.
    pub fn cap(&self) -> usize {
        self.inner.lock().cap()
    }

    /// Returns the maximum number of values per key.
    pub fn replica_limit(&self) -> usize {
        self.inner.lock().replica_limit()
    }

    /// Returns the number of resident keys, including keys with drained stacks.
    pub fn count(&self) -> usize {
        self.inner.lock().count()
    }

    /// Same as [`count`](Self::count).
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if no key is resident.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Puts `value` under `key` at `price` and reports whether it was stored.
    ///
    /// Any eviction listeners run before this returns, with the lock held.
    ///
    /// # Example
    ///
    /// ```rust
    /// use priced_pool::ConcurrentPricedPool;
    ///
    /// let pool = ConcurrentPricedPool::new(1, 1);
    /// assert!(pool.try_put("a", 1, 5));
    /// assert!(!pool.try_put("b", 2, 5));
    /// ```
    pub fn try_put(&self, key: K, value: V, price: u64) -> bool {
        self.inner.lock().try_put(key, value, price)
    }

    /// Puts `value` under `key` at `price`, reporting what happened.
    ///
    /// See [`PricedPool::put`]. Any eviction listeners run before this returns, with
    /// the lock held.
    pub fn put(&self, key: K, value: V, price: u64) -> PutOutcome<K, V> {
        self.inner.lock().put(key, value, price)
    }

    /// Takes the most recently pushed value of `key`.
    ///
    /// A key whose last value is taken stays resident.
    pub fn try_take<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().try_take(key)
    }

    /// Applies `f` to the top value of `key` while the lock is held.
    pub fn peek_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.inner.lock().peek(key).map(f)
    }

    /// Moves a resident key to `price` without pushing a value.
    ///
    /// Returns `false` if the key is not resident. Never evicts.
    pub fn reprice(&self, key: K, price: u64) -> bool {
        self.inner.lock().reprice(key, price)
    }

    /// Removes a resident key, returning its values (newest first) and price.
    ///
    /// Listeners are not notified.
    pub fn remove<Q>(&self, key: &Q) -> Option<(Vec<V>, u64)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().remove(key)
    }

    /// Removes and returns the current eviction candidate without notifying listeners.
    pub fn pop(&self) -> Option<Eviction<K, V>> {
        self.inner.lock().pop()
    }

    /// Returns `true` if `key` is resident.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().contains_key(key)
    }

    /// Returns the current price of a resident key.
    pub fn price_of<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().price_of(key)
    }

    /// Returns how many values a resident key holds; `Some(0)` when drained.
    pub fn depth<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().depth(key)
    }

    /// Returns the lowest resident price.
    pub fn min_price(&self) -> Option<u64> {
        self.inner.lock().min_price()
    }

    /// Registers an eviction listener. See the type docs for the locking rule.
    pub fn on_evict<L>(&self, listener: L)
    where
        L: EvictionListener<K, V> + Send + 'static,
    {
        self.inner.lock().on_evict(listener);
    }

    /// Returns a copy of the pool's metrics.
    pub fn pool_metrics(&self) -> PricedPoolMetrics {
        self.inner.lock().metrics().clone()
    }

    /// Removes every key. Listeners stay registered and are not notified.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl<K, V, S> CacheMetrics for ConcurrentPricedPool<K, V, S>
where
    K: Hash + Eq + Ord + Clone,
    S: BuildHasher,
{
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.lock().metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentPRICED"
    }
}

impl<K: Ord, V, S> core::fmt::Debug for ConcurrentPricedPool<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConcurrentPricedPool")
            .field("inner", &*self.inner.lock())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::vec::Vec;

    #[test]
    fn test_basic_operations() {
        let pool: ConcurrentPricedPool<u32, &str> = ConcurrentPricedPool::new(2, 2);

        assert!(pool.try_put(1, "a", 1));
        assert!(pool.try_put(2, "b", 2));
        assert!(pool.try_put(3, "c", 3));
        assert!(!pool.contains_key(&1));
        assert_eq!(pool.min_price(), Some(2));
        assert_eq!(pool.peek_with(&3, |v| v.len()), Some(1));
        assert_eq!(pool.try_take(&3), Some("c"));
        assert_eq!(pool.count(), 2);
    }

    #[test]
    fn test_debug_reports_inner_pool() {
        let pool: ConcurrentPricedPool<u32, u32> = ConcurrentPricedPool::new(3, 1);
        pool.try_put(1, 10, 4);

        let debug = std::format!("{pool:?}");
        assert!(debug.starts_with("ConcurrentPricedPool"));
        assert!(debug.contains("min_price: Some(4)"));
    }

    #[test]
    fn test_concurrent_access_respects_capacity() {
        let pool: Arc<ConcurrentPricedPool<u64, u64>> =
            Arc::new(ConcurrentPricedPool::new(32, 2));
        let evictions = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&evictions);
        pool.on_evict(move |_: &u64, _: &[u64], _: u64| {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        let mut handles: Vec<thread::JoinHandle<()>> = Vec::new();
        for t in 0..8u64 {
            let pool = Arc::clone(&pool);
            handles.push(thread::spawn(move || {
                for i in 0..500u64 {
                    let key = t * 1_000 + i;
                    pool.try_put(key, i, i % 97);
                    let _ = pool.try_take(&key);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(pool.count() <= 32);
        let metrics = pool.pool_metrics();
        assert_eq!(metrics.core.evictions as usize, evictions.load(Ordering::Relaxed));
    }
}
