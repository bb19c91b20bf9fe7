//! Eviction notifications.
//!
//! A pool evicts only inside [`PricedPool::put`](crate::PricedPool::put), when a new key
//! outbids the cheapest resident key of a full pool. Every registered
//! [`EvictionListener`] is then called, in registration order, with the evicted key,
//! the values that were still stacked under it (newest first), and its price.
//!
//! Listeners run after the pool has been updated: the evicted key is already absent
//! when they observe it.
//!
//! Any `FnMut(&K, &[V], u64) + Send` closure is a listener:
//!
//! ```
//! use priced_pool::PricedPool;
//! use std::sync::{Arc, Mutex};
//!
//! let evicted = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&evicted);
//!
//! let mut pool = PricedPool::new(1, 2);
//! pool.on_evict(move |key: &&'static str, values: &[i32], price: u64| {
//!     sink.lock().unwrap().push((*key, values.to_vec(), price));
//! });
//!
//! pool.try_put("cheap", 1, 1);
//! pool.try_put("dear", 2, 9);
//! assert_eq!(*evicted.lock().unwrap(), vec![("cheap", vec![1], 1)]);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Receives eviction notifications from a pool.
///
/// Implementations must be `Send` to be registered, so that a pool carrying listeners
/// can still move between threads.
///
/// A listener that panics unwinds out of the `put` call that triggered the eviction.
/// Listeners registered after it are not called for that eviction. The pool itself is
/// left consistent because all structural updates happen before notification.
pub trait EvictionListener<K, V> {
    /// Called once per eviction with the evicted key, its surviving values (newest
    /// first), and the price it held.
    fn on_evict(&mut self, key: &K, values: &[V], price: u64);
}

impl<K, V, F> EvictionListener<K, V> for F
where
    F: FnMut(&K, &[V], u64),
{
    #[inline]
    fn on_evict(&mut self, key: &K, values: &[V], price: u64) {
        self(key, values, price)
    }
}

pub(crate) type BoxedListener<K, V> = Box<dyn EvictionListener<K, V> + Send>;

/// Ordered list of registered listeners.
pub(crate) struct Listeners<K, V> {
    inner: Vec<BoxedListener<K, V>>,
}

impl<K, V> Listeners<K, V> {
    pub(crate) fn new() -> Self {
        Self { inner: Vec::new() }
    }

    pub(crate) fn register(&mut self, listener: BoxedListener<K, V>) {
        self.inner.push(listener);
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.len()
    }

    pub(crate) fn notify(&mut self, eviction: &Eviction<K, V>) {
        for listener in self.inner.iter_mut() {
            listener.on_evict(&eviction.key, &eviction.values, eviction.price);
        }
    }
}

/// An entry removed from the pool, with everything it held.
#[derive(Clone, PartialEq, Eq)]
pub struct Eviction<K, V> {
    /// The removed key
    pub key: K,
    /// The values still stacked under the key, newest first
    pub values: Vec<V>,
    /// The price the key held when it was removed
    pub price: u64,
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Eviction<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Eviction")
            .field("key", &self.key)
            .field("values", &self.values)
            .field("price", &self.price)
            .finish()
    }
}
