//! Priced Pool Entry Types
//!
//! This module provides the two records the pool keeps per resident key:
//!
//! - [`PricedKey`]: the sort key of the price index. Ordered by price first, then by
//!   the key itself, so the first element of the index is always the eviction candidate.
//! - [`PricedEntry`]: the key's current price together with its bounded value stack.
//!
//! # Ordering
//!
//! ```text
//! (price: 1, key: "3") < (price: 1, key: "7") < (price: 2, key: "2") < (price: 4, key: "4")
//!  ^ evicted first
//! ```
//!
//! Two `PricedKey`s are equal only when both price and key are equal. Since each resident
//! key appears exactly once in the index, no two resident keys ever share a `PricedKey`.

use alloc::vec::Vec;
use core::fmt;

/// Composite sort key pairing a cache key with its current price.
///
/// Field order matters: the derived `Ord` compares `price` before `key`, which gives
/// ascending price order with ties broken by the key's natural order.
///
/// # Examples
///
/// ```
/// use priced_pool::entry::PricedKey;
///
/// let cheap = PricedKey::new("z", 1);
/// let dear = PricedKey::new("a", 2);
/// assert!(cheap < dear);
///
/// // Equal prices fall back to the key
/// assert!(PricedKey::new("a", 1) < PricedKey::new("b", 1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PricedKey<K> {
    /// Current price of the key
    pub price: u64,
    /// The cache key
    pub key: K,
}

impl<K> PricedKey<K> {
    /// Creates a new priced key.
    #[inline]
    pub fn new(key: K, price: u64) -> Self {
        Self { price, key }
    }

    /// Splits the priced key into its key and price.
    #[inline]
    pub fn into_parts(self) -> (K, u64) {
        (self.key, self.price)
    }
}

impl<K: fmt::Debug> fmt::Debug for PricedKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PricedKey")
            .field("key", &self.key)
            .field("price", &self.price)
            .finish()
    }
}

/// Per-key record: current price plus a LIFO stack of values.
///
/// The stack is stored bottom-to-top, so the last element of [`values`](Self::values)
/// is the next value [`pop`](Self::pop) returns.
///
/// An entry created by [`PricedEntry::new`] always holds its first value, regardless of
/// any replica limit. Only subsequent [`push`](Self::push) calls are bounded.
pub struct PricedEntry<V> {
    price: u64,
    values: Vec<V>,
}

impl<V> PricedEntry<V> {
    /// Creates an entry seeded with its admitting value.
    #[inline]
    pub fn new(price: u64, first: V) -> Self {
        let mut values = Vec::with_capacity(1);
        values.push(first);
        Self { price, values }
    }

    /// Returns the entry's current price.
    #[inline]
    pub fn price(&self) -> u64 {
        self.price
    }

    #[inline]
    pub(crate) fn set_price(&mut self, price: u64) {
        self.price = price;
    }

    /// Returns the number of values currently stacked.
    #[inline]
    pub fn depth(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the stack is empty.
    ///
    /// An entry with an empty stack is still resident in its pool.
    #[inline]
    pub fn is_drained(&self) -> bool {
        self.values.is_empty()
    }

    /// Pushes `value` if the stack holds fewer than `limit` values.
    ///
    /// Returns the value back when the stack is full.
    #[inline]
    pub fn push(&mut self, value: V, limit: usize) -> Result<(), V> {
        if self.values.len() < limit {
            self.values.push(value);
            Ok(())
        } else {
            Err(value)
        }
    }

    /// Removes and returns the most recently pushed value.
    #[inline]
    pub fn pop(&mut self) -> Option<V> {
        self.values.pop()
    }

    /// Returns the most recently pushed value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&V> {
        self.values.last()
    }

    /// Returns the stacked values, bottom first.
    #[inline]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Consumes the entry, returning its values in pop order, newest first.
    #[inline]
    pub fn into_values(self) -> Vec<V> {
        let mut values = self.values;
        values.reverse();
        values
    }
}

impl<V> fmt::Debug for PricedEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PricedEntry")
            .field("price", &self.price)
            .field("depth", &self.values.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn test_priced_key_orders_by_price_then_key() {
        let mut index = BTreeSet::new();
        index.insert(PricedKey::new("2", 2));
        index.insert(PricedKey::new("7", 1));
        index.insert(PricedKey::new("5", 5));
        index.insert(PricedKey::new("3", 1));

        let order: Vec<_> = index.iter().map(|pk| pk.key).collect();
        assert_eq!(order, ["3", "7", "2", "5"]);
    }

    #[test]
    fn test_priced_key_equality_needs_both_parts() {
        assert_eq!(PricedKey::new("a", 1), PricedKey::new("a", 1));
        assert_ne!(PricedKey::new("a", 1), PricedKey::new("a", 2));
        assert_ne!(PricedKey::new("a", 1), PricedKey::new("b", 1));
    }

    #[test]
    fn test_entry_seeds_first_value() {
        let entry = PricedEntry::new(7, "x");
        assert_eq!(entry.price(), 7);
        assert_eq!(entry.depth(), 1);
        assert_eq!(entry.peek(), Some(&"x"));
    }

    #[test]
    fn test_entry_push_respects_limit() {
        let mut entry = PricedEntry::new(1, 10);
        assert_eq!(entry.push(20, 2), Ok(()));
        assert_eq!(entry.push(30, 2), Err(30));
        assert_eq!(entry.values(), &[10, 20]);
    }

    #[test]
    fn test_entry_zero_limit_rejects_push() {
        let mut entry = PricedEntry::new(1, 10);
        assert_eq!(entry.push(20, 0), Err(20));
        assert_eq!(entry.depth(), 1);
    }

    #[test]
    fn test_entry_pop_is_lifo() {
        let mut entry = PricedEntry::new(1, 'a');
        entry.push('b', 3).unwrap();
        assert_eq!(entry.pop(), Some('b'));
        assert_eq!(entry.pop(), Some('a'));
        assert_eq!(entry.pop(), None);
        assert!(entry.is_drained());
    }

    #[test]
    fn test_entry_into_values_newest_first() {
        let mut entry = PricedEntry::new(1, "oldest");
        entry.push("middle", 3).unwrap();
        entry.push("newest", 3).unwrap();
        assert_eq!(entry.values(), &["oldest", "middle", "newest"]);
        assert_eq!(entry.into_values(), ["newest", "middle", "oldest"]);
    }
}
