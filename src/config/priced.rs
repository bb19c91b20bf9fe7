//! Configuration for the priced cache pool.
//!
//! # Examples
//!
//! ```
//! use priced_pool::config::PricedPoolConfig;
//! use priced_pool::PricedPool;
//!
//! // Five keys, at most two values stacked under each
//! let config = PricedPoolConfig::new(5, 2);
//! let pool: PricedPool<&str, &str> = PricedPool::from_config(config);
//!
//! // Same thing, spelled with the builder methods
//! let config = PricedPoolConfig::default()
//!     .with_capacity(5)
//!     .with_replica_limit(2);
//! assert_eq!(config, PricedPoolConfig::new(5, 2));
//! ```

use core::fmt;

/// Configuration for a [`PricedPool`](crate::PricedPool).
///
/// # Parameters
///
/// - `capacity`: Maximum number of resident keys. Zero is legal and produces a
///   pool that rejects every admission.
/// - `replica_limit`: Maximum length of a key's value stack. The value that admits a
///   key is pushed unconditionally, so with a limit of zero every key holds at most
///   the value it was admitted with.
///
/// # Examples
///
/// ```
/// use priced_pool::config::PricedPoolConfig;
///
/// let config = PricedPoolConfig::new(100, 3);
/// assert_eq!(config.capacity(), 100);
/// assert_eq!(config.replica_limit(), 3);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct PricedPoolConfig {
    /// Maximum number of resident keys
    capacity: usize,
    /// Maximum number of values stacked under one key
    replica_limit: usize,
}

impl PricedPoolConfig {
    /// Creates a new configuration with the given capacity and replica limit.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of keys the pool can hold
    /// * `replica_limit` - Maximum number of values per key
    #[must_use]
    pub fn new(capacity: usize, replica_limit: usize) -> Self {
        Self {
            capacity,
            replica_limit,
        }
    }

    /// Sets the maximum number of resident keys.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the maximum number of values stacked under one key.
    #[must_use]
    pub fn with_replica_limit(mut self, replica_limit: usize) -> Self {
        self.replica_limit = replica_limit;
        self
    }

    /// Returns the maximum number of resident keys.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the maximum number of values per key.
    #[inline]
    pub fn replica_limit(&self) -> usize {
        self.replica_limit
    }
}

impl fmt::Debug for PricedPoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PricedPoolConfig")
            .field("capacity", &self.capacity)
            .field("replica_limit", &self.replica_limit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priced_config_creation() {
        let config = PricedPoolConfig::new(5, 2);
        assert_eq!(config.capacity(), 5);
        assert_eq!(config.replica_limit(), 2);
    }

    #[test]
    fn test_priced_config_builder_pattern() {
        let config = PricedPoolConfig::new(5, 2)
            .with_capacity(50)
            .with_replica_limit(0);
        assert_eq!(config.capacity(), 50);
        assert_eq!(config.replica_limit(), 0);
    }

    #[test]
    fn test_priced_config_default_is_empty() {
        let config = PricedPoolConfig::default();
        assert_eq!(config.capacity(), 0);
        assert_eq!(config.replica_limit(), 0);
    }
}
