#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## At a Glance
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │                         try_put(key, value, price)                       │
//! ├──────────────────────────────────────────────────────────────────────────┤
//! │                                                                          │
//! │   key resident? ──Yes──▶ reprice if price changed                        │
//! │        │                      │                                          │
//! │        No                     ▼                                          │
//! │        │               stack < replica_limit? ──Yes──▶ push   → true     │
//! │        ▼                      │                                          │
//! │   free slot? ──Yes──▶ admit   No ──────────────────────────▶ false       │
//! │        │              → true                                             │
//! │        No                                                                │
//! │        ▼                                                                 │
//! │   price > minimum? ──Yes──▶ evict minimum, admit, notify → true          │
//! │        │                                                                 │
//! │        No ─────────────────────────────────────────────────▶ false       │
//! │                                                                          │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Example
//!
//! ```rust
//! use priced_pool::PricedPool;
//!
//! let mut pool = PricedPool::new(2, 2);
//! pool.try_put("img", "v1", 3);
//! pool.try_put("img", "v2", 3);
//! pool.try_put("css", "v1", 1);
//!
//! // Values come back newest first
//! assert_eq!(pool.try_take(&"img"), Some("v2"));
//! assert_eq!(pool.try_take(&"img"), Some("v1"));
//!
//! // A drained key keeps its slot
//! assert_eq!(pool.try_take(&"img"), None);
//! assert_eq!(pool.count(), 2);
//!
//! // "css" is the cheapest key and makes room for a dearer one
//! assert!(pool.try_put("js", "v1", 2));
//! assert!(!pool.contains_key(&"css"));
//! ```
//!
//! ## Outcomes Instead of Errors
//!
//! Nothing in the pool fails. [`PricedPool::put`] reports what happened as a
//! [`PutOutcome`]; [`PricedPool::try_put`] reduces that to "was the value stored".
//!
//! ```rust
//! use priced_pool::{PricedPool, PutOutcome};
//!
//! let mut pool = PricedPool::new(1, 1);
//! assert_eq!(pool.put("a", 1, 5), PutOutcome::Admitted);
//! assert_eq!(pool.put("a", 2, 5), PutOutcome::RejectedFull);
//! assert_eq!(pool.put("b", 3, 5), PutOutcome::RejectedUnderpriced);
//! assert!(pool.put("c", 4, 6).into_eviction().is_some());
//! ```
//!
//! ## Concurrent Pool
//!
//! Enable the `concurrent` feature for a thread-safe wrapper:
//!
//! ```toml
//! [dependencies]
//! priced-pool = { version = "0.1", features = ["concurrent"] }
//! ```
//!
//! ## Modules
//!
//! - [`pool`]: The priced cache pool
//! - [`entry`]: Priced keys and value stacks
//! - [`listener`]: Eviction notifications
//! - [`config`]: Pool configuration
//! - [`metrics`]: Metrics collection
//! - [`concurrent`]: Thread-safe wrapper (requires `concurrent` feature)

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", not(feature = "hashbrown")))]
extern crate std;

#[cfg(test)]
extern crate scoped_threadpool;

/// Priced key and per-key value stack.
///
/// `PricedKey` is the sort key of the price index; `PricedEntry` holds a key's
/// price and its bounded LIFO stack of values.
pub mod entry;

/// Eviction listener trait and the eviction record handed to listeners.
pub mod listener;

/// Pool configuration structures.
pub mod config;

/// Bounded, price-ordered cache pool.
///
/// Holds a stack of values per key and evicts the lowest-priced key when a
/// higher-priced key arrives at a full pool.
pub mod pool;

/// Pool metrics system.
///
/// Provides BTreeMap-based metrics reporting through the `CacheMetrics` trait.
pub mod metrics;

/// Concurrent pool implementation.
///
/// Provides a thread-safe pool guarded by a single lock.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use pool::{PricedPool, PutOutcome};

pub use entry::{PricedEntry, PricedKey};

pub use listener::{Eviction, EvictionListener};

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentPricedPool;
