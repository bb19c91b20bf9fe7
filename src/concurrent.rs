//! Concurrent Pool Implementation
//!
//! This module provides a thread-safe wrapper around [`PricedPool`](crate::PricedPool).
//!
//! # Architecture
//!
//! The whole pool sits behind one `parking_lot::Mutex`:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │         ConcurrentPricedPool             │
//! │  ┌────────────────────────────────────┐  │
//! │  │ Mutex                              │  │
//! │  │   PricedPool { index, entries, ..} │  │
//! │  └────────────────────────────────────┘  │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Why Not Segments?
//!
//! Hash-sharded segments would each hold their own minimum, and a new key could evict
//! a key in its own segment while a cheaper key survived in another. Price ordering is
//! global, so the lock is too.
//!
//! ## Why Mutex Instead of RwLock?
//!
//! `try_take` pops a value and `try_put` may reprice, push, or evict, so nearly every
//! call mutates. Read-only calls (`price_of`, `min_price`) are short enough that a
//! plain `Mutex` is cheaper than `RwLock` bookkeeping.
//!
//! # Example
//!
//! ```rust
//! use priced_pool::ConcurrentPricedPool;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let pool = Arc::new(ConcurrentPricedPool::new(100, 2));
//!
//! let handles: Vec<_> = (0..4u64).map(|t| {
//!     let pool = Arc::clone(&pool);
//!     thread::spawn(move || {
//!         for i in 0..100u64 {
//!             pool.try_put(t * 100 + i, i, i);
//!         }
//!     })
//! }).collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(pool.count(), 100);
//! ```

mod priced;

pub use self::priced::ConcurrentPricedPool;
