//! Pool Configuration Module
//!
//! This module provides the configuration structure for [`PricedPool`](crate::PricedPool).
//!
//! # Design Philosophy
//!
//! The configuration is a small `Copy` value built once and handed to the pool:
//!
//! - **Immutable**: A pool never changes its capacity or replica limit after construction
//! - **Total**: Every combination of values is legal, including zeros
//! - **Builder-friendly**: `new` plus `with_*` methods for readable call sites
//!
//! # Sizing Guidelines
//!
//! A pool has two independent limits:
//!
//! - **`capacity`**: Maximum number of *resident keys*. A key occupies a slot for as long
//!   as it is resident, even when its value stack has been drained.
//! - **`replica_limit`**: Maximum number of values a single key may hold at once.
//!
//! ```text
//! Max values held ≈ capacity × max(replica_limit, 1)
//! ```
//!
//! The first value for a key is always accepted on admission, so a `replica_limit`
//! of zero still lets every admitted key hold exactly one value.
//!
//! # Examples
//!
//! ```
//! use priced_pool::config::PricedPoolConfig;
//! use priced_pool::PricedPool;
//!
//! let config = PricedPoolConfig::new(1000, 4);
//! let pool: PricedPool<String, Vec<u8>> = PricedPool::from_config(config);
//! assert_eq!(pool.cap(), 1000);
//! ```

pub mod priced;

pub use priced::PricedPoolConfig;
