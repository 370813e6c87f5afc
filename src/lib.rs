//! # Runstats
//!
//! Numerically stable online statistics for Rust.
//!
//! Runstats computes count, min, max, mean, variance, standard deviation,
//! skewness, and kurtosis over a stream of observations in a single pass with
//! constant memory. The observations themselves are never stored, so the same
//! accumulator works for ten values or ten billion.
//!
//! ## Features
//!
//! - **Four central moments**: mean, variance, skewness, and excess kurtosis
//!   from one O(1) update per observation
//! - **Numerical stability**: the classic single-pass moment recurrences
//!   (Welford/Knuth, extended to third and fourth moments) avoid catastrophic
//!   cancellation
//! - **Concurrent access**: [`SharedStats`](statistics::SharedStats) guards an
//!   accumulator with a reader-writer lock for many-producer workloads
//! - **Full mergeability**: accumulators combine via the pairwise moment
//!   update, so partitions of a stream can be processed independently
//! - **Snapshots**: a plain [`Snapshot`](statistics::Snapshot) value record
//!   for logging, metrics export, or RPC payloads
//!
//! ## Quick Start
//!
//! ```rust
//! use runstats::prelude::*;
//!
//! let mut stats = RunningStats::new();
//! for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
//!     stats.add(value);
//! }
//!
//! assert_eq!(stats.count(), 8);
//! assert!((stats.mean() - 5.0).abs() < 1e-12);
//! println!("{}", stats); // count 8 min 2.00 max 9.00 mean 5.00 ...
//! ```
//!
//! ## Concurrent Usage
//!
//! ```rust
//! use runstats::statistics::SharedStats;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let stats = Arc::new(SharedStats::new());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let stats = Arc::clone(&stats);
//!         thread::spawn(move || {
//!             for _ in 0..1000 {
//!                 stats.add(1.0);
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(stats.count(), 4000);
//! ```
//!
//! ## Distributed Computing
//!
//! Accumulators implement the [`Sketch`](traits::Sketch) trait which includes
//! a `merge` operation, allowing partial results to be combined across
//! distributed workers:
//!
//! ```rust
//! use runstats::statistics::RunningStats;
//! use runstats::traits::Sketch;
//!
//! let mut worker1 = RunningStats::new();
//! let mut worker2 = RunningStats::new();
//!
//! // Each worker processes its partition
//! for v in [1.0, 2.0, 3.0] {
//!     worker1.add(v);
//! }
//! for v in [4.0, 5.0, 6.0] {
//!     worker2.add(v);
//! }
//!
//! // Merge results
//! worker1.merge(&worker2).unwrap();
//! assert!((worker1.mean() - 3.5).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; enables
//!   [`SharedStats`](statistics::SharedStats)
//! - `serde`: Enable serialization of snapshots
//! - `libm`: Math fallbacks for no_std builds (required when `std` is off)

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod math;

// Core traits always available
pub mod traits;

pub mod statistics;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::statistics::{RunningStats, Snapshot};

    #[cfg(feature = "std")]
    pub use crate::statistics::SharedStats;
}

pub use statistics::{RunningStats, Snapshot};

#[cfg(feature = "std")]
pub use statistics::SharedStats;
