//! Statistical summaries for streaming data
//!
//! This module provides single-pass, constant-memory computation of summary
//! statistics — mean, variance, standard deviation, skewness, and excess
//! kurtosis — plus extrema and count, without retaining the observations.
//!
//! [`RunningStats`] is the single-threaded core; [`SharedStats`] wraps it in
//! a reader-writer lock for concurrent producers; [`Snapshot`] is a plain
//! value record of all derived statistics at one instant.
//!
//! # Example
//!
//! ```
//! use runstats::statistics::RunningStats;
//!
//! let mut stats = RunningStats::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     stats.add(value);
//! }
//!
//! println!("Mean: {}", stats.mean());
//! println!("Stddev: {}", stats.stddev());
//! println!("Skewness: {}", stats.skewness());
//! println!("Summary: {}", stats);
//! ```

mod moments;
mod snapshot;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod shared;

pub use moments::RunningStats;
pub use snapshot::Snapshot;

#[cfg(feature = "std")]
pub use shared::SharedStats;
