//! Thread-safe shared statistics accumulator
//!
//! Wraps [`RunningStats`] in a reader-writer lock so that many producer
//! threads can feed one accumulator while readers query it concurrently.

use crate::statistics::{RunningStats, Snapshot};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Concurrent running statistics accumulator
///
/// A [`RunningStats`] behind an `RwLock`: updates and resets take the write
/// lock, every query takes the read lock. Any number of readers may run
/// simultaneously; a writer excludes everyone for the duration of one O(1)
/// update. No method holds the lock across calls, so no operation blocks for
/// more than a single update.
///
/// All methods take `&self`; share the accumulator across threads with
/// `Arc<SharedStats>`.
///
/// # Example
///
/// ```
/// use runstats::statistics::SharedStats;
/// use std::sync::Arc;
/// use std::thread;
///
/// let stats = Arc::new(SharedStats::new());
///
/// let writers: Vec<_> = (0..8)
///     .map(|_| {
///         let stats = Arc::clone(&stats);
///         thread::spawn(move || {
///             for _ in 0..1000 {
///                 stats.add(2.5);
///             }
///         })
///     })
///     .collect();
/// for writer in writers {
///     writer.join().unwrap();
/// }
///
/// assert_eq!(stats.count(), 8000);
/// assert_eq!(stats.mean(), 2.5);
/// ```
///
/// # Snapshot consistency
///
/// Individual queries each take the lock separately, so two consecutive
/// queries may straddle an update. When all fields must come from the same
/// instant, use [`snapshot`](SharedStats::snapshot), which derives all eight
/// statistics under one read-lock acquisition.
#[derive(Debug, Default)]
pub struct SharedStats {
    inner: RwLock<RunningStats>,
}

impl SharedStats {
    /// Create a new empty shared accumulator
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RunningStats::new()),
        }
    }

    // The update never panics while holding the lock, so a poisoned lock
    // still guards consistent state and can be recovered.
    fn read(&self) -> RwLockReadGuard<'_, RunningStats> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RunningStats> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a value to the statistics
    ///
    /// Takes the write lock for one O(1) moment update. The count, extrema,
    /// and all four moments change atomically as a group; no reader can
    /// observe a partial update.
    pub fn add(&self, value: f64) {
        self.write().add(value);
    }

    /// Reset to the empty state, discarding all accumulated history
    pub fn reset(&self) {
        self.write().reset();
    }

    /// Merge a locally accumulated batch into the shared statistics
    ///
    /// Cheaper than calling [`add`](SharedStats::add) per value under
    /// contention: workers accumulate privately and fold in their partial
    /// result with a single write-lock acquisition.
    pub fn merge(&self, other: &RunningStats) {
        self.write().merge_stats(other);
    }

    /// Get the number of values
    pub fn count(&self) -> u64 {
        self.read().count()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Get the minimum value seen, or `+inf` if empty
    pub fn min(&self) -> f64 {
        self.read().min()
    }

    /// Get the maximum value seen, or `-inf` if empty
    pub fn max(&self) -> f64 {
        self.read().max()
    }

    /// Get the mean (average), 0 if empty
    pub fn mean(&self) -> f64 {
        self.read().mean()
    }

    /// Get the sum of all values
    pub fn sum(&self) -> f64 {
        self.read().sum()
    }

    /// Get the sample variance (Bessel-corrected), 0 below two samples
    pub fn variance(&self) -> f64 {
        self.read().variance()
    }

    /// Get the sample standard deviation
    pub fn stddev(&self) -> f64 {
        self.read().stddev()
    }

    /// Get the skewness, 0 below two samples or at zero spread
    pub fn skewness(&self) -> f64 {
        self.read().skewness()
    }

    /// Get the excess kurtosis, 0 below two samples or at zero spread
    pub fn kurtosis(&self) -> f64 {
        self.read().kurtosis()
    }

    /// Capture all derived statistics under a single read-lock acquisition
    ///
    /// The returned [`Snapshot`] is guaranteed internally consistent even
    /// under concurrent writers: no update can land between the derivation
    /// of any two fields.
    pub fn snapshot(&self) -> Snapshot {
        self.read().snapshot()
    }

    /// Format the current statistics as a one-line summary string
    ///
    /// Same format as the [`Display`](core::fmt::Display) impl on
    /// [`Snapshot`], computed from one consistent snapshot.
    pub fn describe(&self) -> String {
        self.snapshot().to_string()
    }

    /// Extract a plain copy of the underlying accumulator
    pub fn to_stats(&self) -> RunningStats {
        self.read().clone()
    }
}

impl From<RunningStats> for SharedStats {
    fn from(stats: RunningStats) -> Self {
        Self {
            inner: RwLock::new(stats),
        }
    }
}
