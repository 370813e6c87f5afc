//! Running statistics (mean, variance, skewness, kurtosis, min, max)
//!
//! Computes streaming statistics using the single-pass central-moment
//! recurrences (Welford/Knuth, extended to the third and fourth moments).
//! Supports merging for distributed computation.

use crate::math;
use crate::statistics::Snapshot;
use crate::traits::{MergeError, Sketch};

/// Running statistics accumulator over the first four central moments
///
/// Computes count, min, max, mean, variance, standard deviation, skewness,
/// and excess kurtosis in a single pass with O(1) memory per stream. The
/// update recurrences keep all four moments numerically stable without a
/// second pass over the data.
///
/// Derived statistics are never cached; each query recomputes its value from
/// the stored moments, so a query always reflects every update applied so
/// far.
///
/// # Example
///
/// ```
/// use runstats::statistics::RunningStats;
///
/// let mut stats = RunningStats::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.add(value);
/// }
///
/// assert!((stats.mean() - 5.0).abs() < 1e-12);
/// assert!((stats.variance() - 32.0 / 7.0).abs() < 1e-12);
/// assert!((stats.min() - 2.0).abs() < 1e-12);
/// assert!((stats.max() - 9.0).abs() < 1e-12);
/// ```
///
/// # Distributed Usage
///
/// ```
/// use runstats::statistics::RunningStats;
/// use runstats::traits::Sketch;
///
/// let mut stats1 = RunningStats::new();
/// let mut stats2 = RunningStats::new();
///
/// // Worker 1
/// for v in [1.0, 2.0, 3.0] {
///     stats1.add(v);
/// }
///
/// // Worker 2
/// for v in [4.0, 5.0, 6.0] {
///     stats2.add(v);
/// }
///
/// // Merge
/// stats1.merge(&stats2).unwrap();
/// assert!((stats1.mean() - 3.5).abs() < 1e-12);
/// ```
///
/// # Non-finite input
///
/// Input is not validated. Feeding `NaN` or `±inf` poisons the moments
/// according to ordinary IEEE 754 rules, and every subsequent derived
/// statistic will reflect that. Callers that need clean output should filter
/// before adding.
#[derive(Clone, Debug)]
pub struct RunningStats {
    /// Number of values seen
    count: u64,
    /// Minimum value
    min: f64,
    /// Maximum value
    max: f64,
    /// Running mean (first moment)
    m1: f64,
    /// Sum of squared deviations from the mean (scaled second moment)
    m2: f64,
    /// Scaled third central moment
    m3: f64,
    /// Scaled fourth central moment
    m4: f64,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningStats {
    /// Create a new empty statistics accumulator
    ///
    /// `min` starts at `+inf` and `max` at `-inf` so the first observation
    /// always becomes both extrema.
    pub fn new() -> Self {
        Self {
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            m1: 0.0,
            m2: 0.0,
            m3: 0.0,
            m4: 0.0,
        }
    }

    /// Add a value to the statistics
    ///
    /// Single pass, O(1) time and space. The recurrence must read the
    /// pre-update `m2` and `m3` when computing the new `m4` and `m3`, so
    /// `m2` is written last.
    pub fn add(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }

        let last_count = self.count as f64;
        self.count += 1;
        let n = self.count as f64;

        let delta = value - self.m1;
        let delta_n = delta / n;
        let delta_n2 = delta_n * delta_n;
        let term1 = delta * delta_n * last_count;

        self.m1 += delta_n;
        self.m4 += term1 * delta_n2 * (n * n - 3.0 * n + 3.0) + 6.0 * delta_n2 * self.m2
            - 4.0 * delta_n * self.m3;
        self.m3 += term1 * delta_n * (n - 2.0) - 3.0 * delta_n * self.m2;
        self.m2 += term1;
    }

    /// Reset to the empty state, discarding all accumulated history
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Get the number of values
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Get the number of values (alias for `count`)
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the minimum value seen, or `+inf` if empty
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Get the maximum value seen, or `-inf` if empty
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Get the range (max - min), or `-inf` if empty
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Get the mean (average), 0 if empty
    pub fn mean(&self) -> f64 {
        self.m1
    }

    /// Get the sum of all values
    pub fn sum(&self) -> f64 {
        self.m1 * self.count as f64
    }

    /// Get the sample variance
    ///
    /// Uses Bessel's correction (`m2 / (n - 1)`), the unbiased estimator.
    /// Returns 0 for fewer than two samples.
    pub fn variance(&self) -> f64 {
        if self.count > 1 {
            self.m2 / (self.count - 1) as f64
        } else {
            0.0
        }
    }

    /// Get the sample standard deviation
    pub fn stddev(&self) -> f64 {
        math::sqrt(self.variance())
    }

    /// Get the skewness
    ///
    /// `sqrt(n) * m3 / m2^1.5`. Returns 0 for fewer than two samples and for
    /// zero-spread streams (`m2 == 0`, every value identical), where the
    /// ratio would otherwise be `0/0`.
    pub fn skewness(&self) -> f64 {
        if self.count > 1 && self.m2 != 0.0 {
            math::sqrt(self.count as f64) * self.m3 / math::powf(self.m2, 1.5)
        } else {
            0.0
        }
    }

    /// Get the excess kurtosis
    ///
    /// `n * m4 / m2² - 3`, normalized so a normal distribution has kurtosis
    /// 0. Returns 0 for fewer than two samples and for zero-spread streams
    /// (`m2 == 0`).
    pub fn kurtosis(&self) -> f64 {
        if self.count > 1 && self.m2 != 0.0 {
            self.count as f64 * self.m4 / (self.m2 * self.m2) - 3.0
        } else {
            0.0
        }
    }

    /// Capture all derived statistics as a plain [`Snapshot`] value
    ///
    /// The snapshot is computed from the accumulator's state at the moment of
    /// the call; fields are mutually consistent with each other and with the
    /// individual query methods.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            count: self.count(),
            min: self.min(),
            max: self.max(),
            mean: self.mean(),
            variance: self.variance(),
            stddev: self.stddev(),
            skewness: self.skewness(),
            kurtosis: self.kurtosis(),
        }
    }

    /// Merge with another accumulator using the pairwise moment update
    ///
    /// Uses Chan et al.'s parallel algorithm, extended to the third and
    /// fourth moments. The result is identical (to floating-point tolerance)
    /// to having fed both streams into a single accumulator.
    pub fn merge_stats(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }

        if self.count == 0 {
            *self = other.clone();
            return;
        }

        let n1 = self.count as f64;
        let n2 = other.count as f64;
        let n = n1 + n2;

        let delta = other.m1 - self.m1;
        let delta2 = delta * delta;
        let delta3 = delta * delta2;
        let delta4 = delta2 * delta2;

        let m1 = (n1 * self.m1 + n2 * other.m1) / n;
        let m2 = self.m2 + other.m2 + delta2 * n1 * n2 / n;
        let m3 = self.m3
            + other.m3
            + delta3 * n1 * n2 * (n1 - n2) / (n * n)
            + 3.0 * delta * (n1 * other.m2 - n2 * self.m2) / n;
        let m4 = self.m4
            + other.m4
            + delta4 * n1 * n2 * (n1 * n1 - n1 * n2 + n2 * n2) / (n * n * n)
            + 6.0 * delta2 * (n1 * n1 * other.m2 + n2 * n2 * self.m2) / (n * n)
            + 4.0 * delta * (n1 * other.m3 - n2 * self.m3) / n;

        self.count += other.count;
        self.m1 = m1;
        self.m2 = m2;
        self.m3 = m3;
        self.m4 = m4;
        if other.min < self.min {
            self.min = other.min;
        }
        if other.max > self.max {
            self.max = other.max;
        }
    }
}

/// Formats as `count N min X max X mean X (std dev X variance X)`.
///
/// The alternate form (`{:#}`) appends `skewness X kurtosis X`.
impl core::fmt::Display for RunningStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.snapshot(), f)
    }
}

impl Sketch for RunningStats {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    fn merge(&mut self, other: &Self) -> Result<(), MergeError> {
        self.merge_stats(other);
        Ok(())
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}
