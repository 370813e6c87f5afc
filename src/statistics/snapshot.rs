//! Point-in-time snapshot of a running statistics accumulator

use crate::statistics::RunningStats;

/// Immutable record of all derived statistics at one instant
///
/// A plain value object intended for consumers outside the accumulator —
/// logging, metrics export, RPC payloads — that should not depend on the
/// accumulator's internals or locking. All eight fields are mutually
/// consistent: they were derived from one state, never spliced across
/// updates.
///
/// # Example
///
/// ```
/// use runstats::statistics::RunningStats;
///
/// let mut stats = RunningStats::new();
/// stats.add(1.0);
/// stats.add(3.0);
///
/// let snap = stats.snapshot();
/// assert_eq!(snap.count, 2);
/// assert_eq!(snap.mean, 2.0);
/// assert_eq!(snap.min, 1.0);
/// assert_eq!(snap.max, 3.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    /// Number of observations
    pub count: u64,
    /// Minimum observed value (`+inf` when empty)
    pub min: f64,
    /// Maximum observed value (`-inf` when empty)
    pub max: f64,
    /// Mean of observations
    pub mean: f64,
    /// Sample variance (Bessel-corrected)
    pub variance: f64,
    /// Sample standard deviation
    pub stddev: f64,
    /// Skewness
    pub skewness: f64,
    /// Excess kurtosis
    pub kurtosis: f64,
}

impl From<&RunningStats> for Snapshot {
    fn from(stats: &RunningStats) -> Self {
        stats.snapshot()
    }
}

/// Formats as `count N min X max X mean X (std dev X variance X)`.
///
/// The alternate form (`{:#}`) appends `skewness X kurtosis X`.
impl core::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "count {} min {:.2} max {:.2} mean {:.2} (std dev {:.3} variance {:.2})",
            self.count, self.min, self.max, self.mean, self.stddev, self.variance
        )?;
        if f.alternate() {
            write!(f, " skewness {:.3} kurtosis {:.3}", self.skewness, self.kurtosis)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Snapshot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Snapshot", 8)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("min", &self.min)?;
        state.serialize_field("max", &self.max)?;
        state.serialize_field("mean", &self.mean)?;
        state.serialize_field("variance", &self.variance)?;
        state.serialize_field("stddev", &self.stddev)?;
        state.serialize_field("skewness", &self.skewness)?;
        state.serialize_field("kurtosis", &self.kurtosis)?;
        state.end()
    }
}
