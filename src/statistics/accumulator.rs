//! Sufficient-statistics accumulator (count, sum, sum of squares)
//!
//! Reports mean and population standard deviation of everything ingested
//! since the last reset, in O(1) memory and O(1) time per operation.

use core::cell::Cell;
use core::fmt;

use log::{debug, trace};

use crate::math;
use crate::sample::Sample;
use crate::traits::{MergeError, Sketch, StatError};

/// What to do when `sum_of_squares / count - mean^2` comes out negative
///
/// The textbook formula subtracts two nearly equal numbers for data whose
/// spread is tiny relative to its mean, and rounding can push the result a
/// hair below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariancePolicy {
    /// Report a variance (and standard deviation) of exactly zero
    #[default]
    Clamp,
    /// Fail with [`StatError::NegativeVariance`]
    Reject,
}

impl VariancePolicy {
    /// Short lowercase name, used in merge errors
    pub fn name(&self) -> &'static str {
        match self {
            VariancePolicy::Clamp => "clamp",
            VariancePolicy::Reject => "reject",
        }
    }
}

/// Whether any samples are held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    Empty,
    Populated,
}

/// Snapshot of the reported statistics, for display or logging
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub count: u64,
    pub mean: f64,
    pub std_dev: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count: {}, mean: {}, std dev: {}",
            self.count, self.mean, self.std_dev
        )
    }
}

/// Running count, sum and sum of squares of a measurement stream
///
/// Samples of any numeric kind are widened to `f64` and folded into three
/// running totals; the samples themselves are not kept. The standard
/// deviation is the population one:
///
/// ```text
/// std_dev = sqrt(sum_of_squares / count - (sum / count)^2)
/// ```
///
/// Mean and standard deviation of an empty accumulator fail with
/// [`StatError::Undefined`].
///
/// # Example
///
/// ```
/// use stattrack::Accumulator;
///
/// let mut acc = Accumulator::new();
///
/// for value in [2, 4, 4, 4, 5, 5, 7, 9] {
///     acc.ingest(value);
/// }
///
/// assert_eq!(acc.count(), 8);
/// assert!((acc.mean().unwrap() - 5.0).abs() < 1e-12);
/// assert!((acc.std_dev().unwrap() - 2.0).abs() < 1e-12);
///
/// acc.reset();
/// assert!(acc.mean().is_err());
/// ```
///
/// # Numeric limitations
///
/// - Integers beyond 2^53 in magnitude are rounded when widened.
/// - Very large magnitudes overflow `sum_of_squares` to infinity.
/// - Data with a large mean and small spread loses precision to
///   cancellation; see [`VariancePolicy`].
/// - NaN samples are counted and make every statistic NaN.
///
/// The accumulator is meant for a single owner. It is `Send` but not `Sync`.
#[derive(Clone, Debug)]
pub struct Accumulator {
    /// Number of values seen
    count: u64,
    /// Sum of values
    sum: f64,
    /// Sum of squared values
    sum_sq: f64,
    /// Standard deviation from the last successful `std_dev` call
    last_std_dev: Cell<f64>,
    policy: VariancePolicy,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    /// Create a new empty accumulator that clamps negative variance to zero
    pub fn new() -> Self {
        Self::with_policy(VariancePolicy::default())
    }

    /// Create a new empty accumulator with the given variance policy
    pub fn with_policy(policy: VariancePolicy) -> Self {
        Self {
            count: 0,
            sum: 0.0,
            sum_sq: 0.0,
            last_std_dev: Cell::new(0.0),
            policy,
        }
    }

    /// Add one sample
    #[inline]
    pub fn ingest<S: Sample>(&mut self, value: S) {
        let v = value.to_f64();
        self.count += 1;
        self.sum += v;
        self.sum_sq += v * v;
    }

    /// Number of samples since creation or the last reset
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Empty or populated
    pub fn state(&self) -> State {
        if self.count == 0 {
            State::Empty
        } else {
            State::Populated
        }
    }

    /// The configured variance policy
    pub fn policy(&self) -> VariancePolicy {
        self.policy
    }

    /// Sum of all samples
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Sum of all squared samples
    pub fn sum_of_squares(&self) -> f64 {
        self.sum_sq
    }

    /// Standard deviation returned by the most recent successful
    /// [`std_dev`](Self::std_dev) call, `0.0` if there was none since reset
    pub fn last_std_dev(&self) -> f64 {
        self.last_std_dev.get()
    }

    /// Get the mean (average)
    pub fn mean(&self) -> Result<f64, StatError> {
        if self.count == 0 {
            return Err(StatError::Undefined);
        }
        Ok(self.sum / self.count as f64)
    }

    /// Get the population variance
    ///
    /// A negative result from cancellation is handled per the configured
    /// [`VariancePolicy`].
    pub fn variance(&self) -> Result<f64, StatError> {
        let mean = self.mean()?;
        let radicand = self.sum_sq / self.count as f64 - mean * mean;

        if radicand < 0.0 {
            return match self.policy {
                VariancePolicy::Clamp => {
                    debug!("clamping negative variance {} to zero", radicand);
                    Ok(0.0)
                }
                VariancePolicy::Reject => {
                    debug!("rejecting negative variance {}", radicand);
                    Err(StatError::NegativeVariance(radicand))
                }
            };
        }

        Ok(radicand)
    }

    /// Get the population standard deviation
    ///
    /// Caches the result, see [`last_std_dev`](Self::last_std_dev).
    pub fn std_dev(&self) -> Result<f64, StatError> {
        let sd = math::sqrt(self.variance()?);
        self.last_std_dev.set(sd);
        Ok(sd)
    }

    /// Count, mean and standard deviation in one call
    pub fn summary(&self) -> Result<Summary, StatError> {
        Ok(Summary {
            count: self.count,
            mean: self.mean()?,
            std_dev: self.std_dev()?,
        })
    }

    /// Drop all samples and return to the empty state
    ///
    /// The variance policy is kept.
    pub fn reset(&mut self) {
        trace!("resetting accumulator after {} samples", self.count);
        self.count = 0;
        self.sum = 0.0;
        self.sum_sq = 0.0;
        self.last_std_dev.set(0.0);
    }
}

impl<S: Sample> Extend<S> for Accumulator {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.ingest(value);
        }
    }
}

impl<S: Sample> FromIterator<S> for Accumulator {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

impl Sketch for Accumulator {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.ingest(*item);
    }

    fn merge(&mut self, other: &Self) -> Result<(), MergeError> {
        if self.policy != other.policy {
            return Err(MergeError::IncompatibleConfig {
                expected: self.policy.name(),
                found: other.policy.name(),
            });
        }

        if other.count == 0 {
            return Ok(());
        }

        trace!("merging {} samples into accumulator of {}", other.count, self.count);
        self.count += other.count;
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
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
