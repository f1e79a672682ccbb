//! Core traits and error types
//!
//! Accumulators implement the base [`Sketch`] trait so they can be updated,
//! combined and cleared uniformly by the code that owns a measurement stream.

use core::fmt::Debug;

/// Error returned when a statistic cannot be computed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatError {
    /// No samples have been ingested since creation or the last reset
    Undefined,
    /// `sum_of_squares / count - mean^2` came out negative through
    /// floating-point cancellation and the accumulator is configured to
    /// reject it. Carries the offending value.
    NegativeVariance(f64),
}

impl core::fmt::Display for StatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatError::Undefined => write!(f, "statistic undefined: no samples"),
            StatError::NegativeVariance(v) => {
                write!(f, "negative variance from cancellation: {}", v)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatError {}

/// Error during sketch merge operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeError {
    /// Sketches have incompatible configurations
    IncompatibleConfig {
        expected: &'static str,
        found: &'static str,
    },
}

impl core::fmt::Display for MergeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MergeError::IncompatibleConfig { expected, found } => {
                write!(f, "incompatible config: expected {}, found {}", expected, found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MergeError {}

/// Core trait for streaming accumulators
pub trait Sketch: Clone + Debug {
    /// The type of item this sketch processes
    type Item: ?Sized;

    /// Add an item to the sketch
    fn update(&mut self, item: &Self::Item);

    /// Merge another sketch into this one
    ///
    /// Returns an error if sketches are incompatible
    fn merge(&mut self, other: &Self) -> Result<(), MergeError>;

    /// Reset sketch to empty state
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if sketch is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
