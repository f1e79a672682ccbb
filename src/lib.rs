//! # Stattrack
//!
//! Running statistics for embedded measurement logging.
//!
//! Stattrack folds scalar samples into a count, a sum and a sum of squares,
//! and reports the mean and population standard deviation on demand. No
//! samples are retained, every operation is O(1), and the crate builds for
//! `no_std` targets.
//!
//! ## Quick Start
//!
//! ```rust
//! use stattrack::prelude::*;
//!
//! let mut acc = Accumulator::new();
//!
//! // Floats, signed and unsigned integers all go through `ingest`
//! for v in [0.0f32, 4000.01, 3.1415, 23.07] {
//!     acc.ingest(v);
//! }
//! acc.extend([-128i32, 4000, 0, 1]);
//! acc.extend(&[1u32, 3, 1000]);
//!
//! println!("{}", acc.summary().unwrap());
//!
//! // Start the next trial
//! acc.reset();
//! assert_eq!(acc.mean(), Err(StatError::Undefined));
//! ```
//!
//! ## Combining Streams
//!
//! [`Accumulator`] implements the [`Sketch`](traits::Sketch) trait, so
//! partial accumulators can be merged:
//!
//! ```rust
//! use stattrack::Accumulator;
//! use stattrack::traits::Sketch;
//!
//! let mut first: Accumulator = [1.0, 2.0, 3.0].into_iter().collect();
//! let second: Accumulator = [4.0, 5.0, 6.0].into_iter().collect();
//!
//! first.merge(&second).unwrap();
//! assert_eq!(first.count(), 6);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; without it `sqrt` comes from libm
//! - `serde`: Enable serialization of summaries and configuration types

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core traits always available
pub mod traits;

pub mod sample;
pub mod statistics;

mod math;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::sample::{Reading, ReadingKind, Sample};
    pub use crate::statistics::{Accumulator, State, Summary, VariancePolicy};
}

pub use sample::{Reading, Sample};
pub use statistics::Accumulator;
pub use traits::StatError;
