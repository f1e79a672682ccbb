//! Statistical summaries for streaming data
//!
//! This module provides accumulators that compute statistics over a stream
//! in a single pass with constant memory.
//!
//! # Example
//!
//! ```
//! use stattrack::statistics::Accumulator;
//!
//! let mut acc = Accumulator::new();
//!
//! acc.ingest(0.5f32);
//! acc.ingest(-128i32);
//! acc.ingest(100_000u32);
//!
//! println!("Count: {}", acc.count());
//! println!("Mean: {:?}", acc.mean());
//! println!("Stddev: {:?}", acc.std_dev());
//! ```

mod accumulator;

pub use accumulator::{Accumulator, State, Summary, VariancePolicy};
