//! Numeric samples accepted by the accumulators
//!
//! Anything implementing [`Sample`] can be ingested. The trait is implemented
//! for every primitive float and integer type, for references to samples,
//! and for [`Reading`], a tagged value for code that receives measurements of
//! mixed kinds through a single channel.
//!
//! Integers wider than 53 bits lose precision when widened to `f64`.

/// A scalar measurement convertible to the accumulator's working type
pub trait Sample: Copy {
    /// Widen the sample to `f64`
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: Sample> Sample for &T {
    #[inline]
    fn to_f64(self) -> f64 {
        (*self).to_f64()
    }
}

/// The numeric kind carried by a [`Reading`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadingKind {
    Float,
    Signed,
    Unsigned,
}

/// A single measurement from a sensor or ADC channel
///
/// # Example
///
/// ```
/// use stattrack::{Accumulator, Reading};
///
/// let readings = [Reading::from(3.5f32), Reading::from(-2i32), Reading::from(7u32)];
///
/// let mut acc = Accumulator::new();
/// acc.extend(readings);
///
/// assert_eq!(acc.count(), 3);
/// assert!((acc.mean().unwrap() - 8.5 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reading {
    Float(f32),
    Signed(i32),
    Unsigned(u32),
}

impl Reading {
    /// Which numeric kind this reading carries
    pub fn kind(&self) -> ReadingKind {
        match self {
            Reading::Float(_) => ReadingKind::Float,
            Reading::Signed(_) => ReadingKind::Signed,
            Reading::Unsigned(_) => ReadingKind::Unsigned,
        }
    }
}

impl Sample for Reading {
    #[inline]
    fn to_f64(self) -> f64 {
        match self {
            Reading::Float(v) => v.to_f64(),
            Reading::Signed(v) => v.to_f64(),
            Reading::Unsigned(v) => v.to_f64(),
        }
    }
}

impl From<f32> for Reading {
    fn from(v: f32) -> Self {
        Reading::Float(v)
    }
}

impl From<i32> for Reading {
    fn from(v: i32) -> Self {
        Reading::Signed(v)
    }
}

impl From<u32> for Reading {
    fn from(v: u32) -> Self {
        Reading::Unsigned(v)
    }
}
