use std::fmt::Debug;

use num_traits::{Bounded, FromPrimitive, Num, ToPrimitive};

/// A sample type the pipeline can carry.
///
/// Conversions go through a normalized f64 in the nominal range [-1.0, 1.0].
/// `from_f64_normalized` clamps first, then scales by the type's positive
/// maximum and truncates toward zero, so out-of-range values saturate at the
/// boundaries instead of wrapping.
pub trait AudioSample:
    Num
    + Copy
    + Send
    + Sync
    + PartialOrd
    + ToPrimitive
    + FromPrimitive
    + Bounded
    + Debug
    + 'static
{
    fn silence() -> Self;

    fn to_f64_normalized(self) -> f64;

    fn from_f64_normalized(value: f64) -> Self;
}

impl AudioSample for f32 {
    fn silence() -> Self {
        0.0
    }

    fn to_f64_normalized(self) -> f64 {
        self as f64
    }

    fn from_f64_normalized(value: f64) -> Self {
        value.clamp(-1.0, 1.0) as f32
    }
}

impl AudioSample for i16 {
    fn silence() -> Self {
        0
    }

    fn to_f64_normalized(self) -> f64 {
        self as f64 / i16::MAX as f64
    }

    /// Maps ±1.0 to ±32767 exactly. NaN becomes 0 (saturating cast).
    fn from_f64_normalized(value: f64) -> Self {
        (value.clamp(-1.0, 1.0) * i16::MAX as f64) as i16
    }
}
