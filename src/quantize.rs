//! Eight-bit quantization of a normalized field.

use crate::field::Field;
use crate::filter::Filter;

/// Clamps to `[0.0, 1.0]` and scales to `0..=255`, truncating.
///
/// Non-finite samples follow from the comparisons and Rust's
/// saturating float-to-integer cast: `+inf` is above 1.0 and becomes
/// 255, `-inf` is below 0.0 and becomes 0, and NaN fails both tests and
/// casts to 0.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Quantizer;

impl Quantizer {
    /// Quantizes a single sample.
    #[inline]
    pub fn quantize(value: f64) -> u8 {
        match value {
            x if x > 1.0 => 255u8,
            x if x < 0.0 => 0u8,
            x => (x * 255.0) as u8,
        }
    }
}

impl Filter<Field<f64>> for Quantizer {
    type Out = Field<u8>;

    fn filter(&self, input: Field<f64>) -> Field<u8> {
        input.map(Quantizer::quantize)
    }
}
