//! The gray exponential filter.  Scales the escape-time field by its
//! range and then compresses it with a power law, so that the long
//! tail of slow-escaping points doesn't wash the whole image out.
//!
//! Two passes, with a barrier between them: the min/max scan has to
//! see every sample before any sample is rewritten.

use log::{debug, warn};
use std::f64::{INFINITY, NEG_INFINITY};

use crate::field::Field;
use crate::filter::Filter;

/// `v' = (multiplier * v / (max - min)) ^ power`
///
/// Note that the minimum is *not* subtracted; it only contributes to
/// the range.  Negative samples under a fractional power become NaN,
/// and a field with zero range divides by zero.  Both are passed on
/// as-is for the quantizer to deal with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ToneFilter {
    /// Linear gain applied after dividing by the range.
    pub multiplier: f64,
    /// Exponent of the power law.
    pub power: f64,
}

impl Default for ToneFilter {
    fn default() -> ToneFilter {
        ToneFilter {
            multiplier: 2.0,
            power: 0.5,
        }
    }
}

impl ToneFilter {
    /// Constructor.
    pub fn new(multiplier: f64, power: f64) -> ToneFilter {
        ToneFilter { multiplier, power }
    }

    /// The strongly compressed curve used when writing images.
    pub fn high_contrast() -> ToneFilter {
        ToneFilter {
            multiplier: 1.0,
            power: 0.1,
        }
    }
}

/// Smallest and largest sample, in one scan.  NaNs never win either
/// comparison and so are skipped; an empty slice yields
/// `(+inf, -inf)`.
pub fn bounds(samples: &[f64]) -> (f64, f64) {
    samples
        .iter()
        .fold((INFINITY, NEG_INFINITY), |(min, max), &v| {
            (if v < min { v } else { min }, if v > max { v } else { max })
        })
}

impl Filter<Field<f64>> for ToneFilter {
    type Out = Field<f64>;

    fn filter(&self, mut input: Field<f64>) -> Field<f64> {
        let (min, max) = bounds(input.as_slice());
        let range = max - min;
        debug!("tone filter: min {} max {} range {}", min, max, range);
        if range == 0.0 {
            warn!("tone filter: field is constant ({}), output will not be finite", min);
        }

        for value in input.as_mut_slice() {
            *value = (self.multiplier * *value / range).powf(self.power);
        }
        input
    }
}
