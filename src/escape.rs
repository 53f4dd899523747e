// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time generator
//!
//! Every pixel of the image names a point `c` on the complex plane.
//! Starting from zero, we repeatedly square and add `c`, and watch how
//! long the orbit takes to leave a disc around the origin.  Points that
//! never leave within the iteration budget are considered part of the
//! set and recorded as `0`; the rest get a smoothed escape time, the
//! iteration count refined with the log-log of the escape modulus so
//! that neighbouring pixels don't fall into visible bands.
//!
//! Pixels are independent of one another, so the image is cut into
//! horizontal bands of rows and each band is computed on its own
//! thread, writing only into its own slice of the output buffer.

use itertools::iproduct;
use log::debug;
use num::complex::Complex64;
use std::f64::consts::LN_2;

use crate::camera::Camera;
use crate::errors::RenderError;
use crate::field::Field;

/// Base-two logarithm computed through the natural log.
#[inline]
pub fn log2(value: f64) -> f64 {
    value.ln() / LN_2
}

/// Anything that can produce a whole image-sized result in one go.
pub trait Generator<Target> {
    /// Computes the full frame.
    fn generate(&self) -> Result<Target, RenderError>;
}

/// The fate of a single orbit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Escape {
    /// The squared modulus passed the threshold on iteration
    /// `iteration` (counting from zero).
    Escaped {
        /// Zero-based iteration on which the orbit escaped.
        iteration: usize,
        /// The smoothed escape time.
        smooth: f64,
    },
    /// The orbit stayed inside the threshold for every iteration.
    Bounded,
}

impl Escape {
    /// The scalar recorded in the field for this orbit.
    pub fn value(&self) -> f64 {
        match *self {
            Escape::Escaped { smooth, .. } => smooth,
            Escape::Bounded => 0.0,
        }
    }
}

/// The parameters of a Mandelbrot escape-time render.  Once built,
/// this object is not mutable.
///
/// `escape_threshold` is a bound on the *squared* modulus and must be
/// at least 1.0 for the smoothing term to stay finite; it is not
/// checked.
#[derive(Clone, Debug)]
pub struct Mandelbrot {
    camera: Camera,
    n_iters: usize,
    escape_threshold: f64,
    threads: usize,
}

impl Default for Mandelbrot {
    fn default() -> Mandelbrot {
        Mandelbrot {
            camera: Camera::default(),
            n_iters: 1000,
            escape_threshold: 100.0,
            threads: num_cpus::get(),
        }
    }
}

impl Mandelbrot {
    /// Requires a camera, the maximum number of iterations per orbit,
    /// and the squared modulus beyond which an orbit has escaped.
    /// Runs on as many threads as there are CPUs.
    pub fn new(camera: Camera, n_iters: usize, escape_threshold: f64) -> Result<Self, RenderError> {
        if n_iters == 0 {
            return Err(RenderError::ZeroIterations);
        }
        Ok(Mandelbrot {
            camera,
            n_iters,
            escape_threshold,
            threads: num_cpus::get(),
        })
    }

    /// Sets the number of worker threads.  The output does not depend
    /// on this.
    pub fn with_threads(self, threads: usize) -> Result<Self, RenderError> {
        if threads == 0 {
            return Err(RenderError::ZeroThreads);
        }
        Ok(Mandelbrot { threads, ..self })
    }

    /// The camera mapping pixels to orbit starting points.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Maximum iterations per orbit.
    pub fn n_iters(&self) -> usize {
        self.n_iters
    }

    /// Squared modulus beyond which an orbit has escaped.
    pub fn escape_threshold(&self) -> f64 {
        self.escape_threshold
    }

    /// Worker thread count.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Follows the orbit of `c` until it escapes or the iteration
    /// budget runs out.
    pub fn escape(&self, c: Complex64) -> Escape {
        let mut z = Complex64 { re: 0.0, im: 0.0 };
        for i in 0..self.n_iters {
            z = z * z + c;
            let escape_value = (z * z.conj()).re;
            if escape_value > self.escape_threshold {
                return Escape::Escaped {
                    iteration: i,
                    smooth: i as f64 + (1.0 - log2(log2(escape_value) / 2.0)),
                };
            }
        }
        Escape::Bounded
    }

    /// Fills one band of whole rows, starting at image row `first_row`.
    fn render_band(&self, first_row: usize, region: &mut [f64]) {
        let width = self.camera.dims().x;
        let rows = region.len() / width;
        for (row, column) in iproduct!(0..rows, 0..width) {
            let c = self.camera.pixel_to_scene(column, first_row + row);
            region[row * width + column] = self.escape(c).value();
        }
    }
}

impl Generator<Field<f64>> for Mandelbrot {
    fn generate(&self) -> Result<Field<f64>, RenderError> {
        let dims = self.camera.dims();
        let mut field = Field::filled(dims, 0.0);
        // No more workers than rows; a band is at least one row.
        let threads = self.threads.min(dims.y);
        let rows_per_band = (dims.y + threads - 1) / threads;
        debug!(
            "generating {}x{} in bands of {} rows across {} threads",
            dims.x, dims.y, rows_per_band, threads
        );

        crossbeam::scope(|spawner| {
            let regions = field.as_mut_slice().chunks_mut(rows_per_band * dims.x);
            for (band, region) in regions.enumerate() {
                spawner.spawn(move |_| self.render_band(band * rows_per_band, region));
            }
        })
        .map_err(|_| RenderError::WorkerPanicked)?;

        Ok(field)
    }
}
