#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Grayscale Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which the orbit `z -> z * z + c`, started at zero, stays
//! bounded.  Points outside the set run away to infinity, some quickly
//! and some slowly, and how long they take is the number used to
//! shade the image.
//!
//! A render runs forward through four stages:
//!
//! 1. The [`Camera`] maps every pixel to a point on the complex plane.
//! 2. The [`Mandelbrot`] generator iterates each point and records a
//!    smoothed escape time, or zero for points that never escape.
//! 3. The [`ToneFilter`] divides the field by its range and applies a
//!    power curve.
//! 4. The [`Quantizer`] clamps to `[0, 1]` and scales to eight bits.
//!
//! [`render`] runs all four and returns the bytes along with the
//! width, height and channel count.  Writing them somewhere is left
//! to the caller; the [`sink`] module has a helper built on `image`.

pub mod camera;
pub mod errors;
pub mod escape;
pub mod field;
pub mod filter;
pub mod quantize;
pub mod render;
pub mod sink;
pub mod tone;

pub use camera::{Camera, Dims, Xy};
pub use errors::RenderError;
pub use escape::{Escape, Generator, Mandelbrot};
pub use field::Field;
pub use filter::{Filter, FilterPass};
pub use quantize::Quantizer;
pub use render::{render, render_with, Rendered};
pub use tone::ToneFilter;
