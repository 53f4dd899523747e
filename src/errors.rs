// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The things that can go wrong before a render starts.  Once the
//! parameters have been accepted, the pipeline is plain arithmetic and
//! anomalies (infinities, NaNs) flow through as values instead.

use failure::Fail;

/// Configuration failures, reported before any pixel is computed.
#[derive(Debug, Fail, PartialEq)]
pub enum RenderError {
    /// The image has no columns.
    #[fail(display = "image width must be greater than zero")]
    ZeroWidth,

    /// The image has no rows.
    #[fail(display = "image height must be greater than zero")]
    ZeroHeight,

    /// Width times height does not fit in memory addressing.
    #[fail(display = "image of {}x{} pixels is too large", _0, _1)]
    TooLarge(usize, usize),

    /// Zoom must be a positive, finite scale factor.
    #[fail(display = "zoom must be positive and finite, got {}", _0)]
    NonPositiveZoom(f64),

    /// At least one iteration is needed to decide escape.
    #[fail(display = "iteration count must be at least 1")]
    ZeroIterations,

    /// The generator was asked to run on no threads at all.
    #[fail(display = "thread count must be at least 1")]
    ZeroThreads,

    /// A generator worker died; its band of the image is meaningless.
    #[fail(display = "a render worker panicked")]
    WorkerPanicked,
}
