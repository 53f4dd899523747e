//! The single entry point: parameters in, eight-bit grayscale buffer
//! out.  Nothing here knows about files or encoders.

use log::info;
use std::time::Instant;

use crate::camera::Camera;
use crate::errors::RenderError;
use crate::escape::{Generator, Mandelbrot};
use crate::filter::FilterPass;
use crate::quantize::Quantizer;
use crate::tone::ToneFilter;

/// A finished frame, ready to hand to an encoder.  Samples are
/// row-major, one byte per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct Rendered {
    /// The samples.
    pub bytes: Vec<u8>,
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
    /// Samples per pixel; always 1.
    pub channels: usize,
}

/// Renders one full frame on all available CPUs.
pub fn render(
    camera: Camera,
    n_iters: usize,
    escape_threshold: f64,
    tone: ToneFilter,
) -> Result<Rendered, RenderError> {
    let mandelbrot = Mandelbrot::new(camera, n_iters, escape_threshold)?;
    render_with(&mandelbrot, tone)
}

/// Renders one full frame from an already configured generator.
pub fn render_with(mandelbrot: &Mandelbrot, tone: ToneFilter) -> Result<Rendered, RenderError> {
    let dims = mandelbrot.camera().dims();
    info!(
        "rendering {}x{}, {} iterations, threshold {}, tone {}^{}",
        dims.x,
        dims.y,
        mandelbrot.n_iters(),
        mandelbrot.escape_threshold(),
        tone.multiplier,
        tone.power
    );
    let start = Instant::now();

    let bytes = mandelbrot
        .generate()?
        .filter_pass(tone)
        .filter_pass(Quantizer)
        .into_vec();

    info!("rendered in {:?}", start.elapsed());
    Ok(Rendered {
        bytes,
        width: dims.x,
        height: dims.y,
        channels: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Xy;
    use num::complex::Complex64;

    fn small_camera() -> Camera {
        Camera::new(Xy::new(64, 48), 0.3, Complex64::new(-0.5, 0.0)).unwrap()
    }

    #[test]
    fn render_reports_shape() {
        let out = render(small_camera(), 100, 100.0, ToneFilter::default()).unwrap();
        assert_eq!(out.width, 64);
        assert_eq!(out.height, 48);
        assert_eq!(out.channels, 1);
        assert_eq!(out.bytes.len(), 64 * 48);
    }

    #[test]
    fn render_fails_fast_on_zero_iterations() {
        assert_eq!(
            render(small_camera(), 0, 100.0, ToneFilter::default()).unwrap_err(),
            RenderError::ZeroIterations
        );
    }

    #[test]
    fn render_is_deterministic() {
        let first = render(small_camera(), 250, 100.0, ToneFilter::high_contrast()).unwrap();
        let m = Mandelbrot::new(small_camera(), 250, 100.0)
            .unwrap()
            .with_threads(7)
            .unwrap();
        let second = render_with(&m, ToneFilter::high_contrast()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn all_interior_frame_quantizes_nan_to_black() {
        // One iteration never escapes anywhere in this view, so the
        // field is all zeros and the tone filter computes 0/0.
        let out = render(small_camera(), 1, 100.0, ToneFilter::default()).unwrap();
        assert!(out.bytes.iter().all(|&b| b == 0));
    }

    #[test]
    fn default_frame_spans_full_range() {
        let out = render(Camera::default(), 1000, 100.0, ToneFilter::high_contrast()).unwrap();
        assert_eq!(out.bytes.len(), 1_048_576);
        assert_eq!((out.width, out.height, out.channels), (1024, 1024, 1));
        assert!(out.bytes.contains(&0));
        assert!(out.bytes.contains(&255));
        assert_eq!(out.bytes[512 * 1024 + 512], 0);
    }
}
