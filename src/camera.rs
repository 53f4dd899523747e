//! Contains the Camera struct, which describes a relationship between
//! the rectangle of the output image, with an origin at 0,0, and a
//! region of the complex plane described by its center and a zoom
//! factor.  The two mappings are exact inverses of one another.
use num::complex::Complex64;

use crate::errors::RenderError;

/// An ordered pair.  Used for image dimensions, for pixel positions,
/// and (with `f64`) for continuous positions on the image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Xy<T> {
    /// Horizontal component; the column on the image.
    pub x: T,
    /// Vertical component; the row on the image.
    pub y: T,
}

impl<T> Xy<T> {
    /// Constructor.
    pub fn new(x: T, y: T) -> Self {
        Xy { x, y }
    }
}

/// Width and height of an image, in pixels.
pub type Dims = Xy<usize>;

impl Dims {
    /// The total number of pixels.  Used to size buffers.
    pub fn area(&self) -> usize {
        self.x * self.y
    }
}

/// Maps between image coordinates and scene coordinates.  The scene
/// is the complex plane; a zoom of 1.0 shows one unit of the plane
/// across the whole image, and larger zooms show less of it.
///
/// We don't need a separate Point type for the scene, as a single
/// Complex number is a point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    dims: Dims,
    zoom: f64,
    center: Complex64,
}

impl Default for Camera {
    fn default() -> Camera {
        Camera {
            dims: Xy { x: 1024, y: 1024 },
            zoom: 0.3,
            center: Complex64 { re: -0.5, im: 0.0 },
        }
    }
}

impl Camera {
    /// Constructor.  Refuses empty images, images whose pixel count
    /// overflows a `usize`, and zooms that are not strictly positive.
    pub fn new(dims: Dims, zoom: f64, center: Complex64) -> Result<Camera, RenderError> {
        if dims.x == 0 {
            return Err(RenderError::ZeroWidth);
        }
        if dims.y == 0 {
            return Err(RenderError::ZeroHeight);
        }
        if dims.x.checked_mul(dims.y).is_none() {
            return Err(RenderError::TooLarge(dims.x, dims.y));
        }
        if !(zoom > 0.0) || !zoom.is_finite() {
            return Err(RenderError::NonPositiveZoom(zoom));
        }
        Ok(Camera { dims, zoom, center })
    }

    /// Image dimensions.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Scene units per normalized pixel, inverted.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The point on the complex plane shown at the middle of the image.
    pub fn center(&self) -> Complex64 {
        self.center
    }

    /// Given a point on the complex plane, return where it lands on
    /// the image.  The result is continuous and may fall outside the
    /// image bounds.
    pub fn scene_to_image(&self, scene: Complex64) -> Xy<f64> {
        Xy {
            x: ((scene.re - self.center.re) * self.zoom + 0.5) * self.dims.x as f64,
            y: ((scene.im - self.center.im) * self.zoom + 0.5) * self.dims.y as f64,
        }
    }

    /// Given a position on the image, return the point on the complex
    /// plane it shows.
    pub fn image_to_scene(&self, image: Xy<f64>) -> Complex64 {
        Complex64 {
            re: (image.x / self.dims.x as f64 - 0.5) / self.zoom + self.center.re,
            im: (image.y / self.dims.y as f64 - 0.5) / self.zoom + self.center.im,
        }
    }

    /// The scene point sampled for the pixel at column `x`, row `y`.
    pub fn pixel_to_scene(&self, x: usize, y: usize) -> Complex64 {
        self.image_to_scene(Xy {
            x: x as f64,
            y: y as f64,
        })
    }
}
