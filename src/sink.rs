// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Hands a finished frame to the `image` crate.  This is the edge of
//! the library; the renderer itself never calls into here.

use failure::{err_msg, Error};
use image::pnm::{PNMEncoder, PNMSubtype, SampleEncoding};
use image::{ColorType, GrayImage, ImageBuffer};
use log::info;
use std::fs::File;
use std::path::Path;

use crate::render::Rendered;

/// Turns the frame into a grayscale image, reusing its buffer.
/// Returns `None` unless the frame is single-channel and the buffer
/// matches its dimensions.
pub fn into_gray_image(frame: Rendered) -> Option<GrayImage> {
    if frame.channels != 1 {
        return None;
    }
    ImageBuffer::from_raw(frame.width as u32, frame.height as u32, frame.bytes)
}

/// Writes the frame to `path`.  Files ending in `.pgm` or `.pnm` are
/// written as binary graymaps; everything else goes through the
/// `image` crate's format detection (so `.png` gives a PNG).
pub fn write_image<P: AsRef<Path>>(path: P, frame: &Rendered) -> Result<(), Error> {
    let path = path.as_ref();
    if frame.channels != 1 || frame.bytes.len() != frame.width * frame.height {
        return Err(err_msg("frame is not a single-channel buffer of its stated size"));
    }

    let graymap = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.eq_ignore_ascii_case("pgm") || ext.eq_ignore_ascii_case("pnm"),
        None => false,
    };

    if graymap {
        let output = File::create(path)?;
        let mut encoder =
            PNMEncoder::new(output).with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary));
        encoder.encode(
            &frame.bytes[..],
            frame.width as u32,
            frame.height as u32,
            ColorType::Gray(8),
        )?;
    } else {
        image::save_buffer(
            path,
            &frame.bytes[..],
            frame.width as u32,
            frame.height as u32,
            ColorType::Gray(8),
        )?;
    }
    info!("wrote {}x{} image to {}", frame.width, frame.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn gradient() -> Rendered {
        Rendered {
            bytes: (0..12u8).map(|v| v * 20).collect(),
            width: 4,
            height: 3,
            channels: 1,
        }
    }

    #[test]
    fn gray_image_is_row_major() {
        let image = into_gray_image(gradient()).unwrap();
        assert_eq!(image.dimensions(), (4, 3));
        assert_eq!(*image.get_pixel(1, 0), Luma([20]));
        assert_eq!(*image.get_pixel(0, 1), Luma([80]));
    }

    #[test]
    fn multi_channel_frames_are_refused() {
        let frame = Rendered {
            channels: 3,
            ..gradient()
        };
        let dir = tempfile::tempdir().unwrap();
        assert!(write_image(dir.path().join("x.png"), &frame).is_err());
        assert!(into_gray_image(frame).is_none());
    }

    #[test]
    fn short_buffer_is_refused() {
        let mut frame = gradient();
        frame.bytes.pop();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.png");
        assert!(write_image(&path, &frame).is_err());
        assert!(!path.exists());
        assert!(into_gray_image(frame).is_none());
    }

    #[test]
    fn writes_png_and_pgm() {
        let dir = tempfile::tempdir().unwrap();

        let png = dir.path().join("frame.png");
        write_image(&png, &gradient()).unwrap();
        let back = image::open(&png).unwrap().to_luma();
        assert_eq!(back.into_raw(), gradient().bytes);

        let pgm = dir.path().join("frame.pgm");
        write_image(&pgm, &gradient()).unwrap();
        let raw = std::fs::read(&pgm).unwrap();
        assert!(raw.starts_with(b"P5"));
        assert!(raw.ends_with(&gradient().bytes));
    }
}
