//! External collaborator: gamma correction and PNG encoding. The core
//! (`render`, `integrator`, `entities`, ...) never imports this module.

use std::path::Path;

use image::{ImageBuffer, Rgb};

use crate::error::RenderError;
use crate::film::Film;

pub const DEFAULT_GAMMA: f32 = 2.2;

/// Applies `pixel^(1/gamma)`, scales by 255, clips to `[0, 255]`, casts to
/// 8-bit, flips vertically (film row 0 is the bottom, so it lands at the
/// bottom of the encoded image), and writes an RGB PNG to `path`.
pub fn save(film: &Film, path: impl AsRef<Path>, gamma: f32) -> Result<(), RenderError> {
    let (width, height) = (film.width() as u32, film.height() as u32);
    let mut buffer: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(width, height);

    for row in 0..film.height() {
        // Film row 0 is the bottom of the image; PNG row 0 is the top.
        let image_row = film.height() - 1 - row;
        for col in 0..film.width() {
            let p = film.get(row, col);
            let channel = |c: f32| (c.powf(1.0 / gamma) * 255.0).clamp(0.0, 255.0) as u8;
            buffer.put_pixel(
                col as u32,
                image_row as u32,
                Rgb([channel(p.0), channel(p.1), channel(p.2)]),
            );
        }
    }

    buffer
        .save(path)
        .map_err(|e| RenderError::ImageEncode(e.to_string()))
}
