use image::{DynamicImage, ImageBuffer, Pixel};
use ndarray::prelude::*;

use crate::ConversionError;

/// ITU-R BT.601 luma in 16.16 fixed point. The weights sum to 65536, so
/// white maps to 255 exactly.
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

fn narrow16(v: u16) -> u8 {
    ((v as u32 * 255 + 32767) / 65535) as u8
}

fn narrow_f32(v: f32) -> u8 {
    (v.max(0.0).min(1.0) * 255.0).round() as u8
}

fn map_pixels<P, F>(buf: &ImageBuffer<P, Vec<P::Subpixel>>, f: F) -> Array2<u8>
where
    P: Pixel,
    F: Fn(&[P::Subpixel]) -> u8,
{
    let (width, height) = buf.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        f(buf.get_pixel(x as u32, y as u32).channels())
    })
}

/// Reduce `img` to a single intensity channel, shaped `(rows, cols)`.
///
/// Gray sources are copied, color sources go through [`luma`]. Alpha is
/// discarded. Wider channels are narrowed to 8 bits before weighting.
pub fn to_grayscale(img: &DynamicImage) -> Result<Array2<u8>, ConversionError> {
    use DynamicImage::*;

    if img.width() == 0 || img.height() == 0 {
        return Err(ConversionError::EmptySource {
            width: img.width() as usize,
            height: img.height() as usize,
        });
    }

    let gray = match img {
        ImageLuma8(buf) => map_pixels(buf, |c| c[0]),
        ImageLumaA8(buf) => map_pixels(buf, |c| c[0]),
        ImageLuma16(buf) => map_pixels(buf, |c| narrow16(c[0])),
        ImageLumaA16(buf) => map_pixels(buf, |c| narrow16(c[0])),
        ImageRgb8(buf) => map_pixels(buf, |c| luma(c[0], c[1], c[2])),
        ImageRgba8(buf) => map_pixels(buf, |c| luma(c[0], c[1], c[2])),
        ImageRgb16(buf) => map_pixels(buf, |c| {
            luma(narrow16(c[0]), narrow16(c[1]), narrow16(c[2]))
        }),
        ImageRgba16(buf) => map_pixels(buf, |c| {
            luma(narrow16(c[0]), narrow16(c[1]), narrow16(c[2]))
        }),
        ImageRgb32F(buf) => map_pixels(buf, |c| {
            luma(narrow_f32(c[0]), narrow_f32(c[1]), narrow_f32(c[2]))
        }),
        ImageRgba32F(buf) => map_pixels(buf, |c| {
            luma(narrow_f32(c[0]), narrow_f32(c[1]), narrow_f32(c[2]))
        }),
        other => return Err(ConversionError::UnsupportedColor(other.color())),
    };

    Ok(gray)
}
