use std::convert::TryFrom;
use std::str::FromStr;

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use ndarray::prelude::*;
use num_rational::Ratio;

use crate::ConversionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Nearest,
    Bilinear,
}

impl Default for Filter {
    fn default() -> Filter {
        Filter::Bilinear
    }
}

impl FromStr for Filter {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Filter, &'static str> {
        match s {
            "nearest" | "n" => Ok(Filter::Nearest),
            "bilinear" | "b" | "triangle" => Ok(Filter::Bilinear),
            _ => Err("filter must be 'nearest'/'n' or 'bilinear'/'b'"),
        }
    }
}

/// Stretch `src` to exactly `(rows, cols)`, ignoring aspect ratio.
pub fn resize(
    src: ArrayView2<u8>,
    (rows, cols): (usize, usize),
    filter: Filter,
) -> Result<Array2<u8>, ConversionError> {
    let (height, width) = src.dim();
    if height == 0 || width == 0 {
        return Err(ConversionError::EmptySource { width, height });
    }
    if rows == 0 || cols == 0 {
        return Err(ConversionError::EmptyTarget {
            width: cols,
            height: rows,
        });
    }

    if (height, width) == (rows, cols) {
        return Ok(src.to_owned());
    }

    Ok(match filter {
        Filter::Nearest => nearest(src, (rows, cols)),
        Filter::Bilinear => bilinear(src, (rows, cols))?,
    })
}

// Index of the source pixel whose area contains the centre of target pixel `i`
fn nearest_index(i: usize, src_len: usize, dst_len: usize) -> usize {
    let centre = Ratio::new(2 * i + 1, 2) * Ratio::new(src_len, dst_len);
    centre.to_integer().min(src_len - 1)
}

fn nearest(src: ArrayView2<u8>, (rows, cols): (usize, usize)) -> Array2<u8> {
    let (height, width) = src.dim();
    let src_x: Vec<usize> = (0..cols).map(|x| nearest_index(x, width, cols)).collect();

    let mut target: Array2<u8> = Array2::zeros((rows, cols));
    for y in 0..rows {
        let src_y = nearest_index(y, height, rows);
        for x in 0..cols {
            target[(y, x)] = src[(src_y, src_x[x])];
        }
    }

    target
}

fn bilinear(
    src: ArrayView2<u8>,
    (rows, cols): (usize, usize),
) -> Result<Array2<u8>, ConversionError> {
    let (height, width) = src.dim();
    let too_large = |width, height| ConversionError::TooLarge { width, height };
    let (src_w, src_h) = (
        u32::try_from(width).map_err(|_| too_large(width, height))?,
        u32::try_from(height).map_err(|_| too_large(width, height))?,
    );
    let (dst_w, dst_h) = (
        u32::try_from(cols).map_err(|_| too_large(cols, rows))?,
        u32::try_from(rows).map_err(|_| too_large(cols, rows))?,
    );

    // Triangle support widens with the downscale factor, so shrinking averages
    let gray = GrayImage::from_fn(src_w, src_h, |x, y| Luma([src[(y as usize, x as usize)]]));
    let resized = imageops::resize(&gray, dst_w, dst_h, FilterType::Triangle);

    Ok(Array2::from_shape_fn((rows, cols), |(y, x)| {
        resized.get_pixel(x as u32, y as u32)[0]
    }))
}
