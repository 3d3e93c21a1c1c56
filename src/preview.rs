use std::convert::TryFrom;
use std::io;
use std::path::Path;

use ndarray::prelude::*;

use crate::{flatten, Error};

fn encoding_error(err: png::EncodingError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

/// Encode `grid` as an 8-bit grayscale PNG.
pub fn encode_preview(grid: ArrayView2<u8>) -> io::Result<Vec<u8>> {
    use png::HasParameters;

    let (rows, cols) = grid.dim();
    let too_large = |_| io::Error::new(io::ErrorKind::InvalidInput, "preview too large for PNG");
    let width = u32::try_from(cols).map_err(too_large)?;
    let height = u32::try_from(rows).map_err(too_large)?;

    let pixels = flatten(grid);
    let mut encoded = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut encoded, width, height);
        encoder.set(png::ColorType::Grayscale);
        encoder.set(png::BitDepth::Eight);
        encoder.set(png::Compression::Best);
        let mut writer = encoder.write_header().map_err(encoding_error)?;
        writer.write_image_data(&pixels).map_err(encoding_error)?;
    }

    Ok(encoded)
}

pub fn write_preview(path: impl AsRef<Path>, encoded: &[u8]) -> Result<(), Error> {
    let path = path.as_ref();
    std::fs::write(path, encoded).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use image::GenericImageView;

    #[test]
    fn preview_decodes_to_same_pixels() {
        let grid = Array2::from_shape_fn((3, 5), |(y, x)| (y * 50 + x) as u8);
        let encoded = encode_preview(grid.view()).unwrap();

        let decoded = image::load_from_memory(&encoded).unwrap();
        assert_eq!(decoded.dimensions(), (5, 3));
        assert_eq!(decoded.into_luma8().into_raw(), flatten(grid.view()));
    }

    #[test]
    fn oversized_grid_is_an_error() {
        let empty: [u8; 0] = [];
        let grid = ArrayView2::from_shape((0, u32::max_value() as usize + 1), &empty[..]).unwrap();
        let err = encode_preview(grid).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn preview_write_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("preview.png");
        match write_preview(&path, &[]) {
            Err(Error::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
