use std::path::Path;

use image::io::Reader;
use image::{DynamicImage, ImageError};
use tracing::debug;

use crate::Error;

/// Decode the image at `path`. The format is sniffed from the file
/// contents, so the extension does not need to match.
pub fn load(path: impl AsRef<Path>) -> Result<DynamicImage, Error> {
    let path = path.as_ref();
    let decode_err = |source| Error::Decode {
        path: path.to_owned(),
        source,
    };

    let reader = Reader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?;
    let img = reader.decode().map_err(decode_err)?;

    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "decoded source image"
    );

    Ok(img)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Stage;

    #[test]
    fn missing_file_is_a_decode_error() {
        let err = load("this/file/does/not/exist.png").unwrap_err();
        assert_eq!(err.stage(), Stage::Load);
        match err {
            Error::Decode {
                source: ImageError::IoError(_),
                ..
            } => (),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let err = load(&path).unwrap_err();
        assert_eq!(err.stage(), Stage::Load);
    }

    #[test]
    fn format_is_sniffed_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("pixel.png");
        image::GrayImage::from_pixel(3, 2, image::Luma([7])).save(&png).unwrap();

        let renamed = dir.path().join("pixel.dat");
        std::fs::rename(&png, &renamed).unwrap();

        let img = load(&renamed).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
    }
}
