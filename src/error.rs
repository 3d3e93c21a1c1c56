use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The pipeline stage an error originated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Convert,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Load => "load",
            Stage::Convert => "convert",
            Stage::Write => "write",
        })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("cannot write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl Error {
    pub fn stage(&self) -> Stage {
        match self {
            Error::Decode { .. } => Stage::Load,
            Error::Conversion(_) => Stage::Convert,
            Error::Io { .. } => Stage::Write,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("source image is empty ({width}x{height})")]
    EmptySource { width: usize, height: usize },

    #[error("target size must be non-zero, got {width}x{height}")]
    EmptyTarget { width: usize, height: usize },

    #[error("image too large to resample ({width}x{height})")]
    TooLarge { width: usize, height: usize },

    #[error("unsupported color type {0:?}")]
    UnsupportedColor(image::ColorType),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: expected two hex digits, found {content:?}")]
pub struct ParseHexError {
    pub line: usize,
    pub content: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stage_names() {
        assert_eq!(Stage::Load.to_string(), "load");
        assert_eq!(Stage::Convert.to_string(), "convert");
        assert_eq!(Stage::Write.to_string(), "write");
    }

    #[test]
    fn conversion_errors_belong_to_convert_stage() {
        let err = Error::from(ConversionError::EmptySource {
            width: 0,
            height: 3,
        });
        assert_eq!(err.stage(), Stage::Convert);
        assert_eq!(err.to_string(), "source image is empty (0x3)");
    }

    #[test]
    fn io_error_mentions_path() {
        let err = Error::Io {
            path: PathBuf::from("out/image.hex"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(err.stage(), Stage::Write);
        assert!(err.to_string().contains("out/image.hex"));
    }
}
