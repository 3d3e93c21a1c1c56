use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::{
    encode_preview, flatten, load, resize, to_grayscale, write_hex, write_preview, Error, Filter,
};

pub const DEFAULT_SIZE: (usize, usize) = (64, 64);

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Target size as `(rows, cols)`
    pub size: (usize, usize),
    pub filter: Filter,
    /// Also write the normalized grid as a PNG here
    pub preview: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            input: PathBuf::from("face.png"),
            output: PathBuf::from("image.hex"),
            size: DEFAULT_SIZE,
            filter: Filter::default(),
            preview: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Source size as `(rows, cols)`
    pub source: (usize, usize),
    pub values: usize,
}

/// Run the whole conversion once: load, reduce to gray, resize, flatten
/// and write. Every output byte is produced before a file is created.
pub fn run(config: &Config) -> Result<Report, Error> {
    let img = load(&config.input)?;

    let gray = to_grayscale(&img)?;
    let source = gray.dim();
    drop(img);

    let grid = resize(gray.view(), config.size, config.filter)?;
    debug!(
        from = ?source,
        to = ?grid.dim(),
        filter = ?config.filter,
        "normalized"
    );

    let values = flatten(grid.view());

    let preview = match &config.preview {
        Some(path) => {
            let encoded = encode_preview(grid.view()).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            Some((path, encoded))
        }
        None => None,
    };

    write_hex(&config.output, &values)?;
    info!(
        path = %config.output.display(),
        values = values.len(),
        "wrote hex file"
    );

    if let Some((path, encoded)) = preview {
        if let Err(err) = write_preview(path, &encoded) {
            // A failed run leaves no hex file
            let _ = fs::remove_file(&config.output);
            return Err(err);
        }
        debug!(path = %path.display(), "wrote preview");
    }

    Ok(Report {
        source,
        values: values.len(),
    })
}
