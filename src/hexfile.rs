use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::{Error, ParseHexError};

/// One value per line, two lowercase hex digits, newline terminated.
pub fn encode_hex(values: &[u8]) -> String {
    let mut text = String::with_capacity(values.len() * 3);
    for value in values {
        // Formatting into a String cannot fail
        let _ = writeln!(text, "{:02x}", value);
    }
    text
}

/// Write `values` as a hex memory file, replacing any existing file.
///
/// The whole text is formatted before the file is created, so a failure to
/// open the destination leaves nothing behind.
pub fn write_hex(path: impl AsRef<Path>, values: &[u8]) -> Result<(), Error> {
    let path = path.as_ref();
    let text = encode_hex(values);

    let io_err = |source| Error::Io {
        path: path.to_owned(),
        source,
    };

    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(text.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)?;

    Ok(())
}

/// Inverse of [`encode_hex`]. Digits may be in either case.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, ParseHexError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            let err = || ParseHexError {
                line: i + 1,
                content: line.to_owned(),
            };
            if line.len() != 2 || !line.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(err());
            }
            u8::from_str_radix(line, 16).map_err(|_| err())
        })
        .collect()
}
