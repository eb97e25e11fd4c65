//! Rewriting a file in place with its quotation marks folded to ASCII.

use crate::text::ascii_quotes;
use std::{fmt, fs, path::Path};

/// Fold the quotation marks in the file at `path` and write it back.
///
/// The whole file is read as UTF-8 into memory, folded, and then written
/// back over the original path. Nothing is written until the full buffer has
/// been folded, so a read or decode failure leaves the file untouched.
pub fn normalize_file<P: AsRef<Path>>(path: P) -> Result<(), NormalizeFileError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(NormalizeFileError::CouldntRead)?;
    let folded = ascii_quotes(&content);
    fs::write(path, folded.as_bytes()).map_err(NormalizeFileError::CouldntWrite)
}

#[derive(Debug)]
pub enum NormalizeFileError {
    /// The file couldn't be opened, read, or decoded as UTF-8.
    CouldntRead(std::io::Error),

    /// The folded buffer couldn't be written back.
    CouldntWrite(std::io::Error),
}

impl fmt::Display for NormalizeFileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NormalizeFileError::CouldntRead(e) => write!(f, "couldn't read file: {}", e),
            NormalizeFileError::CouldntWrite(e) => write!(f, "couldn't write file: {}", e),
        }
    }
}

impl std::error::Error for NormalizeFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NormalizeFileError::CouldntRead(e) => Some(e),
            NormalizeFileError::CouldntWrite(e) => Some(e),
        }
    }
}
