//! Encoding-resilient loading of tab-delimited dataset files.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::{debug, info, warn};

use crate::encoding::TextEncoding;
use crate::error::LoadError;
use crate::table::parse_delimited;

/// Maximum file size the loader reads into memory (256 MB).
pub const MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Field delimiter of every dataset file.
pub const TAB: u8 = b'\t';

/// A parsed table together with the encoding that produced it.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub frame: DataFrame,
    pub encoding: TextEncoding,
}

/// Check that the file exists and fits under [`MAX_FILE_SIZE`].
pub fn check_file_size(path: &Path) -> Result<(), LoadError> {
    let metadata = std::fs::metadata(path).map_err(|e| LoadError::io(path, e))?;
    if metadata.len() > MAX_FILE_SIZE {
        return Err(LoadError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: MAX_FILE_SIZE,
        });
    }
    Ok(())
}

/// Loads a tab-delimited dataset file.
pub fn load_dataset(path: &Path) -> Result<LoadedDataset, LoadError> {
    load_delimited(path, TAB)
}

/// Loads a delimited file, trying each encoding of
/// [`TextEncoding::FALLBACK_ORDER`] until one decodes and parses.
///
/// The file is read once; nothing is retained when every attempt fails.
pub fn load_delimited(path: &Path, delimiter: u8) -> Result<LoadedDataset, LoadError> {
    check_file_size(path)?;
    let bytes = std::fs::read(path).map_err(|e| LoadError::io(path, e))?;
    match decode_and_parse(&bytes, delimiter) {
        Ok(loaded) => {
            info!(
                path = %path.display(),
                encoding = %loaded.encoding,
                rows = loaded.frame.height(),
                columns = loaded.frame.width(),
                "dataset loaded"
            );
            Ok(loaded)
        }
        Err(reason) => {
            warn!(path = %path.display(), %reason, "no encoding produced a readable table");
            Err(LoadError::Unreadable {
                path: path.to_path_buf(),
                reason,
            })
        }
    }
}

/// Runs the encoding fallback over an in-memory buffer.
///
/// On failure returns the reason reported by the last attempt.
pub fn decode_and_parse(bytes: &[u8], delimiter: u8) -> Result<LoadedDataset, String> {
    let mut last_failure = String::from("no encoding attempted");
    for encoding in TextEncoding::FALLBACK_ORDER {
        let Some(text) = encoding.decode(bytes) else {
            debug!(%encoding, "decode failed");
            last_failure = format!("{encoding}: invalid byte sequence");
            continue;
        };
        match parse_delimited(&text, delimiter) {
            Ok(frame) => return Ok(LoadedDataset { frame, encoding }),
            Err(reason) => {
                debug!(%encoding, %reason, "parse failed");
                last_failure = format!("{encoding}: {reason}");
            }
        }
    }
    Err(last_failure)
}
