use std::fs;
use std::io;
use std::path::Path;

use cloudboard_logging::board_debug;
use thiserror::Error;

use crate::decode::{decode_utf8, DecodeError};

/// Largest upload accepted, matching common browser upload widgets.
pub const MAX_UPLOAD_BYTES: u64 = 200 * 1024 * 1024;

const ACCEPTED_EXTENSION: &str = "txt";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("file not found")]
    NotFound,
    #[error("only .txt files are accepted")]
    UnsupportedFileType,
    #[error("file is too large ({actual} bytes, max {max_bytes})")]
    TooLarge { max_bytes: u64, actual: u64 },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedText {
    /// File name without directories, for status messages.
    pub name: String,
    pub text: String,
}

/// Display name of an upload path.
pub fn upload_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read a `.txt` file and decode it as UTF-8.
pub fn load_text_file(path: &Path) -> Result<UploadedText, UploadError> {
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ACCEPTED_EXTENSION));
    if !accepted {
        return Err(UploadError::UnsupportedFileType);
    }

    let meta = fs::metadata(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => UploadError::NotFound,
        _ => UploadError::Io(err),
    })?;
    if meta.len() > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge {
            max_bytes: MAX_UPLOAD_BYTES,
            actual: meta.len(),
        });
    }

    let bytes = fs::read(path)?;
    let decoded = decode_utf8(&bytes)?;
    board_debug!(
        "Decoded upload {:?} bytes={} bom={}",
        path,
        bytes.len(),
        decoded.had_bom
    );
    Ok(UploadedText {
        name: upload_name(path),
        text: decoded.text,
    })
}
