//! Writing rendered images into the output directory.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use cloudboard_logging::board_debug;
use tempfile::Builder;
use thiserror::Error;

const STAGING_PREFIX: &str = ".cloudboard-";
const STAGING_SUFFIX: &str = ".part";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cannot use {dir:?} as output directory: {reason}")]
    OutputDir { dir: PathBuf, reason: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

fn output_dir_error(dir: &Path, reason: impl ToString) -> PersistError {
    PersistError::OutputDir {
        dir: dir.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Create `dir` if needed and reject anything that is not a directory.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(output_dir_error(dir, "not a directory")),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(dir).map_err(|err| output_dir_error(dir, err))
        }
        Err(err) => Err(output_dir_error(dir, err)),
    }
}

/// Writes whole files into one directory. Readers see either the previous
/// file or the complete new one, never a partial write.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: impl AsRef<[u8]>) -> Result<PathBuf, PersistError> {
        ensure_output_dir(&self.dir)?;
        let bytes = content.as_ref();

        // Staged next to the target so the final rename stays on one filesystem.
        let mut staged = Builder::new()
            .prefix(STAGING_PREFIX)
            .suffix(STAGING_SUFFIX)
            .tempfile_in(&self.dir)
            .map_err(|err| output_dir_error(&self.dir, err))?;
        staged.write_all(bytes)?;
        staged.as_file().sync_all()?;

        // `persist` renames over an existing file; the old one stays intact
        // until then. On failure the staged file is removed on drop.
        let target = self.dir.join(filename);
        staged.persist(&target).map_err(|err| PersistError::Io(err.error))?;
        board_debug!("Wrote {:?} bytes={}", target, bytes.len());
        Ok(target)
    }
}
