use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use super::error::ScrapeError;
use super::types::GodRecord;

/// Replaces `path` with the pretty-printed collection. The bytes go to a
/// temp file in the same directory and are persisted over `path`; on any
/// failure the temp file is removed when it drops.
pub fn write_collection(path: &Path, records: &[GodRecord]) -> Result<(), ScrapeError> {
    let json = serde_json::to_string_pretty(records).map_err(ScrapeError::Encode)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| io_error(path, e))?;
    tmp.write_all(json.as_bytes()).map_err(|e| io_error(path, e))?;
    tmp.flush().map_err(|e| io_error(path, e))?;
    tmp.persist(path).map_err(|e| io_error(path, e.error))?;
    Ok(())
}

#[cfg(test)]
pub fn read_collection(path: &Path) -> Result<Vec<GodRecord>, ScrapeError> {
    let bytes = fs::read(path).map_err(|e| io_error(path, e))?;
    serde_json::from_slice(&bytes).map_err(ScrapeError::Encode)
}

fn io_error(path: &Path, source: io::Error) -> ScrapeError {
    if source.kind() == io::ErrorKind::NotFound {
        ScrapeError::OutputPath { path: path.to_path_buf() }
    } else {
        ScrapeError::Io { path: path.to_path_buf(), source }
    }
}
