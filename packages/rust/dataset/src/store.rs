//! Dataset JSON storage.
//!
//! A dataset file is a pretty-printed JSON array of records, UTF-8, with
//! non-ASCII characters preserved literally. Writes go to a sibling temp
//! file first and rename into place, so a failed run never leaves a
//! partially written dataset.

use std::path::Path;

use tracing::debug;

use benchdex_shared::{BenchdexError, PaperRecord, Result};

/// Read a dataset file into records.
///
/// A file that exists but does not parse as a record array is a fatal
/// validation error; callers handle missing files themselves.
pub fn read_records(path: &Path) -> Result<Vec<PaperRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| BenchdexError::io(path, e))?;

    serde_json::from_str(&content).map_err(|e| {
        BenchdexError::validation(format!("malformed dataset {}: {e}", path.display()))
    })
}

/// Write records to a dataset file. Returns the number of bytes written.
///
/// Parent directories are created as needed. The content is written to
/// `.<name>.tmp` next to the target and renamed over it on success.
pub fn write_records(path: &Path, records: &[PaperRecord]) -> Result<usize> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| BenchdexError::validation(format!("JSON serialization failed: {e}")))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| BenchdexError::validation(format!("bad output path: {}", path.display())))?;

    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).map_err(|e| BenchdexError::io(parent, e))?;

    let mut content = json;
    content.push('\n');

    // Write to temp file first, then atomic rename
    let temp = parent.join(format!(".{file_name}.tmp"));
    std::fs::write(&temp, &content).map_err(|e| BenchdexError::io(&temp, e))?;
    std::fs::rename(&temp, path).map_err(|e| BenchdexError::io(path, e))?;

    debug!(path = %path.display(), records = records.len(), bytes = content.len(), "wrote dataset");

    Ok(content.len())
}
