//! Title-list filename parsing.
//!
//! Title lists are named `<conference>_<year>.<ext>`, e.g. `neurips_2024.txt`.
//! The stem is split on the **last** underscore, so conference tokens may
//! themselves contain underscores.

use std::path::Path;

use benchdex_shared::{BenchdexError, Result};

/// Parse a title-list file name into `(conference, year)`.
///
/// The conference token is lower-cased; the year must parse as an integer.
/// Filenames are a structural precondition, so a missing underscore or a
/// non-integer year segment is a fatal error for the run, not a per-record
/// condition.
pub fn parse_stem(file_name: &str) -> Result<(String, u16)> {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            BenchdexError::parse(format!("title list '{file_name}': unreadable file name"))
        })?;

    let (conference, year_part) = stem.rsplit_once('_').ok_or_else(|| {
        BenchdexError::parse(format!(
            "title list '{file_name}': expected '<conference>_<year>' in the file name"
        ))
    })?;

    let year: u16 = year_part.parse().map_err(|_| {
        BenchdexError::parse(format!(
            "title list '{file_name}': year segment '{year_part}' is not an integer"
        ))
    })?;

    Ok((conference.to_lowercase(), year))
}
