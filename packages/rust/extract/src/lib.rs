//! Title-list extraction for benchdex.
//!
//! A title list is a plain-text file named `<conference>_<year>.txt` with
//! one paper title per line. This crate parses the filename into conference
//! metadata, matches titles against the benchmark keyword vocabulary, and
//! turns matching lines into unnumbered [`PaperRecord`]s.
//!
//! [`PaperRecord`]: benchdex_shared::PaperRecord

pub mod filename;
pub mod matcher;
pub mod scan;

pub use filename::parse_stem;
pub use matcher::{KEYWORDS, match_keywords};
pub use scan::{ScannedFile, list_title_files, scan_title_file};
