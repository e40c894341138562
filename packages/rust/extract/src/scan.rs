//! Title-list scanning.
//!
//! Reads one title-list file into unnumbered [`PaperRecord`]s: blank lines
//! are skipped, titles are trimmed, and only titles with at least one
//! keyword match survive. `id` stays 0 until the final sort assigns it.

use std::path::{Path, PathBuf};

use tracing::debug;

use benchdex_shared::{BenchdexError, Domain, PaperRecord, Result};

use crate::filename::parse_stem;
use crate::matcher::match_keywords;

/// Result of scanning a single title list.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    /// Lower-cased conference token from the file name.
    pub conference: String,
    /// Conference year from the file name.
    pub year: u16,
    /// Number of non-blank title lines seen.
    pub titles_seen: usize,
    /// Records for the titles that matched the keyword vocabulary.
    pub records: Vec<PaperRecord>,
}

/// List the `*.txt` title lists in `dir`, sorted by file name.
pub fn list_title_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| BenchdexError::io(dir, e))?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BenchdexError::io(dir, e))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some("txt") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Scan one title-list file into records.
///
/// The file name is a structural precondition: a bad
/// `<conference>_<year>` stem fails the whole call.
pub fn scan_title_file(path: &Path) -> Result<ScannedFile> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| BenchdexError::parse(format!("unreadable file name: {}", path.display())))?;

    let (conference, year) = parse_stem(file_name)?;
    let domain = Domain::for_conference(&conference);

    let content = std::fs::read_to_string(path).map_err(|e| BenchdexError::io(path, e))?;

    let mut titles_seen = 0;
    let mut records = Vec::new();

    for line in content.lines() {
        let title = line.trim();
        if title.is_empty() {
            continue;
        }
        titles_seen += 1;

        let matched = match_keywords(title);
        if matched.is_empty() {
            continue;
        }

        records.push(PaperRecord {
            id: 0,
            title: title.to_string(),
            conference: conference.to_uppercase(),
            year,
            domain,
            category: String::new(),
            subcategory: String::new(),
            url: String::new(),
            r#abstract: String::new(),
            matched_keywords: matched,
        });
    }

    debug!(
        file = %path.display(),
        conference = %conference,
        year,
        titles_seen,
        matched = records.len(),
        "scanned title list"
    );

    Ok(ScannedFile {
        conference,
        year,
        titles_seen,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn scan_filters_and_annotates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cvpr_2024.txt");
        fs::write(
            &path,
            "A New Benchmark for Vision\n\
             \n\
             A Study of Transformers\n\
             \t Our New Test Suite \n",
        )
        .unwrap();

        let scanned = scan_title_file(&path).unwrap();
        assert_eq!(scanned.conference, "cvpr");
        assert_eq!(scanned.year, 2024);
        assert_eq!(scanned.titles_seen, 3);
        assert_eq!(scanned.records.len(), 2);

        let first = &scanned.records[0];
        assert_eq!(first.id, 0);
        assert_eq!(first.title, "A New Benchmark for Vision");
        assert_eq!(first.conference, "CVPR");
        assert_eq!(first.domain, Domain::Cv);
        assert_eq!(first.category, "");
        assert_eq!(first.matched_keywords, vec!["benchmark"]);

        // Leading/trailing whitespace stripped.
        assert_eq!(scanned.records[1].title, "Our New Test Suite");
        assert_eq!(scanned.records[1].matched_keywords, vec!["test suite"]);
    }

    #[test]
    fn scan_unknown_conference() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xyzconf_2020.txt");
        fs::write(&path, "A Survey of Nothing\n").unwrap();

        let scanned = scan_title_file(&path).unwrap();
        assert_eq!(scanned.records[0].domain, Domain::Unknown);
        assert_eq!(scanned.records[0].conference, "XYZCONF");
    }

    #[test]
    fn scan_bad_filename_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "A New Benchmark\n").unwrap();

        assert!(scan_title_file(&path).is_err());
    }

    #[test]
    fn list_title_files_sorted_txt_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("icml_2023.txt"), "").unwrap();
        fs::write(dir.path().join("acl_2022.txt"), "").unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();

        let files = list_title_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["acl_2022.txt", "icml_2023.txt"]);
    }
}
