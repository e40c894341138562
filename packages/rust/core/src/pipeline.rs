//! End-to-end `extract` pipeline: title lists → filter → sort → renumber → dataset.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, instrument};

use benchdex_dataset::report::DatasetSummary;
use benchdex_dataset::{sort_and_renumber, write_records};
use benchdex_extract::scan::{list_title_files, scan_title_file};
use benchdex_shared::{PaperRecord, Result};

/// Configuration for the `extract` pipeline.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Directory holding the `<conference>_<year>.txt` title lists.
    pub input_dir: PathBuf,
    /// Output path for the raw dataset.
    pub output: PathBuf,
}

/// Result of the `extract` pipeline.
#[derive(Debug)]
pub struct ExtractOutcome {
    /// Path the dataset was written to.
    pub output_path: PathBuf,
    /// Number of title lists scanned.
    pub files_scanned: usize,
    /// Total non-blank titles seen across all lists.
    pub titles_seen: usize,
    /// Summary statistics over the emitted records.
    pub summary: DatasetSummary,
    /// Size of the written dataset file in bytes.
    pub bytes_written: usize,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called as each input file is processed.
    fn file_processed(&self, name: &str, current: usize, total: usize);
    /// Called when the pipeline completes.
    fn done(&self);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn file_processed(&self, _name: &str, _current: usize, _total: usize) {}
    fn done(&self) {}
}

/// Run the full `extract` pipeline.
///
/// 1. List `*.txt` title lists in the input directory (sorted)
/// 2. Scan each list, keeping keyword-matching titles
/// 3. Sort the collection into canonical order and renumber
/// 4. Write the dataset atomically
///
/// A bad title-list filename aborts the run; nothing is written until
/// every list has scanned cleanly.
#[instrument(skip_all, fields(input_dir = %options.input_dir.display()))]
pub fn extract(
    options: &ExtractOptions,
    progress: &dyn ProgressReporter,
) -> Result<ExtractOutcome> {
    let start = Instant::now();

    progress.phase("Scanning title lists");
    let files = list_title_files(&options.input_dir)?;
    info!(count = files.len(), "found title lists");

    let mut records: Vec<PaperRecord> = Vec::new();
    let mut titles_seen = 0;
    let total = files.len();

    for (i, path) in files.iter().enumerate() {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        progress.file_processed(name, i + 1, total);

        let scanned = scan_title_file(path)?;
        titles_seen += scanned.titles_seen;
        records.extend(scanned.records);
    }

    progress.phase("Sorting and renumbering");
    sort_and_renumber(&mut records);

    progress.phase("Writing dataset");
    let bytes_written = write_records(&options.output, &records)?;

    let summary = DatasetSummary::from_records(&records);
    let outcome = ExtractOutcome {
        output_path: options.output.clone(),
        files_scanned: total,
        titles_seen,
        summary,
        bytes_written,
        elapsed: start.elapsed(),
    };

    progress.done();

    info!(
        files = outcome.files_scanned,
        titles = outcome.titles_seen,
        matched = outcome.summary.total,
        output = %outcome.output_path.display(),
        elapsed_ms = outcome.elapsed.as_millis(),
        "extract pipeline complete"
    );

    Ok(outcome)
}
