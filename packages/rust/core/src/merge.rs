//! End-to-end `merge` pipeline: classified subsets → one renumbered dataset.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, instrument, warn};

use benchdex_dataset::report::DatasetSummary;
use benchdex_dataset::{read_records, sort_and_renumber, write_records};
use benchdex_shared::{PaperRecord, Result};

use crate::pipeline::ProgressReporter;

/// Configuration for the `merge` pipeline.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Classified dataset files to merge, in order.
    pub inputs: Vec<PathBuf>,
    /// Output path for the merged dataset.
    pub output: PathBuf,
}

/// Records contributed by one input file.
#[derive(Debug, Clone)]
pub struct SourceCount {
    /// The input path as given.
    pub path: PathBuf,
    /// Whether the file was present.
    pub present: bool,
    /// Number of records loaded (0 when absent).
    pub loaded: usize,
}

/// Result of the `merge` pipeline.
#[derive(Debug)]
pub struct MergeOutcome {
    /// Path the merged dataset was written to.
    pub output_path: PathBuf,
    /// Per-source load report, in input order.
    pub sources: Vec<SourceCount>,
    /// Summary statistics over the merged records.
    pub summary: DatasetSummary,
    /// Size of the written dataset file in bytes.
    pub bytes_written: usize,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Run the full `merge` pipeline.
///
/// Missing input files are skipped with a warning and contribute zero
/// records; a file that exists but is malformed aborts the run. Loaded
/// records are concatenated in input order, then sorted and renumbered
/// exactly like the extraction output.
#[instrument(skip_all, fields(inputs = options.inputs.len()))]
pub fn merge(options: &MergeOptions, progress: &dyn ProgressReporter) -> Result<MergeOutcome> {
    let start = Instant::now();

    progress.phase("Loading classified datasets");
    let mut records: Vec<PaperRecord> = Vec::new();
    let mut sources = Vec::with_capacity(options.inputs.len());
    let total = options.inputs.len();

    for (i, path) in options.inputs.iter().enumerate() {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        progress.file_processed(name, i + 1, total);

        if !path.exists() {
            warn!(path = %path.display(), "classified input not found, skipping");
            sources.push(SourceCount {
                path: path.clone(),
                present: false,
                loaded: 0,
            });
            continue;
        }

        let loaded = read_records(path)?;
        info!(path = %path.display(), count = loaded.len(), "loaded classified records");
        sources.push(SourceCount {
            path: path.clone(),
            present: true,
            loaded: loaded.len(),
        });
        records.extend(loaded);
    }

    progress.phase("Sorting and renumbering");
    sort_and_renumber(&mut records);

    progress.phase("Writing dataset");
    let bytes_written = write_records(&options.output, &records)?;

    let summary = DatasetSummary::from_records(&records);
    let outcome = MergeOutcome {
        output_path: options.output.clone(),
        sources,
        summary,
        bytes_written,
        elapsed: start.elapsed(),
    };

    progress.done();

    info!(
        total = outcome.summary.total,
        uncategorized = outcome.summary.uncategorized,
        output = %outcome.output_path.display(),
        elapsed_ms = outcome.elapsed.as_millis(),
        "merge pipeline complete"
    );

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SilentProgress;
    use benchdex_shared::Domain;

    fn make_record(title: &str, conference: &str, domain: Domain, category: &str) -> PaperRecord {
        PaperRecord {
            id: 7,
            title: title.into(),
            conference: conference.into(),
            year: 2024,
            domain,
            category: category.into(),
            subcategory: String::new(),
            url: String::new(),
            r#abstract: String::new(),
            matched_keywords: vec!["benchmark".into()],
        }
    }

    #[test]
    fn merge_with_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("classified_aiml.json");
        let b = dir.path().join("classified_cv.json");
        let missing = dir.path().join("classified_nlp.json");

        write_records(&a, &[make_record("B Benchmark", "ICML", Domain::AiMl, "agents")]).unwrap();
        write_records(
            &b,
            &[
                make_record("A Benchmark", "CVPR", Domain::Cv, "detection"),
                make_record("C Benchmark", "CVPR", Domain::Cv, ""),
            ],
        )
        .unwrap();

        let options = MergeOptions {
            inputs: vec![a, missing.clone(), b],
            output: dir.path().join("papers.json"),
        };
        let outcome = merge(&options, &SilentProgress).unwrap();

        assert_eq!(outcome.summary.total, 3);
        assert_eq!(outcome.sources.len(), 3);
        assert_eq!(outcome.sources[0].loaded, 1);
        assert!(!outcome.sources[1].present);
        assert_eq!(outcome.sources[1].loaded, 0);
        assert_eq!(outcome.sources[2].loaded, 2);
        assert_eq!(outcome.summary.uncategorized, 1);

        // Renumbered in canonical order: AI/ML first, then CV by title.
        let merged = read_records(&outcome.output_path).unwrap();
        assert_eq!(merged[0].conference, "ICML");
        assert_eq!(merged[1].title, "A Benchmark");
        assert_eq!(merged[2].title, "C Benchmark");
        let ids: Vec<u32> = merged.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn merge_malformed_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("classified_aiml.json");
        std::fs::write(&bad, "not json at all").unwrap();

        let options = MergeOptions {
            inputs: vec![bad],
            output: dir.path().join("papers.json"),
        };
        let err = merge(&options, &SilentProgress).unwrap_err();
        assert!(err.to_string().contains("classified_aiml.json"));
        assert!(!options.output.exists());
    }

    #[test]
    fn merge_does_not_deduplicate() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        let record = make_record("Same Benchmark", "ICML", Domain::AiMl, "x");
        write_records(&a, std::slice::from_ref(&record)).unwrap();
        write_records(&b, std::slice::from_ref(&record)).unwrap();

        let options = MergeOptions {
            inputs: vec![a, b],
            output: dir.path().join("papers.json"),
        };
        let outcome = merge(&options, &SilentProgress).unwrap();

        assert_eq!(outcome.summary.total, 2);
        let merged = read_records(&outcome.output_path).unwrap();
        assert_eq!(merged[0].title, merged[1].title);
        assert_ne!(merged[0].id, merged[1].id);
    }

    #[test]
    fn merge_all_inputs_missing_writes_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let options = MergeOptions {
            inputs: vec![dir.path().join("gone.json")],
            output: dir.path().join("papers.json"),
        };
        let outcome = merge(&options, &SilentProgress).unwrap();

        assert_eq!(outcome.summary.total, 0);
        assert!(read_records(&outcome.output_path).unwrap().is_empty());
    }
}
