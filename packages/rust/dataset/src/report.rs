//! Summary statistics over a record collection.
//!
//! Everything here is console-facing reporting; none of it is part of the
//! dataset contract.

use std::collections::HashMap;

use benchdex_shared::PaperRecord;

/// Aggregate counts for a record collection.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    /// Total record count.
    pub total: usize,
    /// Per-domain counts, sorted by domain label.
    pub domains: Vec<(String, usize)>,
    /// Per `<CONFERENCE>_<year>` counts, most frequent first.
    pub conferences: Vec<(String, usize)>,
    /// Category frequency distribution, most frequent first. Records with
    /// an empty category appear here under the empty label.
    pub categories: Vec<(String, usize)>,
    /// Number of records whose category is still empty.
    pub uncategorized: usize,
}

impl DatasetSummary {
    /// Compute the summary for a record slice.
    pub fn from_records(records: &[PaperRecord]) -> Self {
        let mut domains: HashMap<String, usize> = HashMap::new();
        let mut conferences: HashMap<String, usize> = HashMap::new();
        let mut categories: HashMap<String, usize> = HashMap::new();
        let mut uncategorized = 0;

        for record in records {
            *domains.entry(record.domain.as_str().to_string()).or_default() += 1;
            *conferences
                .entry(format!("{}_{}", record.conference, record.year))
                .or_default() += 1;
            *categories.entry(record.category.clone()).or_default() += 1;
            if record.category.is_empty() {
                uncategorized += 1;
            }
        }

        let mut domains: Vec<_> = domains.into_iter().collect();
        domains.sort_by(|a, b| a.0.cmp(&b.0));

        Self {
            total: records.len(),
            domains,
            conferences: by_count_desc(conferences),
            categories: by_count_desc(categories),
            uncategorized,
        }
    }
}

/// Flatten a counter into a vec ordered by count descending, label
/// ascending on ties.
fn by_count_desc(counter: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<_> = counter.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}
