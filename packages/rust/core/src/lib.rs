//! Pipeline orchestration for benchdex.
//!
//! This crate ties filename parsing, keyword matching, canonical ordering,
//! and dataset storage into the two end-to-end workflows: `extract`
//! (title lists → raw dataset) and `merge` (classified subsets → final
//! dataset).

pub mod merge;
pub mod pipeline;

pub use merge::{MergeOptions, MergeOutcome, SourceCount, merge};
pub use pipeline::{ExtractOptions, ExtractOutcome, ProgressReporter, SilentProgress, extract};
