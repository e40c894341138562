//! Core domain types for the benchdex paper dataset.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Domain
// ---------------------------------------------------------------------------

/// Research domain a conference belongs to.
///
/// Serialized as the short label strings used throughout the dataset
/// (`"AI/ML"`, `"CV"`, ...). Unrecognized conferences resolve to
/// [`Domain::Unknown`] rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "CV")]
    Cv,
    #[serde(rename = "NLP")]
    Nlp,
    #[serde(rename = "SE")]
    Se,
    #[serde(rename = "DB/IR")]
    DbIr,
    Unknown,
}

impl Domain {
    /// The label string as it appears in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::AiMl => "AI/ML",
            Domain::Cv => "CV",
            Domain::Nlp => "NLP",
            Domain::Se => "SE",
            Domain::DbIr => "DB/IR",
            Domain::Unknown => "Unknown",
        }
    }

    /// Resolve a lower-cased conference token to its domain.
    ///
    /// The mapping is a fixed table; anything not listed maps to
    /// [`Domain::Unknown`].
    pub fn for_conference(conference: &str) -> Domain {
        match conference {
            "neurips" | "icml" | "iclr" | "aaai" | "ijcai" => Domain::AiMl,
            "cvpr" | "iccv" | "eccv" => Domain::Cv,
            "acl" | "emnlp" | "naacl" => Domain::Nlp,
            "icse" | "fse" | "ase" => Domain::Se,
            "sigmod" | "vldb" | "cikm" | "sigir" => Domain::DbIr,
            _ => Domain::Unknown,
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PaperRecord
// ---------------------------------------------------------------------------

/// One paper in the dataset.
///
/// Field order here is the serialized field order. `id` is dense and
/// contiguous starting at 1, assigned only after the final sort — it
/// carries no meaning before output time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Position in the canonical sort order, 1-based.
    pub id: u32,
    /// Paper title, exactly as listed (surrounding whitespace trimmed).
    pub title: String,
    /// Uppercase conference token (e.g. "NEURIPS").
    pub conference: String,
    /// 4-digit conference year.
    pub year: u16,
    /// Research domain derived from the conference.
    pub domain: Domain,
    /// Classification label; empty until the classifier fills it.
    pub category: String,
    /// Finer classification label; empty until the classifier fills it.
    pub subcategory: String,
    /// Paper URL; not populated by this tool.
    pub url: String,
    /// Paper abstract; not populated by this tool.
    pub r#abstract: String,
    /// Vocabulary entries that matched the title, in vocabulary order.
    #[serde(rename = "matchedKeywords")]
    pub matched_keywords: Vec<String>,
}
