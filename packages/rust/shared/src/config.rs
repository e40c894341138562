//! Application configuration for benchdex.
//!
//! User config lives at `~/.benchdex/benchdex.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BenchdexError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "benchdex.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".benchdex";

// ---------------------------------------------------------------------------
// Config structs (matching benchdex.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Extraction pipeline settings.
    #[serde(default)]
    pub extract: ExtractSection,

    /// Merge pipeline settings.
    #[serde(default)]
    pub merge: MergeSection,
}

/// `[extract]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractSection {
    /// Directory holding the per-conference title lists.
    #[serde(default = "default_input_dir")]
    pub input_dir: String,

    /// Output path for the raw extracted dataset.
    #[serde(default = "default_extract_output")]
    pub output: String,
}

impl Default for ExtractSection {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output: default_extract_output(),
        }
    }
}

fn default_input_dir() -> String {
    "paper-list".into()
}
fn default_extract_output() -> String {
    "data/benchmark_papers_raw.json".into()
}

/// `[merge]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeSection {
    /// Classified dataset files to merge, in order. Any of these may be
    /// legitimately absent at merge time.
    #[serde(default = "default_merge_inputs")]
    pub inputs: Vec<String>,

    /// Output path for the merged dataset.
    #[serde(default = "default_merge_output")]
    pub output: String,
}

impl Default for MergeSection {
    fn default() -> Self {
        Self {
            inputs: default_merge_inputs(),
            output: default_merge_output(),
        }
    }
}

fn default_merge_inputs() -> Vec<String> {
    vec![
        "data/classified_aiml.json".into(),
        "data/classified_cv.json".into(),
        "data/classified_nlp.json".into(),
        "data/classified_se_db.json".into(),
    ]
}
fn default_merge_output() -> String {
    "data/papers.json".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.benchdex/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| BenchdexError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.benchdex/benchdex.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| BenchdexError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| BenchdexError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| BenchdexError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| BenchdexError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| BenchdexError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
