//! Run configuration — plain JSON next to the corpus.
//!
//! Every field is optional in the file; command-line flags override
//! whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use speccheck_core::backend::BACKEND_NAMES;
use speccheck_core::corpus::DEFAULT_CORPUS_FILE;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "speccheck.json";

/// How verdicts are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One row per backend, `V`/`X` per vector.
    #[default]
    Table,
    /// `<index>: <true|false>` lines, grouped by backend.
    Indexed,
    /// Serialized outcomes.
    Json,
}

/// Settings for one harness run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpeccheckConfig {
    /// Path of the JSON test-vector corpus.
    #[serde(default = "default_corpus")]
    pub corpus: PathBuf,

    /// Backend names to run, in report order.
    #[serde(default = "default_backends")]
    pub backends: Vec<String>,

    /// Report layout.
    #[serde(default)]
    pub format: ReportFormat,
}

impl Default for SpeccheckConfig {
    fn default() -> Self {
        Self {
            corpus: default_corpus(),
            backends: default_backends(),
            format: ReportFormat::default(),
        }
    }
}

fn default_corpus() -> PathBuf {
    PathBuf::from(DEFAULT_CORPUS_FILE)
}
fn default_backends() -> Vec<String> {
    BACKEND_NAMES.iter().map(|name| (*name).to_string()).collect()
}

impl SpeccheckConfig {
    /// Load configuration from `path`.
    ///
    /// Returns [`Default::default()`] when the file is missing or does not
    /// parse; the latter is logged.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        };
        serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "Ignoring invalid config file: {e}");
            Self::default()
        })
    }
}
