//! Command-line flags and their merge onto the file configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ReportFormat, SpeccheckConfig, CONFIG_FILE};

#[derive(Debug, Parser)]
#[command(
    name = "speccheck",
    version,
    about = "Run Ed25519 verifiers over a shared corpus of edge-case vectors and report where they disagree"
)]
pub struct Cli {
    /// Configuration file (missing file means defaults)
    #[arg(long, default_value = CONFIG_FILE, env = "SPECCHECK_CONFIG")]
    pub config: PathBuf,

    /// JSON corpus of {pub_key, message, signature} objects
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Backend to run; repeat to select several (default: all)
    #[arg(long = "backend", value_name = "NAME")]
    pub backends: Vec<String>,

    /// Report layout
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Also write the corpus in cases.txt form for C harnesses
    #[arg(long, value_name = "PATH")]
    pub export_txt: Option<PathBuf>,

    /// List registered backends and exit
    #[arg(long)]
    pub list_backends: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply command-line overrides on top of the file configuration.
    #[must_use]
    pub fn merge_into(&self, mut config: SpeccheckConfig) -> SpeccheckConfig {
        if let Some(corpus) = &self.corpus {
            config.corpus.clone_from(corpus);
        }
        if !self.backends.is_empty() {
            config.backends.clone_from(&self.backends);
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config
    }
}
