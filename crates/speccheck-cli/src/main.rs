//! `speccheck` — differential Ed25519 verification runner.
//!
//! Loads a JSON corpus, runs the selected verifier backends over every
//! vector, and prints one verdict per (vector, backend) along with the
//! vectors on which backends disagree.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

mod cli;
mod config;
mod report;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use speccheck_core::{backend, corpus, Evaluator};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::{ReportFormat, SpeccheckConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            ExitCode::from(2)
        }
    }
}

/// Log to stderr so stdout carries only the report. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.list_backends {
        for name in backend::BACKEND_NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let config = cli.merge_into(SpeccheckConfig::load(&cli.config));
    tracing::info!(
        corpus = %config.corpus.display(),
        backends = ?config.backends,
        "Starting run"
    );

    let vectors = corpus::load(&config.corpus)
        .with_context(|| format!("loading corpus {}", config.corpus.display()))?;

    if let Some(path) = &cli.export_txt {
        corpus::export_txt(&vectors, path)
            .with_context(|| format!("exporting corpus to {}", path.display()))?;
    }

    let evaluator =
        Evaluator::from_names(config.backends.as_slice()).context("selecting verifier backends")?;
    let outcomes = evaluator.evaluate(&vectors);

    println!("{}", report::render(&outcomes, config.format)?);
    if config.format != ReportFormat::Json {
        println!("{}", report::render_disagreements(&outcomes));
    }
    Ok(())
}
