//! `sv-check`: drives one processing round over serialized class symbols.
//!
//! Each input file holds a JSON array of class symbols, the same shape a
//! host resolver would hand over in memory. Every diagnostic goes to
//! stderr; the exit code is nonzero when the round is incomplete.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sv_checker::{CollectingSink, RoundConfig, RoundProcessor, RoundStatus, MARKER_NAME};
use sv_core::ClassSymbol;
use thiserror::Error;

#[derive(Parser)]
#[command(
    name = "sv-check",
    about = "Singleton conformance checker over serialized class symbols"
)]
struct Cli {
    /// JSON files, each holding an array of class symbols.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Keep checking past the first rejected class.
    #[arg(long)]
    no_fail_fast: bool,
}

#[derive(Debug, Error)]
enum RunnerError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn load_classes(files: &[PathBuf]) -> Result<Vec<ClassSymbol>, RunnerError> {
    let mut classes = Vec::new();
    for path in files {
        let text = fs::read_to_string(path).map_err(|source| RunnerError::Io {
            path: path.clone(),
            source,
        })?;
        let mut parsed: Vec<ClassSymbol> =
            serde_json::from_str(&text).map_err(|source| RunnerError::Json {
                path: path.clone(),
                source,
            })?;
        classes.append(&mut parsed);
    }
    Ok(classes)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let classes = match load_classes(&cli.files) {
        Ok(classes) => classes,
        Err(error) => {
            eprintln!("error: {error}");
            return ExitCode::FAILURE;
        }
    };

    let processor = RoundProcessor::new(RoundConfig {
        fail_fast: !cli.no_fail_fast,
    });
    let mut sink = CollectingSink::new();
    let status = processor.process(&classes, &mut sink);

    for diagnostic in &sink.diagnostics {
        eprintln!("{diagnostic}");
    }
    eprintln!(
        "{} class(es) carrying the {} marker, {} error(s)",
        classes.len(),
        MARKER_NAME,
        sink.diagnostics.len()
    );

    match status {
        RoundStatus::Complete => ExitCode::SUCCESS,
        RoundStatus::Incomplete => ExitCode::FAILURE,
    }
}
