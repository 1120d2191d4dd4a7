//! gotrics CLI - per-function complexity metrics for Go source files

#![deny(warnings)]

// Global invariants enforced:
// - Output follows the argument order of the input files
// - Identical input yields byte-for-byte identical output

use anyhow::Result;
use clap::{Parser, ValueEnum};
use gotrics_core::{analyze_file, render_json, render_text, FunctionMetrics};
use rayon::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gotrics")]
#[command(about = "Per-function complexity metrics (length, nesting, parameters, ABC size) for Go source files")]
#[command(version)]
struct Cli {
    /// Go source files to analyze
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gotrics: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    for path in &cli.paths {
        if path.is_dir() {
            anyhow::bail!("directory paths are not supported: {}", path.display());
        }
    }

    // Files are independent, so analyze them in parallel; printing stays
    // sequential in argument order.
    let results: Vec<Result<Vec<FunctionMetrics>>> =
        cli.paths.par_iter().map(|path| analyze_file(path)).collect();

    for result in results {
        let records = result?;
        match cli.format {
            OutputFormat::Text => print!("{}", render_text(&records)),
            OutputFormat::Json => println!("{}", render_json(&records)),
        }
    }

    Ok(())
}
