//! gotrics core library - per-function complexity metrics for Go source
//!
//! For every function and method declaration in a Go file this crate
//! computes: physical length, maximum nesting depth, parameter count, and
//! ABC size (the Euclidean norm of assignment/branch/condition counts).

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Analysis is strictly per-function
// - No global mutable state
// - No randomness, clocks, threads, or async
// - Deterministic traversal order must be explicit
// - Identical input yields identical output

pub mod analysis;
pub mod metrics;
pub mod parser;
pub mod report;
pub mod syntax;

pub use analysis::analyze;
pub use parser::{GoParser, ParsedFile};
pub use report::{render_json, render_text, FunctionMetrics};

use anyhow::{Context, Result};
use std::path::Path;

/// Parse a Go source string and compute metrics for every function in it
pub fn analyze_source(source: &str, filename: &str) -> Result<Vec<FunctionMetrics>> {
    let parser = GoParser::new()?;
    let file = parser.parse(source, filename)?;
    Ok(analysis::analyze(&file))
}

/// Read and analyze a Go file on disk
pub fn analyze_file(path: &Path) -> Result<Vec<FunctionMetrics>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    analyze_source(&source, &path.to_string_lossy())
}
