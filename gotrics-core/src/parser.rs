//! Go parsing front-end using tree-sitter
//!
//! The metrics core consumes a completed, immutable syntax tree plus a
//! position index; this module produces both. It also owns the snippet
//! recovery policy: a bare snippet that fails to parse for lack of a
//! `package` clause is retried once with a synthetic header prepended.

use anyhow::{Context, Result};
use tree_sitter::{Node, Parser, Tree};

/// Synthetic header prepended when reparsing a bare snippet. No trailing
/// newline, so line numbers in the padded source match the original.
const PACKAGE_HEADER: &str = "package p;";

/// Go parser using tree-sitter
pub struct GoParser;

impl GoParser {
    /// Create a new Go parser
    pub fn new() -> Result<Self> {
        // Just validate that we can load the grammar
        make_parser()?;
        Ok(GoParser)
    }

    /// Parse Go source into a tree plus position index.
    ///
    /// tree-sitter is error-tolerant and always produces a tree; a file
    /// that still contains syntax errors after snippet recovery is rejected
    /// here rather than handed to the analyzer.
    pub fn parse(&self, source: &str, filename: &str) -> Result<ParsedFile> {
        let mut parser = make_parser()?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("failed to parse Go file: {}", filename))?;

        if !tree.root_node().has_error() {
            return Ok(ParsedFile {
                tree,
                source: source.to_string(),
                header_bytes: 0,
            });
        }

        // A snippet without a package clause is still worth analyzing
        if !source.trim_start().starts_with("package") {
            let padded = format!("{}{}", PACKAGE_HEADER, source);
            if let Some(tree) = parser.parse(&padded, None) {
                if !tree.root_node().has_error() {
                    return Ok(ParsedFile {
                        tree,
                        source: padded,
                        header_bytes: PACKAGE_HEADER.len(),
                    });
                }
            }
        }

        anyhow::bail!("syntax errors in Go file: {}", filename)
    }
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new().expect("Failed to create Go parser")
    }
}

fn make_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    let language = tree_sitter_go::LANGUAGE;
    parser
        .set_language(&language.into())
        .context("Failed to set Go language for parser")?;
    Ok(parser)
}

/// A parsed Go file: the syntax tree, the source it was parsed from, and
/// enough bookkeeping to map node positions back to the caller's input.
pub struct ParsedFile {
    tree: Tree,
    source: String,
    /// Bytes of synthetic package header prepended during snippet recovery
    header_bytes: usize,
}

impl ParsedFile {
    /// Root node of the syntax tree
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// The source text the tree refers to (padded if recovery kicked in)
    pub fn source(&self) -> &str {
        &self.source
    }

    /// 1-based line/column of a node's start, corrected for any synthetic
    /// package header. The header carries no newline, so only columns on
    /// the first line need adjusting.
    pub fn position_of(&self, node: Node) -> (usize, usize) {
        let pos = node.start_position();
        let column = if pos.row == 0 {
            pos.column.saturating_sub(self.header_bytes)
        } else {
            pos.column
        };
        (pos.row + 1, column + 1)
    }
}
