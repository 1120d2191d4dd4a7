//! Report model and rendering
//!
//! Global invariants enforced:
//! - Records keep the analyzer's source order
//! - Identical input yields byte-for-byte identical output

use serde::{Deserialize, Serialize};

/// Complexity metrics for one function or method declaration.
///
/// Built once by the analyzer and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionMetrics {
    pub name: String,
    /// 1-based line of the name token
    pub line: usize,
    /// 1-based column of the name token
    pub column: usize,
    /// Inclusive line span of the body, opening `{` to closing `}`
    pub length: usize,
    /// Maximum indentation depth reached inside the body; at least 1
    pub nesting_level: usize,
    /// Named, non-blank formal parameters
    pub parameter_count: usize,
    /// Euclidean norm of the assignment/branch/condition counts, rounded
    /// to two decimals
    pub abc_size: f64,
}

/// Render records as a fixed-width text table
pub fn render_text(records: &[FunctionMetrics]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<30} {:>8} {:>8} {:>9} {:>10}\n",
        "FUNCTION", "LENGTH", "PARAMS", "NESTING", "ABC SIZE"
    ));

    for record in records {
        output.push_str(&format!(
            "{:<30} {:>8} {:>8} {:>9} {:>10.2}\n",
            truncate_or_pad(&record.name, 30),
            record.length,
            record.parameter_count,
            record.nesting_level,
            record.abc_size,
        ));
    }

    output
}

/// Render records as a pretty JSON array, preserving record order
pub fn render_json(records: &[FunctionMetrics]) -> String {
    serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
}

/// Truncate or pad string to fixed width
fn truncate_or_pad(s: &str, width: usize) -> String {
    if s.len() > width {
        format!("{}...", &s[..width.saturating_sub(3)])
    } else {
        format!("{:<width$}", s, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> FunctionMetrics {
        FunctionMetrics {
            name: "parseSourceCode".to_string(),
            line: 12,
            column: 6,
            length: 18,
            nesting_level: 2,
            parameter_count: 2,
            abc_size: 5.74,
        }
    }

    #[test]
    fn test_render_text_columns() {
        let text = render_text(&[sample_record()]);
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("FUNCTION"));
        assert!(header.contains("ABC SIZE"));

        let row = lines.next().unwrap();
        assert!(row.starts_with("parseSourceCode"));
        assert!(row.contains("5.74"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_render_text_truncates_long_names() {
        let mut record = sample_record();
        record.name = "a".repeat(40);
        let text = render_text(&[record]);
        assert!(text.contains("..."));
    }

    #[test]
    fn test_render_json_round_trip() {
        let records = vec![sample_record()];
        let json = render_json(&records);
        let parsed: Vec<FunctionMetrics> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_render_json_empty() {
        assert_eq!(render_json(&[]), "[]");
    }
}
