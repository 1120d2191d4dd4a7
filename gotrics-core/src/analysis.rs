//! Analysis orchestration: walk a parsed file, emit one record per function
//!
//! Global invariants enforced:
//! - Records are emitted in source order (pre-order, left-to-right walk)
//! - Identical input yields identical output

use crate::metrics;
use crate::parser::ParsedFile;
use crate::report::FunctionMetrics;
use crate::syntax;
use tree_sitter::Node;

/// Compute metrics for every function and method declaration in a parsed
/// file, in the order the declarations appear in the source.
///
/// Declarations without a body (assembly-backed signatures) produce no
/// record. The walk is total: nothing else is skipped and nothing fails.
pub fn analyze(file: &ParsedFile) -> Vec<FunctionMetrics> {
    let mut records = Vec::new();
    collect_functions(file.root(), file, &mut records);
    records
}

/// Recursively walk the tree for function and method declarations
fn collect_functions(node: Node, file: &ParsedFile, records: &mut Vec<FunctionMetrics>) {
    if matches!(node.kind(), "function_declaration" | "method_declaration") {
        if let Some(record) = function_record(node, file) {
            records.push(record);
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_functions(child, file, records);
    }
}

/// Build one record by running the four calculators over a declaration
fn function_record(decl: Node, file: &ParsedFile) -> Option<FunctionMetrics> {
    let source = file.source();
    let body = decl.child_by_field_name("body")?;

    // Functions name themselves with an identifier, methods with a
    // field_identifier
    let name_node = syntax::find_child_by_kind(decl, "identifier")
        .or_else(|| syntax::find_child_by_kind(decl, "field_identifier"))?;
    let (line, column) = file.position_of(name_node);

    Some(FunctionMetrics {
        name: syntax::node_text(name_node, source).to_string(),
        line,
        column,
        length: metrics::function_length(body),
        nesting_level: metrics::nesting_depth(body),
        parameter_count: metrics::parameter_count(decl, source),
        abc_size: metrics::abc_size(decl, source),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::GoParser;

    fn analyze_str(source: &str) -> Vec<FunctionMetrics> {
        let parser = GoParser::new().unwrap();
        let file = parser.parse(source, "test.go").unwrap();
        analyze(&file)
    }

    #[test]
    fn test_single_function() {
        let records = analyze_str(
            "package main\n\nfunc add(a int, b int) int {\n\treturn a + b\n}\n",
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "add");
        assert_eq!(records[0].line, 3);
        assert_eq!(records[0].column, 6);
        assert_eq!(records[0].length, 3);
        assert_eq!(records[0].nesting_level, 1);
        assert_eq!(records[0].parameter_count, 2);
        assert_eq!(records[0].abc_size, 0.0);
    }

    #[test]
    fn test_source_order_not_alphabetical() {
        let records = analyze_str(
            "package main\n\nfunc zzz() {}\nfunc aaa() {}\nfunc mmm() {}\n",
        );
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["zzz", "aaa", "mmm"]);
    }

    #[test]
    fn test_method_declaration() {
        let records = analyze_str(
            "package main\n\ntype S struct{}\n\nfunc (s S) Scale(factor float64) {\n\ts.x = factor\n}\n",
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Scale");
        assert_eq!(records[0].parameter_count, 1);
    }

    #[test]
    fn test_bodyless_declaration_skipped() {
        // Assembly-backed signature: syntactically valid, no body to measure
        let records = analyze_str("package main\n\nfunc abs(x float64) float64\n\nfunc f() {}\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "f");
    }

    #[test]
    fn test_empty_file() {
        assert!(analyze_str("package main\n").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let source = "package main\n\nfunc f(x int) {\n\tif x > 0 {\n\t\tprintln(x)\n\t}\n}\n";
        let first = analyze_str(source);
        let second = analyze_str(source);
        assert_eq!(first, second);
    }
}
