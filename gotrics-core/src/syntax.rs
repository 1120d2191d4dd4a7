//! Closed node-kind dispatch over the tree-sitter-go grammar

use tree_sitter::Node;

/// Go syntax node kinds the metric calculators dispatch on.
///
/// tree-sitter exposes node kinds as strings; mapping them to a closed enum
/// once, at the edge, keeps every counting rule an exhaustive `match` the
/// compiler can check. Kinds with identical treatment share a variant;
/// everything else is `Other` and is traversal-transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `{ ... }` statement block
    Block,
    /// `if` statement
    If,
    /// `for` statement (all header forms)
    For,
    /// `switch`, type-switch, and `select`: depth-neutral containers
    SwitchLike,
    /// non-default `case`/`comm` clause
    Case,
    /// `default:` clause of a switch or select
    DefaultCase,
    /// one spec of a `var` declaration (name list plus optional initializer)
    VarSpec,
    /// `:=` short variable declaration
    ShortVarDecl,
    /// assignment statement, including compound operators (`+=`, `*=`, ...)
    Assign,
    /// `++` or `--` statement
    IncDec,
    /// call expression
    Call,
    /// `goto` statement
    Goto,
    /// any other node; walked through without contributing to any metric
    Other,
}

impl NodeKind {
    pub fn of(node: Node) -> Self {
        match node.kind() {
            "block" => NodeKind::Block,
            "if_statement" => NodeKind::If,
            "for_statement" => NodeKind::For,
            "expression_switch_statement" | "type_switch_statement" | "select_statement" => {
                NodeKind::SwitchLike
            }
            "expression_case" | "type_case" | "communication_case" => NodeKind::Case,
            "default_case" => NodeKind::DefaultCase,
            // const_spec is deliberately absent: constant declarations are
            // never assignments
            "var_spec" => NodeKind::VarSpec,
            "short_var_declaration" => NodeKind::ShortVarDecl,
            "assignment_statement" => NodeKind::Assign,
            "inc_statement" | "dec_statement" => NodeKind::IncDec,
            "call_expression" => NodeKind::Call,
            "goto_statement" => NodeKind::Goto,
            _ => NodeKind::Other,
        }
    }
}

/// Find a direct child node by kind
pub fn find_child_by_kind<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .find(|child| child.kind() == kind);
    found
}

/// Source text covered by a node
pub fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    &source[node.byte_range()]
}

/// Collect the named children of a node.
///
/// tree-sitter's child iterators borrow a cursor; materializing them keeps
/// the recursive walks free of cursor lifetime juggling.
pub fn named_children(node: Node) -> Vec<Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

/// True for a plain identifier other than the blank `_`
pub fn is_counted_ident(node: Node, source: &str) -> bool {
    node.kind() == "identifier" && node_text(node, source) != "_"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::GoParser;

    fn with_first_function<F: FnOnce(Node, &str)>(source: &str, f: F) {
        let parser = GoParser::new().unwrap();
        let file = parser.parse(source, "test.go").unwrap();
        let decl = find_child_by_kind(file.root(), "function_declaration")
            .expect("fixture should contain a function declaration");
        f(decl, file.source());
    }

    #[test]
    fn test_kind_mapping() {
        let source = r#"
package t

func f(x int) {
	y := 0
	if x > 0 {
		y++
	}
	switch x {
	case 1:
	default:
	}
	for x < 10 {
		goto done
	}
done:
	print(y)
}
"#;
        with_first_function(source, |decl, _| {
            let body = decl.child_by_field_name("body").unwrap();
            assert_eq!(NodeKind::of(body), NodeKind::Block);

            let mut seen = Vec::new();
            collect_kinds(body, &mut seen);
            for expected in [
                NodeKind::ShortVarDecl,
                NodeKind::If,
                NodeKind::IncDec,
                NodeKind::SwitchLike,
                NodeKind::Case,
                NodeKind::DefaultCase,
                NodeKind::For,
                NodeKind::Goto,
                NodeKind::Call,
            ] {
                assert!(seen.contains(&expected), "missing {:?}", expected);
            }
        });
    }

    fn collect_kinds(node: Node, out: &mut Vec<NodeKind>) {
        out.push(NodeKind::of(node));
        for child in named_children(node) {
            collect_kinds(child, out);
        }
    }

    #[test]
    fn test_find_child_by_kind() {
        with_first_function("package t\nfunc f() {}\n", |decl, _| {
            assert!(find_child_by_kind(decl, "identifier").is_some());
            assert!(find_child_by_kind(decl, "field_identifier").is_none());
        });
    }

    #[test]
    fn test_is_counted_ident() {
        let source = "package t\nfunc f() {\n\ta, _ := 1, 2\n\t_ = a\n}\n";
        with_first_function(source, |decl, src| {
            let mut counted = 0;
            let mut blank = 0;
            count_idents(decl, src, &mut counted, &mut blank);
            assert!(counted > 0);
            assert!(blank > 0);
        });
    }

    fn count_idents(node: Node, source: &str, counted: &mut usize, blank: &mut usize) {
        if node.kind() == "identifier" {
            if is_counted_ident(node, source) {
                *counted += 1;
            } else {
                *blank += 1;
            }
        }
        for child in named_children(node) {
            count_idents(child, source, counted, blank);
        }
    }
}
