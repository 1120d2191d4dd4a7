//! Metric calculators for Go function declarations
//!
//! Global invariants enforced:
//! - Each calculator is a pure function of its subtree plus the source text
//! - Deterministic traversal order
//! - One declaration in, one value out; no calculator can fail

use crate::syntax::{self, NodeKind};
use tree_sitter::Node;

/// Count the named, non-blank formal parameters of a declaration.
///
/// Grouped parameters (`a, b int`) count once per name; a type-only group
/// (`func f(int, string)`) contributes nothing; a variadic parameter counts
/// like any other named parameter. Method receivers are not parameters.
pub fn parameter_count(decl: Node, source: &str) -> usize {
    let Some(params) = decl.child_by_field_name("parameters") else {
        return 0;
    };

    let mut count = 0;
    for group in syntax::named_children(params) {
        let mut cursor = group.walk();
        count += group
            .children_by_field_name("name", &mut cursor)
            .filter(|name| syntax::node_text(*name, source) != "_")
            .count();
    }
    count
}

/// Inclusive line span of a body block, opening `{` to closing `}`.
/// Delimiters on the same line yield 1.
pub fn function_length(body: Node) -> usize {
    body.end_position().row - body.start_position().row + 1
}

/// Maximum indentation depth reached inside a body, as canonically
/// formatted code would indent it.
///
/// Raw tree depth over-counts constructs gofmt does not indent further:
/// `switch`/`select`/type-switch keep their header, tag, and clause list on
/// the switch keyword's level, while each case body indents one past it.
/// Statement blocks indent their contents by one; everything else is
/// transparent. The top-level body is itself a block, so a body with only
/// straight-line statements yields 1.
pub fn nesting_depth(body: Node) -> usize {
    let mut max = 0;
    walk_depth(body, 0, &mut max);
    max
}

fn walk_depth(node: Node, level: usize, max: &mut usize) {
    match NodeKind::of(node) {
        NodeKind::Block | NodeKind::Case | NodeKind::DefaultCase => {
            // Case clauses hold their match expressions and body statements
            // directly; both sit one level past the clause keyword, same as
            // the contents of a block.
            let inner = level + 1;
            *max = (*max).max(inner);
            for child in syntax::named_children(node) {
                walk_depth(child, inner, max);
            }
        }
        NodeKind::SwitchLike => {
            // tree-sitter-go hangs the clauses directly off the switch node
            // with no inner block, so walking them at the unchanged level
            // keeps the construct depth-neutral.
            for child in syntax::named_children(node) {
                walk_depth(child, level, max);
            }
        }
        NodeKind::If
        | NodeKind::For
        | NodeKind::VarSpec
        | NodeKind::ShortVarDecl
        | NodeKind::Assign
        | NodeKind::IncDec
        | NodeKind::Call
        | NodeKind::Goto
        | NodeKind::Other => {
            for child in syntax::named_children(node) {
                walk_depth(child, level, max);
            }
        }
    }
}

/// Assignment, branch, and condition tallies for one declaration
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AbcCounts {
    pub assignment: usize,
    pub branch: usize,
    pub condition: usize,
}

impl AbcCounts {
    /// `sqrt(a² + b² + c²)`, rounded half away from zero to two decimals.
    /// `f64::round` rounds halves away from zero, same as Go's `math.Round`.
    pub fn size(&self) -> f64 {
        let a = self.assignment as f64;
        let b = self.branch as f64;
        let c = self.condition as f64;
        let k = (a * a + b * b + c * c).sqrt();
        (k * 100.0).round() / 100.0
    }
}

/// Tally assignment/branch/condition events over one declaration subtree.
///
/// Counting rules:
/// - Assignment: a `var` spec with an initializer, once per non-blank name;
///   a `:=` declaration or assignment statement, once per plain non-blank
///   identifier target; `++`/`--`, once. Constants never count.
/// - Branch: every call expression; `goto`. Other jumps (break, continue,
///   return, fallthrough) do not count.
/// - Condition: `if`, plus one more when its `else` is a block rather than
///   an `else if` link; a `for` with an explicit continuation condition
///   (bare `for` and `for range` do not count); each non-default
///   case/comm clause.
pub fn abc_counts(decl: Node, source: &str) -> AbcCounts {
    let mut counts = AbcCounts::default();
    tally_abc(decl, source, &mut counts);
    counts
}

/// ABC size of a declaration; see [`AbcCounts::size`] for the reduction.
pub fn abc_size(decl: Node, source: &str) -> f64 {
    abc_counts(decl, source).size()
}

fn tally_abc(node: Node, source: &str, counts: &mut AbcCounts) {
    match NodeKind::of(node) {
        NodeKind::VarSpec => {
            if node.child_by_field_name("value").is_some() {
                let mut cursor = node.walk();
                counts.assignment += node
                    .children_by_field_name("name", &mut cursor)
                    .filter(|name| syntax::node_text(*name, source) != "_")
                    .count();
            }
        }
        NodeKind::ShortVarDecl | NodeKind::Assign => {
            // Only plain identifier targets count; assignments to indexed
            // or field targets do not.
            if let Some(left) = node.child_by_field_name("left") {
                counts.assignment += syntax::named_children(left)
                    .into_iter()
                    .filter(|target| syntax::is_counted_ident(*target, source))
                    .count();
            }
        }
        NodeKind::IncDec => counts.assignment += 1,
        NodeKind::Call | NodeKind::Goto => counts.branch += 1,
        NodeKind::If => {
            counts.condition += 1;
            // A block `else` is credited here; an `else if` link is the
            // nested if's own condition and is counted when it is visited.
            if node
                .child_by_field_name("alternative")
                .is_some_and(|alt| alt.kind() == "block")
            {
                counts.condition += 1;
            }
        }
        NodeKind::For => {
            if has_loop_condition(node) {
                counts.condition += 1;
            }
        }
        NodeKind::Case => counts.condition += 1,
        NodeKind::DefaultCase | NodeKind::Block | NodeKind::SwitchLike | NodeKind::Other => {}
    }

    for child in syntax::named_children(node) {
        tally_abc(child, source, counts);
    }
}

/// True when a `for` carries an explicit continuation condition: either the
/// while-style `for cond {}` or a three-clause header with a middle clause.
fn has_loop_condition(node: Node) -> bool {
    for child in syntax::named_children(node) {
        match child.kind() {
            "for_clause" => return child.child_by_field_name("condition").is_some(),
            "range_clause" | "block" => {}
            // bare condition expression between `for` and the body
            _ => return true,
        }
    }
    false
}
