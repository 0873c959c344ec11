//! Structure renderer: nested field listings for RPC input/output blocks
//! and notification bodies.

use rustc_hash::FxHashSet;

use crate::schema::{GroupingIndex, Statement, StmtKind};

/// Render the nested field structure of a compound subtree.
///
/// One line per renderable child, recursing into container/list/leaf-list
/// children at two extra spaces of indentation and transparently inlining
/// resolved `uses` grouping references. Children of other kinds, and
/// `uses` references that do not resolve, contribute nothing.
///
/// YANG forbids cyclic groupings, but a malformed tree could still
/// present one; the expansion chain is tracked and a re-entered grouping
/// stops at its `uses … (expands to:)` header with a logged warning.
pub fn render_structure<'a>(
    stmt: &'a Statement,
    indent: &str,
    groupings: &GroupingIndex<'a>,
) -> Vec<String> {
    let mut chain = FxHashSet::default();
    render(stmt, indent, groupings, &mut chain)
}

fn render<'a>(
    stmt: &'a Statement,
    indent: &str,
    groupings: &GroupingIndex<'a>,
    chain: &mut FxHashSet<&'a str>,
) -> Vec<String> {
    let mut lines = Vec::new();

    // Alternate path: when the enclosing statement is itself a
    // `type enumeration`, its enum substatements are listed with their
    // own declared type (normally absent) instead of the structural
    // rules below.
    if stmt.kind == StmtKind::Type && stmt.arg.as_deref() == Some("enumeration") {
        for child in stmt.find_all(StmtKind::Enum) {
            let own_type = child.arg_of(StmtKind::Type).unwrap_or("");
            let mut line = format!("{indent}- {} (type: {own_type})", child.name());
            if let Some(description) = non_empty(child.arg_of(StmtKind::Description)) {
                line.push_str(&format!(" — {description}"));
            }
            lines.push(line);
        }
        return lines;
    }

    let deeper = format!("{indent}  ");

    for child in stmt.children() {
        match child.kind {
            StmtKind::Leaf => lines.push(leaf_line(child, indent)),
            StmtKind::Container => {
                let description = child.arg_of(StmtKind::Description).unwrap_or("");
                lines.push(format!("{indent}- container {}: {description}", child.name()));
                lines.extend(render(child, &deeper, groupings, chain));
            }
            StmtKind::List => {
                lines.push(keyed_line(child, "list", indent));
                lines.extend(render(child, &deeper, groupings, chain));
            }
            StmtKind::LeafList => {
                lines.push(keyed_line(child, "leaf-list", indent));
                lines.extend(render(child, &deeper, groupings, chain));
            }
            StmtKind::Uses => {
                let reference = child.name();
                let Some(grouping) = groupings.resolve(reference) else {
                    continue;
                };
                lines.push(format!("{indent}- uses {reference} (expands to:)"));
                if chain.contains(reference) {
                    tracing::warn!(
                        grouping = reference,
                        "grouping expansion cycle; stopping at re-entry"
                    );
                } else {
                    chain.insert(reference);
                    lines.extend(render(grouping, &deeper, groupings, chain));
                    chain.remove(reference);
                }
            }
            _ => {}
        }
    }

    lines
}

/// `- <name> (type: <type>[, range:<range>])[ — <description>]`
fn leaf_line(leaf: &Statement, indent: &str) -> String {
    let type_stmt = leaf.find_one(StmtKind::Type);
    let leaf_type = type_stmt.and_then(|t| t.arg.as_deref()).unwrap_or("");
    let range = type_stmt.and_then(|t| t.arg_of(StmtKind::Range));

    let mut line = format!("{indent}- {} (type: {leaf_type}", leaf.name());
    match non_empty(range) {
        Some(range) => line.push_str(&format!(", range:{range})")),
        None => line.push(')'),
    }
    if let Some(description) = non_empty(leaf.arg_of(StmtKind::Description)) {
        line.push_str(&format!(" — {description}"));
    }
    line
}

/// `- <kw> <name> (key: <key>) — <description>`, key clause only when a
/// non-empty `key` substatement exists.
fn keyed_line(node: &Statement, keyword: &str, indent: &str) -> String {
    let description = node.arg_of(StmtKind::Description).unwrap_or("");
    match non_empty(node.arg_of(StmtKind::Key)) {
        Some(key) => format!(
            "{indent}- {keyword} {} (key: {key}) — {description}",
            node.name()
        ),
        None => format!("{indent}- {keyword} {} — {description}", node.name()),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
