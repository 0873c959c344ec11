//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use yangdoc::{Module, Statement, StmtKind, parse_module};

/// Compile a fixture module, panicking with the parse error on failure.
pub fn module(text: &str) -> Module {
    parse_module(text).unwrap_or_else(|e| panic!("fixture module failed to compile: {e}"))
}

/// First descendant of the given kind, depth-first.
pub fn find_descendant(stmt: &Statement, kind: StmtKind) -> Option<&Statement> {
    for sub in &stmt.substmts {
        if sub.kind == kind {
            return Some(sub);
        }
        if let Some(found) = find_descendant(sub, kind) {
            return Some(found);
        }
    }
    None
}
