//! Grouping resolution for `uses` references.

use indexmap::IndexMap;

use super::kind::StmtKind;
use super::statement::Statement;

/// Index of every `grouping` definition in a module, keyed by name.
///
/// Collected recursively so groupings nested inside containers, RPCs, or
/// other groupings are found too. On duplicate names the first definition
/// in document order wins. Resolution is by local name only: a prefixed
/// reference (`prefix:name`) targets an imported module this tool has not
/// loaded and resolves to nothing.
#[derive(Debug, Default)]
pub struct GroupingIndex<'a> {
    by_name: IndexMap<&'a str, &'a Statement>,
}

impl<'a> GroupingIndex<'a> {
    /// Collect all grouping definitions reachable from `root`.
    pub fn collect(root: &'a Statement) -> Self {
        let mut index = Self::default();
        index.collect_into(root);
        index
    }

    fn collect_into(&mut self, stmt: &'a Statement) {
        for sub in &stmt.substmts {
            if sub.kind == StmtKind::Grouping && !sub.name().is_empty() {
                self.by_name.entry(sub.name()).or_insert(sub);
            }
            self.collect_into(sub);
        }
    }

    /// Resolve a `uses` argument to its grouping definition.
    pub fn resolve(&self, reference: &str) -> Option<&'a Statement> {
        if reference.contains(':') {
            return None;
        }
        self.by_name.get(reference).copied()
    }

    /// Number of groupings indexed.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the module defines no groupings.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
