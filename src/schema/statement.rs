//! Statement tree and the validated module handle.

use smol_str::SmolStr;

use super::kind::StmtKind;

/// One statement in a compiled module: `keyword [argument] { substmts }`.
///
/// The tree is built once by the parser and never mutated afterwards; the
/// extraction engine holds shared references into it for the duration of a
/// traversal pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Raw keyword text, including any extension prefix.
    pub keyword: SmolStr,
    /// Kind derived from the keyword.
    pub kind: StmtKind,
    /// The statement's argument, if it has one.
    pub arg: Option<String>,
    /// Substatements in document order.
    pub substmts: Vec<Statement>,
}

impl Statement {
    /// Create a statement, deriving its kind from the keyword.
    pub fn new(keyword: impl Into<SmolStr>, arg: Option<String>) -> Self {
        let keyword = keyword.into();
        let kind = StmtKind::from_keyword(&keyword);
        Self {
            keyword,
            kind,
            arg,
            substmts: Vec::new(),
        }
    }

    /// The statement's identifier: its argument, or `""` when absent.
    pub fn name(&self) -> &str {
        self.arg.as_deref().unwrap_or("")
    }

    /// First substatement of the given kind, in document order.
    pub fn find_one(&self, kind: StmtKind) -> Option<&Statement> {
        self.substmts.iter().find(|s| s.kind == kind)
    }

    /// All substatements of the given kind, in document order.
    pub fn find_all(&self, kind: StmtKind) -> impl Iterator<Item = &Statement> {
        self.substmts.iter().filter(move |s| s.kind == kind)
    }

    /// Argument of the first substatement of the given kind, if any.
    pub fn arg_of(&self, kind: StmtKind) -> Option<&str> {
        self.find_one(kind).and_then(|s| s.arg.as_deref())
    }

    /// The structural child view: substatements the engine traverses.
    ///
    /// Property statements (description, type, …) and grouping/typedef
    /// definitions are excluded; see [`StmtKind::is_structural`].
    pub fn children(&self) -> impl Iterator<Item = &Statement> {
        self.substmts.iter().filter(|s| s.kind.is_structural())
    }
}

/// A validated module handle: the root `module` statement plus its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Declared module name (the `module` statement's argument).
    pub name: String,
    /// The root statement of the module.
    pub source: Statement,
}

impl Module {
    /// Wrap a root statement, checking that it is a named `module`.
    ///
    /// Returns `None` for anything else (submodules are not processed
    /// standalone).
    pub fn from_statement(source: Statement) -> Option<Self> {
        if source.kind != StmtKind::Module {
            return None;
        }
        let name = source.arg.clone().filter(|n| !n.is_empty())?;
        Some(Self { name, source })
    }
}
