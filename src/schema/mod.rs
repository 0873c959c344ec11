//! Resolved schema tree consumed by the extraction engine.
//!
//! A compiled module is an immutable tree of [`Statement`]s. The engine
//! only ever borrows it: substatement lookup via [`Statement::find_one`] /
//! [`Statement::find_all`], structural traversal via
//! [`Statement::children`], and grouping resolution via [`GroupingIndex`].

mod grouping;
mod kind;
mod statement;

pub use grouping::GroupingIndex;
pub use kind::StmtKind;
pub use statement::{Module, Statement};
