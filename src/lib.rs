//! # yangdoc-base
//!
//! Core library for extracting human-readable documentation from YANG
//! data-model modules: per-node records, RPC records, and notification
//! records, accumulated across a directory of module files.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project  → directory driver, catalog serialization
//!   ↓
//! extract  → descriptor builder, node walker, structure renderer,
//!            RPC/notification extractors, Record assembly
//!   ↓
//! parser   → Logos lexer, recursive-descent statement parser
//!   ↓
//! schema   → statement tree, keyword kinds, module handle,
//!            grouping index
//! ```

/// Schema tree: statements, keyword kinds, module handle, grouping index
pub mod schema;

/// Parser: Logos lexer, recursive-descent statement parser
pub mod parser;

/// Extraction engine: descriptors, walkers, renderers, Records
pub mod extract;

/// Driver: directory processing and catalog serialization
pub mod project;

// Re-export commonly needed items
pub use extract::{CatalogSet, Record};
pub use parser::{ParseError, parse_module};
pub use project::{DriverError, OutputPaths, process_directory, run, write_catalogs};
pub use schema::{GroupingIndex, Module, Statement, StmtKind};
