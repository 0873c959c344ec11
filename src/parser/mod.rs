//! Parser: Logos lexer and recursive-descent statement parser.
//!
//! This is the module compiler facade: it turns raw YANG module text into
//! a [`crate::schema::Module`] statement tree, or a [`ParseError`]. It
//! parses the generic `keyword argument? ( ";" | "{" … "}" )` statement
//! syntax and checks only that the root is a named `module`; per-keyword
//! grammar rules are not validated.

mod error;
mod lexer;
#[allow(clippy::module_inception)]
mod parser;

pub use error::ParseError;
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use parser::parse_module;
