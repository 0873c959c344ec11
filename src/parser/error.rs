//! Error types for module compilation.

use thiserror::Error;

/// Errors produced while lexing, parsing, or validating a module source.
///
/// Lines are 1-based and refer to the offending position in the input
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token that does not fit the statement grammar at this point.
    #[error("unexpected `{found}` at line {line}: expected {expected}")]
    UnexpectedToken {
        found: String,
        line: u32,
        expected: &'static str,
    },

    /// Input ended in the middle of a statement.
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: &'static str },

    /// A `{` block without its closing `}`.
    #[error("unterminated block opened at line {line}")]
    UnterminatedBlock { line: u32 },

    /// Input the lexer could not tokenize.
    #[error("unrecognized input at line {line}")]
    UnrecognizedInput { line: u32 },

    /// The top-level statement is not a `module` statement.
    #[error("not a module: top-level statement is `{keyword}`")]
    NotAModule { keyword: String },

    /// The `module` statement has no name argument.
    #[error("module statement has no name")]
    MissingModuleName,

    /// Content after the closing brace of the module statement.
    #[error("trailing input after module statement at line {line}")]
    TrailingInput { line: u32 },
}

impl ParseError {
    /// Create an unexpected-token error.
    pub fn unexpected(found: impl Into<String>, line: u32, expected: &'static str) -> Self {
        Self::UnexpectedToken {
            found: found.into(),
            line,
            expected,
        }
    }

    /// Create an unexpected-end-of-input error.
    pub fn eof(expected: &'static str) -> Self {
        Self::UnexpectedEof { expected }
    }
}
