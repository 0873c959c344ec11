//! Recursive-descent parser for the YANG statement syntax.
//!
//! Grammar:
//!
//! ```text
//! statement := keyword argument? ( ";" | "{" statement* "}" )
//! argument  := atom | string ( "+" string )*
//! ```
//!
//! Adjacent `+`-joined strings concatenate. Double-quoted strings process
//! `\n`, `\t`, `\"`, and `\\` escapes; single-quoted strings are taken
//! verbatim.

use text_size::TextSize;

use crate::schema::{Module, Statement, StmtKind};

use super::error::ParseError;
use super::lexer::{Token, TokenKind, tokenize};

/// Compile module text into a validated [`Module`].
///
/// Parses exactly one top-level statement, requires it to be a `module`
/// statement with a non-empty name, and rejects trailing input.
pub fn parse_module(text: &str) -> Result<Module, ParseError> {
    let mut parser = Parser::new(text);
    let root = parser.parse_statement()?;

    if let Some(tok) = parser.peek() {
        return Err(ParseError::TrailingInput {
            line: parser.line_of(tok.offset),
        });
    }
    if root.kind != StmtKind::Module {
        return Err(ParseError::NotAModule {
            keyword: root.keyword.to_string(),
        });
    }
    Module::from_statement(root).ok_or(ParseError::MissingModuleName)
}

/// Cursor over the non-trivia token stream.
struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        let tokens = tokenize(source)
            .into_iter()
            .filter(|t| !t.kind.is_trivia())
            .collect();
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Token<'a>> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    /// 1-based line of a byte offset.
    fn line_of(&self, offset: TextSize) -> u32 {
        let end = usize::from(offset).min(self.source.len());
        self.source[..end].bytes().filter(|b| *b == b'\n').count() as u32 + 1
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let keyword_tok = self
            .bump()
            .ok_or_else(|| ParseError::eof("a statement keyword"))?;
        if keyword_tok.kind != TokenKind::Atom {
            return Err(self.unexpected(&keyword_tok, "a statement keyword"));
        }

        let arg = self.parse_argument()?;
        let mut stmt = Statement::new(keyword_tok.text, arg);

        let terminator = self
            .bump()
            .ok_or_else(|| ParseError::eof("`;` or `{`"))?;
        match terminator.kind {
            TokenKind::Semicolon => Ok(stmt),
            TokenKind::LBrace => {
                loop {
                    match self.peek() {
                        None => {
                            return Err(ParseError::UnterminatedBlock {
                                line: self.line_of(terminator.offset),
                            });
                        }
                        Some(tok) if tok.kind == TokenKind::RBrace => {
                            self.bump();
                            break;
                        }
                        Some(_) => stmt.substmts.push(self.parse_statement()?),
                    }
                }
                Ok(stmt)
            }
            _ => Err(self.unexpected(&terminator, "`;` or `{`")),
        }
    }

    /// Optional statement argument: a bare atom or a `+`-joined string
    /// sequence. `;` and `{` mean the statement has no argument.
    fn parse_argument(&mut self) -> Result<Option<String>, ParseError> {
        let tok = match self.peek() {
            Some(tok) => tok.clone(),
            None => return Err(ParseError::eof("an argument, `;`, or `{`")),
        };
        match tok.kind {
            TokenKind::Semicolon | TokenKind::LBrace => Ok(None),
            TokenKind::Atom => {
                self.bump();
                Ok(Some(tok.text.to_string()))
            }
            kind if kind.is_string() => {
                self.bump();
                let mut arg = unquote(&tok);
                while matches!(self.peek(), Some(t) if t.kind == TokenKind::Plus) {
                    self.bump();
                    let next = self
                        .bump()
                        .ok_or_else(|| ParseError::eof("a string after `+`"))?;
                    if !next.kind.is_string() {
                        return Err(self.unexpected(&next, "a string after `+`"));
                    }
                    arg.push_str(&unquote(&next));
                }
                Ok(Some(arg))
            }
            _ => Err(self.unexpected(&tok, "an argument, `;`, or `{`")),
        }
    }

    fn unexpected(&self, tok: &Token<'a>, expected: &'static str) -> ParseError {
        let line = self.line_of(tok.offset);
        if tok.kind == TokenKind::Error {
            ParseError::UnrecognizedInput { line }
        } else {
            ParseError::unexpected(tok.text, line, expected)
        }
    }
}

/// Strip quotes and, for double-quoted strings, process escapes.
fn unquote(tok: &Token<'_>) -> String {
    let inner = &tok.text[1..tok.text.len() - 1];
    if tok.kind == TokenKind::SingleString {
        return inner.to_string();
    }
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
