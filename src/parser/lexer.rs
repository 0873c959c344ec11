//! Logos-based lexer for YANG statement syntax
//!
//! Fast tokenization using the logos crate. YANG statements are
//! `keyword argument? ( ";" | "{" … "}" )`; arguments are unquoted atoms
//! or quoted strings joined with `+`.

use logos::Logos;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Public token kind - maps from the logos-generated tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    LineComment,
    BlockComment,
    Semicolon,
    LBrace,
    RBrace,
    Plus,
    /// Double-quoted string, backslash escapes allowed
    DoubleString,
    /// Single-quoted string, no escapes
    SingleString,
    /// Unquoted atom: keyword or bare argument
    Atom,
    /// Unrecognized input
    Error,
}

impl TokenKind {
    /// Whitespace and comments carry no statement content
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment
        )
    }

    /// Both quoted string forms
    pub fn is_string(&self) -> bool {
        matches!(self, Self::DoubleString | Self::SingleString)
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    BlockComment,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token(";")]
    Semicolon,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("+")]
    Plus,

    // =========================================================================
    // STRINGS AND ATOMS
    // =========================================================================
    #[regex(r#""([^"\\]|\\.)*""#)]
    DoubleString,

    #[regex(r"'[^']*'")]
    SingleString,

    // An atom may not start with a quote, brace, `+`, or `/` (comment
    // ambiguity); quotes stay excluded from the body as well.
    #[regex(r#"[^ \t\r\n;{}"'/+][^ \t\r\n;{}"']*"#)]
    Atom,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => Self::Whitespace,
            LogosToken::LineComment => Self::LineComment,
            LogosToken::BlockComment => Self::BlockComment,
            LogosToken::Semicolon => Self::Semicolon,
            LogosToken::LBrace => Self::LBrace,
            LogosToken::RBrace => Self::RBrace,
            LogosToken::Plus => Self::Plus,
            LogosToken::DoubleString => Self::DoubleString,
            LogosToken::SingleString => Self::SingleString,
            LogosToken::Atom => Self::Atom,
        }
    }
}
