//! Lexer for the UnicodeSet pattern grammar.
//!
//! Whitespace outside quotes and escapes is dropped here, so the parser
//! never sees it. Characters produced by quotes or escapes are marked
//! `literal` and carry no structural meaning.

use crate::error::Result;

mod escape;
mod state;

/// Token emitted by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the token in the pattern.
    pub offset: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// Token categories understood by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    /// `^` directly after an opening bracket.
    CaretInitial,
    Dash,
    Amp,
    Colon,
    /// `[:` / `[:^`.
    PosixOpen { negated: bool },
    /// `:]`.
    PosixClose,
    /// `\p{…}` / `\P{…}` with the raw body text.
    BackslashP { negated: bool, body: String },
    /// A member codepoint; `literal` marks quote- or escape-produced
    /// characters.
    Char { cp: u32, literal: bool },
}

/// Lex a pattern into a token stream.
pub fn lex(pattern: &str) -> Result<Vec<Token>> {
    state::run(pattern)
}
