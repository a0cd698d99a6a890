//! Token types for the sml scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for `-`, `&&`, `||` and `@`
//!
//! ## Notes
//! - Keyword kinds sit past every other kind: [`TokenKind::is_keyword`] is the "above the keyword
//!   marker" test, and only the keyword table produces them.
//! - Every token keeps its literal source text. For `Error` tokens the text is the message instead.

use std::fmt;

use crate::ast::Pos;
use sml_core::lang::keywords::{self, KeywordId};
use sml_core::lang::operators::OperatorId;

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Scan failure; the token text is the message.
    Error,
    /// `true` or `false`.
    Bool,
    /// `1+2i`; a lone imaginary like `2i` is a plain `Number`.
    Complex,
    Eof,
    Ident,
    LeftParen,
    /// Simple number, including imaginary.
    Number,
    RightParen,
    /// Run of whitespace separating arguments.
    Space,
    /// Quoted string, quotes included.
    String,
    Operator(OperatorId),
    Keyword(KeywordId),
}

/// A scanned token: its kind, the byte offset where it starts and its literal text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Pos,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Pos, text: impl Into<String>) -> Self {
        Self {
            kind,
            pos,
            text: text.into(),
        }
    }

    /// Byte offset just past the token's literal span.
    pub fn end(&self) -> usize {
        match self.kind {
            TokenKind::Error => self.pos.offset(),
            _ => self.pos.offset() + self.text.len(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Error => f.write_str(&self.text),
            TokenKind::Keyword(_) => write!(f, "<{}>", self.text),
            _ if self.text.chars().count() > 10 => {
                let head: String = self.text.chars().take(10).collect();
                write!(f, "{head:?}...")
            }
            _ => write!(f, "{:?}", self.text),
        }
    }
}

/// Look up a spelling in the reserved-word registry.
pub fn keyword_id(spelling: &str) -> Option<KeywordId> {
    keywords::from_str(spelling)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_diagnostic_conventions() {
        assert_eq!(Token::new(TokenKind::Eof, Pos(3), "").to_string(), "EOF");
        assert_eq!(
            Token::new(TokenKind::Error, Pos(0), "unclosed comment").to_string(),
            "unclosed comment"
        );
        assert_eq!(
            Token::new(TokenKind::Keyword(KeywordId::Rect), Pos(0), "rect").to_string(),
            "<rect>"
        );
        assert_eq!(Token::new(TokenKind::Number, Pos(0), "42").to_string(), "\"42\"");
        assert_eq!(
            Token::new(TokenKind::Ident, Pos(0), "a_very_long_name").to_string(),
            "\"a_very_lon\"..."
        );
    }

    #[test]
    fn end_covers_the_literal() {
        assert_eq!(Token::new(TokenKind::Operator(OperatorId::Union), Pos(4), "||").end(), 6);
        assert_eq!(Token::new(TokenKind::Error, Pos(4), "bad number syntax: \"+\"").end(), 4);
    }
}
