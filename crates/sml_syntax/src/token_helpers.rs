//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy to work
//! with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use sml_core::lang::keywords::KeywordId;
use sml_core::lang::operators::OperatorId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` for keyword kinds, the only kinds the keyword table produces.
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Keyword(_))
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return `true` for tokens that name an object: identifiers and keywords alike.
    pub fn is_name(&self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::Keyword(_))
    }

    /// Return `true` for number and complex-number literals.
    pub fn is_numeric(&self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Complex)
    }

    /// Return `true` if this token is insignificant to the grammar.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Space)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }
}
