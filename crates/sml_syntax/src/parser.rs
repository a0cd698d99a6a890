//! Parser for the sml shape language
//!
//! Consumes the scanner's token stream and builds a [`Tree`] by recursive descent:
//!
//! ```text
//! expression := term ( "||" term )*
//! term       := factor ( ( "&&" | "-" ) factor )*
//! factor     := NUMBER | object | "(" expression ")"
//! object     := IDENT param* ( "@" param* )?
//! param      := NUMBER | IDENT | "(" expression ")"
//! ```
//!
//! Operators fold left; `Space` tokens separate grammatic units and are otherwise ignored. Keywords
//! such as `rect` parse exactly like identifiers. Trees deeper than [`MAX_NESTING_DEPTH`] are
//! rejected.
//!
//! ## Examples
//!
//! ```rust
//! use sml_syntax::ast::NodeType;
//! use sml_syntax::parser;
//!
//! let tree = parser::parse("hello", "rect 1 2 @ 3 4 || rect 5").unwrap();
//! assert_eq!(tree.root.node_type(), NodeType::Union);
//! ```

use crate::ast::*;
use crate::cancel::CancelToken;
use crate::diagnostics::CompileError;
use crate::lexer::{self, Scanner, Token, TokenKind};
use sml_core::lang::operators::{self, Associativity, OperatorId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while keeping
// each file focused.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
