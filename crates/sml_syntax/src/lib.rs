//! Syntax frontend for the sml shape language: scanner, parser, syntax tree, reduction, diagnostics.
//!
//! Source text describes set-algebra expressions (`-`, `&&`, `||`) over placed geometric objects such
//! as `rect 1 2 @ 3 4`. This crate turns that text into a [`ast::Tree`] and offers the tree's
//! structural `reduce` pass.
//!
//! ## Notes
//! - This crate is "syntax-only": operators are parsed and normalised, never evaluated into geometry.
//! - Vocabulary identity (keywords/operators) comes from `sml_core::lang` registries.
//! - Errors are fail-fast: the first scan or parse error aborts the call and no partial tree is
//!   returned.
//!
//! ## Examples
//! ```rust
//! use sml_syntax::parser;
//!
//! let tree = parser::parse("hello", "1 - 2").unwrap();
//! assert_eq!(tree.root.to_string(), "1 - 2");
//! assert_eq!(tree.reduce().unwrap().root.to_string(), "(1)(2)");
//! ```

pub mod ast;
pub mod cancel;
pub mod diagnostics;
pub mod documents;
pub mod lexer;
pub mod number;
pub mod parser;
pub mod token_helpers;
