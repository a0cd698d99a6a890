#![forbid(unsafe_code)]
//! sml: front end for a small shape language
//!
//! Source text describes set algebra over placed geometric objects:
//!
//! ```text
//! rect 10 8 @ 0 0 - rect 4 4 @ 3 2 || rect 1 6 @ 4.5 -6
//! ```
//!
//! This crate re-exports the scanner, parser, syntax tree and reduction pass from `sml_syntax`, the
//! vocabulary registries from `sml_core`, and provides the `sml` driver (`cli`).
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;

pub use sml_core::lang;
pub use sml_syntax::{ast, cancel, diagnostics, documents, lexer, number, parser};
