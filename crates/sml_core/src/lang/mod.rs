//! sml language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`) and look up spellings/metadata via
//! const registry tables instead of comparing strings at every call site.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The scanner/parser enforce syntax; registries provide spellings and metadata for shared use
//!   (diagnostics, rendering, precedence).
//!
//! ## Examples
//! ```rust
//! use sml_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("rect"), Some(KeywordId::Rect));
//! assert_eq!(keywords::as_str(KeywordId::Rect), "rect");
//! ```

pub mod keywords;
pub mod operators;
