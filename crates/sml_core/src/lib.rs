//! Canonical language vocabulary for the sml shape language.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that the scanner,
//! parser and tooling share so that spellings and precedence live in exactly one place.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global mutable state, and no syntax-tree types.

pub mod lang;
