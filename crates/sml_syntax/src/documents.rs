//! Registry of parsed documents keyed by name.
//!
//! Each [`Documents::parse`] call runs its own scanner/parser pair; the registry only serializes
//! inserts. Callers sharing a registry across threads wrap it in a lock.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::ast::Tree;
use crate::diagnostics::CompileError;
use crate::parser::{self, ParseOptions};

/// Why a document could not be registered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocumentError {
    #[error("document `{0}` is already registered")]
    Duplicate(String),
    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Parsed documents, iterated in name order.
#[derive(Debug, Clone, Default)]
pub struct Documents {
    trees: BTreeMap<String, Tree>,
    options: ParseOptions,
}

impl Documents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry whose parses all use `options`.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            trees: BTreeMap::new(),
            options,
        }
    }

    /// Parse `text` and register the tree under `name`.
    ///
    /// ## Errors
    /// - [`DocumentError::Duplicate`] if `name` is taken; nothing is parsed.
    /// - [`DocumentError::Compile`] for the first scan or syntax error; nothing is registered.
    pub fn parse(&mut self, name: &str, text: &str) -> Result<&Tree, DocumentError> {
        if self.trees.contains_key(name) {
            return Err(DocumentError::Duplicate(name.to_string()));
        }
        let tree = parser::parse_with_options(name, text, &self.options)?;
        Ok(self.trees.entry(name.to_string()).or_insert(tree))
    }

    pub fn get(&self, name: &str) -> Option<&Tree> {
        self.trees.get(name)
    }

    /// Drop a document, returning its tree.
    pub fn remove(&mut self, name: &str) -> Option<Tree> {
        self.trees.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.trees.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tree)> {
        self.trees.iter().map(|(name, tree)| (name.as_str(), tree))
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ErrorKind;

    #[test]
    fn registers_documents_by_name() {
        let mut docs = Documents::new();
        assert!(docs.is_empty());

        let tree = docs.parse("hello", "rect 1 @ 2").unwrap();
        assert_eq!(tree.name, "hello");
        docs.parse("another", "1 - 2").unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs.names().collect::<Vec<_>>(), vec!["another", "hello"]);
        assert_eq!(docs.get("another").unwrap().root.to_string(), "1 - 2");
        assert!(docs.get("missing").is_none());
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut docs = Documents::new();
        docs.parse("hello", "1").unwrap();
        let err = docs.parse("hello", "2").unwrap_err();
        assert_eq!(err, DocumentError::Duplicate("hello".to_string()));
        assert_eq!(err.to_string(), "document `hello` is already registered");
        assert_eq!(docs.get("hello").unwrap().root.to_string(), "1");
    }

    #[test]
    fn failed_parse_registers_nothing() {
        let mut docs = Documents::new();
        let err = docs.parse("broken", "(1 - 2").unwrap_err();
        let DocumentError::Compile(err) = err else {
            panic!("expected compile error");
        };
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.document.as_deref(), Some("broken"));
        assert!(docs.is_empty());

        // The name stays free after a failure.
        docs.parse("broken", "1 - 2").unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn remove_frees_the_name() {
        let mut docs = Documents::with_options(ParseOptions::new().with_threaded_scanner(true));
        docs.parse("a", "1").unwrap();
        assert!(docs.remove("a").is_some());
        docs.parse("a", "2").unwrap();
        assert_eq!(docs.iter().map(|(n, t)| format!("{n}={}", t.root)).collect::<Vec<_>>(), vec!["a=2"]);
    }
}
