//! Define the reserved keyword vocabulary for the sml language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`])
//! plus a const metadata table ([`KEYWORDS`]).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Keywords name geometric primitives. At the grammar level they behave like identifiers; their
//!   meaning belongs to evaluation.
//!
//! ## Examples
//! ```rust
//! use sml_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("rect"), Some(KeywordId::Rect));
//! assert_eq!(keywords::from_str("Rect"), None);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    /// `rect`: an axis-aligned rectangle primitive.
    Rect,
}

/// Metadata for a reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub description: &'static str,
}

/// Registry of every reserved keyword.
pub const KEYWORDS: &[KeywordInfo] = &[KeywordInfo {
    id: KeywordId::Rect,
    canonical: "rect",
    description: "rectangle primitive, sized by its params and placed by its `@` params",
}];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the registry entry for a keyword.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    match KEYWORDS.iter().find(|k| k.id == id) {
        Some(info) => info,
        // Every variant has a row; the registry test below enforces it.
        None => unreachable!("keyword info missing for {id:?}"),
    }
}

/// Resolve a spelling to its keyword, if it is reserved.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_round_trips_through_its_spelling() {
        for k in KEYWORDS {
            assert_eq!(from_str(k.canonical), Some(k.id));
            assert_eq!(as_str(k.id), k.canonical);
        }
    }

    #[test]
    fn spellings_are_unique() {
        for (i, a) in KEYWORDS.iter().enumerate() {
            for b in &KEYWORDS[i + 1..] {
                assert_ne!(a.canonical, b.canonical);
            }
        }
    }

    #[test]
    fn non_keywords_do_not_resolve() {
        assert_eq!(from_str("true"), None);
        assert_eq!(from_str("circle"), None);
        assert_eq!(from_str(""), None);
    }
}
