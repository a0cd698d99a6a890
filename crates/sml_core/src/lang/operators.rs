//! Operator vocabulary.
//!
//! This module defines the set-algebra operators along with their spelling, precedence and
//! associativity.
//!
//! ## Notes
//! - Higher precedence binds tighter. `&&` and `-` share a level; `||` binds loosest.
//! - `@` is listed here for its spelling only: it introduces an object's location params and is not
//!   an infix operator over expressions.
//!
//! ## Examples
//! ```rust
//! use sml_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("&&"), Some(OperatorId::Intersection));
//! assert!(operators::info_for(OperatorId::Intersection).precedence > operators::info_for(OperatorId::Union).precedence);
//! ```

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    None,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    /// `-`: set difference.
    Diff,
    /// `&&`: set intersection.
    Intersection,
    /// `||`: set union.
    Union,
    /// `@`: location clause of an object.
    Location,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    /// Binding strength; `0` for operators that never appear infix between expressions.
    pub precedence: u8,
    pub associativity: Associativity,
}

const fn op(id: OperatorId, spelling: &'static str, precedence: u8, associativity: Associativity) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        associativity,
    }
}

/// Registry of every operator.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Diff, "-", 20, Associativity::Left),
    op(OperatorId::Intersection, "&&", 20, Associativity::Left),
    op(OperatorId::Union, "||", 10, Associativity::Left),
    op(OperatorId::Location, "@", 0, Associativity::None),
];

/// Return the metadata for an operator.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    match OPERATORS.iter().find(|o| o.id == id) {
        Some(info) => info,
        None => unreachable!("operator info missing for {id:?}"),
    }
}

/// Return the spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}
