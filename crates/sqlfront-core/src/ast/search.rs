//! Search clauses shared by WHERE, HAVING, ON, CHECK and sub-selects.

use serde::Serialize;

use super::Operand;

/// A predicate tree.
///
/// Comparisons are `Binary` nodes whose arguments are `Leaf` operands.
/// `AND`/`OR` chains are left-associative: each further connective wraps
/// the clause built so far as the new `arg_1`. A parenthesized clause with
/// nothing after it is a `Binary` with only `arg_1` set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchClause {
    /// A `{value, type}` argument.
    Leaf(Operand),
    /// `arg_1 op arg_2`, optionally negated.
    Binary {
        /// Left argument.
        arg_1: Box<SearchClause>,
        /// Lowercased operator (`=`, `like`, `in`, `and`, ...).
        #[serde(skip_serializing_if = "Option::is_none")]
        op: Option<String>,
        /// Right argument.
        #[serde(skip_serializing_if = "Option::is_none")]
        arg_2: Option<Box<SearchClause>>,
        /// Set by a leading `NOT`, `IS NOT`, `NOT IN` and similar.
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        neg: bool,
    },
}

impl SearchClause {
    /// Builds `left op right`.
    #[must_use]
    pub fn binary(left: Self, op: impl Into<String>, right: Self) -> Self {
        Self::Binary {
            arg_1: Box::new(left),
            op: Some(op.into()),
            arg_2: Some(Box::new(right)),
            neg: false,
        }
    }

    /// Builds a comparison between two operands.
    #[must_use]
    pub fn compare(left: Operand, op: impl Into<String>, right: Operand) -> Self {
        Self::binary(Self::Leaf(left), op, Self::Leaf(right))
    }

    /// Wraps a clause that stood alone in parentheses.
    #[must_use]
    pub fn group(inner: Self) -> Self {
        Self::Binary {
            arg_1: Box::new(Self::Leaf(Operand::Subclause(Box::new(inner)))),
            op: None,
            arg_2: None,
            neg: false,
        }
    }

    /// Returns the operator of a binary clause.
    #[must_use]
    pub fn op(&self) -> Option<&str> {
        match self {
            Self::Binary { op, .. } => op.as_deref(),
            Self::Leaf(_) => None,
        }
    }

    /// Returns the left argument of a binary clause.
    #[must_use]
    pub fn arg_1(&self) -> Option<&Self> {
        match self {
            Self::Binary { arg_1, .. } => Some(arg_1),
            Self::Leaf(_) => None,
        }
    }

    /// Returns the right argument of a binary clause.
    #[must_use]
    pub fn arg_2(&self) -> Option<&Self> {
        match self {
            Self::Binary { arg_2, .. } => arg_2.as_deref(),
            Self::Leaf(_) => None,
        }
    }

    /// Returns the operand of a leaf.
    #[must_use]
    pub const fn as_operand(&self) -> Option<&Operand> {
        match self {
            Self::Leaf(operand) => Some(operand),
            Self::Binary { .. } => None,
        }
    }

    /// Returns true if the clause is negated.
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        matches!(self, Self::Binary { neg: true, .. })
    }

    pub(crate) fn set_negated(&mut self, value: bool) {
        if let Self::Binary { neg, .. } = self {
            *neg = value;
        }
    }
}
