//! Column definitions for CREATE TABLE.

use core::fmt;

use serde::Serialize;

use super::{FunctionCall, Operand, SearchClause};

/// One column of a CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDef {
    /// Column name.
    pub name: String,
    /// Canonical type name (`int`, `varchar`, `float`, ...).
    #[serde(rename = "type")]
    pub field_type: String,
    /// Length or precision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    /// Scale of a `numeric(p, s)` column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<i64>,
    /// Allowed values of a `set` or `enum` column.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domain: Vec<Operand>,
    /// Column options, in source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
}

impl FieldDef {
    /// Creates a field with no parameters or options.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            length: None,
            decimals: None,
            domain: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Returns true if any option is of the given kind name.
    #[must_use]
    pub fn has_constraint(&self, kind: &str) -> bool {
        self.constraints.iter().any(|c| c.kind.name() == kind)
    }
}

/// A column option, optionally named with `CONSTRAINT name`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constraint {
    /// Name given by a preceding `CONSTRAINT name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// What the option says.
    #[serde(flatten)]
    pub kind: ConstraintKind,
}

/// Column option kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConstraintKind {
    /// `DEFAULT value`.
    DefaultValue {
        /// The default.
        value: Operand,
    },
    /// `DEFAULT function(...)`.
    DefaultFunction {
        /// The call.
        function: FunctionCall,
    },
    /// `PRIMARY KEY`.
    PrimaryKey,
    /// `NOT NULL`.
    NotNull,
    /// `CHECK ( clause )`.
    Check {
        /// The condition.
        clause: SearchClause,
    },
    /// `UNIQUE ( cols )`.
    Unique {
        /// Columns.
        columns: Vec<String>,
    },
    /// Interval qualifier such as `YEAR TO MONTH`.
    Interval(IntervalQualifier),
}

impl ConstraintKind {
    /// The `type` tag used in serialized trees.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DefaultValue { .. } => "default_value",
            Self::DefaultFunction { .. } => "default_function",
            Self::PrimaryKey => "primary_key",
            Self::NotNull => "not_null",
            Self::Check { .. } => "check",
            Self::Unique { .. } => "unique",
            Self::Interval(_) => "interval",
        }
    }
}

/// `quantum [TO quantum]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntervalQualifier {
    /// Leading field.
    pub quantum_1: IntervalUnit,
    /// Trailing field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum_2: Option<IntervalUnit>,
}

/// Interval fields.
///
/// Year-month and day-time intervals are separate classes; `TO` may only
/// narrow within a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalUnit {
    /// YEAR.
    Year,
    /// MONTH.
    Month,
    /// DAY.
    Day,
    /// HOUR.
    Hour,
    /// MINUTE.
    Minute,
    /// SECOND.
    Second,
}

impl IntervalUnit {
    /// Parses a lowercase unit word.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        Some(match word {
            "year" => Self::Year,
            "month" => Self::Month,
            "day" => Self::Day,
            "hour" => Self::Hour,
            "minute" => Self::Minute,
            "second" => Self::Second,
            _ => return None,
        })
    }

    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }

    /// (class, rank): larger ranks are coarser.
    const fn class_rank(self) -> (u8, u8) {
        match self {
            Self::Month => (0, 0),
            Self::Year => (0, 1),
            Self::Second => (1, 0),
            Self::Minute => (1, 1),
            Self::Hour => (1, 2),
            Self::Day => (1, 3),
        }
    }

    /// Returns true if `self TO other` is a valid qualifier.
    #[must_use]
    pub const fn can_narrow_to(self, other: Self) -> bool {
        let (class, rank) = self.class_rank();
        let (other_class, other_rank) = other.class_rank();
        class == other_class && other_rank < rank
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
