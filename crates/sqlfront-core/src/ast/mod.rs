//! Parse tree types.
//!
//! Every node implements `serde::Serialize`; the JSON shape is the
//! documented tree format (statements tagged by `command`, clause
//! arguments as `{value, type}`).

mod operand;
mod search;
mod statement;
mod types;

pub use operand::{FunctionArg, FunctionCall, Operand};
pub use search::SearchClause;
pub use statement::{
    Assignment, CreateTableStatement, DeleteStatement, DropBehavior, DropStatement,
    InsertStatement, JoinType, Limit, ObjectStatement, OrderDirection, SelectItem,
    SelectStatement, SetQuantifier, SortKey, Statement, TableRef, UpdateStatement,
};
pub use types::{Constraint, ConstraintKind, FieldDef, IntervalQualifier, IntervalUnit};
