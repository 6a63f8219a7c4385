//! SQL statement AST types.

use serde::{Serialize, Serializer};

use super::{FieldDef, FunctionCall, Operand, SearchClause};

/// One parsed top-level statement.
///
/// Serialized trees carry the statement kind in a `command` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Statement {
    /// SELECT.
    Select(SelectStatement),
    /// INSERT.
    Insert(InsertStatement),
    /// UPDATE.
    Update(UpdateStatement),
    /// DELETE.
    Delete(DeleteStatement),
    /// CREATE TABLE.
    CreateTable(CreateTableStatement),
    /// CREATE INDEX.
    CreateIndex(ObjectStatement),
    /// CREATE CONSTRAINT.
    CreateConstraint(ObjectStatement),
    /// CREATE SEQUENCE.
    CreateSequence(ObjectStatement),
    /// DROP TABLE.
    DropTable(DropStatement),
    /// DROP INDEX.
    DropIndex(DropStatement),
    /// DROP CONSTRAINT.
    DropConstraint(DropStatement),
    /// DROP SEQUENCE.
    DropSequence(DropStatement),
}

impl Statement {
    /// The `command` name of this statement.
    #[must_use]
    pub const fn command(&self) -> &'static str {
        match self {
            Self::Select(_) => "select",
            Self::Insert(_) => "insert",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
            Self::CreateTable(_) => "create_table",
            Self::CreateIndex(_) => "create_index",
            Self::CreateConstraint(_) => "create_constraint",
            Self::CreateSequence(_) => "create_sequence",
            Self::DropTable(_) => "drop_table",
            Self::DropIndex(_) => "drop_index",
            Self::DropConstraint(_) => "drop_constraint",
            Self::DropSequence(_) => "drop_sequence",
        }
    }
}

/// `DISTINCT` or `ALL` after SELECT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SetQuantifier {
    /// DISTINCT.
    Distinct,
    /// ALL.
    All,
}

impl SetQuantifier {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Distinct => "distinct",
            Self::All => "all",
        }
    }
}

/// An entry of the SELECT column list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectItem {
    /// `*`.
    Star,
    /// A column, optionally qualified (`t.c`).
    Column {
        /// Table qualifier.
        #[serde(skip_serializing_if = "Option::is_none")]
        table: Option<String>,
        /// Column name.
        name: String,
        /// Alias.
        #[serde(skip_serializing_if = "Option::is_none")]
        alias: Option<String>,
    },
    /// An integer constant.
    Value {
        /// The constant.
        value: i64,
        /// Alias.
        #[serde(skip_serializing_if = "Option::is_none")]
        alias: Option<String>,
    },
    /// A set function such as `count(*)`.
    Function {
        /// The call.
        function: FunctionCall,
        /// Alias.
        #[serde(skip_serializing_if = "Option::is_none")]
        alias: Option<String>,
    },
}

impl SelectItem {
    /// Returns the alias, if any.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::Star => None,
            Self::Column { alias, .. } | Self::Value { alias, .. } | Self::Function { alias, .. } => {
                alias.as_deref()
            }
        }
    }
}

/// How a table is connected to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// `,`.
    Comma,
    /// JOIN.
    Join,
    /// CROSS JOIN.
    Cross,
    /// INNER JOIN.
    Inner,
    /// LEFT JOIN.
    Left,
    /// LEFT OUTER JOIN.
    LeftOuter,
    /// RIGHT JOIN.
    Right,
    /// RIGHT OUTER JOIN.
    RightOuter,
    /// NATURAL JOIN.
    Natural,
    /// NATURAL LEFT JOIN.
    NaturalLeft,
    /// NATURAL LEFT OUTER JOIN.
    NaturalLeftOuter,
    /// NATURAL RIGHT JOIN.
    NaturalRight,
    /// NATURAL RIGHT OUTER JOIN.
    NaturalRightOuter,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Comma => ",",
            Self::Join => "join",
            Self::Cross => "cross join",
            Self::Inner => "inner join",
            Self::Left => "left join",
            Self::LeftOuter => "left outer join",
            Self::Right => "right join",
            Self::RightOuter => "right outer join",
            Self::Natural => "natural join",
            Self::NaturalLeft => "natural left join",
            Self::NaturalLeftOuter => "natural left outer join",
            Self::NaturalRight => "natural right join",
            Self::NaturalRightOuter => "natural right outer join",
        }
    }
}

impl Serialize for JoinType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A table in a FROM list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRef {
    /// Table name.
    pub name: String,
    /// Alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Connector to the previous table; `None` for the first one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join: Option<JoinType>,
    /// ON condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<SearchClause>,
}

impl TableRef {
    /// Creates an unaliased table reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            join: None,
            on: None,
        }
    }
}

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// An ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortKey {
    /// Column to sort by.
    pub column: String,
    /// Direction.
    pub direction: OrderDirection,
}

/// LIMIT clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Limit {
    /// Rows to skip.
    pub start: i64,
    /// Rows to return.
    pub length: i64,
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SelectStatement {
    /// DISTINCT or ALL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_quantifier: Option<SetQuantifier>,
    /// Column list.
    pub columns: Vec<SelectItem>,
    /// FROM list, in order.
    pub tables: Vec<TableRef>,
    /// WHERE condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<SearchClause>,
    /// HAVING condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub having: Option<SearchClause>,
    /// GROUP BY columns.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<String>,
    /// ORDER BY keys.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort_order: Vec<SortKey>,
    /// LIMIT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Limit>,
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertStatement {
    /// Target table (always one).
    pub tables: Vec<String>,
    /// Column list; empty when omitted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,
    /// VALUES list.
    pub values: Vec<Operand>,
}

/// A `column = value` pair in UPDATE.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    /// Column name.
    pub column: String,
    /// New value.
    pub value: Operand,
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateStatement {
    /// Target table.
    pub tables: Vec<String>,
    /// SET list.
    pub assignments: Vec<Assignment>,
    /// WHERE condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<SearchClause>,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteStatement {
    /// Target table.
    pub tables: Vec<String>,
    /// WHERE condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<SearchClause>,
    /// ORDER BY keys; only allowed after WHERE.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort_order: Vec<SortKey>,
}

/// A CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTableStatement {
    /// Table name.
    pub tables: Vec<String>,
    /// Column definitions.
    pub fields: Vec<FieldDef>,
}

/// CREATE INDEX / CONSTRAINT / SEQUENCE. Only the name is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectStatement {
    /// Object name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// RESTRICT or CASCADE after DROP TABLE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DropBehavior {
    /// RESTRICT.
    Restrict,
    /// CASCADE.
    Cascade,
}

/// A DROP statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropStatement {
    /// Dropped object names.
    pub names: Vec<String>,
    /// Drop behavior (DROP TABLE only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior: Option<DropBehavior>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names() {
        let drop = Statement::DropIndex(DropStatement {
            names: vec!["idx".into()],
            behavior: None,
        });
        assert_eq!(drop.command(), "drop_index");
        assert_eq!(Statement::Select(SelectStatement::default()).command(), "select");
    }

    #[test]
    fn test_statement_tagged_with_command() {
        let stmt = Statement::DropTable(DropStatement {
            names: vec!["t".into()],
            behavior: Some(DropBehavior::Cascade),
        });
        assert_eq!(
            serde_json::to_value(&stmt).unwrap(),
            serde_json::json!({"command": "drop_table", "names": ["t"], "behavior": "cascade"})
        );
    }

    #[test]
    fn test_join_type_serializes_as_text() {
        let table = TableRef {
            join: Some(JoinType::LeftOuter),
            ..TableRef::new("b")
        };
        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            serde_json::json!({"name": "b", "join": "left outer join"})
        );
    }

    #[test]
    fn test_select_item_alias() {
        let item = SelectItem::Column {
            table: None,
            name: "a".into(),
            alias: Some("x".into()),
        };
        assert_eq!(item.alias(), Some("x"));
        assert_eq!(SelectItem::Star.alias(), None);
    }
}
