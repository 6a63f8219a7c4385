//! Values appearing inside clauses: operands and function calls.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use super::{SearchClause, SelectStatement};

/// A `{value, type}` argument: a literal, a column, a value list, a nested
/// clause or a sub-select.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Column or other identifier.
    Ident(String),
    /// Integer literal.
    Int(i64),
    /// Real literal.
    Real(f64),
    /// String literal.
    Text(String),
    /// System variable (`_name`).
    SysVar(String),
    /// NULL.
    Null,
    /// Parenthesized value list, as in `IN (1, 2)`.
    List(Vec<Operand>),
    /// Parenthesized search clause.
    Subclause(Box<SearchClause>),
    /// Parenthesized SELECT.
    Command(Box<SelectStatement>),
}

impl Operand {
    /// The `type` tag used in serialized trees.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Ident(_) => "ident",
            Self::Int(_) => "int_val",
            Self::Real(_) => "real_val",
            Self::Text(_) => "text_val",
            Self::SysVar(_) => "sys_var",
            Self::Null => "null",
            Self::List(_) => "list",
            Self::Subclause(_) => "subclause",
            Self::Command(_) => "command",
        }
    }

    /// Returns the identifier name if this is a column reference.
    #[must_use]
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Self::Ident(name) => Some(name),
            _ => None,
        }
    }
}

impl Serialize for Operand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Self::Ident(s) | Self::Text(s) | Self::SysVar(s) => map.serialize_entry("value", s)?,
            Self::Int(n) => map.serialize_entry("value", n)?,
            Self::Real(r) => map.serialize_entry("value", r)?,
            Self::Null => map.serialize_entry("value", &())?,
            Self::List(items) => map.serialize_entry("value", items)?,
            Self::Subclause(clause) => map.serialize_entry("value", clause)?,
            Self::Command(select) => map.serialize_entry("value", select)?,
        }
        map.serialize_entry("type", self.type_name())?;
        map.end()
    }
}

/// What was passed to a function.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionArg {
    /// Empty argument list.
    None,
    /// `*`, as in `count(*)`.
    Star,
    /// A single argument.
    Value(Operand),
    /// Several arguments, as in `concat(a, ' ', b)`.
    List(Vec<Operand>),
}

impl Serialize for FunctionArg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::None => serializer.serialize_none(),
            Self::Star => serializer.serialize_str("*"),
            Self::Value(operand) => operand.serialize(serializer),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// A function call such as `count(distinct id)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionCall {
    /// Lowercased function name.
    pub name: String,
    /// `DISTINCT` inside the call.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub distinct: bool,
    /// The argument(s).
    pub arg: FunctionArg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_serializes_value_and_type() {
        let json = serde_json::to_value(Operand::Int(7)).unwrap();
        assert_eq!(json, serde_json::json!({"value": 7, "type": "int_val"}));
        let json = serde_json::to_value(Operand::Null).unwrap();
        assert_eq!(json, serde_json::json!({"value": null, "type": "null"}));
    }

    #[test]
    fn test_function_call_serialization() {
        let call = FunctionCall {
            name: "count".into(),
            distinct: true,
            arg: FunctionArg::Value(Operand::Ident("id".into())),
        };
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            serde_json::json!({
                "name": "count",
                "distinct": true,
                "arg": {"value": "id", "type": "ident"}
            })
        );
        let star = FunctionCall {
            name: "count".into(),
            distinct: false,
            arg: FunctionArg::Star,
        };
        assert_eq!(
            serde_json::to_value(&star).unwrap(),
            serde_json::json!({"name": "count", "arg": "*"})
        );
    }
}
