//! Tests for the serialized shape of parse trees.

mod common;
use common::*;

use serde_json::json;

#[test]
fn where_clause_shape() {
    let tree = parse_json("SELECT a, b FROM t WHERE a = 1 AND b = 2");
    assert_eq!(
        tree,
        json!({
            "command": "select",
            "columns": [
                {"type": "column", "name": "a"},
                {"type": "column", "name": "b"}
            ],
            "tables": [{"name": "t"}],
            "where_clause": {
                "arg_1": {
                    "arg_1": {"value": "a", "type": "ident"},
                    "op": "=",
                    "arg_2": {"value": 1, "type": "int_val"}
                },
                "op": "and",
                "arg_2": {
                    "arg_1": {"value": "b", "type": "ident"},
                    "op": "=",
                    "arg_2": {"value": 2, "type": "int_val"}
                }
            }
        })
    );
}

#[test]
fn insert_shape() {
    assert_eq!(
        parse_json("INSERT INTO t (a,b) VALUES (1,2)"),
        json!({
            "command": "insert",
            "tables": ["t"],
            "columns": ["a", "b"],
            "values": [
                {"value": 1, "type": "int_val"},
                {"value": 2, "type": "int_val"}
            ]
        })
    );
}

#[test]
fn create_table_shape() {
    assert_eq!(
        parse_json("CREATE TABLE t (id int(8) primary key, name varchar(50) not null)"),
        json!({
            "command": "create_table",
            "tables": ["t"],
            "fields": [
                {
                    "name": "id",
                    "type": "int",
                    "length": 8,
                    "constraints": [{"type": "primary_key"}]
                },
                {
                    "name": "name",
                    "type": "varchar",
                    "length": 50,
                    "constraints": [{"type": "not_null"}]
                }
            ]
        })
    );
}

#[test]
fn negated_in_subselect_shape() {
    let tree = parse_json("SELECT * FROM t WHERE NOT a IN (SELECT b FROM u)");
    assert_eq!(
        tree["where_clause"],
        json!({
            "arg_1": {"value": "a", "type": "ident"},
            "op": "in",
            "arg_2": {
                "value": {
                    "columns": [{"type": "column", "name": "b"}],
                    "tables": [{"name": "u"}]
                },
                "type": "command"
            },
            "neg": true
        })
    );
    assert_eq!(tree["columns"], json!([{"type": "star"}]));
}

#[test]
fn function_and_join_shape() {
    let tree = parse_json(
        "SELECT count(DISTINCT id) AS n FROM a LEFT OUTER JOIN b ON a.id = b.id ORDER BY n DESC LIMIT 5, 10",
    );
    assert_eq!(
        tree["columns"],
        json!([{
            "type": "function",
            "function": {
                "name": "count",
                "distinct": true,
                "arg": {"value": "id", "type": "ident"}
            },
            "alias": "n"
        }])
    );
    assert_eq!(tree["tables"][1]["join"], json!("left outer join"));
    assert_eq!(tree["sort_order"], json!([{"column": "n", "direction": "desc"}]));
    assert_eq!(tree["limit"], json!({"start": 5, "length": 10}));
}

#[test]
fn drop_and_object_shapes() {
    assert_eq!(
        parse_json("DROP TABLE a, b RESTRICT"),
        json!({"command": "drop_table", "names": ["a", "b"], "behavior": "restrict"})
    );
    assert_eq!(
        parse_json("CREATE INDEX i"),
        json!({"command": "create_index", "name": "i"})
    );
}

#[test]
fn tokens_serialize() {
    let tokens = sqlfront_core::Parser::new(sqlfront_core::Dialect::ansi()).tokenize("SELECT 1");
    assert_eq!(
        serde_json::to_value(&tokens[1]).unwrap(),
        json!({
            "kind": {"kind": "int_val", "value": 1},
            "span": {"start": 7, "end": 8},
            "skipped": " ",
            "line": 1,
            "line_start": 0
        })
    );
}
