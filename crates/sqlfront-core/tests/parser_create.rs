//! Tests for CREATE statements.

mod common;
use common::*;

use sqlfront_core::ast::{
    ConstraintKind, FunctionArg, IntervalQualifier, IntervalUnit, ObjectStatement, Operand,
    Statement,
};

#[test]
fn create_table_with_constraints() {
    let c = parse_create_table("CREATE TABLE t (id int(8) primary key, name varchar(50) not null)");
    assert_eq!(c.tables, vec!["t".to_string()]);
    assert_eq!(c.fields.len(), 2);

    let id = &c.fields[0];
    assert_eq!(id.name, "id");
    assert_eq!(id.field_type, "int");
    assert_eq!(id.length, Some(8));
    assert!(id.has_constraint("primary_key"));

    let name = &c.fields[1];
    assert_eq!(name.field_type, "varchar");
    assert_eq!(name.length, Some(50));
    assert!(name.has_constraint("not_null"));
}

#[test]
fn type_synonyms_are_canonical() {
    let c = parse_create_table("CREATE TABLE t (a integer, b decimal(10, 2), c character(3))");
    let types: Vec<_> = c.fields.iter().map(|f| f.field_type.as_str()).collect();
    assert_eq!(types, vec!["int", "numeric", "char"]);
    assert_eq!(c.fields[1].length, Some(10));
    assert_eq!(c.fields[1].decimals, Some(2));
}

#[test]
fn two_word_types() {
    let c = parse_create_table(
        "CREATE TABLE t (a double precision, b character varying(20), c char varying(5))",
    );
    let types: Vec<_> = c.fields.iter().map(|f| f.field_type.as_str()).collect();
    assert_eq!(types, vec!["float", "varchar", "varchar"]);
    assert_eq!(c.fields[1].length, Some(20));
}

#[test]
fn float_precision() {
    let c = parse_create_table("CREATE TABLE t (a float(8))");
    assert_eq!(c.fields[0].length, Some(8));
}

#[test]
fn enum_domain() {
    let stmt = parse_mysql("CREATE TABLE t (mood enum('sad', 'ok', 'happy'))");
    let Statement::CreateTable(c) = stmt else {
        panic!("Expected CREATE TABLE");
    };
    assert_eq!(c.fields[0].field_type, "enum");
    assert_eq!(
        c.fields[0].domain,
        vec![
            Operand::Text("sad".into()),
            Operand::Text("ok".into()),
            Operand::Text("happy".into()),
        ]
    );
}

#[test]
fn enum_domain_requires_literals() {
    for sql in [
        "CREATE TABLE t (m enum(a, 'b'))",
        "CREATE TABLE t (m enum('a', null))",
        "CREATE TABLE t (m set('a', _x))",
    ] {
        let err = parse_mysql_err(sql);
        assert_eq!(err.message, "Expected a literal", "{sql}");
    }

    let err = parse_mysql_err("CREATE TABLE t (m enum())");
    assert_eq!(err.message, "Expected a literal");
    assert_eq!(err.found, ")");
}

#[test]
fn default_value_and_function() {
    let c = parse_create_table(
        "CREATE TABLE t (a int default 0, b int default nextval(seq), c text default 'x')",
    );
    assert_eq!(
        c.fields[0].constraints[0].kind,
        ConstraintKind::DefaultValue {
            value: Operand::Int(0)
        }
    );
    let ConstraintKind::DefaultFunction { function } = &c.fields[1].constraints[0].kind else {
        panic!("Expected a default function");
    };
    assert_eq!(function.name, "nextval");
    assert_eq!(function.arg, FunctionArg::Value(Operand::Ident("seq".into())));
    assert!(c.fields[2].has_constraint("default_value"));
}

#[test]
fn named_constraint() {
    let c = parse_create_table("CREATE TABLE t (id int constraint pk primary key not null)");
    let constraints = &c.fields[0].constraints;
    assert_eq!(constraints.len(), 2);
    assert_eq!(constraints[0].name.as_deref(), Some("pk"));
    assert_eq!(constraints[0].kind, ConstraintKind::PrimaryKey);
    assert_eq!(constraints[1].name, None);
}

#[test]
fn check_and_unique() {
    let c = parse_create_table("CREATE TABLE t (a int check (a > 0) unique (a, b), b int)");
    let constraints = &c.fields[0].constraints;
    let ConstraintKind::Check { clause } = &constraints[0].kind else {
        panic!("Expected CHECK");
    };
    assert_eq!(clause.op(), Some(">"));
    assert_eq!(
        constraints[1].kind,
        ConstraintKind::Unique {
            columns: vec!["a".into(), "b".into()]
        }
    );
}

#[test]
fn bare_null_records_nothing() {
    let c = parse_create_table("CREATE TABLE t (a int null)");
    assert!(c.fields[0].constraints.is_empty());
}

#[test]
fn interval_qualifiers() {
    let c = parse_create_table(
        "CREATE TABLE t (a interval year to month, b interval day to second, c interval hour)",
    );
    let interval = |i: usize| match &c.fields[i].constraints[0].kind {
        ConstraintKind::Interval(q) => *q,
        other => panic!("Expected an interval, got {other:?}"),
    };
    assert_eq!(
        interval(0),
        IntervalQualifier {
            quantum_1: IntervalUnit::Year,
            quantum_2: Some(IntervalUnit::Month)
        }
    );
    assert_eq!(interval(1).quantum_2, Some(IntervalUnit::Second));
    assert_eq!(interval(2).quantum_2, None);
}

#[test]
fn interval_cannot_widen() {
    let err = parse_err("CREATE TABLE t (a interval month to year)");
    assert_eq!(err.message, "Cannot use month to year");
}

#[test]
fn interval_cannot_cross_classes() {
    let err = parse_err("CREATE TABLE t (a interval year to day)");
    assert_eq!(err.found, "day");
}

#[test]
fn unknown_type() {
    let err = parse_err("CREATE TABLE t (a widget)");
    assert_eq!(err.message, "Expected a valid type");
}

#[test]
fn length_must_be_single_integer() {
    let err = parse_err("CREATE TABLE t (a varchar(1, 2))");
    assert_eq!(err.message, "Expected a length");
    let err = parse_err("CREATE TABLE t (a int('x'))");
    assert_eq!(err.message, "Expected a length");
}

#[test]
fn parameters_on_plain_type() {
    let err = parse_err("CREATE TABLE t (a date(3))");
    assert_eq!(err.message, "Type date takes no parameters");
}

#[test]
fn create_index_constraint_sequence() {
    assert_eq!(
        parse("CREATE INDEX idx_a"),
        Statement::CreateIndex(ObjectStatement {
            name: Some("idx_a".into())
        })
    );
    assert_eq!(
        parse("CREATE SEQUENCE"),
        Statement::CreateSequence(ObjectStatement { name: None })
    );
    assert_eq!(parse("CREATE CONSTRAINT c1").command(), "create_constraint");
}

#[test]
fn create_unknown_object() {
    let err = parse_err("CREATE VIEW v");
    assert_eq!(err.message, "Expected table, index, constraint or sequence");
}
