//! Tests for parser error cases and error rendering.

mod common;
use common::*;

use sqlfront_core::{Dialect, DialectError, Error, Parser};

#[test]
fn error_empty_input() {
    let err = parse_err("");
    assert_eq!(err.message, "Nothing to do");
    let err = parse_err("  -- only a comment\n");
    assert_eq!(err.message, "Nothing to do");
}

#[test]
fn error_unknown_action() {
    assert_eq!(parse_err("TRUNCATE users").message, "Unknown action");
    // A dialect command the grammar does not implement.
    assert_eq!(parse_err("ALTER TABLE t").message, "Unknown action");
    assert_eq!(parse_err("42").message, "Unknown action");
}

#[test]
fn error_select_without_columns() {
    let err = parse_err("SELECT FROM");
    assert_eq!(err.message, "Expected columns or a set function");
    assert_eq!(err.found.to_lowercase(), "from");
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 7);
    assert_eq!(
        err.to_string(),
        "Parse error: Expected columns or a set function on line 1\nSELECT FROM\n       ^ found: \"FROM\""
    );
}

#[test]
fn error_position_on_later_line() {
    let err = parse_err("SELECT a\nFROM t\nWHERE a = = 1");
    assert_eq!(err.line, 3);
    assert_eq!(err.line_text, "WHERE a = = 1");
    assert_eq!(err.column, 10);
    assert_eq!(err.found, "=");
    assert!(err.to_string().ends_with("WHERE a = = 1\n          ^ found: \"=\""));
}

#[test]
fn error_missing_from_table() {
    let err = parse_err("SELECT * FROM");
    assert_eq!(err.message, "Expected a table name");
    assert_eq!(err.found, "");
}

#[test]
fn error_incomplete_select() {
    assert_eq!(parse_err("SELECT").message, "Expected columns or a set function");
    assert_eq!(parse_err("SELECT a").message, "Expected from");
}

#[test]
fn error_quantifier_with_function() {
    let err = parse_err("SELECT DISTINCT count(*) FROM t");
    assert_eq!(err.message, "Cannot use distinct with count");
    assert_eq!(err.column, 16);
}

#[test]
fn error_duplicate_clause() {
    let err = parse_err("SELECT a FROM t WHERE a = 1 WHERE b = 2");
    assert_eq!(err.message, "Only one where clause is allowed");
    let err = parse_err("SELECT a FROM t LIMIT 1 LIMIT 2");
    assert_eq!(err.message, "Only one limit clause is allowed");
}

#[test]
fn error_stray_close_paren() {
    let err = parse_err("SELECT a FROM t)");
    assert_eq!(err.message, "Unexpected )");
}

#[test]
fn error_unclosed_subselect() {
    let err = parse_err("SELECT a FROM t WHERE a IN (SELECT b FROM u");
    assert_eq!(err.message, "Expected )");
}

#[test]
fn error_trailing_garbage() {
    let err = parse_err("SELECT a FROM t u v");
    assert_eq!(err.message, "Unexpected token after end of statement");
    assert_eq!(err.found, "v");
    let err = parse_err("SELECT a FROM t; SELECT b FROM u");
    assert_eq!(err.found, "SELECT");
}

#[test]
fn error_not_without_in_like_between() {
    let err = parse_err("SELECT a FROM t WHERE a NOT = 1");
    assert_eq!(err.message, "Expected in, like or between");
}

#[test]
fn error_lexical_fallback_surfaces_in_parser() {
    let err = parse_err("SELECT a FROM t WHERE a = 'unterminated");
    assert_eq!(err.found, "'");
}

#[test]
fn error_function_arguments() {
    assert_eq!(
        parse_err("SELECT sum() FROM t").message,
        "Expected an argument"
    );
    assert_eq!(
        parse_err("SELECT concat(1) FROM t").message,
        "Expected a column name or string"
    );
    assert_eq!(parse_err("SELECT max(a, b) FROM t").message, "Expected )");
}

#[test]
fn error_unknown_dialect_is_configuration_error() {
    let err = Parser::for_dialect("oracle").unwrap_err();
    assert_eq!(err, DialectError::Unknown("oracle".into()));

    let err = sqlfront_core::parse("oracle", "SELECT a FROM t").unwrap_err();
    assert!(matches!(err, Error::Dialect(_)));
    let err = sqlfront_core::parse("ansi", "SELECT").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn dialect_can_disable_commands() {
    use sqlfront_core::dialect::DialectTables;

    static READ_ONLY: DialectTables = DialectTables {
        reserved: &["select", "from", "delete", "where"],
        types: &[],
        functions: &[],
        operators: &["="],
        commands: &["select"],
        synonyms: &[],
    };
    let dialect = Dialect::new("read_only", &READ_ONLY);
    let parser = Parser::new(&dialect);
    assert!(parser.parse("SELECT a FROM t").is_ok());
    let err = parser.parse("DELETE FROM t").unwrap_err();
    assert_eq!(err.message, "Unknown action");
}

#[test]
fn parser_is_reusable_across_threads() {
    let parser = Parser::new(Dialect::ansi());
    std::thread::scope(|scope| {
        for i in 0..4 {
            scope.spawn(move || {
                let sql = format!("SELECT a FROM t WHERE a = {i}");
                assert!(parser.parse(&sql).is_ok());
            });
        }
    });
}

#[test]
fn error_real_literal_out_of_range() {
    let err = parse_err("SELECT a FROM t WHERE a = 1.5e999");
    assert_eq!(err.message, "Expected a column name or value");
    assert_eq!(err.found, "1");
    assert_eq!(err.column, 26);
}
