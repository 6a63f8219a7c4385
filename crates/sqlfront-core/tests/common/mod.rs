#![allow(dead_code)]

use sqlfront_core::ast::{
    CreateTableStatement, DeleteStatement, DropStatement, InsertStatement, SearchClause,
    SelectStatement, Statement, UpdateStatement,
};
use sqlfront_core::{Dialect, ParseError, Parser};

pub fn parse(sql: &str) -> Statement {
    parse_with(Dialect::ansi(), sql)
}

pub fn parse_mysql(sql: &str) -> Statement {
    parse_with(Dialect::mysql(), sql)
}

pub fn parse_with(dialect: &Dialect, sql: &str) -> Statement {
    Parser::new(dialect)
        .parse(sql)
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    parse_err_with(Dialect::ansi(), sql)
}

pub fn parse_mysql_err(sql: &str) -> ParseError {
    parse_err_with(Dialect::mysql(), sql)
}

pub fn parse_err_with(dialect: &Dialect, sql: &str) -> ParseError {
    Parser::new(dialect)
        .parse(sql)
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse(sql) {
        Statement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_where(sql: &str) -> SearchClause {
    parse_select(sql)
        .where_clause
        .unwrap_or_else(|| panic!("Expected a WHERE clause in: {sql}"))
}

pub fn parse_insert(sql: &str) -> InsertStatement {
    match parse(sql) {
        Statement::Insert(i) => i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

pub fn parse_update(sql: &str) -> UpdateStatement {
    match parse(sql) {
        Statement::Update(u) => u,
        other => panic!("Expected UPDATE, got {other:?}"),
    }
}

pub fn parse_delete(sql: &str) -> DeleteStatement {
    match parse(sql) {
        Statement::Delete(d) => d,
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

pub fn parse_create_table(sql: &str) -> CreateTableStatement {
    match parse(sql) {
        Statement::CreateTable(c) => c,
        other => panic!("Expected CREATE TABLE, got {other:?}"),
    }
}

pub fn parse_drop_table(sql: &str) -> DropStatement {
    match parse(sql) {
        Statement::DropTable(d) => d,
        other => panic!("Expected DROP TABLE, got {other:?}"),
    }
}

/// Parses `sql` and returns its JSON tree.
pub fn parse_json(sql: &str) -> serde_json::Value {
    serde_json::to_value(parse(sql)).expect("parse tree serializes")
}
