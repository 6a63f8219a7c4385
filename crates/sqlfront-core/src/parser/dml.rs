//! INSERT, UPDATE and DELETE statements.

use super::error::ParseError;
use super::parser::StatementParser;
use crate::ast::{Assignment, DeleteStatement, InsertStatement, UpdateStatement};

impl StatementParser<'_> {
    /// Parses `INSERT INTO t [(cols)] VALUES (vals)`.
    pub(super) fn parse_insert(&mut self) -> Result<InsertStatement, ParseError> {
        self.expect("insert", "Expected insert")?;
        self.expect("into", "Expected into")?;
        let table = self.expect_ident("Expected a table name")?;

        let columns = if self.eat_symbol("(") {
            let columns = self.parse_ident_list("Expected a column name")?;
            self.expect_symbol(")", "Expected )")?;
            columns
        } else {
            Vec::new()
        };

        self.expect("values", "Expected values")?;
        self.expect_symbol("(", "Expected (")?;
        let values = self.parse_value_list()?;
        if !columns.is_empty() && columns.len() != values.len() {
            return Err(self.error(format!(
                "Expected {} values, found {}",
                columns.len(),
                values.len()
            )));
        }
        self.expect_symbol(")", "Expected )")?;

        Ok(InsertStatement {
            tables: vec![table],
            columns,
            values,
        })
    }

    /// Parses `UPDATE t SET col = val [, ...] [WHERE ...]`.
    pub(super) fn parse_update(&mut self) -> Result<UpdateStatement, ParseError> {
        self.expect("update", "Expected update")?;
        let table = self.expect_ident("Expected a table name")?;
        self.expect("set", "Expected set")?;

        let mut assignments = Vec::new();
        loop {
            let column = self.expect_ident("Expected a column name")?;
            self.expect_symbol("=", "Expected =")?;
            let value = self.parse_value("Expected a value")?;
            assignments.push(Assignment { column, value });
            if !self.eat_symbol(",") {
                break;
            }
        }

        let where_clause = if self.eat("where") {
            Some(self.parse_search_clause()?)
        } else {
            None
        };

        Ok(UpdateStatement {
            tables: vec![table],
            assignments,
            where_clause,
        })
    }

    /// Parses `DELETE FROM t [WHERE ... [ORDER BY ...]]`.
    pub(super) fn parse_delete(&mut self) -> Result<DeleteStatement, ParseError> {
        self.expect("delete", "Expected delete")?;
        self.expect("from", "Expected from")?;
        let table = self.expect_ident("Expected a table name")?;

        let mut where_clause = None;
        let mut sort_order = Vec::new();
        if self.eat("where") {
            where_clause = Some(self.parse_search_clause()?);
            if self.eat("order") {
                self.expect("by", "Expected by")?;
                sort_order = self.parse_sort_order()?;
            }
        }

        Ok(DeleteStatement {
            tables: vec![table],
            where_clause,
            sort_order,
        })
    }
}
