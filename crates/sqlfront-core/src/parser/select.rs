//! SELECT statements, table lists and set functions.

use super::error::ParseError;
use super::parser::StatementParser;
use crate::ast::{
    FunctionArg, FunctionCall, JoinType, Limit, Operand, SelectItem, SelectStatement,
    SetQuantifier, TableRef,
};
use crate::lexer::TokenKind;

/// Splits `t.c` into its table qualifier and column name.
fn split_column(name: &str) -> (Option<String>, String) {
    match name.rsplit_once('.') {
        Some((table, column)) => (Some(table.to_string()), column.to_string()),
        None => (None, name.to_string()),
    }
}

impl StatementParser<'_> {
    /// Parses a SELECT statement.
    ///
    /// Stops at the first token that does not start a clause, so a
    /// sub-select ends at its closing `)`.
    pub(super) fn parse_select(&mut self) -> Result<SelectStatement, ParseError> {
        self.expect("select", "Expected select")?;

        let mut select = SelectStatement::default();
        if self.eat("distinct") {
            select.set_quantifier = Some(SetQuantifier::Distinct);
        } else if self.eat("all") {
            select.set_quantifier = Some(SetQuantifier::All);
        }

        select.columns = self.parse_select_columns(select.set_quantifier)?;
        self.expect("from", "Expected from")?;
        select.tables = self.parse_tables()?;

        // Remaining clauses in any order, each at most once.
        loop {
            if self.check("where") {
                if select.where_clause.is_some() {
                    return Err(self.duplicate_clause("where"));
                }
                self.advance();
                select.where_clause = Some(self.parse_search_clause()?);
            } else if self.check("having") {
                if select.having.is_some() {
                    return Err(self.duplicate_clause("having"));
                }
                self.advance();
                select.having = Some(self.parse_search_clause()?);
            } else if self.check("group") {
                if !select.group_by.is_empty() {
                    return Err(self.duplicate_clause("group by"));
                }
                self.advance();
                self.expect("by", "Expected by")?;
                select.group_by = self.parse_ident_list("Expected a column name")?;
            } else if self.check("order") {
                if !select.sort_order.is_empty() {
                    return Err(self.duplicate_clause("order by"));
                }
                self.advance();
                self.expect("by", "Expected by")?;
                select.sort_order = self.parse_sort_order()?;
            } else if self.check("limit") {
                if select.limit.is_some() {
                    return Err(self.duplicate_clause("limit"));
                }
                self.advance();
                select.limit = Some(self.parse_limit()?);
            } else {
                break;
            }
        }

        Ok(select)
    }

    fn duplicate_clause(&self, clause: &str) -> ParseError {
        self.error(format!("Only one {clause} clause is allowed"))
    }

    /// Parses `*` or a list of columns and set functions.
    fn parse_select_columns(
        &mut self,
        quantifier: Option<SetQuantifier>,
    ) -> Result<Vec<SelectItem>, ParseError> {
        if self.eat_symbol("*") {
            return Ok(vec![SelectItem::Star]);
        }
        let mut items = Vec::new();
        loop {
            items.push(self.parse_select_item(quantifier)?);
            if !self.eat_symbol(",") {
                break;
            }
        }
        Ok(items)
    }

    fn parse_select_item(
        &mut self,
        quantifier: Option<SetQuantifier>,
    ) -> Result<SelectItem, ParseError> {
        let mut item = if self.at_function_call() {
            if let Some(quantifier) = quantifier {
                let name = self.current.word().unwrap_or_default();
                return Err(self.error(format!("Cannot use {} with {name}", quantifier.as_str())));
            }
            SelectItem::Function {
                function: self.parse_function_call()?,
                alias: None,
            }
        } else {
            match &self.current.kind {
                TokenKind::Ident(name) => {
                    let (table, name) = split_column(name);
                    if name.is_empty() {
                        return Err(self.error("Expected a column name"));
                    }
                    self.advance();
                    SelectItem::Column {
                        table,
                        name,
                        alias: None,
                    }
                }
                TokenKind::IntVal(value) => {
                    let value = *value;
                    self.advance();
                    SelectItem::Value { value, alias: None }
                }
                _ => return Err(self.error("Expected columns or a set function")),
            }
        };

        if let Some(name) = self.parse_alias()? {
            match &mut item {
                SelectItem::Column { alias, .. }
                | SelectItem::Value { alias, .. }
                | SelectItem::Function { alias, .. } => *alias = Some(name),
                SelectItem::Star => {}
            }
        }
        Ok(item)
    }

    /// Parses `AS ident` or a bare trailing identifier.
    fn parse_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.eat("as") {
            return self.expect_ident("Expected an alias").map(Some);
        }
        Ok(self.eat_ident())
    }

    /// Parses the FROM list with its joins.
    fn parse_tables(&mut self) -> Result<Vec<TableRef>, ParseError> {
        let mut tables = Vec::new();
        let mut join = None;
        loop {
            let name = self.expect_ident("Expected a table name")?;
            let alias = self.parse_alias()?;
            let on = if join.is_some_and(|j| j != JoinType::Comma) && self.eat("on") {
                Some(self.parse_search_clause()?)
            } else {
                None
            };
            tables.push(TableRef {
                name,
                alias,
                join,
                on,
            });
            join = match self.parse_join_type()? {
                Some(next) => Some(next),
                None => break,
            };
        }
        Ok(tables)
    }

    /// Parses the connector before the next table, if any.
    fn parse_join_type(&mut self) -> Result<Option<JoinType>, ParseError> {
        if self.eat_symbol(",") {
            return Ok(Some(JoinType::Comma));
        }
        if self.eat("join") {
            return Ok(Some(JoinType::Join));
        }
        let join = if self.eat("cross") {
            JoinType::Cross
        } else if self.eat("inner") {
            JoinType::Inner
        } else if self.eat("left") {
            if self.eat("outer") {
                JoinType::LeftOuter
            } else {
                JoinType::Left
            }
        } else if self.eat("right") {
            if self.eat("outer") {
                JoinType::RightOuter
            } else {
                JoinType::Right
            }
        } else if self.eat("natural") {
            if self.eat("left") {
                if self.eat("outer") {
                    JoinType::NaturalLeftOuter
                } else {
                    JoinType::NaturalLeft
                }
            } else if self.eat("right") {
                if self.eat("outer") {
                    JoinType::NaturalRightOuter
                } else {
                    JoinType::NaturalRight
                }
            } else {
                JoinType::Natural
            }
        } else {
            return Ok(None);
        };
        self.expect("join", "Expected join")?;
        Ok(Some(join))
    }

    /// Parses `n` or `start, length`.
    fn parse_limit(&mut self) -> Result<Limit, ParseError> {
        let first = self.expect_row_count()?;
        if self.eat_symbol(",") {
            let length = self.expect_row_count()?;
            Ok(Limit {
                start: first,
                length,
            })
        } else {
            Ok(Limit {
                start: 0,
                length: first,
            })
        }
    }

    fn expect_row_count(&mut self) -> Result<i64, ParseError> {
        match self.current.kind {
            TokenKind::IntVal(n) if n < 0 => Err(self.error("Expected a non-negative integer")),
            _ => self.expect_int("Expected an integer"),
        }
    }

    /// Returns true if the current word names a dialect function and is
    /// followed by `(`.
    pub(super) fn at_function_call(&mut self) -> bool {
        self.current
            .word()
            .is_some_and(|word| self.dialect.is_function(&word))
            && self.peek_symbol("(")
    }

    /// Parses `name ( args )`.
    ///
    /// `count` takes `*`, a column or `DISTINCT column`; `concat` takes
    /// columns and strings; `avg`, `min`, `max` and `sum` take exactly one
    /// argument; other functions take at most one.
    pub(super) fn parse_function_call(&mut self) -> Result<FunctionCall, ParseError> {
        let Some(name) = self.current.word() else {
            return Err(self.error("Expected a function name"));
        };
        self.advance();
        self.expect_symbol("(", "Expected (")?;

        let mut distinct = false;
        let arg = match name.as_str() {
            "count" => {
                if self.eat_symbol("*") {
                    FunctionArg::Star
                } else {
                    distinct = self.eat("distinct");
                    FunctionArg::Value(Operand::Ident(self.expect_ident("Expected a column name")?))
                }
            }
            "concat" => {
                let mut args = Vec::new();
                loop {
                    let arg = match &self.current.kind {
                        TokenKind::Ident(column) => Operand::Ident(column.clone()),
                        TokenKind::TextVal(text) => Operand::Text(text.clone()),
                        _ => return Err(self.error("Expected a column name or string")),
                    };
                    self.advance();
                    args.push(arg);
                    if !self.eat_symbol(",") {
                        break;
                    }
                }
                FunctionArg::List(args)
            }
            "avg" | "min" | "max" | "sum" => {
                FunctionArg::Value(self.parse_value("Expected an argument")?)
            }
            _ if self.check_symbol(")") => FunctionArg::None,
            _ => FunctionArg::Value(self.parse_value("Expected an argument")?),
        };

        self.expect_symbol(")", "Expected )")?;
        Ok(FunctionCall {
            name,
            distinct,
            arg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_column() {
        assert_eq!(split_column("t.c"), (Some("t".into()), "c".into()));
        assert_eq!(split_column("c"), (None, "c".into()));
        assert_eq!(split_column("db.t.c"), (Some("db.t".into()), "c".into()));
        assert_eq!(split_column("t."), (Some("t".into()), String::new()));
    }
}
