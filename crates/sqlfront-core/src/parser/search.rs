//! Search clauses: WHERE, HAVING, ON and CHECK conditions.

use super::error::ParseError;
use super::parser::StatementParser;
use crate::ast::{Operand, SearchClause};
use crate::lexer::TokenKind;

/// Applies a leading NOT. Two negations cancel.
fn negated(mut clause: SearchClause, neg: bool) -> SearchClause {
    if neg {
        clause.set_negated(!clause.is_negated());
    }
    clause
}

impl StatementParser<'_> {
    /// Parses predicates joined by `and`/`or`, left-associatively.
    pub(super) fn parse_search_clause(&mut self) -> Result<SearchClause, ParseError> {
        let mut clause = self.parse_predicate()?;
        loop {
            let op = if self.check("and") {
                "and"
            } else if self.check("or") {
                "or"
            } else {
                break;
            };
            self.advance();
            let right = self.parse_predicate()?;
            clause = SearchClause::binary(clause, op, right);
        }
        Ok(clause)
    }

    /// Parses `[NOT] operand op operand` or `[NOT] ( clause ) [op operand]`.
    fn parse_predicate(&mut self) -> Result<SearchClause, ParseError> {
        let neg = self.eat("not");

        if self.eat_symbol("(") {
            let inner = self.parse_search_clause()?;
            self.expect_symbol(")", "Expected )")?;
            let clause = if self.at_operator() {
                self.parse_comparison(Operand::Subclause(Box::new(inner)))?
            } else {
                SearchClause::group(inner)
            };
            return Ok(negated(clause, neg));
        }

        let left = self.parse_value("Expected a column name or value")?;
        let clause = self.parse_comparison(left)?;
        Ok(negated(clause, neg))
    }

    /// Returns true if the current token can follow a left operand.
    fn at_operator(&self) -> bool {
        match &self.current.kind {
            TokenKind::Symbol(op) => self.dialect.is_operator(op),
            TokenKind::Keyword(_) | TokenKind::Ident(_) => self
                .current
                .word()
                .is_some_and(|w| w != "and" && w != "or" && self.dialect.is_operator(&w)),
            _ => false,
        }
    }

    /// Parses the operator and right-hand side after `left`.
    fn parse_comparison(&mut self, left: Operand) -> Result<SearchClause, ParseError> {
        let left = SearchClause::Leaf(left);

        if self.eat("is") {
            let neg = self.eat("not");
            self.expect("null", "Expected null")?;
            let clause = SearchClause::binary(left, "is", SearchClause::Leaf(Operand::Null));
            return Ok(negated(clause, neg));
        }

        let neg = self.eat("not");
        if neg && !(self.check("in") || self.check("like") || self.check("between")) {
            return Err(self.error("Expected in, like or between"));
        }

        let op = self.parse_operator()?;
        let right = match op.as_str() {
            "in" => {
                self.expect_symbol("(", "Expected (")?;
                let right = if self.check("select") {
                    Operand::Command(Box::new(self.parse_select()?))
                } else {
                    Operand::List(self.parse_value_list()?)
                };
                self.expect_symbol(")", "Expected )")?;
                right
            }
            "between" => {
                let low = self.parse_value("Expected a column name or value")?;
                self.expect("and", "Expected and")?;
                let high = self.parse_value("Expected a column name or value")?;
                Operand::List(vec![low, high])
            }
            _ if self.eat_symbol("(") => {
                if !self.check("select") {
                    return Err(self.error("Expected select"));
                }
                let select = self.parse_select()?;
                self.expect_symbol(")", "Expected )")?;
                Operand::Command(Box::new(select))
            }
            _ => self.parse_value("Expected a column name or value")?,
        };

        let clause = SearchClause::binary(left, op, SearchClause::Leaf(right));
        Ok(negated(clause, neg))
    }

    /// Reads a comparison operator known to the dialect.
    fn parse_operator(&mut self) -> Result<String, ParseError> {
        let op = match &self.current.kind {
            TokenKind::Symbol(symbol) => Some(symbol.clone()),
            _ => self.current.word(),
        };
        match op {
            Some(op)
                if self.dialect.is_operator(&op)
                    && !matches!(op.as_str(), "and" | "or" | "not" | "is") =>
            {
                self.advance();
                Ok(op)
            }
            _ => Err(self.error("Expected an operator")),
        }
    }
}
