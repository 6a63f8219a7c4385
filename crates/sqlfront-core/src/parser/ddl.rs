//! CREATE and DROP statements.

use super::error::ParseError;
use super::parser::StatementParser;
use crate::ast::{
    Constraint, ConstraintKind, CreateTableStatement, DropBehavior, DropStatement, FieldDef,
    IntervalQualifier, IntervalUnit, ObjectStatement, Operand, Statement,
};
use crate::lexer::TokenKind;

impl StatementParser<'_> {
    /// Parses `CREATE TABLE ...` or `CREATE INDEX|CONSTRAINT|SEQUENCE [name]`.
    pub(super) fn parse_create(&mut self) -> Result<Statement, ParseError> {
        self.expect("create", "Expected create")?;
        if self.eat("table") {
            return Ok(Statement::CreateTable(self.parse_create_table()?));
        }

        let make: fn(ObjectStatement) -> Statement = if self.eat("index") {
            Statement::CreateIndex
        } else if self.eat("constraint") {
            Statement::CreateConstraint
        } else if self.eat("sequence") {
            Statement::CreateSequence
        } else {
            return Err(self.error("Expected table, index, constraint or sequence"));
        };
        let name = self.eat_ident();
        Ok(make(ObjectStatement { name }))
    }

    /// Parses `DROP TABLE t [, ...] [RESTRICT|CASCADE]` or
    /// `DROP INDEX|CONSTRAINT|SEQUENCE name`.
    pub(super) fn parse_drop(&mut self) -> Result<Statement, ParseError> {
        self.expect("drop", "Expected drop")?;
        if self.eat("table") {
            let names = self.parse_ident_list("Expected a table name")?;
            let behavior = if self.eat("restrict") {
                Some(DropBehavior::Restrict)
            } else if self.eat("cascade") {
                Some(DropBehavior::Cascade)
            } else {
                None
            };
            return Ok(Statement::DropTable(DropStatement { names, behavior }));
        }

        let make: fn(DropStatement) -> Statement = if self.eat("index") {
            Statement::DropIndex
        } else if self.eat("constraint") {
            Statement::DropConstraint
        } else if self.eat("sequence") {
            Statement::DropSequence
        } else {
            return Err(self.error("Expected table, index, constraint or sequence"));
        };
        let name = self.expect_ident("Expected a name")?;
        Ok(make(DropStatement {
            names: vec![name],
            behavior: None,
        }))
    }

    fn parse_create_table(&mut self) -> Result<CreateTableStatement, ParseError> {
        let table = self.expect_ident("Expected a table name")?;
        self.expect_symbol("(", "Expected (")?;
        let mut fields = Vec::new();
        loop {
            fields.push(self.parse_field_def()?);
            if !self.eat_symbol(",") {
                break;
            }
        }
        self.expect_symbol(")", "Expected , or )")?;
        Ok(CreateTableStatement {
            tables: vec![table],
            fields,
        })
    }

    /// Parses `name type [( params )] [options]`.
    fn parse_field_def(&mut self) -> Result<FieldDef, ParseError> {
        let name = self.expect_ident("Expected a column name")?;
        let field_type = self.parse_field_type()?;
        let mut field = FieldDef::new(name, field_type);
        if self.eat_symbol("(") {
            self.parse_type_params(&mut field)?;
        }
        self.parse_field_options(&mut field)?;
        Ok(field)
    }

    /// Reads a type name and returns its canonical spelling. Two-word
    /// spellings such as `double precision` resolve through the synonyms.
    fn parse_field_type(&mut self) -> Result<String, ParseError> {
        let Some(word) = self.current.word().filter(|w| self.dialect.is_type(w)) else {
            return Err(self.error("Expected a valid type"));
        };
        self.advance();

        let word = match self.current.word() {
            Some(second) => {
                let pair = format!("{word} {second}");
                if self.dialect.synonym(&pair).is_some() {
                    self.advance();
                    pair
                } else {
                    word
                }
            }
            None => word,
        };
        Ok(self
            .dialect
            .synonym(&word)
            .map_or(word, str::to_owned))
    }

    /// Parses and validates the parenthesized type parameters. The `(`
    /// has been consumed.
    fn parse_type_params(&mut self, field: &mut FieldDef) -> Result<(), ParseError> {
        if matches!(field.field_type.as_str(), "set" | "enum") {
            let mut domain = vec![self.parse_literal()?];
            while self.eat_symbol(",") {
                domain.push(self.parse_literal()?);
            }
            field.domain = domain;
            return self.expect_symbol(")", "Expected )");
        }
        let params = self.parse_value_list()?;
        match (field.field_type.as_str(), params.as_slice()) {
            ("numeric", [Operand::Int(precision)]) => field.length = Some(*precision),
            ("numeric", [Operand::Int(precision), Operand::Int(scale)]) => {
                field.length = Some(*precision);
                field.decimals = Some(*scale);
            }
            ("numeric", _) => return Err(self.error("Expected precision and scale")),
            ("float", [Operand::Int(precision)]) => field.length = Some(*precision),
            ("float", _) => return Err(self.error("Expected a precision")),
            (
                "char" | "varchar" | "int" | "integer" | "smallint" | "tinyint" | "mediumint"
                | "bigint",
                [Operand::Int(length)],
            ) => field.length = Some(*length),
            (
                "char" | "varchar" | "int" | "integer" | "smallint" | "tinyint" | "mediumint"
                | "bigint",
                _,
            ) => return Err(self.error("Expected a length")),
            (other, _) => return Err(self.error(format!("Type {other} takes no parameters"))),
        }
        self.expect_symbol(")", "Expected )")
    }

    /// Parses a string or number literal.
    fn parse_literal(&mut self) -> Result<Operand, ParseError> {
        let literal = match &self.current.kind {
            TokenKind::IntVal(n) => Operand::Int(*n),
            TokenKind::RealVal(r) => Operand::Real(*r),
            TokenKind::TextVal(text) => Operand::Text(text.clone()),
            _ => return Err(self.error("Expected a literal")),
        };
        self.advance();
        Ok(literal)
    }

    /// Parses column options until none applies.
    fn parse_field_options(&mut self, field: &mut FieldDef) -> Result<(), ParseError> {
        let mut name = None;
        loop {
            let kind = if self.eat("constraint") {
                name = Some(self.expect_ident("Expected a constraint name")?);
                continue;
            } else if self.eat("default") {
                if self.at_function_call() {
                    ConstraintKind::DefaultFunction {
                        function: self.parse_function_call()?,
                    }
                } else {
                    ConstraintKind::DefaultValue {
                        value: self.parse_value("Expected a default value")?,
                    }
                }
            } else if self.eat("primary") {
                self.expect("key", "Expected key")?;
                ConstraintKind::PrimaryKey
            } else if self.eat("not") {
                self.expect("null", "Expected null")?;
                ConstraintKind::NotNull
            } else if self.eat("null") {
                // Nullable is the default; nothing to record.
                continue;
            } else if self.eat("check") {
                self.expect_symbol("(", "Expected (")?;
                let clause = self.parse_search_clause()?;
                self.expect_symbol(")", "Expected )")?;
                ConstraintKind::Check { clause }
            } else if self.eat("unique") {
                self.expect_symbol("(", "Expected (")?;
                let columns = self.parse_ident_list("Expected a column name")?;
                self.expect_symbol(")", "Expected )")?;
                ConstraintKind::Unique { columns }
            } else if let Some(unit) = self.interval_unit() {
                self.advance();
                ConstraintKind::Interval(self.parse_interval(unit)?)
            } else {
                break;
            };
            field.constraints.push(Constraint {
                name: name.take(),
                kind,
            });
        }
        if name.is_some() {
            return Err(self.error("Expected a constraint"));
        }
        Ok(())
    }

    fn interval_unit(&self) -> Option<IntervalUnit> {
        self.current.word().as_deref().and_then(IntervalUnit::from_word)
    }

    /// Parses the optional `TO unit` after a leading interval unit.
    fn parse_interval(&mut self, quantum_1: IntervalUnit) -> Result<IntervalQualifier, ParseError> {
        let mut quantum_2 = None;
        if self.eat("to") {
            let Some(unit) = self.interval_unit() else {
                return Err(self.error("Expected an interval unit"));
            };
            if !quantum_1.can_narrow_to(unit) {
                return Err(self.error(format!("Cannot use {quantum_1} to {unit}")));
            }
            self.advance();
            quantum_2 = Some(unit);
        }
        Ok(IntervalQualifier {
            quantum_1,
            quantum_2,
        })
    }
}
