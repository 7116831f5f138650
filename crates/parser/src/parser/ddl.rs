use {
    super::{
        common::match_token,
        error::{Error, Result},
        Parser,
    },
    ast::{
        expr::Expression,
        token::{Keyword, Token},
        AlterSpec, AlterTableStmt, Column, ColumnOption, ColumnPosition, ConstraintKind,
        CreateTableStmt, DropTableStmt, Identifier, Spanned, Statement, TableConstraint,
    },
};

enum CreateDefinition {
    Column(Column),
    Constraint(TableConstraint),
}

const fn starts_constraint(keyword: Keyword) -> bool {
    matches!(
        keyword,
        Keyword::CONSTRAINT
            | Keyword::PRIMARY
            | Keyword::UNIQUE
            | Keyword::INDEX
            | Keyword::KEY
            | Keyword::FULLTEXT
            | Keyword::SPATIAL
            | Keyword::FOREIGN
            | Keyword::CHECK
    )
}

impl<'a> Parser<'a> {
    pub(super) fn parse_create(&mut self) -> Result<Statement> {
        self.try_match_keyword(Keyword::TEMPORARY);

        if !self.try_match_keyword(Keyword::TABLE) {
            self.skip_statement()?;
            return Ok(Statement::Other);
        }

        let if_not_exists =
            self.match_keyword_sequence(&[Keyword::IF, Keyword::NOT, Keyword::EXISTS]);
        let name = self.parse_table_name()?;

        // `CREATE TABLE ... LIKE` and `CREATE TABLE ... SELECT` copy another shape
        if self.peek_token() != Some(Token::LeftParen) {
            self.skip_statement()?;
            return Ok(Statement::Other);
        }

        let Spanned(definitions, _) =
            self.parse_comma_separated_within_parentheses(Self::parse_create_definition, false)?;

        let mut columns = vec![];
        let mut constraints = vec![];
        for definition in definitions {
            match definition {
                CreateDefinition::Column(column) => columns.push(column),
                CreateDefinition::Constraint(constraint) => constraints.push(constraint),
            }
        }

        let comment = self.parse_table_options()?;

        Ok(Statement::CreateTable(CreateTableStmt {
            if_not_exists,
            name,
            columns,
            constraints,
            comment,
        }))
    }

    pub(super) fn parse_alter(&mut self) -> Result<Statement> {
        self.try_match_keyword(Keyword::ONLINE);
        self.try_match_keyword(Keyword::IGNORE);

        if !self.try_match_keyword(Keyword::TABLE) {
            self.skip_statement()?;
            return Ok(Statement::Other);
        }

        let name = self.parse_table_name()?;
        let specs = match self.peek_token() {
            None | Some(Token::Semicolon) => vec![],
            _ => self.parse_comma_separated(Self::parse_alter_spec)?,
        };

        Ok(Statement::AlterTable(AlterTableStmt { name, specs }))
    }

    pub(super) fn parse_drop(&mut self) -> Result<Statement> {
        self.try_match_keyword(Keyword::TEMPORARY);

        if !self.try_match_keyword(Keyword::TABLE) {
            self.skip_statement()?;
            return Ok(Statement::Other);
        }

        let if_exists = self.match_keyword_sequence(&[Keyword::IF, Keyword::EXISTS]);
        let names = self.parse_comma_separated(Self::parse_table_name)?;

        if !self.try_match_keyword(Keyword::RESTRICT) {
            self.try_match_keyword(Keyword::CASCADE);
        }

        Ok(Statement::DropTable(DropTableStmt { if_exists, names }))
    }

    fn parse_create_definition(&mut self) -> Result<CreateDefinition> {
        Ok(match self.peek_keyword() {
            Some(keyword) if starts_constraint(keyword) => {
                CreateDefinition::Constraint(self.parse_table_constraint()?)
            }
            _ => CreateDefinition::Column(self.parse_column()?),
        })
    }

    pub(super) fn parse_column(&mut self) -> Result<Column> {
        let name = self.parse_identifier()?;
        let data_type = self.parse_data_type()?;
        let options = self.parse_column_options()?;

        Ok(Column {
            name,
            data_type,
            options,
        })
    }

    /// Known options are collected, the rest (charsets, collations, visibility, storage, ...) is
    /// skipped.
    fn parse_column_options(&mut self) -> Result<Vec<ColumnOption>> {
        let mut options = Vec::new();

        loop {
            let keyword = match self.tokens.peek() {
                None
                | Some(Ok(Spanned(Token::Comma | Token::RightParen | Token::Semicolon, _)))
                | Some(Ok(Spanned(Token::Keyword(Keyword::FIRST | Keyword::AFTER), _))) => break,
                Some(Ok(Spanned(Token::Keyword(keyword), _))) => *keyword,
                Some(Ok(Spanned(Token::LeftParen, span))) => {
                    let begin = *span.start();
                    self.tokens.next();
                    self.skip_parenthesized(begin)?;
                    continue;
                }
                Some(Ok(_)) => {
                    self.tokens.next();
                    continue;
                }
                Some(Err(e)) => return Err(Error::LexingError(e.clone())),
            };
            self.tokens.next();

            let option = match keyword {
                Keyword::NOT if self.try_match_keyword(Keyword::NULL) => ColumnOption::NotNull,
                Keyword::NULL => ColumnOption::Null,
                Keyword::PRIMARY => {
                    self.must_match(Token::Keyword(Keyword::KEY))?;
                    ColumnOption::PrimaryKey
                }
                Keyword::KEY => ColumnOption::PrimaryKey,
                Keyword::UNIQUE => {
                    self.try_match_keyword(Keyword::KEY);
                    ColumnOption::Unique
                }
                Keyword::AUTO_INCREMENT => ColumnOption::AutoIncrement,
                Keyword::DEFAULT => ColumnOption::Default(self.parse_default_expr()?),
                Keyword::ON if self.try_match_keyword(Keyword::UPDATE) => {
                    ColumnOption::OnUpdate(self.parse_default_expr()?)
                }
                Keyword::COMMENT => ColumnOption::Comment(self.parse_string()?),
                Keyword::GENERATED => {
                    self.must_match(Token::Keyword(Keyword::ALWAYS))?;
                    self.must_match(Token::Keyword(Keyword::AS))?;
                    self.parse_generated()?
                }
                Keyword::AS => self.parse_generated()?,
                _ => continue,
            };

            options.push(option);
        }

        Ok(options)
    }

    fn parse_generated(&mut self) -> Result<ColumnOption> {
        let expr = Expression::Raw(self.parse_parenthesized_text()?);
        let stored = self.try_match_keyword(Keyword::STORED);
        if !stored {
            self.try_match_keyword(Keyword::VIRTUAL);
        }

        Ok(ColumnOption::Generated { expr, stored })
    }

    fn parse_table_constraint(&mut self) -> Result<TableConstraint> {
        let symbol = match self.try_match_keyword(Keyword::CONSTRAINT) {
            true => match self.peek_keyword() {
                Some(keyword) if keyword.is_reserved() => None,
                _ => Some(self.parse_identifier()?),
            },
            false => None,
        };

        let (kind, name, columns) = match_token!(self.tokens.next(), {
            Spanned(Token::Keyword(Keyword::PRIMARY), _) => {
                self.must_match(Token::Keyword(Keyword::KEY))?;
                self.skip_index_type()?;
                (ConstraintKind::PrimaryKey, symbol, self.parse_key_parts()?)
            },
            Spanned(Token::Keyword(Keyword::UNIQUE), _) => {
                self.match_index_or_key();
                let name = self.parse_index_name()?.or(symbol);
                (ConstraintKind::Unique, name, self.parse_key_parts()?)
            },
            Spanned(Token::Keyword(Keyword::INDEX | Keyword::KEY), _) => {
                let name = self.parse_index_name()?;
                (ConstraintKind::Index, name, self.parse_key_parts()?)
            },
            Spanned(Token::Keyword(Keyword::FULLTEXT | Keyword::SPATIAL), _) => {
                self.match_index_or_key();
                let name = self.parse_index_name()?;
                (ConstraintKind::Fulltext, name, self.parse_key_parts()?)
            },
            Spanned(Token::Keyword(Keyword::FOREIGN), _) => {
                self.must_match(Token::Keyword(Keyword::KEY))?;
                let name = self.parse_index_name()?.or(symbol);
                let columns = self.parse_key_parts()?;
                self.must_match(Token::Keyword(Keyword::REFERENCES))?;
                let table = self.parse_table_name()?;
                (ConstraintKind::ForeignKey { table }, name, columns)
            },
            Spanned(Token::Keyword(Keyword::CHECK), _) => {
                let expr = Expression::Raw(self.parse_parenthesized_text()?);
                (ConstraintKind::Check(expr), symbol, vec![])
            },
        });

        // index options, `REFERENCES` columns and actions, `[NOT] ENFORCED`
        self.skip_until_delimiter()?;

        Ok(TableConstraint {
            kind,
            name,
            columns,
        })
    }

    fn match_index_or_key(&mut self) {
        if !self.try_match_keyword(Keyword::INDEX) {
            self.try_match_keyword(Keyword::KEY);
        }
    }

    fn parse_index_name(&mut self) -> Result<Option<Identifier>> {
        match self.peek_token() {
            None | Some(Token::LeftParen | Token::Keyword(Keyword::USING)) => Ok(None),
            _ => {
                let name = self.parse_identifier()?;
                self.skip_index_type()?;
                Ok(Some(name))
            }
        }
    }

    /// `USING {BTREE | HASH}`
    fn skip_index_type(&mut self) -> Result<()> {
        if self.try_match_keyword(Keyword::USING) {
            self.parse_identifier()?;
        }

        Ok(())
    }

    /// `(col [(length)] [ASC | DESC], ...)`
    fn parse_key_parts(&mut self) -> Result<Vec<Identifier>> {
        let Spanned(columns, _) = self.parse_comma_separated_within_parentheses(
            |parser| {
                let name = parser.parse_identifier()?;

                if let Some(Spanned(_, span)) = parser.try_match(Token::LeftParen) {
                    parser.skip_parenthesized(*span.start())?;
                }
                if !parser.try_match_keyword(Keyword::ASC) {
                    parser.try_match_keyword(Keyword::DESC);
                }

                Ok(name)
            },
            false,
        )?;

        Ok(columns)
    }

    /// Returns the table comment, every other option is skipped.
    fn parse_table_options(&mut self) -> Result<Option<String>> {
        let mut comment = None;

        loop {
            match self.peek_token() {
                None | Some(Token::Semicolon) => break,
                Some(Token::Keyword(Keyword::COMMENT)) => {
                    self.tokens.next();
                    self.try_match(Token::Equal);
                    comment = Some(self.parse_string()?);
                }
                Some(Token::LeftParen) => {
                    let Spanned(_, span) = self.next_token()?;
                    self.skip_parenthesized(*span.start())?;
                }
                Some(_) => {
                    self.tokens.next();
                }
            }
        }

        // surfaces a lexing error hidden by `peek_token`
        self.expect_statement_end()?;

        Ok(comment)
    }

    fn parse_alter_spec(&mut self) -> Result<AlterSpec> {
        let keyword = match self.peek_keyword() {
            Some(keyword @ (Keyword::ADD | Keyword::DROP | Keyword::MODIFY | Keyword::CHANGE)) => {
                keyword
            }
            _ => {
                self.skip_until_delimiter()?;
                return Ok(AlterSpec::Other);
            }
        };
        self.tokens.next();

        let has_column_keyword = self.try_match_keyword(Keyword::COLUMN);

        // `ADD INDEX`, `DROP PRIMARY KEY`, `ADD PARTITION`, ...
        if !has_column_keyword && matches!(self.peek_keyword(), Some(k) if k.is_reserved()) {
            self.skip_until_delimiter()?;
            return Ok(AlterSpec::Other);
        }

        let spec = match keyword {
            Keyword::ADD if self.peek_token() == Some(Token::LeftParen) => {
                let Spanned(columns, _) =
                    self.parse_comma_separated_within_parentheses(Self::parse_column, false)?;
                AlterSpec::AddColumns {
                    columns,
                    position: None,
                }
            }
            Keyword::ADD => AlterSpec::AddColumns {
                columns: vec![self.parse_column()?],
                position: self.parse_column_position()?,
            },
            Keyword::DROP => AlterSpec::DropColumn {
                name: self.parse_identifier()?,
            },
            Keyword::MODIFY => AlterSpec::ModifyColumn {
                column: self.parse_column()?,
                position: self.parse_column_position()?,
            },
            _ => AlterSpec::ChangeColumn {
                old_name: self.parse_identifier()?,
                column: self.parse_column()?,
                position: self.parse_column_position()?,
            },
        };

        Ok(spec)
    }

    fn parse_column_position(&mut self) -> Result<Option<ColumnPosition>> {
        Ok(match self.peek_keyword() {
            Some(Keyword::FIRST) => {
                self.tokens.next();
                Some(ColumnPosition::First)
            }
            Some(Keyword::AFTER) => {
                self.tokens.next();
                Some(ColumnPosition::After(self.parse_identifier()?))
            }
            _ => None,
        })
    }
}
