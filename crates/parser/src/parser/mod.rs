mod common;
mod data_type;
mod ddl;
mod error;
mod expr;

pub use self::error::{Error, Result};

use {
    crate::lexer::Lexer,
    ast::{
        token::{Keyword, Token},
        Spanned, Statement,
    },
};

use ::common::{MultiPeek, MultiPeekable};

pub struct Parser<'a> {
    src: &'a str,
    tokens: MultiPeekable<Lexer<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            tokens: Lexer::new(src).multi_peekable(),
        }
    }

    /// Parses a whole script, failing on the first malformed statement.
    pub fn parse(sql: &'a str) -> Result<Vec<Statement>> {
        Self::new(sql).collect()
    }

    fn parse_statement(&mut self) -> Option<Result<Statement>> {
        let stmt = match self.tokens.next()? {
            Ok(Spanned(Token::Keyword(Keyword::CREATE), _)) => self.parse_create(),
            Ok(Spanned(Token::Keyword(Keyword::ALTER), _)) => self.parse_alter(),
            Ok(Spanned(Token::Keyword(Keyword::DROP), _)) => self.parse_drop(),
            Ok(_) => self.skip_statement().map(|_| Statement::Other),
            Err(e) => Err(Error::LexingError(e)),
        };

        Some(stmt.and_then(|stmt| self.expect_statement_end().map(|_| stmt)))
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Result<Statement>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_semicolons();
        self.parse_statement()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        ast::{expr::*, identifier_from_str, *},
    };

    fn column(name: &str, data_type: DataType, options: Vec<ColumnOption>) -> Column {
        Column {
            name: identifier_from_str(name),
            data_type,
            options,
        }
    }

    #[test]
    fn parse_ddl() {
        let sql = "
            -- initial schema
            CReaTe TABLE if NOT Exists `users` (
                id bigint unsigned NOT NULL AUTO_INCREMENT,
                name varchar(50) NOT NULL DEFAULT '' COMMENT 'display name',
                PRIMARY KEY (id),
                UNIQUE KEY uk_name (name)
            ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COMMENT='people';

            INSERT INTO users (name) VALUES ('a;b');

            ALTER TABLE users ADD COLUMN age int AFTER id, DROP COLUMN name;

            DROP TABLE IF EXISTS users, app.orders;
        ";

        let mut id_type = DataType::new(TypeName::BigInt);
        id_type.unsigned = true;

        let expected_output = vec![
            Statement::CreateTable(CreateTableStmt {
                if_not_exists: true,
                name: identifier_from_str("users"),
                columns: vec![
                    column(
                        "id",
                        id_type,
                        vec![ColumnOption::NotNull, ColumnOption::AutoIncrement],
                    ),
                    column(
                        "name",
                        DataType::with_length(TypeName::Varchar, 50),
                        vec![
                            ColumnOption::NotNull,
                            ColumnOption::Default(Literal::String("".to_string()).into()),
                            ColumnOption::Comment("display name".to_string()),
                        ],
                    ),
                ],
                constraints: vec![
                    TableConstraint {
                        kind: ConstraintKind::PrimaryKey,
                        name: None,
                        columns: vec![identifier_from_str("id")],
                    },
                    TableConstraint {
                        kind: ConstraintKind::Unique,
                        name: Some(identifier_from_str("uk_name")),
                        columns: vec![identifier_from_str("name")],
                    },
                ],
                comment: Some("people".to_string()),
            }),
            Statement::Other,
            Statement::AlterTable(AlterTableStmt {
                name: identifier_from_str("users"),
                specs: vec![
                    AlterSpec::AddColumns {
                        columns: vec![column("age", DataType::new(TypeName::Int), vec![])],
                        position: Some(ColumnPosition::After(identifier_from_str("id"))),
                    },
                    AlterSpec::DropColumn {
                        name: identifier_from_str("name"),
                    },
                ],
            }),
            Statement::DropTable(DropTableStmt {
                if_exists: true,
                names: vec![identifier_from_str("users"), identifier_from_str("orders")],
            }),
        ];

        let output = Parser::parse(sql).unwrap();

        assert_eq!(output.len(), expected_output.len());
        std::iter::zip(output, expected_output).for_each(|(a, b)| {
            assert_eq!(a, b);
        });
    }

    #[test]
    fn skip_other_statements() {
        let sql = "
            SET NAMES utf8mb4;
            /*!40101 SET @OLD_CHARACTER_SET_CLIENT=@@CHARACTER_SET_CLIENT */;
            CREATE INDEX idx_a ON t (a);
            CREATE VIEW v AS SELECT 1;
            DROP INDEX idx_a ON t;
            ALTER DATABASE d CHARACTER SET utf8;;
        ";

        let output = Parser::parse(sql).unwrap();

        assert_eq!(output.len(), 5);
        assert!(output.iter().all(|stmt| *stmt == Statement::Other));
    }

    #[test]
    fn reject_trailing_tokens() {
        let sql = "DROP TABLE a b;";

        assert_eq!(
            Parser::parse(sql),
            Err(Error::SyntaxError(13..=13))
        );
    }

    #[test]
    fn stop_at_first_error() {
        let sql = "DROP TABLE a; CREATE TABLE (id int); DROP TABLE b;";
        let mut parser = Parser::new(sql);

        assert!(matches!(parser.next(), Some(Ok(Statement::DropTable(_)))));
        assert!(matches!(parser.next(), Some(Err(Error::SyntaxError(_)))));
        assert_eq!(Parser::parse(sql).map(|_| ()), Err(Error::SyntaxError(27..=27)));
    }

    #[test]
    fn lexing_error_is_reported() {
        let sql = "CREATE TABLE t (name varchar(10) DEFAULT 'abc);";

        assert!(matches!(
            Parser::parse(sql),
            Err(Error::LexingError(crate::LexingError::NoClosingQuoteForString(_)))
        ));
    }
}
