//! A lexer and parser for MySQL-flavoured DDL scripts.
//!
//! `CREATE TABLE`, `ALTER TABLE` and `DROP TABLE` are parsed in detail, every other statement is
//! recognised by its terminating semicolon and returned as [`ast::Statement::Other`].
mod lexer;
mod parser;

pub use self::{
    lexer::Error as LexingError,
    parser::{Error, Parser, Result},
};

/// Converts a byte offset into `src` to a 1-based line and column.
pub fn line_col(src: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(src.len());
    let before = src.get(..offset).unwrap_or(src);

    let line = before.matches('\n').count() + 1;
    let column = match before.rfind('\n') {
        Some(i) => before[i + 1..].chars().count() + 1,
        None => before.chars().count() + 1,
    };

    (line, column)
}
