mod common;
pub mod expr;
mod stmt;
pub mod token;

pub use crate::{common::*, stmt::*};

/// A parsed statement. Only the statements that change the shape of tables are kept in detail,
/// everything else is recognised and skipped as [`Statement::Other`].
#[derive(Debug, PartialEq)]
pub enum Statement {
    CreateTable(CreateTableStmt),
    AlterTable(AlterTableStmt),
    DropTable(DropTableStmt),
    Other,
}
