//! An in-memory schema catalog kept up to date by replaying DDL statements.
//!
//! ```
//! use catalog::Catalog;
//!
//! let mut catalog = Catalog::new();
//! catalog
//!     .apply_sql("CREATE TABLE users (id INT PRIMARY KEY, name VARCHAR(50));")
//!     .unwrap();
//!
//! assert_eq!(catalog.table("users").unwrap().column_names(), vec!["id", "name"]);
//! ```

pub mod column_editor;
mod error;
pub mod index_extractor;
mod stmt;
pub mod type_mapper;

pub use error::{Error, Result};

use {
    ast::Statement,
    def::TableDefinition,
    error::ParseSnafu,
    parser::Parser,
    snafu::prelude::*,
    std::collections::BTreeMap,
    tracing::{debug, instrument, trace},
};

/// Table definitions by name.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Catalog {
    tables: BTreeMap<String, TableDefinition>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tables(&self) -> &BTreeMap<String, TableDefinition> {
        &self.tables
    }

    pub fn table(&self, name: &str) -> Option<&TableDefinition> {
        self.tables.get(name)
    }

    /// Applies one statement. A failed statement leaves the catalog as it was.
    pub fn apply(&mut self, stmt: Statement) -> Result<()> {
        match stmt {
            Statement::CreateTable(stmt) => self.create_table(stmt),
            Statement::AlterTable(stmt) => self.alter_table(stmt),
            Statement::DropTable(stmt) => self.drop_tables(stmt),
            Statement::Other => {
                trace!("ignoring statement");
                Ok(())
            }
        }
    }

    /// Parses a whole script, then applies its statements in order and stops at the first
    /// failure. Nothing is applied when the script does not parse.
    ///
    /// Returns the number of table statements applied.
    #[instrument(skip_all, fields(bytes = sql.len()))]
    pub fn apply_sql(&mut self, sql: &str) -> Result<usize> {
        let stmts = Parser::parse(sql).context(ParseSnafu)?;
        debug!(statements = stmts.len(), "parsed script");

        let mut applied = 0;
        for stmt in stmts {
            let is_table_stmt = !matches!(stmt, Statement::Other);
            self.apply(stmt)?;

            if is_table_stmt {
                applied += 1;
            }
        }

        Ok(applied)
    }
}
