use {
    crate::{
        error::{Result, TableNotFoundSnafu},
        Catalog,
    },
    ast::DropTableStmt,
    tracing::debug,
};

impl Catalog {
    /// Every name is checked before any table is dropped.
    pub(crate) fn drop_tables(&mut self, stmt: DropTableStmt) -> Result<()> {
        let DropTableStmt { if_exists, names } = stmt;

        if !if_exists {
            if let Some(name) = names.iter().find(|name| !self.tables.contains_key(&name.0)) {
                return TableNotFoundSnafu { name: &name.0 }.fail();
            }
        }

        for name in names {
            match self.tables.remove(&name.0) {
                Some(_) => debug!(table = %name, "dropped table"),
                None => debug!(table = %name, "table does not exist, skipped"),
            }
        }

        Ok(())
    }
}
