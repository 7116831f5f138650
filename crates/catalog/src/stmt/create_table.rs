use {
    crate::{
        column_editor::{self, Position},
        error::{DuplicateTableSnafu, Result},
        index_extractor, type_mapper, Catalog,
    },
    ast::CreateTableStmt,
    def::TableDefinition,
    tracing::debug,
};

impl Catalog {
    pub(crate) fn create_table(&mut self, stmt: CreateTableStmt) -> Result<()> {
        let CreateTableStmt {
            if_not_exists,
            name,
            columns,
            constraints,
            comment,
        } = stmt;
        let name = name.0;

        if self.tables.contains_key(&name) {
            if if_not_exists {
                debug!(table = %name, "table already exists, skipped");
                return Ok(());
            }
            return DuplicateTableSnafu { name }.fail();
        }

        let mut table = TableDefinition {
            name: name.clone(),
            comment: comment.unwrap_or_default(),
            columns: Vec::with_capacity(columns.len()),
            indexes: index_extractor::extract_indexes(&name, &constraints),
        };

        for column in &columns {
            column_editor::insert(
                &mut table.columns,
                type_mapper::map_column(column),
                Position::End,
            );
        }

        for index in table.indexes.iter().filter(|index| index.is_primary_key) {
            table
                .columns
                .iter_mut()
                .filter(|col| index.columns.contains(&col.name))
                .for_each(|col| col.is_primary_key = true);
        }

        debug!(table = %name, columns = table.columns.len(), "created table");
        self.tables.insert(name, table);

        Ok(())
    }
}
