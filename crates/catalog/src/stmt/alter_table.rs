use {
    crate::{
        column_editor::{self, Position},
        error::{Result, TableNotFoundSnafu},
        type_mapper, Catalog,
    },
    ast::{AlterSpec, AlterTableStmt, ColumnPosition},
    def::ColumnDefinition,
    snafu::prelude::*,
    tracing::{debug, trace},
};

impl Catalog {
    pub(crate) fn alter_table(&mut self, stmt: AlterTableStmt) -> Result<()> {
        let AlterTableStmt { name, specs } = stmt;
        let table = self
            .tables
            .get_mut(&name.0)
            .context(TableNotFoundSnafu { name: &name.0 })?;

        for spec in specs {
            let columns = &mut table.columns;

            match spec {
                AlterSpec::AddColumns { columns: added, position } => {
                    let mut position = position.map_or(Position::End, Position::from);

                    for column in added.iter().map(type_mapper::map_column) {
                        // later columns of `ADD (...)` follow the one before
                        let next = match position {
                            Position::End => Position::End,
                            _ => Position::After(column.name.clone()),
                        };
                        column_editor::insert(columns, column, position);
                        position = next;
                    }
                }
                AlterSpec::DropColumn { name: column } => {
                    if column_editor::remove(columns, &column.0).is_none() {
                        trace!(table = %name, column = %column, "column does not exist");
                    }
                }
                AlterSpec::ModifyColumn { column, position } => {
                    let column = type_mapper::map_column(&column);
                    let old_name = column.name.clone();
                    place(columns, &old_name, column, position);
                }
                AlterSpec::ChangeColumn {
                    old_name,
                    column,
                    position,
                } => {
                    let column = type_mapper::map_column(&column);
                    place(columns, &old_name.0, column, position);
                }
                AlterSpec::Other => {
                    trace!(table = %name, "ignoring alter spec");
                }
            }
        }

        debug!(table = %name, columns = table.columns.len(), "altered table");

        Ok(())
    }
}

/// Drops `old_name`, then adds `column` like `ADD COLUMN` would.
fn place(
    columns: &mut Vec<ColumnDefinition>,
    old_name: &str,
    column: ColumnDefinition,
    position: Option<ColumnPosition>,
) {
    column_editor::remove(columns, old_name);
    column_editor::insert(columns, column, position.map_or(Position::End, Position::from));
}

#[cfg(test)]
mod tests {
    use crate::{Catalog, Error};

    fn catalog_with(sql: &str) -> Catalog {
        let mut catalog = Catalog::new();
        catalog.apply_sql(sql).unwrap();
        catalog
    }

    fn columns(catalog: &Catalog, table: &str) -> Vec<String> {
        catalog
            .table(table)
            .unwrap()
            .column_names()
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn alter_missing_table() {
        let mut catalog = catalog_with("CREATE TABLE t (a INT)");
        let before = catalog.clone();

        assert_eq!(
            catalog.apply_sql("ALTER TABLE nope ADD COLUMN b INT"),
            Err(Error::TableNotFound {
                name: "nope".to_string()
            })
        );
        assert_eq!(catalog, before);
    }

    #[test]
    fn add_after() {
        let mut catalog = catalog_with("CREATE TABLE t (a INT, b INT, c INT)");
        catalog
            .apply_sql("ALTER TABLE t ADD COLUMN x INT AFTER a")
            .unwrap();

        assert_eq!(columns(&catalog, "t"), vec!["a", "x", "b", "c"]);
    }

    #[test]
    fn add_existing_column_replaces_it() {
        let mut catalog = catalog_with("CREATE TABLE t (a INT, b INT, c INT)");
        catalog
            .apply_sql("ALTER TABLE t ADD COLUMN b VARCHAR(10)")
            .unwrap();

        assert_eq!(columns(&catalog, "t"), vec!["a", "c", "b"]);
        assert_eq!(
            catalog.table("t").unwrap().columns[2].column_type,
            "varchar(10)"
        );
    }

    #[test]
    fn add_several_columns() {
        let mut catalog = catalog_with("CREATE TABLE t (a INT, b INT)");
        catalog
            .apply_sql("ALTER TABLE t ADD (x INT, y INT), ADD z INT FIRST, ADD COLUMN w INT AFTER nope")
            .unwrap();

        assert_eq!(columns(&catalog, "t"), vec!["z", "a", "b", "x", "y", "w"]);
    }

    #[test]
    fn drop_columns() {
        let mut catalog = catalog_with("CREATE TABLE t (a INT, b INT)");
        catalog
            .apply_sql("ALTER TABLE t DROP COLUMN a, DROP missing, DROP PRIMARY KEY")
            .unwrap();

        assert_eq!(columns(&catalog, "t"), vec!["b"]);
    }

    #[test]
    fn modify_and_change() {
        let mut catalog = catalog_with("CREATE TABLE t (a INT, b INT, c INT)");

        catalog
            .apply_sql("ALTER TABLE t MODIFY b BIGINT NOT NULL")
            .unwrap();
        assert_eq!(columns(&catalog, "t"), vec!["a", "c", "b"]);
        let b = catalog.table("t").unwrap().column("b").unwrap();
        assert_eq!(b.column_type, "bigint");
        assert!(!b.is_nullable);

        catalog
            .apply_sql("ALTER TABLE t CHANGE COLUMN a d TEXT")
            .unwrap();
        assert_eq!(columns(&catalog, "t"), vec!["c", "b", "d"]);

        catalog
            .apply_sql("ALTER TABLE t MODIFY b INT FIRST, CHANGE d e INT AFTER b")
            .unwrap();
        assert_eq!(columns(&catalog, "t"), vec!["b", "e", "c"]);

        // renaming onto an existing column leaves a single column of that name
        catalog
            .apply_sql("ALTER TABLE t CHANGE e c VARCHAR(5)")
            .unwrap();
        assert_eq!(columns(&catalog, "t"), vec!["b", "c"]);
        assert_eq!(
            catalog.table("t").unwrap().column("c").unwrap().column_type,
            "varchar(5)"
        );
    }

    #[test]
    fn change_missing_column_appends() {
        let mut catalog = catalog_with("CREATE TABLE t (a INT, b INT)");
        catalog
            .apply_sql("ALTER TABLE t CHANGE nope x INT, MODIFY y INT")
            .unwrap();

        assert_eq!(columns(&catalog, "t"), vec!["a", "b", "x", "y"]);
    }

    #[test]
    fn ignored_specs() {
        let mut catalog = catalog_with("CREATE TABLE t (a INT)");
        let before = catalog.clone();

        catalog
            .apply_sql("ALTER TABLE t ADD INDEX idx_a (a), ENGINE = InnoDB, RENAME TO u")
            .unwrap();

        assert_eq!(catalog, before);
    }
}
