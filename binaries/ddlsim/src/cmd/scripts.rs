use {
    super::error::{Error, ReadScriptSnafu, ReplaySnafu, Result, UnknownTableSnafu},
    catalog::Catalog,
    def::TableDefinition,
    snafu::prelude::*,
    std::{fs, path::PathBuf},
    tracing::{debug, info},
};

/// Expands every directory into the `.sql` files it directly contains, in file name order.
pub fn collect_scripts(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut scripts = vec![];

    for path in paths {
        if !path.is_dir() {
            scripts.push(path.clone());
            continue;
        }

        let mut entries = fs::read_dir(path)
            .context(ReadScriptSnafu { path })?
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<std::io::Result<Vec<_>>>()
            .context(ReadScriptSnafu { path })?;

        entries.retain(|entry| {
            entry.is_file() && entry.extension().map_or(false, |ext| ext == "sql")
        });
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        debug!(dir = %path.display(), scripts = entries.len(), "collected migration directory");
        scripts.extend(entries);
    }

    Ok(scripts)
}

/// Replays the scripts in order into a fresh catalog.
pub fn replay(scripts: &[PathBuf]) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    for path in scripts {
        let sql = fs::read_to_string(path).context(ReadScriptSnafu { path })?;

        let applied = match catalog.apply_sql(&sql) {
            Ok(applied) => applied,
            Err(catalog::Error::Parse { source }) => {
                let offset = source.location().unwrap_or(sql.len());
                let (line, column) = parser::line_col(&sql, offset);

                return Err(Error::Parse {
                    path: path.clone(),
                    line,
                    column,
                    source,
                });
            }
            Err(e) => return Err(e).context(ReplaySnafu { path }),
        };

        info!(script = %path.display(), applied, "replayed script");
    }

    Ok(catalog)
}

/// All tables when `names` is empty, otherwise the named ones in the given order.
pub fn select_tables<'a>(
    catalog: &'a Catalog,
    names: &[String],
) -> Result<Vec<&'a TableDefinition>> {
    if names.is_empty() {
        return Ok(catalog.tables().values().collect());
    }

    names
        .iter()
        .map(|name| catalog.table(name).context(UnknownTableSnafu { name }))
        .collect()
}
