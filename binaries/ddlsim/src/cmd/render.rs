use {
    super::error::{RenderSnafu, Result},
    def::{ColumnDefinition, IndexDefinition, TableDefinition, Value},
    serde::Serialize,
    snafu::prelude::*,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct TableReport<'a> {
    #[serde(flatten)]
    table: &'a TableDefinition,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample_row: Option<Vec<Value>>,
}

pub fn render(tables: &[&TableDefinition], format: Format, sample: bool) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(tables, sample)),
        Format::Json => render_json(tables, sample),
    }
}

fn render_json(tables: &[&TableDefinition], sample: bool) -> Result<String> {
    let reports = tables
        .iter()
        .map(|&table| TableReport {
            table,
            sample_row: sample.then(|| table.sample_row()),
        })
        .collect::<Vec<_>>();

    serde_json::to_string_pretty(&reports).context(RenderSnafu)
}

fn render_text(tables: &[&TableDefinition], sample: bool) -> String {
    tables
        .iter()
        .map(|table| table_text(table, sample))
        .collect::<Vec<_>>()
        .join("\n")
}

fn table_text(table: &TableDefinition, sample: bool) -> String {
    let mut out = match table.comment.is_empty() {
        true => format!("{}\n", table.name),
        false => format!("{}  -- {}\n", table.name, table.comment),
    };

    let width = table
        .columns
        .iter()
        .map(|col| col.name.len())
        .max()
        .unwrap_or_default();
    for col in &table.columns {
        out.push_str(&format!("  {:<width$}  {}\n", col.name, column_text(col)));
    }

    for index in &table.indexes {
        out.push_str(&format!("  {}\n", index_text(index)));
    }

    if sample {
        let values = table
            .sample_row()
            .iter()
            .map(|value| match value {
                Value::String(s) => quote(s),
                value => value.to_string(),
            })
            .collect::<Vec<_>>();
        out.push_str(&format!("  sample: ({})\n", values.join(", ")));
    }

    out
}

fn column_text(col: &ColumnDefinition) -> String {
    let mut parts = vec![col.column_type.clone()];

    if !col.is_nullable {
        parts.push("NOT NULL".to_string());
    }
    if col.is_primary_key {
        parts.push("PRIMARY KEY".to_string());
    }
    if col.is_unique {
        parts.push("UNIQUE".to_string());
    }
    if col.is_auto_increment {
        parts.push("AUTO_INCREMENT".to_string());
    }
    if let Some(default) = &col.default_value {
        parts.push(format!("DEFAULT {}", quote(default)));
    }
    if let Some(comment) = &col.comment {
        parts.push(format!("COMMENT {}", quote(comment)));
    }

    format!("{}  [{}]", parts.join(" "), col.scan_type)
}

fn index_text(index: &IndexDefinition) -> String {
    let kind = match (index.is_primary_key, index.is_unique) {
        (true, _) => "PRIMARY KEY",
        (false, true) => "UNIQUE KEY",
        (false, false) => "KEY",
    };
    let columns = index.columns.join(", ");

    match index.name.is_empty() {
        true => format!("{} ({})", kind, columns),
        false => format!("{} {} ({})", kind, index.name, columns),
    }
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
