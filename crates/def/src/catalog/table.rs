use {
    super::{ColumnDefinition, IndexDefinition},
    crate::Value,
    common::pub_fields_struct,
    serde::Serialize,
};

pub_fields_struct! {
    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct TableDefinition {
        name: String,
        comment: String,
        columns: Vec<ColumnDefinition>,
        indexes: Vec<IndexDefinition>,
    }
}

impl TableDefinition {
    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|col| col.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|col| col.name.as_str()).collect()
    }

    pub fn primary_key(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|col| col.is_primary_key)
            .map(|col| col.name.as_str())
            .collect()
    }

    /// Fabricates one row with a value for every column, in column order.
    ///
    /// A column's default is used when it can be read as the column's scan type, otherwise the
    /// scan type's sample value. String samples are cut to the declared length.
    pub fn sample_row(&self) -> Vec<Value> {
        self.columns
            .iter()
            .map(|col| {
                let value = col
                    .default_value
                    .as_deref()
                    .and_then(|text| col.scan_type.parse_value(text))
                    .unwrap_or_else(|| col.scan_type.sample_value());

                match (value, col.length) {
                    (Value::String(s), Some(len)) => {
                        Value::String(s.chars().take(len as usize).collect())
                    }
                    (value, _) => value,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::ScanType};

    fn table() -> TableDefinition {
        let mut id = ColumnDefinition::new("id", "bigint", ScanType::Int64);
        id.is_primary_key = true;

        let mut code = ColumnDefinition::new("code", "varchar", ScanType::String);
        code.length = Some(3);

        let mut active = ColumnDefinition::new("active", "boolean", ScanType::Bool);
        active.default_value = Some("0".to_string());

        let mut created = ColumnDefinition::new("created", "datetime", ScanType::Timestamp);
        created.default_value = Some("CURRENT_TIMESTAMP".to_string());

        TableDefinition {
            name: "t".to_string(),
            comment: String::new(),
            columns: vec![id, code, active, created],
            indexes: vec![],
        }
    }

    #[test]
    fn lookups() {
        let table = table();

        assert_eq!(table.column_names(), vec!["id", "code", "active", "created"]);
        assert_eq!(table.primary_key(), vec!["id"]);
        assert!(table.column("code").is_some());
        assert!(table.column("CODE").is_none());
    }

    #[test]
    fn sample_row() {
        assert_eq!(
            table().sample_row(),
            vec![
                Value::Int64(1),
                Value::String("sam".to_string()),
                Value::Bool(false),
                ScanType::Timestamp.sample_value(),
            ]
        );
    }
}
