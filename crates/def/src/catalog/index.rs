use {common::pub_fields_struct, serde::Serialize};

pub_fields_struct! {
    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct IndexDefinition {
        table_name: String,
        /// Empty for unnamed constraints.
        name: String,
        columns: Vec<String>,
        is_primary_key: bool,
        is_unique: bool,
    }
}
