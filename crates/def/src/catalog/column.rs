use {crate::ScanType, common::pub_fields_struct, serde::Serialize};

pub_fields_struct! {
    /// A column as it stands after every replayed statement.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct ColumnDefinition {
        name: String,
        /// Base type name without any size suffix, e.g. `varchar`.
        declared_type_name: String,
        /// Full lowercase type, e.g. `varchar(50)` or `int unsigned`.
        column_type: String,
        is_primary_key: bool,
        is_unique: bool,
        is_nullable: bool,
        is_auto_increment: bool,
        /// Only set for variable-length types.
        length: Option<u32>,
        /// Only set for decimal types, together with `scale`.
        precision: Option<u32>,
        scale: Option<u32>,
        default_value: Option<String>,
        comment: Option<String>,
        scan_type: ScanType,
    }
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, declared_type_name: &str, scan_type: ScanType) -> Self {
        Self {
            name: name.into(),
            declared_type_name: declared_type_name.to_string(),
            column_type: declared_type_name.to_string(),
            is_primary_key: false,
            is_unique: false,
            is_nullable: true,
            is_auto_increment: false,
            length: None,
            precision: None,
            scale: None,
            default_value: None,
            comment: None,
            scan_type,
        }
    }
}
