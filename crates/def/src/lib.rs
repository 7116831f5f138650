pub mod catalog;
mod scan_type;
mod value;

pub use {
    catalog::{ColumnDefinition, IndexDefinition, TableDefinition},
    scan_type::ScanType,
    value::Value,
};
