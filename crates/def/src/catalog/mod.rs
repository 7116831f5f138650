mod column;
mod index;
mod table;

pub use {column::ColumnDefinition, index::IndexDefinition, table::TableDefinition};
