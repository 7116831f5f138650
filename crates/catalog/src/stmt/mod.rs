mod alter_table;
mod create_table;
mod drop_table;
