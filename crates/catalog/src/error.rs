use snafu::prelude::*;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("table '{}' already exists", name))]
    DuplicateTable { name: String },

    #[snafu(display("table '{}' does not exist", name))]
    TableNotFound { name: String },

    #[snafu(display("failed to parse script, {}", source))]
    Parse { source: parser::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
