use {snafu::prelude::*, std::path::PathBuf};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display("failed to read {}, source: {}", path.display(), source))]
    ReadScript {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("{}:{}:{}: {}", path.display(), line, column, source))]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        source: parser::Error,
    },

    #[snafu(display("failed to replay {}, source: {}", path.display(), source))]
    Replay {
        path: PathBuf,
        source: catalog::Error,
    },

    #[snafu(display("table '{}' does not exist after replay", name))]
    UnknownTable { name: String },

    #[snafu(display("failed to render JSON, source: {}", source))]
    Render { source: serde_json::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
