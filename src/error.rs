use std::{io, path};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: path::PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
