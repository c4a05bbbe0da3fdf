use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("keystore error: {0}")]
    Keystore(#[from] jks::Error),

    #[error("not a JKS keystore")]
    NotKeystore,

    #[error("{0}")]
    Load(#[from] loader::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("invalid sources file {}: {message}", .path.display())]
    SourcesFile { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
