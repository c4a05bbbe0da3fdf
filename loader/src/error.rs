use std::path::PathBuf;

use thiserror::Error;

use crate::collaborator::BoxError;

/// Why a load failed. Any failing source fails the whole load.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed keystore: {0}")]
    Keystore(#[from] jks::Error),

    /// The buffer was neither a keystore nor a container the configured
    /// opener accepted.
    #[error("cannot load key from store")]
    CannotLoadKey(#[source] BoxError),

    #[error("cannot decode private key: {0}")]
    PrivateKey(#[source] BoxError),

    #[error("cannot decode certificate: {0}")]
    Certificate(#[source] BoxError),

    #[error("cannot resolve keystore material: {0}")]
    Resolver(#[source] BoxError),

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
