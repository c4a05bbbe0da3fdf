use std::path::PathBuf;

use crate::material::{MaterialRecord, Password};

/// Legacy path input, either one file or several.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSource {
    Single(PathBuf),
    Many(Vec<PathBuf>),
}

impl PathSource {
    pub fn paths(&self) -> &[PathBuf] {
        match self {
            PathSource::Single(path) => std::slice::from_ref(path),
            PathSource::Many(paths) => paths,
        }
    }
}

impl From<&str> for PathSource {
    fn from(path: &str) -> Self {
        PathSource::Single(PathBuf::from(path))
    }
}

impl From<PathBuf> for PathSource {
    fn from(path: PathBuf) -> Self {
        PathSource::Single(path)
    }
}

impl From<Vec<PathBuf>> for PathSource {
    fn from(paths: Vec<PathBuf>) -> Self {
        PathSource::Many(paths)
    }
}

/// Everything a single load draws from.
///
/// Records come out in field order: `private_key`, `certificate`,
/// `private_key_pem`, `certificate_pem`, then material found in
/// `key_buffers` and finally `cert_buffers`. The path fields are read
/// before any buffer is interpreted and appended to the end of the matching
/// buffer list.
#[derive(Debug, Clone, Default)]
pub struct SourceConfiguration {
    /// Already decoded key; ignored unless it is a private key record.
    pub private_key: Option<MaterialRecord>,
    /// Already decoded certificate; ignored unless it is a certificate record.
    pub certificate: Option<MaterialRecord>,
    pub private_key_pem: Option<String>,
    pub certificate_pem: Option<String>,
    pub password: Option<Password>,
    /// Algorithm hint for the password protected container.
    pub algorithm: Option<String>,
    /// Keystores or password protected containers.
    pub key_buffers: Vec<Vec<u8>>,
    /// PEM encoded certificates.
    pub cert_buffers: Vec<Vec<u8>>,
    /// Deprecated: read the files and pass them in `key_buffers`.
    pub private_key_path: Option<PathSource>,
    /// Deprecated: read the files and pass them in `cert_buffers`.
    pub certificate_path: Option<PathSource>,
}
