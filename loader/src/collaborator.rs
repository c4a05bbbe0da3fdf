//! Seams to the services a load depends on but does not implement.

use std::collections::HashSet;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing::warn;

use crate::material::{Certificate, Password, PrivateKey};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Decodes PEM text into key material.
pub trait PemDecoder: Send + Sync {
    fn private_key(&self, pem: &str) -> Result<PrivateKey, BoxError>;

    fn certificate(&self, pem: &str) -> Result<Certificate, BoxError>;
}

/// Decodes a DER certificate.
pub trait DerDecoder: Send + Sync {
    fn certificate(&self, der: &[u8]) -> Result<Certificate, BoxError>;
}

/// What a password protected container yielded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerContents {
    pub keys: Vec<PrivateKey>,
    /// DER encoded certificates
    pub certs: Vec<Vec<u8>>,
}

/// Opens password protected key containers such as PKCS#12.
///
/// Must fail on a wrong password or a corrupt container.
pub trait ProtectedContainer: Send + Sync {
    fn open(
        &self,
        bytes: &[u8],
        password: Option<&Password>,
        algorithm: Option<&str>,
    ) -> Result<ContainerContents, BoxError>;
}

#[derive(Debug, Error)]
#[error("no password protected container support is configured")]
pub struct NoContainerSupport;

/// Rejects every container.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedContainer;

impl ProtectedContainer for UnsupportedContainer {
    fn open(
        &self,
        _bytes: &[u8],
        _password: Option<&Password>,
        _algorithm: Option<&str>,
    ) -> Result<ContainerContents, BoxError> {
        Err(Box::new(NoContainerSupport))
    }
}

/// Receives deprecation notices. Never fails.
pub trait DeprecationNotifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Logs each distinct notice once as a warning.
#[derive(Debug, Default)]
pub struct TracingNotifier {
    seen: Mutex<HashSet<String>>,
}

impl DeprecationNotifier for TracingNotifier {
    fn notify(&self, message: &str) {
        let first = self
            .seen
            .lock()
            .map(|mut seen| seen.insert(message.to_string()))
            .unwrap_or(true);
        if first {
            warn!(target: "keyloom::deprecation", "{message}");
        }
    }
}

/// Reads the files named by the legacy path fields.
pub trait SourceReader: Send + Sync {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FsReader;

impl SourceReader for FsReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{DeprecationNotifier, ProtectedContainer, TracingNotifier, UnsupportedContainer};

    #[test]
    fn test_unsupported_container_rejects() {
        let err = UnsupportedContainer
            .open(&[0x30, 0x00], None, None)
            .unwrap_err();
        assert_eq!(
            "no password protected container support is configured",
            err.to_string()
        );
    }

    #[test]
    fn test_tracing_notifier_remembers_messages() {
        let notifier = TracingNotifier::default();
        notifier.notify("old field");
        notifier.notify("old field");
        notifier.notify("other field");
        let seen = notifier.seen.lock().unwrap();
        assert_eq!(2, seen.len());
        assert!(seen.contains("old field"));
    }
}
