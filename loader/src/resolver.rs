//! Turning a parsed keystore into usable key material.

use jks::Keystore;
use tracing::debug;

use crate::collaborator::BoxError;
use crate::material::{MaterialRecord, Password};

/// Decrypts the keys of a keystore and decodes its certificates.
///
/// Records returned here are appended to the load output in the order
/// given, at the position of the keystore's buffer.
pub trait KeystoreResolver: Send + Sync {
    fn resolve(
        &self,
        keystore: &Keystore,
        password: Option<&Password>,
    ) -> Result<Vec<MaterialRecord>, BoxError>;
}

/// Resolves nothing. Keystore keys stay locked until a real resolver is
/// plugged in with [`crate::Loader::with_resolver`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopResolver;

impl KeystoreResolver for NoopResolver {
    fn resolve(
        &self,
        keystore: &Keystore,
        _password: Option<&Password>,
    ) -> Result<Vec<MaterialRecord>, BoxError> {
        debug!(
            entries = keystore.len(),
            "keystore material resolution is disabled"
        );
        Ok(Vec::new())
    }
}
