use std::borrow::Cow;

use tracing::debug;

use crate::codec::{DerCodec, PemCodec};
use crate::collaborator::{
    DeprecationNotifier, DerDecoder, FsReader, PemDecoder, ProtectedContainer, SourceReader,
    TracingNotifier, UnsupportedContainer,
};
use crate::config::{PathSource, SourceConfiguration};
use crate::error::{Error, Result};
use crate::garbage::strip_garbage_header;
use crate::material::MaterialRecord;
use crate::resolver::{KeystoreResolver, NoopResolver};

const KEY_PATH_DEPRECATED: &str =
    "private_key_path is deprecated and will be removed, pass key_buffers instead";
const CERT_PATH_DEPRECATED: &str =
    "certificate_path is deprecated and will be removed, pass cert_buffers instead";

/// Loads key material using a set of pluggable collaborators.
///
/// `Loader::default()` decodes PEM and DER itself, reads legacy paths from
/// the filesystem, logs deprecations through `tracing`, leaves keystore keys
/// unresolved and rejects password protected containers.
pub struct Loader {
    pem: Box<dyn PemDecoder>,
    der: Box<dyn DerDecoder>,
    container: Box<dyn ProtectedContainer>,
    resolver: Box<dyn KeystoreResolver>,
    notifier: Box<dyn DeprecationNotifier>,
    reader: Box<dyn SourceReader>,
}

impl Default for Loader {
    fn default() -> Self {
        Loader {
            pem: Box::new(PemCodec),
            der: Box::new(DerCodec),
            container: Box::new(UnsupportedContainer),
            resolver: Box::new(NoopResolver),
            notifier: Box::new(TracingNotifier::default()),
            reader: Box::new(FsReader),
        }
    }
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pem_decoder(mut self, pem: impl PemDecoder + 'static) -> Self {
        self.pem = Box::new(pem);
        self
    }

    pub fn with_der_decoder(mut self, der: impl DerDecoder + 'static) -> Self {
        self.der = Box::new(der);
        self
    }

    pub fn with_container(mut self, container: impl ProtectedContainer + 'static) -> Self {
        self.container = Box::new(container);
        self
    }

    pub fn with_resolver(mut self, resolver: impl KeystoreResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn with_notifier(mut self, notifier: impl DeprecationNotifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_reader(mut self, reader: impl SourceReader + 'static) -> Self {
        self.reader = Box::new(reader);
        self
    }

    /// Collects every private key and certificate `config` describes.
    ///
    /// # Errors
    ///
    /// Fails as soon as one source cannot be read or decoded; nothing is
    /// returned for the sources that did succeed.
    pub fn load(&self, config: &SourceConfiguration) -> Result<Vec<MaterialRecord>> {
        let mut records = Vec::new();

        match &config.private_key {
            Some(record @ MaterialRecord::PrivateKey(_)) => records.push(record.clone()),
            Some(other) => debug!(kind = other.kind(), "ignoring record in private key slot"),
            None => {}
        }
        match &config.certificate {
            Some(record @ MaterialRecord::Certificate(_)) => records.push(record.clone()),
            Some(other) => debug!(kind = other.kind(), "ignoring record in certificate slot"),
            None => {}
        }

        if let Some(text) = &config.private_key_pem {
            let key = self.pem.private_key(text).map_err(Error::PrivateKey)?;
            records.push(key.into());
        }
        if let Some(text) = &config.certificate_pem {
            let cert = self.pem.certificate(text).map_err(Error::Certificate)?;
            records.push(cert.into());
        }

        let key_buffers = self.merge_paths(
            &config.key_buffers,
            config.private_key_path.as_ref(),
            KEY_PATH_DEPRECATED,
        )?;
        let cert_buffers = self.merge_paths(
            &config.cert_buffers,
            config.certificate_path.as_ref(),
            CERT_PATH_DEPRECATED,
        )?;

        for (index, buffer) in key_buffers.iter().enumerate() {
            debug!(index, len = buffer.len(), "loading key buffer");
            self.load_key_buffer(buffer, config, &mut records)?;
        }

        for buffer in &cert_buffers {
            let text = std::str::from_utf8(buffer).map_err(|e| Error::Certificate(Box::new(e)))?;
            let cert = self.pem.certificate(text).map_err(Error::Certificate)?;
            records.push(cert.into());
        }

        debug!(records = records.len(), "key material loaded");
        Ok(records)
    }

    fn merge_paths<'a>(
        &self,
        buffers: &'a [Vec<u8>],
        paths: Option<&PathSource>,
        notice: &str,
    ) -> Result<Vec<Cow<'a, [u8]>>> {
        let mut merged: Vec<Cow<'a, [u8]>> = buffers
            .iter()
            .map(|buffer| Cow::Borrowed(buffer.as_slice()))
            .collect();

        if let Some(paths) = paths {
            self.notifier.notify(notice);
            for path in paths.paths() {
                let bytes = self.reader.read(path).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                merged.push(Cow::Owned(bytes));
            }
        }
        Ok(merged)
    }

    fn load_key_buffer(
        &self,
        buffer: &[u8],
        config: &SourceConfiguration,
        records: &mut Vec<MaterialRecord>,
    ) -> Result<()> {
        let content = strip_garbage_header(buffer);
        let password = config.password.as_ref();

        if let Some(keystore) = jks::parse(content)? {
            debug!(entries = keystore.len(), "key buffer is a JKS keystore");
            let resolved = self
                .resolver
                .resolve(&keystore, password)
                .map_err(Error::Resolver)?;
            records.extend(resolved);
            return Ok(());
        }

        let contents = self
            .container
            .open(content, password, config.algorithm.as_deref())
            .map_err(|source| {
                debug!(error = %source, "key buffer rejected by container opener");
                Error::CannotLoadKey(source)
            })?;
        records.extend(contents.keys.into_iter().map(MaterialRecord::PrivateKey));
        for der in &contents.certs {
            let cert = self.der.certificate(der).map_err(Error::Certificate)?;
            records.push(cert.into());
        }
        Ok(())
    }
}

/// Loads `config` with [`Loader::default`].
pub fn load(config: &SourceConfiguration) -> Result<Vec<MaterialRecord>> {
    Loader::default().load(config)
}
