//! Conversion of loaded material into rustls-pki-types.
//!
//! This module is only compiled when the `rustls` feature is enabled.

use rustls_pki_types::{
    CertificateDer, PrivateKeyDer, PrivatePkcs1KeyDer, PrivatePkcs8KeyDer, PrivateSec1KeyDer,
};

use crate::material::{Certificate, KeyFormat, MaterialRecord, PrivateKey};

/// Copies the key into a `PrivateKeyDer<'static>` of the matching variant.
impl From<&PrivateKey> for PrivateKeyDer<'static> {
    fn from(key: &PrivateKey) -> Self {
        let der = key.der().to_vec();
        match key.format() {
            KeyFormat::Pkcs8 => PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(der)),
            KeyFormat::Pkcs1 => PrivateKeyDer::Pkcs1(PrivatePkcs1KeyDer::from(der)),
            KeyFormat::Sec1 => PrivateKeyDer::Sec1(PrivateSec1KeyDer::from(der)),
        }
    }
}

impl From<&Certificate> for CertificateDer<'static> {
    fn from(cert: &Certificate) -> Self {
        CertificateDer::from(cert.der().to_vec())
    }
}

/// Splits load output into the certificate chain and the keys, each in
/// load order, ready for a rustls config builder.
pub fn split_for_rustls(
    records: &[MaterialRecord],
) -> (Vec<CertificateDer<'static>>, Vec<PrivateKeyDer<'static>>) {
    let mut certs = Vec::new();
    let mut keys = Vec::new();
    for record in records {
        match record {
            MaterialRecord::PrivateKey(key) => keys.push(PrivateKeyDer::from(key)),
            MaterialRecord::Certificate(cert) => certs.push(CertificateDer::from(cert)),
        }
    }
    (certs, keys)
}
