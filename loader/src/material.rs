//! Output records and the secrets that travel with a load.

use std::fmt::{self, Debug, Formatter};

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Encoding of a private key's DER.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFormat {
    /// PKCS#8 PrivateKeyInfo
    Pkcs8,
    /// PKCS#1 RSAPrivateKey
    Pkcs1,
    /// SEC1 ECPrivateKey
    Sec1,
}

impl KeyFormat {
    pub fn name(&self) -> &'static str {
        match self {
            KeyFormat::Pkcs8 => "PKCS#8",
            KeyFormat::Pkcs1 => "PKCS#1",
            KeyFormat::Sec1 => "SEC1",
        }
    }
}

/// A decoded private key. The DER is wiped when the key is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    format: KeyFormat,
    der: Vec<u8>,
}

impl PrivateKey {
    pub fn new(format: KeyFormat, der: Vec<u8>) -> Self {
        PrivateKey { format, der }
    }

    pub fn format(&self) -> KeyFormat {
        self.format
    }

    pub fn der(&self) -> &[u8] {
        &self.der
    }

    pub fn into_der(mut self) -> Vec<u8> {
        std::mem::take(&mut self.der)
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.der.zeroize();
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("format", &self.format)
            .field("len", &self.der.len())
            .finish_non_exhaustive()
    }
}

/// A DER encoded X.509 certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    der: Vec<u8>,
}

impl Certificate {
    pub fn new(der: Vec<u8>) -> Self {
        Certificate { der }
    }

    pub fn der(&self) -> &[u8] {
        &self.der
    }

    pub fn into_der(self) -> Vec<u8> {
        self.der
    }
}

/// One unit of loaded key material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialRecord {
    PrivateKey(PrivateKey),
    Certificate(Certificate),
}

impl MaterialRecord {
    pub fn kind(&self) -> &'static str {
        match self {
            MaterialRecord::PrivateKey(_) => "private key",
            MaterialRecord::Certificate(_) => "certificate",
        }
    }

    pub fn as_private_key(&self) -> Option<&PrivateKey> {
        match self {
            MaterialRecord::PrivateKey(key) => Some(key),
            MaterialRecord::Certificate(_) => None,
        }
    }

    pub fn as_certificate(&self) -> Option<&Certificate> {
        match self {
            MaterialRecord::Certificate(cert) => Some(cert),
            MaterialRecord::PrivateKey(_) => None,
        }
    }
}

impl From<PrivateKey> for MaterialRecord {
    fn from(key: PrivateKey) -> Self {
        MaterialRecord::PrivateKey(key)
    }
}

impl From<Certificate> for MaterialRecord {
    fn from(cert: Certificate) -> Self {
        MaterialRecord::Certificate(cert)
    }
}

/// Password protecting keystores and containers, as text or raw bytes.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(Vec<u8>);

impl Password {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The password as text, when it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Password(value.as_bytes().to_vec())
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Password(value.into_bytes())
    }
}

impl From<&[u8]> for Password {
    fn from(value: &[u8]) -> Self {
        Password(value.to_vec())
    }
}

impl From<Vec<u8>> for Password {
    fn from(value: Vec<u8>) -> Self {
        Password(value)
    }
}
