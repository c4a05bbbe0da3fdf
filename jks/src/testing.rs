//! Fixture writer for tests.
//!
//! Produces keystore bytes laid out exactly as the decoder expects. It does
//! not compute the integrity digest a real JKS file ends with, so its output
//! is only good for feeding the decoder back.

use crate::keystore::{MAGIC, TAG_PRIVATE_KEY, TAG_TRUSTED_CERT, VERSION};

/// Encodes one certificate record (`u16 typeLen, type, u32 dataLen, data`).
pub fn cert_record(cert_type: &str, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend((cert_type.len() as u16).to_be_bytes());
    out.extend(cert_type.as_bytes());
    out.extend((data.len() as u32).to_be_bytes());
    out.extend(data);
    out
}

/// Encodes the body of a private key entry, `payload` including its 24 byte header.
pub fn key_record(name: &str, payload: &[u8], chain: &[(&str, &[u8])]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend((name.len() as u16).to_be_bytes());
    out.extend(name.as_bytes());
    out.extend(0x0000_0191u32.to_be_bytes());
    out.extend(0x8f4c_2a10u32.to_be_bytes());
    out.extend((payload.len() as u32).to_be_bytes());
    out.extend(payload);
    out.extend((chain.len() as u32).to_be_bytes());
    for (cert_type, data) in chain {
        out.extend(cert_record(cert_type, data));
    }
    out
}

#[derive(Debug, Clone)]
pub struct KeystoreBuilder {
    magic: u32,
    version: u32,
    declared: Option<u32>,
    entries: Vec<(u32, Vec<u8>)>,
}

impl Default for KeystoreBuilder {
    fn default() -> Self {
        KeystoreBuilder {
            magic: MAGIC,
            version: VERSION,
            declared: None,
            entries: Vec::new(),
        }
    }
}

impl KeystoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn magic(mut self, magic: u32) -> Self {
        self.magic = magic;
        self
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Overrides the entry count written in the header.
    pub fn declared_entries(mut self, count: u32) -> Self {
        self.declared = Some(count);
        self
    }

    pub fn key_entry(mut self, name: &str, payload: &[u8], chain: &[(&str, &[u8])]) -> Self {
        self.entries
            .push((TAG_PRIVATE_KEY, key_record(name, payload, chain)));
        self
    }

    pub fn cert_entry(mut self, cert_type: &str, data: &[u8]) -> Self {
        self.entries
            .push((TAG_TRUSTED_CERT, cert_record(cert_type, data)));
        self
    }

    /// Appends an entry with an arbitrary tag and pre-encoded body.
    pub fn raw_entry(mut self, tag: u32, body: &[u8]) -> Self {
        self.entries.push((tag, body.to_vec()));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let count = self.declared.unwrap_or(self.entries.len() as u32);
        let mut out = Vec::new();
        out.extend(self.magic.to_be_bytes());
        out.extend(self.version.to_be_bytes());
        out.extend(count.to_be_bytes());
        for (tag, body) in &self.entries {
            out.extend(tag.to_be_bytes());
            out.extend(body);
        }
        out
    }
}
