//! Keystore entry records.
//!
//! Private key entry layout:
//!
//! ```text
//! u16 nameLen, name
//! u32 creation date (high word), u32 creation date (low word)
//! u32 keyLen, key payload           24 byte protector header + encrypted key
//! u32 chainLen, chainLen × certificate record
//! ```
//!
//! Certificate record layout: `u16 typeLen, type, u32 dataLen, data`.

use tracing::debug;

use crate::error::Result;
use crate::reader::Reader;

/// Certificate type label of X.509 certificates.
pub const X509: &str = "X.509";

/// Length of the protector header in front of every encrypted key.
pub const KEY_HEADER_LEN: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertEntry {
    cert_type: String,
    data: Vec<u8>,
}

impl CertEntry {
    pub fn cert_type(&self) -> &str {
        &self.cert_type
    }

    /// Encoded certificate; DER for X.509.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn is_x509(&self) -> bool {
        self.cert_type == X509
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEntry {
    name: String,
    encrypted_key: Vec<u8>,
    cert_chain: Vec<Vec<u8>>,
}

impl KeyEntry {
    /// Alias the key was stored under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Encrypted key with the protector header already removed.
    pub fn encrypted_key(&self) -> &[u8] {
        &self.encrypted_key
    }

    /// X.509 certificates of the chain, in stored order.
    pub fn cert_chain(&self) -> &[Vec<u8>] {
        &self.cert_chain
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    PrivateKey(KeyEntry),
    Certificate(CertEntry),
}

pub fn decode_cert_entry(reader: &mut Reader<'_>) -> Result<CertEntry> {
    let type_len = reader.read_u16()?;
    let cert_type = reader.read_text(type_len as usize)?;
    let data_len = reader.read_u32()?;
    let data = reader.read_bytes(data_len as usize)?.to_vec();
    Ok(CertEntry { cert_type, data })
}

pub fn decode_key_entry(reader: &mut Reader<'_>) -> Result<KeyEntry> {
    let name_len = reader.read_u16()?;
    let name = reader.read_text(name_len as usize)?;

    // creation date, unused
    reader.read_u32()?;
    reader.read_u32()?;

    let key_len = reader.read_u32()?;
    let payload = reader.read_bytes(key_len as usize)?;
    let encrypted_key = payload.get(KEY_HEADER_LEN..).unwrap_or_default().to_vec();

    let chain_len = reader.read_u32()?;
    let mut cert_chain = Vec::new();
    for _ in 0..chain_len {
        // every record is decoded so the cursor stays aligned, even when dropped
        let cert = decode_cert_entry(reader)?;
        if cert.is_x509() {
            cert_chain.push(cert.data);
        } else {
            debug!(
                alias = %name,
                cert_type = %cert.cert_type,
                "dropping non X.509 chain certificate"
            );
        }
    }

    Ok(KeyEntry {
        name,
        encrypted_key,
        cert_chain,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{KEY_HEADER_LEN, decode_cert_entry, decode_key_entry};
    use crate::error::Error;
    use crate::reader::Reader;
    use crate::testing::{cert_record, key_record};

    #[test]
    fn test_decode_cert_entry() {
        let input = cert_record("X.509", &[0x30, 0x03, 0x02, 0x01, 0x05]);
        let mut reader = Reader::new(&input);
        let cert = decode_cert_entry(&mut reader).unwrap();
        assert_eq!("X.509", cert.cert_type());
        assert!(cert.is_x509());
        assert_eq!(&[0x30, 0x03, 0x02, 0x01, 0x05], cert.data());
        assert_eq!(input.len(), reader.position());
    }

    #[test]
    fn test_decode_key_entry_filters_chain() {
        let payload: Vec<u8> = (0u8..40).collect();
        let leaf = vec![0x30, 0x01, 0x01];
        let pgp = vec![0x99; 7];
        let root = vec![0x30, 0x02, 0x02, 0x02];
        let input = key_record(
            "server",
            &payload,
            &[("X.509", &leaf), ("PGP", &pgp), ("X.509", &root)],
        );
        let mut trailing = input.clone();
        trailing.extend([0xde, 0xad]);

        let mut reader = Reader::new(&trailing);
        let key = decode_key_entry(&mut reader).unwrap();

        assert_eq!("server", key.name());
        assert_eq!(vec![leaf.clone(), root.clone()], key.cert_chain());

        let record = |cert_type: &str, data: &[u8]| 2 + cert_type.len() + 4 + data.len();
        let name = 2 + "server".len();
        let created = 4 + 4;
        let key = 4 + payload.len();
        let chain = 4 + record("X.509", &leaf) + record("PGP", &pgp) + record("X.509", &root);
        assert_eq!(name + created + key + chain, reader.position());
        assert_eq!(input.len(), reader.position());
        assert_eq!(2, reader.remaining());
    }

    #[rstest(
        payload_len,
        expected_len,
        case(24, 0),
        case(25, 1),
        case(64, 40),
        case(10, 0),
        case(0, 0)
    )]
    fn test_decode_key_entry_strips_header(payload_len: usize, expected_len: usize) {
        let payload: Vec<u8> = (0..payload_len).map(|i| i as u8).collect();
        let input = key_record("k", &payload, &[]);
        let mut reader = Reader::new(&input);
        let key = decode_key_entry(&mut reader).unwrap();
        assert_eq!(expected_len, key.encrypted_key().len());
        if payload_len >= KEY_HEADER_LEN {
            assert_eq!(&payload[KEY_HEADER_LEN..], key.encrypted_key());
        }
    }

    #[test]
    fn test_decode_key_entry_truncated_chain() {
        let mut input = key_record("k", &[0u8; 30], &[("X.509", &[0x30, 0x00])]);
        input.truncate(input.len() - 1);
        let mut reader = Reader::new(&input);
        assert!(matches!(
            decode_key_entry(&mut reader),
            Err(Error::Truncated { .. })
        ));
    }

    #[test]
    fn test_decode_cert_entry_length_overrun() {
        let mut input = vec![0x00, 0x05];
        input.extend(b"X.509");
        input.extend(0xffff_ffffu32.to_be_bytes());
        input.extend([0x30, 0x00]);
        let mut reader = Reader::new(&input);
        assert!(matches!(
            decode_cert_entry(&mut reader),
            Err(Error::Truncated { offset: 11, .. })
        ));
    }
}
