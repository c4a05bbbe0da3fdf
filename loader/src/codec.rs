//! Default PEM and DER decoders.

use der::Der;
use keyloom::decoder::Decoder;
use pem::Label;
use thiserror::Error;

use crate::collaborator::{BoxError, DerDecoder, PemDecoder};
use crate::material::{Certificate, KeyFormat, PrivateKey};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("no {0} block found")]
    MissingBlock(&'static str),
    #[error("encrypted PEM private keys are not supported")]
    EncryptedKey,
    #[error("{0} is not a DER SEQUENCE")]
    NotSequence(&'static str),
    #[error("pem: {0}")]
    Pem(#[from] pem::Error),
    #[error("der: {0}")]
    Der(#[from] der::Error),
}

/// Decodes unencrypted PKCS#8, PKCS#1 and SEC1 keys and X.509 certificates.
///
/// The first matching block wins; other blocks in the text are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct PemCodec;

impl PemDecoder for PemCodec {
    fn private_key(&self, text: &str) -> Result<PrivateKey, BoxError> {
        Ok(decode_private_key(text)?)
    }

    fn certificate(&self, text: &str) -> Result<Certificate, BoxError> {
        let block = pem::parse_many(text)?
            .into_iter()
            .find(|block| block.label() == &Label::Certificate)
            .ok_or(CodecError::MissingBlock("certificate"))?;
        Ok(decode_certificate(block.contents())?)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DerCodec;

impl DerDecoder for DerCodec {
    fn certificate(&self, der: &[u8]) -> Result<Certificate, BoxError> {
        Ok(decode_certificate(der)?)
    }
}

fn decode_private_key(text: &str) -> Result<PrivateKey, CodecError> {
    for block in pem::parse_many(text)? {
        let format = match block.label() {
            Label::PrivateKey => KeyFormat::Pkcs8,
            Label::RsaPrivateKey => KeyFormat::Pkcs1,
            Label::EcPrivateKey => KeyFormat::Sec1,
            Label::EncryptedPrivateKey => return Err(CodecError::EncryptedKey),
            Label::Certificate | Label::Other(_) => continue,
        };
        let der = sequence(block.contents(), "private key")?;
        return Ok(PrivateKey::new(format, der.into_bytes()));
    }
    Err(CodecError::MissingBlock("private key"))
}

fn decode_certificate(bytes: &[u8]) -> Result<Certificate, CodecError> {
    let der = sequence(bytes, "certificate")?;
    Ok(Certificate::new(der.into_bytes()))
}

fn sequence(bytes: &[u8], what: &'static str) -> Result<Der, CodecError> {
    let der: Der = bytes.decode()?;
    if !der.is_sequence() {
        return Err(CodecError::NotSequence(what));
    }
    Ok(der)
}
