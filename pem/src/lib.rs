pub mod error;

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

use base64::{Engine, engine::general_purpose::STANDARD};
use keyloom::decoder::{DecodableFrom, Decoder};
use regex::Regex;

pub use error::Error;

const BOUNDARY: &str = r"^-----(BEGIN|END) ([A-Z0-9 ]+)-----\s*$";

static BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BOUNDARY).expect("boundary pattern is valid"));

const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";
const ENCRYPTED_PRIVATE_KEY_LABEL: &str = "ENCRYPTED PRIVATE KEY";
const RSA_PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";
const EC_PRIVATE_KEY_LABEL: &str = "EC PRIVATE KEY";
const CERTIFICATE_LABEL: &str = "CERTIFICATE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// PKCS#8 private key (non-encrypted)
    PrivateKey,
    /// PKCS#8 encrypted private key
    EncryptedPrivateKey,
    /// PKCS#1 RSA private key
    RsaPrivateKey,
    /// SEC1 EC private key
    EcPrivateKey,
    /// X.509 Certificate
    Certificate,
    Other(String),
}

impl Label {
    fn from_name(name: &str) -> Self {
        match name {
            PRIVATE_KEY_LABEL => Label::PrivateKey,
            ENCRYPTED_PRIVATE_KEY_LABEL => Label::EncryptedPrivateKey,
            RSA_PRIVATE_KEY_LABEL => Label::RsaPrivateKey,
            EC_PRIVATE_KEY_LABEL => Label::EcPrivateKey,
            CERTIFICATE_LABEL => Label::Certificate,
            other => Label::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Label::PrivateKey => PRIVATE_KEY_LABEL,
            Label::EncryptedPrivateKey => ENCRYPTED_PRIVATE_KEY_LABEL,
            Label::RsaPrivateKey => RSA_PRIVATE_KEY_LABEL,
            Label::EcPrivateKey => EC_PRIVATE_KEY_LABEL,
            Label::Certificate => CERTIFICATE_LABEL,
            Label::Other(name) => name,
        }
    }

    pub fn is_private_key(&self) -> bool {
        !matches!(self, Label::Certificate | Label::Other(_))
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One decoded PEM block.
///
/// ref: https://www.rfc-editor.org/rfc/rfc7468.html#section-3
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pem {
    label: Label,
    contents: Vec<u8>,
}

impl Pem {
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Binary contents of the block (usually DER).
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub fn into_contents(self) -> Vec<u8> {
        self.contents
    }
}

/// Parse every PEM block in `input`.
///
/// Text outside of blocks is treated as explanatory text and skipped, so a
/// bundle with comments between certificates parses fine.
///
/// # Example
/// ```
/// let bundle = "-----BEGIN CERTIFICATE-----\nMAA=\n-----END CERTIFICATE-----\n\
///               -----BEGIN CERTIFICATE-----\nMAA=\n-----END CERTIFICATE-----\n";
/// let blocks = pem::parse_many(bundle).unwrap();
/// assert_eq!(blocks.len(), 2);
/// ```
pub fn parse_many(input: &str) -> Result<Vec<Pem>, Error> {
    let mut blocks = Vec::new();
    let mut open: Option<(String, String)> = None;

    for line in input.lines() {
        match BOUNDARY_RE.captures(line) {
            Some(caps) if &caps[1] == "BEGIN" => {
                if open.is_some() {
                    return Err(Error::MissingPostEncapsulationBoundary);
                }
                open = Some((caps[2].to_string(), String::new()));
            }
            Some(caps) => {
                let Some((begin, body)) = open.take() else {
                    return Err(Error::MissingPreEncapsulationBoundary);
                };
                let end = &caps[2];
                if begin != end {
                    return Err(Error::LabelMismatch {
                        begin,
                        end: end.to_string(),
                    });
                }
                if body.is_empty() {
                    return Err(Error::MissingData);
                }
                let contents = STANDARD.decode(body).map_err(Error::Base64Decode)?;
                blocks.push(Pem {
                    label: Label::from_name(&begin),
                    contents,
                });
            }
            None => {
                if let Some((_, body)) = open.as_mut() {
                    if line.contains(':') {
                        return Err(Error::EncapsulatedHeaders);
                    }
                    body.extend(line.chars().filter(|c| !c.is_whitespace()));
                }
            }
        }
    }

    if open.is_some() {
        return Err(Error::MissingPostEncapsulationBoundary);
    }
    if blocks.is_empty() {
        return Err(Error::MissingPreEncapsulationBoundary);
    }
    Ok(blocks)
}

impl FromStr for Pem {
    type Err = Error;

    /// Parses the first block of `s`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_many(s)?
            .into_iter()
            .next()
            .ok_or(Error::MissingPreEncapsulationBoundary)
    }
}

impl DecodableFrom<&str> for Pem {}

impl Decoder<&str, Pem> for &str {
    type Error = Error;

    fn decode(&self) -> Result<Pem, Self::Error> {
        Pem::from_str(self)
    }
}

impl DecodableFrom<String> for Pem {}

impl Decoder<String, Pem> for String {
    type Error = Error;

    fn decode(&self) -> Result<Pem, Self::Error> {
        Pem::from_str(self)
    }
}

impl DecodableFrom<Pem> for Vec<u8> {}

impl Decoder<Pem, Vec<u8>> for Pem {
    type Error = Error;

    fn decode(&self) -> Result<Vec<u8>, Self::Error> {
        // label is dropped here
        Ok(self.contents.clone())
    }
}
