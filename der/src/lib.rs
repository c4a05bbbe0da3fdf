//! Minimal DER reader.
//!
//! Key material handed around by the loader is opaque DER. Before wrapping
//! bytes into a certificate or private key handle we only need to know that
//! they form exactly one complete element and what its outer tag is; the
//! inner structure belongs to whoever consumes the handle.

use keyloom::decoder::{DecodableFrom, Decoder};
use nom::{IResult, Parser};

pub mod error;

pub use error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Integer,
    OctetString,
    Sequence,
    Set,
    Other(u8),
}

impl From<u8> for Tag {
    fn from(value: u8) -> Self {
        match value {
            0x02 => Tag::Integer,
            0x04 => Tag::OctetString,
            0x30 => Tag::Sequence,
            0x31 => Tag::Set,
            _ => Tag::Other(value),
        }
    }
}

/// One complete DER element, kept in its encoded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Der {
    tag: Tag,
    header_len: usize,
    bytes: Vec<u8>,
}

impl Der {
    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn is_sequence(&self) -> bool {
        self.tag == Tag::Sequence
    }

    /// Content octets, without tag and length.
    pub fn content(&self) -> &[u8] {
        &self.bytes[self.header_len..]
    }

    /// The full encoding, tag and length included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl DecodableFrom<&[u8]> for Der {}

impl Decoder<&[u8], Der> for &[u8] {
    type Error = Error;

    fn decode(&self) -> Result<Der, Self::Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let (rest, (tag, length)) = parse_header(self)?;
        let header_len = self.len() - rest.len();
        let (rest, _) = take_content(rest, length)?;
        if !rest.is_empty() {
            return Err(Error::TrailingData(rest.len()));
        }
        Ok(Der {
            tag,
            header_len,
            bytes: self.to_vec(),
        })
    }
}

impl DecodableFrom<Vec<u8>> for Der {}

impl Decoder<Vec<u8>, Der> for Vec<u8> {
    type Error = Error;

    fn decode(&self) -> Result<Der, Self::Error> {
        self.as_slice().decode()
    }
}

fn parse_header(input: &[u8]) -> IResult<&[u8], (Tag, usize)> {
    let (input, tag) = nom::number::be_u8().parse(input)?;
    let (input, first) = nom::number::be_u8().parse(input)?;
    if first & 0x80 == 0 {
        return Ok((input, (Tag::from(tag), first as usize)));
    }
    // long form: low 7 bits count the length octets that follow
    let count = (first & 0x7f) as usize;
    if count == 0 || count > size_of::<usize>() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::LengthValue,
        )));
    }
    let (input, octets) = take_content(input, count)?;
    let length = octets
        .iter()
        .fold(0usize, |acc, &b| (acc << 8) | b as usize);
    Ok((input, (Tag::from(tag), length)))
}

fn take_content(input: &[u8], length: usize) -> IResult<&[u8], &[u8]> {
    nom::bytes::take(length).parse(input)
}
