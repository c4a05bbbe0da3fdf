use nom::Parser;

use crate::error::{Error, Result};

/// Big-endian cursor over a keystore buffer.
///
/// Each read advances the position by exactly the bytes it consumed. A read
/// that would run past the end leaves the position untouched and fails with
/// [`Error::Truncated`].
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Reader { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.step(nom::number::be_u32())
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.step(nom::number::be_u16())
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.step(nom::bytes::take(len))
    }

    /// Reads `len` bytes as text. Invalid UTF-8 is replaced, not rejected.
    pub fn read_text(&mut self, len: usize) -> Result<String> {
        let bytes = self.read_bytes(len)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    fn step<O, P>(&mut self, mut parser: P) -> Result<O>
    where
        P: Parser<&'a [u8], Output = O, Error = nom::error::Error<&'a [u8]>>,
    {
        let buf: &'a [u8] = self.buf;
        match parser.parse(&buf[self.pos..]) {
            Ok((rest, out)) => {
                self.pos = buf.len() - rest.len();
                Ok(out)
            }
            Err(nom::Err::Incomplete(needed)) => Err(Error::Truncated {
                offset: self.pos,
                needed,
            }),
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(Error::Parser {
                offset: self.pos,
                kind: e.code,
            }),
        }
    }
}
