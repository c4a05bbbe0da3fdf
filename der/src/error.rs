use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("parser error {0:?}")]
    Parser(nom::error::ErrorKind),
    #[error("parser incomplete: {0:?}")]
    ParserIncomplete(nom::Needed),
    #[error("empty input")]
    Empty,
    #[error("{0} bytes of trailing data after the outer element")]
    TrailingData(usize),
}

impl From<nom::Err<nom::error::Error<&[u8]>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        match err {
            nom::Err::Incomplete(needed) => Error::ParserIncomplete(needed),
            nom::Err::Error(e) | nom::Err::Failure(e) => Error::Parser(e.code),
        }
    }
}
