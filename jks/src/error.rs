use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A declared length runs past the end of the buffer.
    #[error("truncated keystore at offset {offset}: {needed:?} more bytes required")]
    Truncated { offset: usize, needed: nom::Needed },

    /// A parser run through [`crate::Reader`] rejected the bytes at `offset`.
    /// The fixed-width reads never produce it; they fail with `Truncated`.
    #[error("parser error {kind:?} at offset {offset}")]
    Parser {
        offset: usize,
        kind: nom::error::ErrorKind,
    },

    #[error("unknown entry tag {tag} at offset {offset}")]
    UnknownEntryTag { tag: u32, offset: usize },

    /// Magic or version do not identify a JKS keystore.
    #[error("not a JKS keystore")]
    NotRecognized,
}

pub type Result<T> = std::result::Result<T, Error>;
