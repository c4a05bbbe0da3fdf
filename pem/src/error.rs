use base64::DecodeError;
use thiserror::Error;

/// Errors that can occur when parsing PEM text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No `-----BEGIN ...-----` line before data or an END line
    #[error("missing a pre encapsulation boundary")]
    MissingPreEncapsulationBoundary,

    /// A block was opened and never closed
    #[error("missing a post encapsulation boundary")]
    MissingPostEncapsulationBoundary,

    #[error("missing PEM data")]
    MissingData,

    #[error("label doesn't match: BEGIN {begin}, END {end}")]
    LabelMismatch { begin: String, end: String },

    /// RFC 1421 style `Proc-Type`/`DEK-Info` headers, used by legacy encrypted keys
    #[error("encapsulated headers are not supported")]
    EncapsulatedHeaders,

    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),
}
