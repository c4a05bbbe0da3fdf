//! Loads private keys and certificates for a TLS endpoint from whatever the
//! caller has on hand: decoded records, PEM text, JKS keystores, password
//! protected containers, and the deprecated file path fields.
//!
//! ```ignore
//! let config = SourceConfiguration {
//!     private_key_pem: Some(std::fs::read_to_string("server.key")?),
//!     cert_buffers: vec![std::fs::read("server.crt")?],
//!     ..Default::default()
//! };
//! for record in loader::load(&config)? {
//!     println!("{}", record.kind());
//! }
//! ```
//!
//! Decoding that needs cryptography is delegated. Plug a
//! [`ProtectedContainer`] in for PKCS#12 and a [`KeystoreResolver`] in for
//! JKS key decryption through the `with_*` methods on [`Loader`].

#![forbid(unsafe_code)]

pub mod codec;
pub mod collaborator;
pub mod config;
pub mod error;
pub mod garbage;
pub mod load;
pub mod material;
pub mod resolver;
#[cfg(feature = "rustls")]
pub mod rustls;

pub use codec::{CodecError, DerCodec, PemCodec};
pub use collaborator::{
    BoxError, ContainerContents, DeprecationNotifier, DerDecoder, FsReader, NoContainerSupport,
    PemDecoder, ProtectedContainer, SourceReader, TracingNotifier, UnsupportedContainer,
};
pub use config::{PathSource, SourceConfiguration};
pub use error::{Error, Result};
pub use garbage::{GARBAGE_HEADER_LEN, GARBAGE_MARKER, strip_garbage_header};
pub use load::{Loader, load};
pub use material::{Certificate, KeyFormat, MaterialRecord, Password, PrivateKey};
pub use resolver::{KeystoreResolver, NoopResolver};
#[cfg(feature = "rustls")]
pub use rustls::split_for_rustls;
