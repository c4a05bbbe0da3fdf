//! Decoder for the legacy JKS keystore container (version 2).
//!
//! ```text
//! u32 magic 0xFEEDFEED
//! u32 version 2
//! u32 entry count
//! entry*: u32 tag (1 = private key, 2 = trusted certificate), record
//! ```
//!
//! Integers are big-endian. Key records carry their key still encrypted by
//! the keystore password; decrypting it is left to the caller. The trailing
//! integrity digest is not checked.
//!
//! ```ignore
//! match jks::parse(&bytes)? {
//!     Some(keystore) => {
//!         for key in keystore.keys() {
//!             println!("{}: {} chain certificates", key.name(), key.cert_chain().len());
//!         }
//!     }
//!     None => println!("not a keystore"),
//! }
//! ```

#![forbid(unsafe_code)]

pub mod entry;
pub mod error;
pub mod keystore;
pub mod reader;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use entry::{CertEntry, Entry, KEY_HEADER_LEN, KeyEntry, X509};
pub use error::{Error, Result};
pub use keystore::{Keystore, MAGIC, VERSION, parse};
pub use reader::Reader;
