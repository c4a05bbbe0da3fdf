//! # keyloom
//!
//! Core conversion traits for the keyloom key material loader.
//!
//! Every codec in the workspace turns one representation into the next
//! through the same `Decoder` trait:
//!
//! ```text
//! PEM text → Pem → DER bytes → Der
//! keystore bytes → Keystore → material records
//! ```
//!
//! Only decoding lives here. Nothing in keyloom writes key containers.
//!
//! ## Example
//!
//! ```ignore
//! use keyloom::decoder::Decoder;
//! use jks::Keystore;
//!
//! let bytes: &[u8] = &std::fs::read("server.jks")?;
//! let keystore: Keystore = bytes.decode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
