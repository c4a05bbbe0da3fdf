//! Decoder trait for type-safe conversions.
//!
//! A source type `T` implements `Decoder<T, D>` to produce a `D`, and the
//! destination marks itself with `DecodableFrom<T>`. The pair keeps every
//! supported conversion explicit: `&[u8]` can become a `Der` or a
//! `Keystore`, `&str` can become a `Pem`, and nothing else is implied.
//!
//! ```no_run
//! use keyloom::decoder::{DecodableFrom, Decoder};
//!
//! struct Label(String);
//!
//! #[derive(Debug)]
//! struct LabelError;
//!
//! impl DecodableFrom<Vec<u8>> for Label {}
//!
//! impl Decoder<Vec<u8>, Label> for Vec<u8> {
//!     type Error = LabelError;
//!
//!     fn decode(&self) -> Result<Label, Self::Error> {
//!         String::from_utf8(self.clone()).map(Label).map_err(|_| LabelError)
//!     }
//! }
//! ```

/// Converts `self` (of type `T`) into `D`.
///
/// The destination must opt in through [`DecodableFrom<T>`].
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is not a valid encoding of `D`.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
pub trait DecodableFrom<T> {}
