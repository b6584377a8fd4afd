use std::convert::Infallible;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The variant tag does not name one of the supported base32 variants.
    #[error("unknown base32 variant: {given}")]
    UnknownVariant { given: String },

    /// A character outside the variant alphabet was found while decoding.
    #[error("invalid character found: {character:?}")]
    InvalidCharacter { character: char },

    #[error("unknown encoding: {name}")]
    UnsupportedEncoding { name: String },

    #[error("invalid base64 input: {0}")]
    Base64(#[from] ::base64::DecodeError),

    #[error("destination buffer too small: need {needed} bytes, got {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

// Lets an already-typed `Variant` go through the same `TryInto` path as a tag string.
impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
