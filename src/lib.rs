//! Base32 encoding and decoding with the RFC 4648, RFC 4648 "extended hex"
//! and Crockford alphabets, plus a small dispatch layer that routes encoding
//! names to base32, base64 or a native byte/text codec.
//!
//! ```
//! use base32_variants::{decode, encode, EncodeOptions, Variant};
//!
//! let text = encode("some value", Variant::Rfc4648, EncodeOptions::default()).unwrap();
//! assert_eq!(text, "ONXW2ZJAOZQWY5LF");
//! assert_eq!(decode(&text, "RFC4648").unwrap(), b"some value");
//! ```

use std::fmt;
use std::str::FromStr;

pub const RFC4648_CHARS: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
pub const RFC4648HEX_CHARS: &[u8; 32] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";
pub const CROCKFORD_CHARS: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

pub(crate) const PAD: u8 = b'=';

static RFC4648_ALPHABET: Alphabet = Alphabet::new(RFC4648_CHARS);
static RFC4648HEX_ALPHABET: Alphabet = Alphabet::new(RFC4648HEX_CHARS);
static CROCKFORD_ALPHABET: Alphabet = Alphabet::new(CROCKFORD_CHARS);

mod alphabet;
mod bits;
mod dec;
mod enc;
mod error;

pub mod base64;
pub mod encoder;
mod text;

pub use crate::alphabet::Alphabet;
pub use crate::dec::{decode, decode_into, decoded_len};
pub use crate::enc::{encode, encode_into, encoded_len};
pub use crate::encoder::Encoding;
pub use crate::error::{Error, Result};

/// Base32 flavour: selects an alphabet and a default padding policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Alias for [`Variant::Rfc4648`].
    Rfc3548,
    /// [Base32 from RFC4648](https://tools.ietf.org/html/rfc4648).
    Rfc4648,
    /// [base32hex from RFC4648](https://tools.ietf.org/html/rfc4648).
    Rfc4648Hex,
    /// [Crockford's Base32](http://www.crockford.com/wrmg/base32.html).
    Crockford,
}

impl Variant {
    pub const ALL: [Variant; 4] = [Variant::Rfc3548, Variant::Rfc4648, Variant::Rfc4648Hex, Variant::Crockford];

    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            Variant::Rfc3548 | Variant::Rfc4648 => &RFC4648_ALPHABET,
            Variant::Rfc4648Hex => &RFC4648HEX_ALPHABET,
            Variant::Crockford => &CROCKFORD_ALPHABET,
        }
    }

    /// Crockford is unpadded, the RFC variants pad to a multiple of 8.
    pub fn default_padding(self) -> bool {
        !matches!(self, Variant::Crockford)
    }

    /// The canonical tag, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Rfc3548 => "RFC3548",
            Variant::Rfc4648 => "RFC4648",
            Variant::Rfc4648Hex => "RFC4648-HEX",
            Variant::Crockford => "Crockford",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.as_str() == tag)
            .ok_or_else(|| Error::UnknownVariant { given: tag.to_owned() })
    }
}

impl TryFrom<&str> for Variant {
    type Error = Error;

    fn try_from(tag: &str) -> Result<Self> {
        tag.parse()
    }
}

/// Per-call encoder settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Forcefully enable or disable padding. `None` follows the variant default.
    pub padding: Option<bool>,
}

impl EncodeOptions {
    pub const fn padded() -> Self {
        Self { padding: Some(true) }
    }

    pub const fn unpadded() -> Self {
        Self { padding: Some(false) }
    }

    pub fn padding_for(self, variant: Variant) -> bool {
        self.padding.unwrap_or_else(|| variant.default_padding())
    }
}

impl From<Option<bool>> for EncodeOptions {
    fn from(padding: Option<bool>) -> Self {
        Self { padding }
    }
}
