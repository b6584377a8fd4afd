//! Encoding-name dispatch between base32, base64 and native byte/text codecs.
//!
//! ```
//! use base32_variants::encoder::{self, Encoding};
//!
//! let encoded = encoder::encode("hi", Some(Encoding::Base32), None).unwrap();
//! assert_eq!(encoded, "NBUQ====");
//! assert_eq!(encoder::decode(&encoded, Some(Encoding::Base32)).unwrap(), b"hi");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::{base64, text, EncodeOptions, Error, Result, Variant};

/// Base32 variant used for the `base32` encoding name.
const BASE32_VARIANT: Variant = Variant::Rfc3548;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    Ascii,
    Base32,
    Base64,
    Base64Url,
    Hex,
    /// Also named `binary`.
    Latin1,
    /// Also named `ucs2`, `ucs-2` and `utf-16le`.
    Utf16Le,
    /// Also named `utf-8`.
    Utf8,
}

impl Encoding {
    /// Every accepted encoding name, aliases included.
    pub const SUPPORTED: [&'static str; 13] = [
        "ascii", "base32", "base64", "base64url", "binary", "hex", "latin1", "ucs-2", "ucs2", "utf-16le", "utf-8",
        "utf16le", "utf8",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Ascii => "ascii",
            Encoding::Base32 => "base32",
            Encoding::Base64 => "base64",
            Encoding::Base64Url => "base64url",
            Encoding::Hex => "hex",
            Encoding::Latin1 => "latin1",
            Encoding::Utf16Le => "utf16le",
            Encoding::Utf8 => "utf8",
        }
    }

    /// Renders raw bytes as text in this encoding.
    pub fn render(self, bytes: &[u8]) -> Result<String> {
        Ok(match self {
            Encoding::Base32 => crate::encode(bytes, BASE32_VARIANT, EncodeOptions::default())?,
            Encoding::Base64 => base64::encode(bytes, false),
            Encoding::Base64Url => base64::encode(bytes, true),
            Encoding::Utf8 => text::utf8_to_string(bytes),
            Encoding::Latin1 => text::latin1_to_string(bytes),
            Encoding::Ascii => text::ascii_to_string(bytes),
            Encoding::Hex => text::hex_to_string(bytes),
            Encoding::Utf16Le => text::utf16le_to_string(bytes),
        })
    }

    /// Reads text in this encoding back into raw bytes.
    pub fn parse_text(self, input: &str) -> Result<Vec<u8>> {
        Ok(match self {
            Encoding::Base32 => crate::decode(input, BASE32_VARIANT)?,
            Encoding::Base64 | Encoding::Base64Url => base64::decode(input)?,
            Encoding::Utf8 => input.as_bytes().to_vec(),
            Encoding::Latin1 | Encoding::Ascii => text::latin1_from_str(input),
            Encoding::Hex => text::hex_from_str(input),
            Encoding::Utf16Le => text::utf16le_from_str(input),
        })
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Ok(match name {
            "ascii" => Encoding::Ascii,
            "base32" => Encoding::Base32,
            "base64" => Encoding::Base64,
            "base64url" => Encoding::Base64Url,
            "hex" => Encoding::Hex,
            "latin1" | "binary" => Encoding::Latin1,
            "ucs2" | "ucs-2" | "utf16le" | "utf-16le" => Encoding::Utf16Le,
            "utf8" | "utf-8" => Encoding::Utf8,
            _ => return Err(Error::UnsupportedEncoding { name: name.to_owned() }),
        })
    }
}

/// Encodes `data` to text.
///
/// With an `input_encoding`, `data` is first read as text (lossy UTF-8) in
/// that encoding; otherwise it is taken as raw bytes. The output encoding
/// defaults to UTF-8.
pub fn encode(data: impl AsRef<[u8]>, encoding: Option<Encoding>, input_encoding: Option<Encoding>) -> Result<String> {
    let data = data.as_ref();
    let bytes = match input_encoding {
        Some(input_encoding) => Cow::Owned(input_encoding.parse_text(&String::from_utf8_lossy(data))?),
        None => Cow::Borrowed(data),
    };
    let encoding = encoding.unwrap_or(Encoding::Utf8);
    debug!(%encoding, ?input_encoding, len = bytes.len(), "encoding");
    encoding.render(&bytes)
}

/// Decodes `data` text to bytes. With no encoding, returns its UTF-8 bytes.
pub fn decode(data: &str, encoding: Option<Encoding>) -> Result<Vec<u8>> {
    debug!(?encoding, len = data.len(), "decoding");
    match encoding {
        Some(encoding) => encoding.parse_text(data),
        None => Ok(data.as_bytes().to_vec()),
    }
}

fn resolve(name: &str) -> Result<Encoding> {
    name.parse().map_err(|err| {
        warn!(name, "unsupported encoding");
        err
    })
}

/// [`encode`] with encodings given by name.
pub fn encode_named(data: impl AsRef<[u8]>, encoding: &str, input_encoding: Option<&str>) -> Result<String> {
    let encoding = resolve(encoding)?;
    let input_encoding = input_encoding.map(resolve).transpose()?;
    encode(data, Some(encoding), input_encoding)
}

/// [`decode`] with the encoding given by name.
pub fn decode_named(data: &str, encoding: &str) -> Result<Vec<u8>> {
    decode(data, Some(resolve(encoding)?))
}
