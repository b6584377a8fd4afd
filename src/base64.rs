//! Base64 and base64url helpers used by the [`encoder`](crate::encoder) dispatch.

use ::base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD, URL_SAFE_NO_PAD};
use ::base64::engine::DecodePaddingMode;
use ::base64::Engine as _;

use crate::Result;

/// Standard alphabet, accepts input with or without padding and with
/// non-zero trailing bits.
const DECODE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &::base64::alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Normalizes a base64 string to base64url: drops `=`, maps `+` to `-` and
/// `/` to `_`. Returns the input unchanged when `normalize` is false.
pub fn from_base64(string: &str, normalize: bool) -> String {
    if !normalize {
        return string.to_owned();
    }
    string
        .chars()
        .filter_map(|c| match c {
            '=' => None,
            '+' => Some('-'),
            '/' => Some('_'),
            c => Some(c),
        })
        .collect()
}

/// Normalizes a base64url string to base64. Padding is not restored.
pub fn from_base64url(string: &str) -> String {
    string
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect()
}

/// Padded base64, or unpadded base64url when `url` is set.
pub fn encode(data: impl AsRef<[u8]>, url: bool) -> String {
    if url {
        URL_SAFE_NO_PAD.encode(data)
    } else {
        STANDARD.encode(data)
    }
}

/// Decodes base64 or base64url text, padded or not.
pub fn decode(data: &str) -> Result<Vec<u8>> {
    Ok(DECODE_ENGINE.decode(from_base64url(data))?)
}
