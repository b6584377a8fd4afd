use std::borrow::Cow;

use tracing::debug;

use crate::bits::BitAccumulator;
use crate::{Alphabet, Error, Result, Variant, PAD};

/// Number of bytes carried by `symbols` base32 symbols (padding excluded).
pub const fn decoded_len(symbols: usize) -> usize {
    (symbols / 8) * 5 + (symbols % 8) * 5 / 8
}

/// Applies the per-variant input clean-up that runs before alphabet lookup.
///
/// The RFC variants drop a trailing run of `=`. Crockford uppercases the input
/// and folds the look-alikes `O` to `0` and `I`/`L` to `1`; it strips nothing.
fn normalize(input: &str, variant: Variant) -> Cow<'_, str> {
    match variant {
        Variant::Rfc3548 | Variant::Rfc4648 | Variant::Rfc4648Hex => {
            Cow::Borrowed(input.trim_end_matches(char::from(PAD)))
        }
        Variant::Crockford => Cow::Owned(
            input
                .to_uppercase()
                .chars()
                .map(|c| match c {
                    'O' => '0',
                    'I' | 'L' => '1',
                    c => c,
                })
                .collect(),
        ),
    }
}

/// Decodes base32 `input` to bytes.
///
/// Fails with [`Error::InvalidCharacter`] on the first character outside the
/// variant alphabet, or [`Error::UnknownVariant`] when `variant` is a tag that
/// names no variant. Trailing bits that do not fill a whole byte are dropped.
pub fn decode<V>(input: &str, variant: V) -> Result<Vec<u8>>
where
    V: TryInto<Variant>,
    Error: From<V::Error>,
{
    let variant: Variant = variant.try_into()?;
    let src = normalize(input, variant);

    let mut dst = vec![0u8; decoded_len(src.chars().count())];
    let written = b32dec(&src, &mut dst, variant)?;
    debug_assert_eq!(written, dst.len());

    Ok(dst)
}

/// Decodes `src` into `dst`, returning the number of bytes written.
pub fn decode_into<V>(src: &str, dst: &mut [u8], variant: V) -> Result<usize>
where
    V: TryInto<Variant>,
    Error: From<V::Error>,
{
    let variant: Variant = variant.try_into()?;
    let src = normalize(src, variant);
    let needed = decoded_len(src.chars().count());
    if dst.len() < needed {
        return Err(Error::BufferTooSmall { needed, available: dst.len() });
    }

    b32dec(&src, &mut dst[..needed], variant)
}

fn b32dec(src: &str, dst: &mut [u8], variant: Variant) -> Result<usize> {
    let alphabet: &Alphabet = variant.alphabet();
    // `dst` stays untouched unless the whole input is valid
    if let Some(character) = src.chars().find(|&c| !alphabet.contains(c)) {
        debug!(%variant, ?character, "rejecting base32 input");
        return Err(Error::InvalidCharacter { character });
    }

    let mut acc = BitAccumulator::default();
    let mut dst_cur = 0;

    for value in src.chars().filter_map(|c| alphabet.from_char(c)) {
        acc.push(value, 5);
        if let Some(byte) = acc.pop(8) {
            dst[dst_cur] = byte;
            dst_cur += 1;
        }
    }

    Ok(dst_cur)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_b32dec_rfc4648_test_vectors() {
        let vectors: [(&str, &[u8]); 7] = [
            ("", b""),
            ("MY======", b"f"),
            ("MZXQ====", b"fo"),
            ("MZXW6===", b"foo"),
            ("MZXW6YQ=", b"foob"),
            ("MZXW6YTB", b"fooba"),
            ("MZXW6YTBOI======", b"foobar"),
        ];
        for (src, expected) in vectors {
            assert_eq!(decode(src, Variant::Rfc4648).unwrap(), expected, "decoding {:?}", src);
            assert_eq!(decode(src.trim_end_matches('='), Variant::Rfc3548).unwrap(), expected);
        }
    }

    #[test]
    fn test_b32dec_binary_output() {
        assert_eq!(decode("74AIA7Y=", Variant::Rfc4648).unwrap(), [0xFF, 0x00, 0x80, 0x7F]);
        assert_eq!(decode("VS080VO", Variant::Rfc4648Hex).unwrap(), [0xFF, 0x00, 0x80, 0x7F]);
    }

    #[test]
    fn test_b32dec_invalid_character() {
        assert_eq!(decode("ONXW@ZJA", Variant::Rfc4648), Err(Error::InvalidCharacter { character: '@' }));
        assert_eq!(
            Error::InvalidCharacter { character: '@' }.to_string(),
            "invalid character found: '@'"
        );
    }

    #[test]
    fn test_b32dec_reports_first_invalid_character() {
        assert_eq!(decode("MZ!W6?", Variant::Rfc4648), Err(Error::InvalidCharacter { character: '!' }));
        assert_eq!(decode("MZXW6é", Variant::Rfc4648), Err(Error::InvalidCharacter { character: 'é' }));
    }

    #[test]
    fn test_b32dec_is_case_sensitive_for_rfc_variants() {
        assert_eq!(decode("mzxw6", Variant::Rfc4648), Err(Error::InvalidCharacter { character: 'm' }));
        assert_eq!(decode("cpnmu", Variant::Rfc4648Hex), Err(Error::InvalidCharacter { character: 'c' }));
    }

    #[test]
    fn test_b32dec_only_strips_trailing_padding() {
        assert_eq!(decode("MY==MY==", Variant::Rfc4648), Err(Error::InvalidCharacter { character: '=' }));
        assert_eq!(decode("=MY", Variant::Rfc4648), Err(Error::InvalidCharacter { character: '=' }));
        assert_eq!(decode("MY=============", Variant::Rfc4648).unwrap(), b"f");
    }

    #[test]
    fn test_b32dec_alphabet_mismatch() {
        // '1' and '8' belong to the hex alphabet only
        assert_eq!(decode("18", Variant::Rfc4648), Err(Error::InvalidCharacter { character: '1' }));
        // 'W'..'Z' are beyond the hex alphabet
        assert_eq!(decode("ONXW", Variant::Rfc4648Hex), Err(Error::InvalidCharacter { character: 'X' }));
        // 'U' is excluded from Crockford
        assert_eq!(decode("ESU", Variant::Crockford), Err(Error::InvalidCharacter { character: 'U' }));
    }

    #[test]
    fn test_crockford_normalization() {
        let canonical = decode("EDQPTS90ESGPRXB5", Variant::Crockford).unwrap();
        assert_eq!(canonical, b"some value");
        assert_eq!(decode("edqpts90esgprxb5", Variant::Crockford).unwrap(), canonical);
        assert_eq!(decode("EDQPTS9oESGPRXB5", Variant::Crockford).unwrap(), canonical);

        let ones = decode("11111111", Variant::Crockford).unwrap();
        assert_eq!(decode("IiLl1IiL", Variant::Crockford).unwrap(), ones);
        assert_eq!(decode("oOo0OoO0", Variant::Crockford).unwrap(), [0u8; 5]);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("MY======", Variant::Rfc4648), "MY");
        assert_eq!(normalize("M=Y=", Variant::Rfc4648Hex), "M=Y");
        assert_eq!(normalize("hello, oil", Variant::Crockford), "HE110, 011");
        assert_eq!(normalize("MY==", Variant::Crockford), "MY==");
    }

    #[test]
    fn test_decoded_len() {
        let expected = [0, 0, 1, 1, 2, 3, 3, 4, 5, 5, 6];
        for (symbols, len) in expected.into_iter().enumerate() {
            assert_eq!(decoded_len(symbols), len, "decoded length of {} symbols", symbols);
        }
    }

    #[test]
    fn test_decode_into() {
        let mut dst = [0u8; 8];
        let written = decode_into("MZXW6YTBOI======", &mut dst, Variant::Rfc4648).unwrap();
        assert_eq!(&dst[..written], b"foobar");

        let written = decode_into("csqpyrk1e8", &mut dst, "Crockford").unwrap();
        assert_eq!(&dst[..written], b"foobar");
    }

    #[test]
    fn test_decode_into_buffer_too_small() {
        let mut dst = [0u8; 5];
        assert_eq!(
            decode_into("MZXW6YTBOI", &mut dst, Variant::Rfc4648),
            Err(Error::BufferTooSmall { needed: 6, available: 5 })
        );
    }

    #[test]
    fn test_decode_into_leaves_dst_untouched_on_invalid_character() {
        let mut dst = [0u8; 8];
        assert_eq!(
            decode_into("MZXW6YTB@I", &mut dst, Variant::Rfc4648),
            Err(Error::InvalidCharacter { character: '@' })
        );
        assert_eq!(dst, [0u8; 8]);

        let mut dst = [0xAAu8; 8];
        assert_eq!(
            decode_into("CSQPYRK1EU", &mut dst, Variant::Crockford),
            Err(Error::InvalidCharacter { character: 'U' })
        );
        assert_eq!(dst, [0xAAu8; 8]);
    }

    #[test]
    fn test_decode_unknown_variant() {
        let mut dst = [0u8; 8];
        assert_eq!(
            decode_into("MZXW6YTBOI", &mut dst, "rfc4648"),
            Err(Error::UnknownVariant { given: "rfc4648".to_owned() })
        );
    }
}
