//! Byte-level text codecs behind the non-base encodings of `Encoding`.

const HEX_TABLE: &[u8; 16] = b"0123456789abcdef";

const fn hex_value(character: u8) -> Option<u8> {
    match character {
        b'A'..=b'F' => Some(character - b'A' + 10),
        b'a'..=b'f' => Some(character - b'a' + 10),
        b'0'..=b'9' => Some(character - b'0'),
        _ => None,
    }
}

pub(crate) fn utf8_to_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub(crate) fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Latin-1 with the high bit of every byte cleared.
pub(crate) fn ascii_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte & 0x7F)).collect()
}

pub(crate) fn hex_to_string(bytes: &[u8]) -> String {
    let mut output = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        output.push(char::from(HEX_TABLE[(byte >> 4) as usize]));
        output.push(char::from(HEX_TABLE[(byte & 0x0F) as usize]));
    }
    output
}

/// Little-endian UTF-16. A trailing odd byte is ignored and unpaired
/// surrogates become U+FFFD.
pub(crate) fn utf16le_to_string(bytes: &[u8]) -> String {
    let units = bytes.chunks_exact(2).map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Low byte of every UTF-16 code unit.
pub(crate) fn latin1_from_str(text: &str) -> Vec<u8> {
    text.encode_utf16().map(|unit| unit as u8).collect()
}

/// Hex digit pairs up to the first pair that is not valid hex.
pub(crate) fn hex_from_str(text: &str) -> Vec<u8> {
    text.as_bytes()
        .chunks_exact(2)
        .map_while(|pair| Some(hex_value(pair[0])? << 4 | hex_value(pair[1])?))
        .collect()
}

pub(crate) fn utf16le_from_str(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(hex_to_string(&[0x00, 0x7F, 0xAB, 0xFF]), "007fabff");
        assert_eq!(hex_from_str("007fabff"), [0x00, 0x7F, 0xAB, 0xFF]);
        assert_eq!(hex_from_str("007FABFF"), [0x00, 0x7F, 0xAB, 0xFF]);
    }

    #[test]
    fn test_hex_stops_at_invalid_pair() {
        assert_eq!(hex_from_str("0102zz03"), [0x01, 0x02]);
        assert_eq!(hex_from_str("01020"), [0x01, 0x02]);
        assert_eq!(hex_from_str("g1"), Vec::<u8>::new());
    }

    #[test]
    fn test_latin1_and_ascii() {
        assert_eq!(latin1_to_string(&[0x41, 0xE9]), "Aé");
        assert_eq!(ascii_to_string(&[0x41, 0xC1]), "AA");
        assert_eq!(latin1_from_str("Aé"), [0x41, 0xE9]);
        assert_eq!(latin1_from_str("Ā"), [0x00]);
    }

    #[test]
    fn test_utf8_is_lossy() {
        assert_eq!(utf8_to_string(b"caf\xC3\xA9"), "café");
        assert_eq!(utf8_to_string(b"a\xFFb"), "a\u{FFFD}b");
    }

    #[test]
    fn test_utf16le() {
        assert_eq!(utf16le_to_string(&[0x41, 0x00, 0x42]), "A");
        assert_eq!(utf16le_to_string(&[0x00, 0xD8]), "\u{FFFD}");
        assert_eq!(utf16le_from_str("A😀"), [0x41, 0x00, 0x3D, 0xD8, 0x00, 0xDE]);
        assert_eq!(utf16le_to_string(&utf16le_from_str("A😀")), "A😀");
    }
}
