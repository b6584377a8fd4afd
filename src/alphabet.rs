const INVALID: u8 = u8::MAX;

/// A 32-symbol base32 alphabet together with its reverse lookup table.
///
/// Lookups are exact: an uppercase-only alphabet does not accept lowercase
/// input. Building an alphabet with a duplicate or non-ascii symbol fails
/// constant evaluation.
#[derive(Debug)]
pub struct Alphabet {
    symbols: [u8; 32],
    lut: [u8; 256],
}

impl Alphabet {
    pub const fn new(symbols: &[u8; 32]) -> Self {
        let mut lut = [INVALID; 256];
        let mut i = 0;
        while i < 32 {
            let symbol = symbols[i];
            if !symbol.is_ascii() {
                panic!("base32 alphabet symbols must be ascii");
            }
            if lut[symbol as usize] != INVALID {
                panic!("duplicate symbol in base32 alphabet");
            }
            lut[symbol as usize] = i as u8;
            i += 1;
        }
        Self { symbols: *symbols, lut }
    }

    /// Symbol for the low 5 bits of `value`.
    #[inline(always)]
    pub fn to_char(&self, value: u8) -> u8 {
        self.symbols[(value & 0x1F) as usize]
    }

    #[inline(always)]
    pub fn from_char(&self, character: char) -> Option<u8> {
        if !character.is_ascii() {
            return None;
        }
        match self.lut[character as usize] {
            INVALID => None,
            value => Some(value),
        }
    }

    pub fn symbols(&self) -> &[u8; 32] {
        &self.symbols
    }

    pub fn contains(&self, character: char) -> bool {
        self.from_char(character).is_some()
    }
}
