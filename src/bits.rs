/// Bit register shared by the encoder (8 bits in, 5 out) and the decoder
/// (5 bits in, 8 out).
///
/// Only the `bits` low bits of `value` are ever set; drained bits are masked
/// away, so the register never holds more than 12 live bits.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BitAccumulator {
    value: u32,
    bits: u32,
}

#[inline(always)]
const fn mask(width: u32) -> u32 {
    (1 << width) - 1
}

impl BitAccumulator {
    #[inline(always)]
    pub fn push(&mut self, chunk: u8, width: u32) {
        debug_assert!(self.bits + width <= 16);
        self.value = (self.value << width) | (u32::from(chunk) & mask(width));
        self.bits += width;
    }

    /// Takes the top `width` bits, if that many are held.
    #[inline(always)]
    pub fn pop(&mut self, width: u32) -> Option<u8> {
        if self.bits < width {
            return None;
        }
        self.bits -= width;
        let out = (self.value >> self.bits) & mask(width);
        self.value &= mask(self.bits);
        Some(out as u8)
    }

    /// Emits a final partial group, zero-filled on the right to `width` bits.
    #[inline(always)]
    pub fn flush(&mut self, width: u32) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        debug_assert!(self.bits < width);
        let out = (self.value << (width - self.bits)) & mask(width);
        *self = Self::default();
        Some(out as u8)
    }

    #[cfg(test)]
    pub fn bits(&self) -> u32 {
        self.bits
    }
}
