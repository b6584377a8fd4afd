use crate::bits::BitAccumulator;
use crate::{Alphabet, EncodeOptions, Error, Result, Variant, PAD};

/// Exact length of the encoding of `len` bytes.
pub const fn encoded_len(len: usize, padding: bool) -> usize {
    if padding {
        len.div_ceil(5) * 8
    } else {
        // ceil(len * 8 / 5), split so `len * 8` cannot overflow
        (len / 5) * 8 + ((len % 5) * 8).div_ceil(5)
    }
}

/// Encodes `data` to base32 text.
///
/// `variant` is either a [`Variant`] or its tag (`"RFC4648"`, `"Crockford"`,
/// ...). An unknown tag fails with [`Error::UnknownVariant`]; nothing else can
/// fail.
pub fn encode<V>(data: impl AsRef<[u8]>, variant: V, options: EncodeOptions) -> Result<String>
where
    V: TryInto<Variant>,
    Error: From<V::Error>,
{
    let variant: Variant = variant.try_into()?;
    let src = data.as_ref();
    let padding = options.padding_for(variant);

    let mut dst = vec![0u8; encoded_len(src.len(), padding)];
    let written = b32enc(src, &mut dst, variant.alphabet(), padding);
    debug_assert_eq!(written, dst.len());

    Ok(dst.into_iter().map(char::from).collect())
}

/// Encodes `src` as ascii into `dst`, returning the number of bytes written.
pub fn encode_into<V>(src: &[u8], dst: &mut [u8], variant: V, options: EncodeOptions) -> Result<usize>
where
    V: TryInto<Variant>,
    Error: From<V::Error>,
{
    let variant: Variant = variant.try_into()?;
    let padding = options.padding_for(variant);
    let needed = encoded_len(src.len(), padding);
    if dst.len() < needed {
        return Err(Error::BufferTooSmall { needed, available: dst.len() });
    }

    Ok(b32enc(src, &mut dst[..needed], variant.alphabet(), padding))
}

fn b32enc(src: &[u8], dst: &mut [u8], alphabet: &Alphabet, padding: bool) -> usize {
    let mut acc = BitAccumulator::default();
    let mut dst_cur = 0;

    for &byte in src {
        acc.push(byte, 8);
        while let Some(group) = acc.pop(5) {
            dst[dst_cur] = alphabet.to_char(group);
            dst_cur += 1;
        }
    }

    if let Some(group) = acc.flush(5) {
        dst[dst_cur] = alphabet.to_char(group);
        dst_cur += 1;
    }

    if padding {
        while dst_cur % 8 != 0 {
            dst[dst_cur] = PAD;
            dst_cur += 1;
        }
    }

    dst_cur
}
