//! # Prefix varint
//!
//! Unsigned 64-bit integers are encoded in 1 to [`MAX_ENCODED_SIZE`] bytes.
//!
//! The count of leading one-bits in the first byte is the count of bytes that follow it.
//! A reader therefore knows the encoded size from the first byte alone, see [`parse_size()`].
//!
//! ```text
//! first byte    following bytes   value bits
//! 0xxxxxxx      -                 7
//! 10xxxxxx      1                 14
//! 110xxxxx      2                 21
//! 1110xxxx      3                 28
//! 11110xxx      4                 35
//! 111110xx      5                 42
//! 1111110x      6                 49
//! 11111110      7                 56
//! 11111111      8                 64
//! ```
//!
//! The `x` bits of the first byte hold the value's lowest bits.
//! The following bytes hold the remaining bits, little-endian.
//!
//! Encoding is always minimal. Decoding accepts non-minimal encodings.

use std::ops::Deref;


pub const MAX_ENCODED_SIZE: usize = 9;

/// Widest value that fits in the 8-byte form.
const MAX_PREFIXED_BITS: u32 = 56;

/// The encoded bytes of one integer, kept on the stack.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EncodedVarInt {
    buf: [u8; MAX_ENCODED_SIZE],
    len: usize,
}
impl Deref for EncodedVarInt {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

pub fn encoded_size(value: u64) -> usize {
    let sig_bits = u64::BITS - value.leading_zeros();
    if sig_bits > MAX_PREFIXED_BITS {
        MAX_ENCODED_SIZE
    } else {
        ((sig_bits + 6) / 7).max(1) as usize
    }
}

pub fn encode(value: u64) -> EncodedVarInt {
    let mut buf = [0u8; MAX_ENCODED_SIZE];
    let len = encode_into(value, &mut buf);
    EncodedVarInt { buf, len }
}

/// Returns the count of bytes written to the front of `out`.
pub fn encode_into(value: u64, out: &mut [u8; MAX_ENCODED_SIZE]) -> usize {
    let size = encoded_size(value);
    let following = size - 1;

    if size == MAX_ENCODED_SIZE {
        out[0] = 0xFF;
        out[1..].copy_from_slice(&value.to_le_bytes());
        return size;
    }

    let first_byte_bits = 7 - following as u32;
    let prefix = !(0xFFu8 >> following);
    let low = value & ((1u64 << first_byte_bits) - 1);
    out[0] = prefix | low as u8;

    let high = (value >> first_byte_bits).to_le_bytes();
    out[1..size].copy_from_slice(&high[..following]);

    size
}

/// The size of the integer at the front of `buf`, including the first byte.
///
/// `None` iff `buf` is empty. The returned size may exceed `buf.len()`;
/// callers must check before slicing.
pub fn parse_size(buf: &[u8]) -> Option<usize> {
    buf.first().map(|first| first.leading_ones() as usize + 1)
}

/// Decodes the integer at the front of `buf`. Bytes past it are ignored.
///
/// `None` if `buf` is shorter than the size announced by its first byte.
pub fn decode(buf: &[u8]) -> Option<u64> {
    let size = parse_size(buf)?;
    let bytes = buf.get(..size)?;
    let following = size - 1;

    let mut le = [0u8; 8];
    le[..following].copy_from_slice(&bytes[1..]);

    if size == MAX_ENCODED_SIZE {
        return Some(u64::from_le_bytes(le));
    }

    let first_byte_bits = 7 - following as u32;
    let low = u64::from(bytes[0]) & ((1u64 << first_byte_bits) - 1);
    Some(low | (u64::from_le_bytes(le) << first_byte_bits))
}
