use crate::serde::{
    encode_variants, encoded_len_of_variants, ser_variants, ReadResult, Variant, VariantReader,
    WriteLen,
};
use crate::DecodeError;
use anyhow::Result;
use derive_more::{Deref, DerefMut, From, Into};
use std::io::Write;
use std::vec;

/// An ordered sequence of [`Variant`]s; the unit of en/decoding.
///
/// Decoded payloads are copies, independent of the decoded buffer.
/// For borrowed payloads, see [`crate::serde::decode_borrowed()`] and [`VariantReader`].
#[derive(From, Into, Deref, DerefMut, PartialEq, Eq, Hash, Clone, Default, Debug)]
pub struct VariantVector(Vec<Variant>);

impl VariantVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encode(&self) -> Vec<u8> {
        encode_variants(&self.0)
    }
    pub fn encoded_len(&self) -> usize {
        encoded_len_of_variants(&self.0)
    }
    pub fn ser(&self, w: &mut impl Write) -> Result<WriteLen> {
        ser_variants(&self.0, w)
    }

    /// Decodes a vector at the front of `buf`. Bytes following the vector are ignored.
    pub fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
        Self::decode_prefix(buf).map(|(vec, _)| vec)
    }

    /// Like [`Self::decode()`], but also returns the count of bytes the vector occupied,
    /// so that a caller may continue reading `buf` after it.
    pub fn decode_prefix(buf: &[u8]) -> Result<(Self, usize), DecodeError> {
        let mut r = VariantReader::new(buf)?;
        let mut vars = Vec::with_capacity(r.capacity_hint());
        while let ReadResult::Some(_, var) = r.deser()? {
            vars.push(var.to_variant());
        }
        Ok((Self(vars), r.position()))
    }

    /// Like [`Self::decode()`], but the vector must occupy all of `buf`.
    pub fn decode_exact(buf: &[u8]) -> Result<Self, DecodeError> {
        let (vec, consumed) = Self::decode_prefix(buf)?;
        if consumed != buf.len() {
            return Err(DecodeError::TrailingData {
                consumed,
                len: buf.len(),
            });
        }
        Ok(vec)
    }

    /// Validates the vector at the front of `buf` without copying any payload,
    /// and returns the count of bytes it occupies.
    pub fn skip(buf: &[u8]) -> Result<usize, DecodeError> {
        let mut r = VariantReader::new(buf)?;
        while let ReadResult::Some(_, _) = r.deser()? {}
        Ok(r.position())
    }
}

impl FromIterator<Variant> for VariantVector {
    fn from_iter<I: IntoIterator<Item = Variant>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
impl IntoIterator for VariantVector {
    type Item = Variant;
    type IntoIter = vec::IntoIter<Variant>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
impl<'a> IntoIterator for &'a VariantVector {
    type Item = &'a Variant;
    type IntoIter = std::slice::Iter<'a, Variant>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
