use crate::serde::{ByteCursor, Variant, VariantRef};
use crate::DecodeError;
use derive_more::{Deref, Display, From};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use varvec_varint::EncodedVarInt;

#[derive(From, Deref, Clone, Copy, Debug)]
pub struct VariantTagInt(u64);
impl From<VariantTag> for VariantTagInt {
    fn from(tag: VariantTag) -> Self {
        Self(u64::from(tag as u8))
    }
}
impl VariantTagInt {
    pub fn encode(&self) -> EncodedVarInt {
        varvec_varint::encode(self.0)
    }
    pub fn encoded_len(&self) -> usize {
        varvec_varint::encoded_size(self.0)
    }
    pub(crate) fn deser(r: &mut ByteCursor) -> Result<Self, DecodeError> {
        r.read_varint().map(Self)
    }
}

/// We map enum members to tag integers manually, rather than relying on discriminants of [`Variant`],
/// because the tag integers are part of the wire format and must never change.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, Display, Debug)]
pub enum VariantTag {
    UInt = 0,
    Text = 1,
    Blob = 2,
}
impl VariantTag {
    /// `None` for any integer outside the three known tags.
    pub fn from_int(int: VariantTagInt) -> Option<Self> {
        Self::from_u64(int.0)
    }
}
impl From<&VariantRef<'_>> for VariantTag {
    fn from(var: &VariantRef<'_>) -> Self {
        match var {
            VariantRef::UInt(_) => VariantTag::UInt,
            VariantRef::Text(_) => VariantTag::Text,
            VariantRef::Blob(_) => VariantTag::Blob,
        }
    }
}
impl From<&Variant> for VariantTag {
    fn from(var: &Variant) -> Self {
        match var {
            Variant::UInt(_) => VariantTag::UInt,
            Variant::Text(_) => VariantTag::Text,
            Variant::Blob(_) => VariantTag::Blob,
        }
    }
}
