use crate::serde::ByteCursor;
use crate::DecodeError;
use derive_more::Deref;
use varvec_varint::EncodedVarInt;

#[derive(Deref, Clone, Copy, Debug)]
pub struct ElementsCount(u64);
impl ElementsCount {
    pub fn from_elements<V>(elements: &[V]) -> Self {
        Self(elements.len() as u64)
    }
    pub fn encode(&self) -> EncodedVarInt {
        varvec_varint::encode(self.0)
    }
    pub fn encoded_len(&self) -> usize {
        varvec_varint::encoded_size(self.0)
    }
    pub fn deser(r: &mut ByteCursor) -> Result<Self, DecodeError> {
        r.read_varint().map(Self)
    }
}

#[derive(Deref, Clone, Copy, Debug)]
pub struct PayloadLen(u64);
impl PayloadLen {
    pub fn from_payload(payload: &[u8]) -> Self {
        Self(payload.len() as u64)
    }
    pub fn encode(&self) -> EncodedVarInt {
        varvec_varint::encode(self.0)
    }
    pub fn encoded_len(&self) -> usize {
        varvec_varint::encoded_size(self.0)
    }
    pub fn deser(r: &mut ByteCursor) -> Result<Self, DecodeError> {
        r.read_varint().map(Self)
    }
}
