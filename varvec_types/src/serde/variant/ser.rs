use crate::serde::{ElementsCount, PayloadLen, Variant, VariantRef, VariantTag, VariantTagInt};
use anyhow::Result;
use derive_more::Deref;
use std::borrow::Borrow;
use std::convert::Infallible;
use std::io::Write;

#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WriteLen(usize);

/// Feeds the encoded runs of one element to `put`, in wire order.
fn ser_element<E>(
    var: VariantRef<'_>,
    put: &mut impl FnMut(&[u8]) -> Result<(), E>,
) -> Result<usize, E> {
    let mut w_len = 0;

    /* variant_tag */
    let tag = VariantTagInt::from(VariantTag::from(&var)).encode();
    put(&tag)?;
    w_len += tag.len();

    /* value, or payload_len and payload */
    match var {
        VariantRef::UInt(i) => {
            let int = varvec_varint::encode(i);
            put(&int)?;
            w_len += int.len();
        }
        VariantRef::Text(b) | VariantRef::Blob(b) => {
            let payload_len = PayloadLen::from_payload(b).encode();
            put(&payload_len)?;
            w_len += payload_len.len();

            put(b)?;
            w_len += b.len();
        }
    }

    Ok(w_len)
}

fn ser_elements<V: Borrow<Variant>, E>(
    variants: &[V],
    put: &mut impl FnMut(&[u8]) -> Result<(), E>,
) -> Result<usize, E> {
    let mut w_len = 0;

    /* elements_count */
    let elems_ct = ElementsCount::from_elements(variants).encode();
    put(&elems_ct)?;
    w_len += elems_ct.len();

    /* elements */
    for var in variants {
        w_len += ser_element(var.borrow().as_variant_ref(), put)?;
    }

    Ok(w_len)
}

/// Encodes `variants` as a vector, into a buffer allocated once at the exact size.
pub fn encode_variants<V: Borrow<Variant>>(variants: &[V]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len_of_variants(variants));
    let mut put = |b: &[u8]| {
        buf.extend_from_slice(b);
        Ok::<(), Infallible>(())
    };
    match ser_elements(variants, &mut put) {
        Ok(_) => buf,
        Err(never) => match never {},
    }
}

/// Writes `variants` as a vector. Only I/O errors of `w` can fail this.
pub fn ser_variants<V: Borrow<Variant>, W: Write>(variants: &[V], w: &mut W) -> Result<WriteLen> {
    let mut put = |b: &[u8]| w.write_all(b);
    let w_len = ser_elements(variants, &mut put)?;
    Ok(WriteLen(w_len))
}

pub fn encoded_len_of_variants<V: Borrow<Variant>>(variants: &[V]) -> usize {
    let elems_ct_len = ElementsCount::from_elements(variants).encoded_len();
    variants.iter().fold(elems_ct_len, |tot, var| {
        tot + var.borrow().encoded_len()
    })
}

impl VariantRef<'_> {
    pub fn encoded_len(&self) -> usize {
        let tag_len = VariantTagInt::from(VariantTag::from(self)).encoded_len();
        let body_len = match *self {
            VariantRef::UInt(i) => varvec_varint::encoded_size(i),
            VariantRef::Text(b) | VariantRef::Blob(b) => {
                PayloadLen::from_payload(b).encoded_len() + b.len()
            }
        };
        tag_len + body_len
    }

    /// Writes this element alone, without a vector's `elements_count`.
    pub fn ser(&self, w: &mut impl Write) -> Result<WriteLen> {
        let mut put = |b: &[u8]| w.write_all(b);
        let w_len = ser_element(*self, &mut put)?;
        Ok(WriteLen(w_len))
    }
}

impl Variant {
    pub fn encoded_len(&self) -> usize {
        self.as_variant_ref().encoded_len()
    }

    /// Writes this element alone, without a vector's `elements_count`.
    pub fn ser(&self, w: &mut impl Write) -> Result<WriteLen> {
        self.as_variant_ref().ser(w)
    }
}
