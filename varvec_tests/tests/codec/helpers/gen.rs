use rand::Rng;
use varvec_types::serde::{Variant, VariantVector};

/// Integers spread across all varint widths, rather than mostly the widest.
pub fn gen_uint(rng: &mut impl Rng) -> u64 {
    let shift = rng.gen_range(0..u64::BITS);
    rng.gen::<u64>() >> shift
}

pub fn gen_payload(rng: &mut impl Rng, max_len: usize) -> Vec<u8> {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| rng.gen()).collect()
}

pub fn gen_variant(rng: &mut impl Rng, max_payload_len: usize) -> Variant {
    match rng.gen_range(0..3) {
        0 => Variant::UInt(gen_uint(rng)),
        1 => Variant::Text(gen_payload(rng, max_payload_len)),
        _ => Variant::Blob(gen_payload(rng, max_payload_len)),
    }
}

pub fn gen_vector(rng: &mut impl Rng, max_len: usize, max_payload_len: usize) -> VariantVector {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| gen_variant(rng, max_payload_len))
        .collect()
}
