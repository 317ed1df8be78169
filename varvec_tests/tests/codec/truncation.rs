use super::rng;
use super::helpers::gen::gen_vector;
use varvec_types::serde::{Variant, VariantVector};
use varvec_types::DecodeError;

fn assert_prefixes_fail(buf: &[u8]) {
    for k in 0..buf.len() {
        match VariantVector::decode(&buf[..k]) {
            Err(DecodeError::InsufficientData { .. }) | Err(DecodeError::InvalidLength { .. }) => {}
            other => panic!("prefix {k} of {buf:02x?}: {other:?}"),
        }
        assert!(VariantVector::skip(&buf[..k]).is_err());
    }
}

#[test]
fn every_prefix_of_random_vectors() {
    let mut rng = rng();
    for _ in 0..300 {
        let vec = gen_vector(&mut rng, 6, 12);
        if vec.is_empty() {
            continue;
        }
        assert_prefixes_fail(&vec.encode());
    }
}

#[test]
fn every_prefix_of_wide_values() {
    let vec = VariantVector::from(vec![
        Variant::UInt(u64::MAX),
        Variant::Text(vec![b'x'; 200]),
        Variant::Blob(vec![]),
        Variant::UInt(1 << 56),
    ]);
    assert_prefixes_fail(&vec.encode());
}

#[test]
fn missing_elements() {
    // Declares three elements but carries two.
    let two = VariantVector::from(vec![Variant::UInt(1), Variant::UInt(2)]).encode();
    let mut buf = vec![0x03];
    buf.extend_from_slice(&two[1..]);
    assert_eq!(
        VariantVector::decode(&buf),
        Err(DecodeError::InsufficientData {
            offset: buf.len(),
            required: 1,
            available: 0
        })
    );
}

#[test]
fn errors_carry_offsets_within_the_buffer() {
    let mut rng = rng();
    for _ in 0..300 {
        let buf = gen_vector(&mut rng, 6, 12).encode();
        for k in 0..buf.len() {
            let offset = match VariantVector::decode(&buf[..k]) {
                Err(DecodeError::InsufficientData { offset, .. })
                | Err(DecodeError::InvalidLength { offset, .. }) => offset,
                _ => continue,
            };
            assert!(offset <= k, "{offset} > {k}");
        }
    }
}
