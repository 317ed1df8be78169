use super::rng;
use anyhow::Result;
use itertools::Itertools;
use super::helpers::gen::gen_vector;
use varvec_types::serde::{decode_borrowed, encode_variants, Variant, VariantVector};

#[test]
fn random_vectors() -> Result<()> {
    let mut rng = rng();
    for _ in 0..2_000 {
        let vec = gen_vector(&mut rng, 16, 64);
        let buf = vec.encode();
        assert_eq!(buf.len(), vec.encoded_len());
        assert_eq!(VariantVector::decode_exact(&buf)?, vec, "{buf:02x?}");
    }
    Ok(())
}

#[test]
fn deterministic() {
    let mut rng = rng();
    for _ in 0..100 {
        let vec = gen_vector(&mut rng, 8, 16);
        assert_eq!(vec.encode(), vec.clone().encode());
        assert_eq!(vec.encode(), encode_variants(&vec[..]));
    }
}

#[test]
fn tags_on_the_wire() -> Result<()> {
    let mut rng = rng();
    for _ in 0..200 {
        let vec = gen_vector(&mut rng, 8, 8);
        let buf = vec.encode();

        // Walk the framing by hand and collect each element's tag.
        let mut pos = varvec_varint::parse_size(&buf).unwrap();
        let mut tags = vec![];
        for var in vec.iter() {
            let tag = varvec_varint::decode(&buf[pos..]).unwrap();
            tags.push(tag);
            pos += var.encoded_len();
        }
        assert_eq!(pos, buf.len());

        let exp = vec
            .iter()
            .map(|var| match var {
                Variant::UInt(_) => 0,
                Variant::Text(_) => 1,
                Variant::Blob(_) => 2,
            })
            .collect::<Vec<u64>>();
        assert_eq!(tags, exp);
    }
    Ok(())
}

#[test]
fn uint_widths() -> Result<()> {
    let values = (0..u64::BITS)
        .flat_map(|bit| {
            let pow = 1u64 << bit;
            [pow - 1, pow, pow | (pow - 1)]
        })
        .chain([u64::MAX])
        .unique()
        .map(Variant::UInt)
        .collect::<VariantVector>();
    let buf = values.encode();
    assert_eq!(VariantVector::decode_exact(&buf)?, values);
    Ok(())
}

#[test]
fn payload_lengths_across_varint_widths() -> Result<()> {
    for len in [0usize, 1, 127, 128, 16_383, 16_384, 70_000] {
        let vec = VariantVector::from(vec![
            Variant::Text(vec![b't'; len]),
            Variant::Blob(vec![0xB0; len]),
        ]);
        let buf = vec.encode();
        let dec = VariantVector::decode_exact(&buf)?;
        assert_eq!(dec, vec, "{len}");
    }
    Ok(())
}

#[test]
fn borrowed_matches_owned() -> Result<()> {
    let mut rng = rng();
    for _ in 0..500 {
        let buf = gen_vector(&mut rng, 12, 32).encode();
        let owned = VariantVector::decode(&buf)?;
        let borrowed = decode_borrowed(&buf)?;
        let reowned = borrowed
            .iter()
            .map(|var| var.to_variant())
            .collect::<VariantVector>();
        assert_eq!(owned, reowned);
    }
    Ok(())
}

#[test]
fn owned_result_outlives_buffer() -> Result<()> {
    let vec = {
        let buf = VariantVector::from(vec![Variant::text("kept")]).encode();
        VariantVector::decode(&buf)?
    };
    assert_eq!(vec[0].as_text_str(), Some(Ok("kept")));
    Ok(())
}
