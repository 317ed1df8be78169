use super::rng;
use anyhow::Result;
use std::sync::Arc;
use std::thread;
use super::helpers::gen::gen_vector;
use varvec_types::serde::{VariantReader, VariantVector};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn types_are_send_and_sync() {
    assert_send_sync::<VariantVector>();
    assert_send_sync::<VariantReader<'static>>();
    assert_send_sync::<varvec_types::DecodeError>();
}

#[test]
fn shared_buffers_decode_in_parallel() -> Result<()> {
    let mut rng = rng();
    let vecs = (0..16)
        .map(|_| gen_vector(&mut rng, 32, 64))
        .collect::<Vec<_>>();
    let bufs = Arc::new(vecs.iter().map(|vec| vec.encode()).collect::<Vec<_>>());

    let tasks = (0..8)
        .map(|_| {
            let bufs = Arc::clone(&bufs);
            thread::spawn(move || {
                bufs.iter()
                    .map(|buf| VariantVector::decode(buf))
                    .collect::<Result<Vec<_>, _>>()
            })
        })
        .collect::<Vec<_>>();

    for task in tasks {
        let decoded = task.join().map_err(|_| anyhow::anyhow!("Decoder thread panicked."))??;
        assert_eq!(decoded, vecs);
    }
    Ok(())
}
