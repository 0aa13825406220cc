#![no_main]
use libfuzzer_sys::fuzz_target;
use rawcipher_crypto::{create_cipher, create_decipher, supported_ciphers};

// data[0] picks the cipher, data[1] splits the payload into two writes.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let ciphers: Vec<_> = supported_ciphers().collect();
    if ciphers.is_empty() {
        return;
    }
    let d = ciphers[data[0] as usize % ciphers.len()];
    let rest = &data[2..];
    if rest.len() < d.key_len + d.iv_len {
        return;
    }
    let (key, rest) = rest.split_at(d.key_len);
    let (iv, payload) = rest.split_at(d.iv_len);
    let len = payload.len() - payload.len() % d.block_size;
    let payload = &payload[..len];
    let split = (data[1] as usize * d.block_size).min(len);

    let mut enc = create_cipher(d.name, key, iv).unwrap();
    let mut ct = vec![0u8; len];
    let (a, b) = ct.split_at_mut(split);
    enc.transform(a, &payload[..split]).unwrap();
    enc.transform(b, &payload[split..]).unwrap();

    let mut dec = create_decipher(d.name, key, iv).unwrap();
    dec.transform_in_place(&mut ct).unwrap();
    assert_eq!(ct, payload);
});
