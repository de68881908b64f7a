#![no_main]
use libfuzzer_sys::fuzz_target;
use prefixcode::{fano, huffman, lzw, shannon};

fuzz_target!(|data: &[u8]| {
    // LZW is defined for the empty input; the frequency coders are not.
    let enc = lzw::encode(data);
    let decoded = lzw::decode(&enc.bytes, enc.padding, enc.bit_width).unwrap();
    assert_eq!(decoded, data);

    if data.is_empty() {
        return;
    }

    let enc = huffman::encode(data).unwrap();
    let decoded = huffman::decode(&enc.bytes, enc.padding, &enc.table).unwrap();
    assert_eq!(decoded, data);

    let enc = shannon::encode(data).unwrap();
    let decoded = shannon::decode(&enc.bytes, enc.padding, &enc.table).unwrap();
    assert_eq!(decoded, data);

    let enc = fano::encode(data).unwrap();
    let decoded = fano::decode(&enc.bytes, enc.padding, &enc.table).unwrap();
    assert_eq!(decoded, data);
});
