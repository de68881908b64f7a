use prefixcode::{fano, huffman, lzw, shannon};

fn main() {
    let input: Vec<u8> = (0..10_000)
        .map(|i| match i % 7 {
            0..=3 => b'a',
            4 | 5 => b'b',
            _ => b'c',
        })
        .collect();

    for _ in 0..1000 {
        let enc = huffman::encode(&input).unwrap();
        huffman::decode(&enc.bytes, enc.padding, &enc.table).unwrap();

        let enc = shannon::encode(&input).unwrap();
        shannon::decode(&enc.bytes, enc.padding, &enc.table).unwrap();

        let enc = fano::encode(&input).unwrap();
        fano::decode(&enc.bytes, enc.padding, &enc.table).unwrap();

        let enc = lzw::encode(&input);
        lzw::decode(&enc.bytes, enc.padding, enc.bit_width).unwrap();
    }
}
