fn main() {
    divan::main();
}

const PLAIN: &str = include_str!("../../tests/yml64/testdata/encode-keep-metadata/input.yaml");
const ENCODED: &str = include_str!("../../tests/yml64/testdata/decode-keep-metadata/input.yaml");

#[divan::bench]
fn encode() -> Vec<u8> {
    yml64::encode(divan::black_box(PLAIN.as_bytes()), false).unwrap()
}

#[divan::bench]
fn encode_keep_metadata() -> Vec<u8> {
    yml64::encode(divan::black_box(PLAIN.as_bytes()), true).unwrap()
}

#[divan::bench]
fn decode() -> Vec<u8> {
    yml64::decode(divan::black_box(ENCODED.as_bytes()), false).unwrap()
}
