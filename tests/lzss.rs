//! Exercises the public `lzss` API the way a caller outside the crate
//! would: compressing arbitrary payloads, decompressing them back, and
//! locating a compressed block's end inside a larger buffer.

use wildbytes::lzss;

#[test]
fn compresses_and_decompresses_prose() {
    let input = b"Under the crimson sky, the demons stirred once more.".to_vec();
    let compressed = lzss::compress(&input);
    assert_eq!(lzss::decompress(&compressed), input);
}

#[test]
fn compressed_size_locates_embedded_stream() {
    let input = vec![0x42u8; 200];
    let compressed = lzss::compress(&input);

    let mut buffer = compressed.clone();
    buffer.extend_from_slice(b"TRAILING GARBAGE THAT IS NOT PART OF THE STREAM");

    assert_eq!(lzss::compressed_size(&buffer), compressed.len());
}
