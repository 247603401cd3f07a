//! The game's LZSS variant: a 4096-byte sliding dictionary, 8-token flag
//! groups, and a self-referential copy-back semantic shared by classic
//! LZSS implementations.
//!
//! Compressed streams begin with a 4-byte little-endian uncompressed
//! length, followed by flag-group records: a flag byte whose eight bits
//! (LSB first) each describe one following token — `1` is a literal byte,
//! `0` is a two-byte back-reference `(offset, length)`.

use crate::alloc::collections::BTreeMap;
use crate::alloc::vec::Vec;
use scroll::{Pread, Pwrite, LE};

const WSIZE: usize = 0x1000;
const WMASK: usize = 0x0fff;
const MIN_REF_LEN: usize = 3;
const MAX_REF_LEN: usize = 18;

/// Decompress a complete LZSS stream (length prefix included).
///
/// Decoding stops once the declared output length is reached or the input
/// is exhausted, whichever comes first; the result is always exactly
/// `length`-prefix bytes long (truncated if a trailing back-reference
/// would otherwise overrun it).
pub fn decompress(data: &[u8]) -> Vec<u8> {
    let output_size = match data.pread_with::<u32>(0, LE) {
        Ok(n) => n as usize,
        Err(_) => return Vec::new(),
    };

    let mut dictionary = [0u8; WSIZE];
    let mut j = WSIZE - MAX_REF_LEN;

    let mut output = Vec::with_capacity(output_size);
    let mut i = 4usize;
    let mut k = 0usize;

    while k < output_size && i < data.len() {
        let flags = data[i];
        i += 1;

        for bit in 0..8 {
            if k >= output_size {
                break;
            }
            if i >= data.len() {
                break;
            }

            if flags & (1 << bit) != 0 {
                // Literal byte.
                let b = data[i];
                i += 1;
                output.push(b);
                dictionary[j] = b;
                j = (j + 1) & WMASK;
                k += 1;
            } else {
                if i + 1 >= data.len() {
                    break;
                }
                let a = data[i];
                let b = data[i + 1];
                i += 2;

                let mut offset = (a as usize) | (((b & 0xf0) as usize) << 4);
                let mut length = (b & 0x0f) as usize + MIN_REF_LEN;

                while length > 0 {
                    let byte = dictionary[offset];
                    output.push(byte);
                    dictionary[j] = byte;
                    offset = (offset + 1) & WMASK;
                    j = (j + 1) & WMASK;
                    length -= 1;
                    k += 1;
                }
            }
        }
    }

    output.truncate(output_size);
    output
}

/// Compute the byte length of a compressed block (length prefix included)
/// without materialising the decompressed data. Useful when a compressed
/// block is embedded in a larger container with no explicit size field of
/// its own.
pub fn compressed_size(data: &[u8]) -> usize {
    let output_size = match data.pread_with::<u32>(0, LE) {
        Ok(n) => n as usize,
        Err(_) => return data.len(),
    };

    let mut i = 4usize;
    let mut k = 0usize;

    while k < output_size && i < data.len() {
        let flags = data[i];
        i += 1;

        for bit in 0..8 {
            if k >= output_size {
                break;
            }
            if i >= data.len() {
                break;
            }

            if flags & (1 << bit) != 0 {
                i += 1;
                k += 1;
            } else {
                if i + 1 >= data.len() {
                    i = data.len();
                    break;
                }
                let length = (data[i + 1] & 0x0f) as usize + MIN_REF_LEN;
                i += 2;
                k += length;
            }
        }
    }

    i
}

/// Sliding-window dictionary used only by the compressor. Tracks, per
/// match length 3..=18, a substring-to-offset map and its inverse, so a
/// stale slot's forward mapping can be evicted when its offset is
/// recycled.
struct Dictionary {
    forward: [BTreeMap<Vec<u8>, usize>; MAX_REF_LEN + 1],
    reverse: [BTreeMap<usize, Vec<u8>>; MAX_REF_LEN + 1],
    ptr: usize,
}

impl Dictionary {
    fn new() -> Self {
        Dictionary {
            forward: core::array::from_fn(|_| BTreeMap::new()),
            reverse: core::array::from_fn(|_| BTreeMap::new()),
            ptr: 0,
        }
    }

    fn add(&mut self, s: &[u8]) {
        let max_length = MAX_REF_LEN.min(s.len());
        let offset = self.ptr;

        for length in MIN_REF_LEN..=max_length {
            let substr = s[..length].to_vec();

            if let Some(prev_offset) = self.forward[length].get(&substr) {
                self.reverse[length].remove(prev_offset);
            }
            if let Some(prev_substr) = self.reverse[length].get(&offset) {
                self.forward[length].remove(prev_substr);
            }

            self.forward[length].insert(substr.clone(), offset);
            self.reverse[length].insert(offset, substr);
        }

        self.ptr = (self.ptr + 1) & WMASK;
    }

    /// Longest-match-first search: tries length 18 down to 3.
    fn find(&self, s: &[u8]) -> Option<(usize, usize)> {
        let max_length = MAX_REF_LEN.min(s.len());
        for length in (MIN_REF_LEN..=max_length).rev() {
            if let Some(&offset) = self.forward[length].get(&s[..length]) {
                return Some((offset, length));
            }
        }
        None
    }
}

/// Compress `data` into a valid LZSS stream. Not required to produce
/// byte-identical output to the original game's compressor — only a
/// stream that decompresses back to `data`.
pub fn compress(data: &[u8]) -> Vec<u8> {
    let mut dictionary = Dictionary::new();
    dictionary.ptr = (WSIZE - 2 * MAX_REF_LEN) & WMASK;

    // Prime the dictionary with 18 synthetic substrings: iteration i has
    // (18-i) leading zero bytes followed by the first i bytes of input.
    for i in 0..MAX_REF_LEN {
        let mut seed = crate::alloc::vec![0u8; MAX_REF_LEN - i];
        seed.extend_from_slice(&data[..i.min(data.len())]);
        dictionary.add(&seed);
    }

    let mut output = Vec::with_capacity(data.len() + data.len() / 8 + 4);
    output.extend_from_slice(&[0u8; 4]);
    output
        .pwrite_with(data.len() as u32, 0, LE)
        .expect("4-byte length slot was just reserved above");

    let mut i = 0usize;
    while i < data.len() {
        let mut flags: u8 = 0;
        let mut accum = Vec::new();

        for bit in 0..8u8 {
            if i >= data.len() {
                break;
            }

            let window_end = (i + MAX_REF_LEN).min(data.len());
            match dictionary.find(&data[i..window_end]) {
                Some((offset, length)) => {
                    accum.push((offset & 0xff) as u8);
                    accum.push((((offset >> 4) & 0xf0) as u8) | ((length - MIN_REF_LEN) as u8));

                    for j in 0..length {
                        let end = (i + j + MAX_REF_LEN).min(data.len());
                        dictionary.add(&data[i + j..end]);
                    }
                    i += length;
                }
                None => {
                    accum.push(data[i]);
                    flags |= 1 << bit;
                    let end = (i + MAX_REF_LEN).min(data.len());
                    dictionary.add(&data[i..end]);
                    i += 1;
                }
            }
        }

        output.push(flags);
        output.extend_from_slice(&accum);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::vec;

    #[test]
    fn compress_twenty_zero_bytes() {
        let input = vec![0u8; 20];
        let compressed = compress(&input);
        assert_eq!(&compressed[0..4], &[0x14, 0x00, 0x00, 0x00]);
        assert_eq!(decompress(&compressed), input);
    }

    #[test]
    fn round_trip_repeating_pattern() {
        let input = b"ABABABABABAB".to_vec();
        let compressed = compress(&input);
        assert_eq!(decompress(&compressed), input);
        assert!(compressed.len() < input.len() + 4);
    }

    #[test]
    fn round_trip_empty() {
        let input: Vec<u8> = Vec::new();
        let compressed = compress(&input);
        assert_eq!(decompress(&compressed), input);
    }

    #[test]
    fn round_trip_incompressible() {
        let input: Vec<u8> = (0u8..=255).cycle().take(500).collect();
        let compressed = compress(&input);
        assert_eq!(decompress(&compressed), input);
    }

    #[test]
    fn compressed_size_matches_stream_length() {
        let input = b"the quick brown fox jumps over the lazy dog, the quick brown fox".to_vec();
        let compressed = compress(&input);

        // Embed the stream inside a larger buffer to emulate it being
        // found in a bigger container with no explicit size field.
        let mut container = compressed.clone();
        container.extend_from_slice(&[0xaa; 16]);

        assert_eq!(compressed_size(&container), compressed.len());
    }
}
