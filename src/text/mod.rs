//! The game's text codec: a shared control-code grammar over two very
//! different body encodings — a single-byte western charset (with two
//! selectable variants) and a stateful multi-byte Japanese encoding with
//! three independent ways to resolve a Kanji glyph.
//!
//! Control codes, once decoded, render as `{NAME}` or `{NAME d}` (decimal
//! digits for the argument); the same text is re-encoded by parsing those
//! braces back out. `\`, `{` and `}` are escape-sensitive data bytes and
//! round-trip through a leading backslash.

mod kanji_hash_table;
mod tables;

use crate::alloc::format;
use crate::alloc::string::{String, ToString};
use crate::alloc::vec::Vec;
use crate::error::{self, Error};
use crate::version::Version;

use kanji_hash_table::KANJI_BY_HASH;
use tables::{ALT_CHARSET, CONTROL_CODES, KANJI1, KANJI2, KATAKANA, ORIG_CHARSET};

/// Which of the two western single-byte charsets is active. Passed
/// explicitly to every decode/encode call rather than toggled as global
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextVariant {
    /// Mirrors the original game font.
    #[default]
    Original,
    /// Designed for a replacement font.
    Alternate,
}

impl TextVariant {
    fn charset(self) -> &'static [char] {
        match self {
            TextVariant::Original => &ORIG_CHARSET,
            TextVariant::Alternate => &ALT_CHARSET,
        }
    }
}

const ESCAPE_CHARS: [char; 3] = ['\\', '{', '}'];

/// Decode a control code starting just after its opcode byte. Returns the
/// rendered `{NAME}`/`{NAME d}` form and the index past the argument.
fn decode_control(code: u8, data: &[u8], index: usize) -> error::Result<(String, usize)> {
    let (arg_len, name) = CONTROL_CODES[code as usize];
    let arg_len = arg_len as usize;

    let arg = data
        .get(index..index + arg_len)
        .ok_or_else(|| Error::Malformed("control code argument runs past end of string".into()))?;

    let rendered = if arg_len > 0 {
        let digits = core::str::from_utf8(arg)
            .map_err(|_| Error::Malformed("control code argument is not ASCII".into()))?;
        format!("{{{name} {digits}}}")
    } else {
        format!("{{{name}}}")
    };

    Ok((rendered, index + arg_len))
}

/// Decode a null-terminated text string from a western (US/European)
/// release.
pub fn decode(data: &[u8], variant: TextVariant) -> error::Result<String> {
    let charset = variant.charset();
    let mut text = String::new();
    let mut i = 0usize;

    while i < data.len() {
        let c = data[i];
        i += 1;

        if c == 0x00 {
            break;
        } else if c <= 0x1f {
            let (code, next) = decode_control(c, data, i)?;
            text.push_str(&code);
            i = next;
        } else {
            let t = *charset.get(c as usize - 0x20).ok_or_else(|| {
                Error::Malformed(format!("character code {c:#04x} out of range"))
            })?;
            if ESCAPE_CHARS.contains(&t) {
                text.push('\\');
            }
            text.push(t);
        }
    }

    Ok(text)
}

/// Encode a Unicode string back into western game text, terminated with a
/// trailing `\0`. `version` controls an additional US-specific
/// restriction: every encoded byte must be < 0x80.
pub fn encode(text: &str, version: Version, variant: TextVariant) -> error::Result<Vec<u8>> {
    let charset = variant.charset();
    let chars: Vec<char> = text.chars().collect();
    let mut data = Vec::with_capacity(chars.len() + 1);

    let mut i = 0usize;
    while i < chars.len() {
        let c = chars[i];
        i += 1;

        if c == '\\' {
            let escaped = *chars
                .get(i)
                .ok_or_else(|| Error::Malformed(format!("spurious '\\' at end of string {text:?}")))?;
            i += 1;

            if ESCAPE_CHARS.contains(&escaped) {
                let code = charset
                    .iter()
                    .position(|&t| t == escaped)
                    .ok_or_else(|| Error::RangeError(format!("escaped character {escaped:?} not in charset")))?;
                data.push((code + 0x20) as u8);
            } else {
                return Err(Error::Malformed(format!(
                    "unknown escape sequence '\\{escaped}' in string {text:?}"
                )));
            }
        } else if c == '{' {
            let rest = &text[byte_offset(&chars, i)..];
            let end = rest.find('}').ok_or_else(|| {
                Error::Malformed(format!("mismatched {{}} in string {text:?}"))
            })?;
            let command = &rest[..end];
            let keyword = command.split_whitespace().next().unwrap_or(command);

            i += command.chars().count() + 1;

            let code = CONTROL_CODES
                .iter()
                .position(|&(_, name)| name == keyword)
                .ok_or_else(|| Error::Malformed(format!("unknown command '{keyword}' in string {text:?}")))?;

            data.push(code as u8);

            let (arg_len, _) = CONTROL_CODES[code];
            if arg_len > 0 {
                let digits = command[keyword.len()..].trim();
                let arg: u32 = digits
                    .parse()
                    .map_err(|_| Error::Malformed(format!("syntax error in command '{command}' in string {text:?}")))?;

                let max = 10u32.pow(arg_len as u32);
                if arg >= max {
                    return Err(Error::RangeError(format!(
                        "argument of {keyword} command out of range in string {text:?}"
                    )));
                }

                let formatted = format!("{:0width$}", arg, width = arg_len as usize);
                data.extend(formatted.bytes());
            }
        } else {
            let code = charset.iter().position(|&t| t == c).ok_or_else(|| {
                Error::Malformed(format!("unencodable character '{c}' in string {text:?}"))
            })?;
            let t = (code + 0x20) as u8;

            if version == Version::Us && t >= 0x80 {
                return Err(Error::RangeError(format!(
                    "unencodable character '{c}' in string {text:?}"
                )));
            }

            data.push(t);
        }
    }

    data.push(0);
    Ok(data)
}

fn byte_offset(chars: &[char], char_index: usize) -> usize {
    chars[..char_index].iter().map(|c| c.len_utf8()).sum()
}

/// Decode a null-terminated text string from the Japanese release.
///
/// `kanji_bitmap` is the map's per-level Kanji font bitmap, if any; when
/// absent, Kanji resolve through the two global banks instead of the
/// per-map CRC32 hash table.
pub fn decode_jp(data: &[u8], kanji_bitmap: Option<&[u8]>) -> error::Result<String> {
    let mut text = String::new();
    let mut large_font = false;
    let mut i = 0usize;

    while i < data.len() {
        let c = data[i];
        i += 1;

        if c == 0x00 {
            break;
        } else if c <= 0x1f {
            let (code, next) = decode_control(c, data, i)?;
            text.push_str(&code);
            i = next;

            if c == 0x14 {
                large_font = true;
            } else if c == 0x0e {
                large_font = false;
            }
        } else if (0x28..=0x7a).contains(&c) {
            // Half-width Hiragana, reconstructed as the Shift-JIS pair it
            // mirrors (lead 0x82, trail offset by 0x77).
            text.push(decode_sjis_pair(0x82, c.wrapping_add(0x77))?);
        } else if (0x81..=0x84).contains(&c) {
            let trail = *data.get(i).ok_or_else(|| {
                Error::Malformed("truncated Shift-JIS pass-through byte".into())
            })?;
            i += 1;
            text.push(decode_sjis_pair(c, trail)?);
        } else if (0x88..=0x9f).contains(&c) {
            let c2 = *data
                .get(i)
                .ok_or_else(|| Error::Malformed("truncated Kanji trail byte".into()))?;
            i += 1;

            let resolved = if large_font {
                Some(decode_sjis_pair(c, c2)?)
            } else if kanji_bitmap.is_none() {
                let slot = c2.checked_sub(1).map(|n| n as usize);
                match (c, slot) {
                    (0x88, Some(slot)) => KANJI1.get(slot).copied(),
                    (0x89, Some(slot)) => KANJI2.get(slot).copied(),
                    _ => None,
                }
            } else {
                resolve_kanji_hash(c, c2, kanji_bitmap.unwrap())?
            };

            match resolved {
                Some(ch) => text.push(ch),
                None => text.push_str(&format!("{{KANJI {c:02x} {c2:02x}}}")),
            }
        } else if (0xa7..=0xdd).contains(&c) {
            text.push(KATAKANA[c as usize - 0xa7]);
        } else {
            text.push_str(&format!("{{{c:#x}}}"));
        }
    }

    Ok(text)
}

/// Japanese text encoding is out of scope: the original decoder has no
/// practical inverse (Kanji selection depends on font state and,
/// per-map, on bitmap identity rather than codepoint).
pub fn encode_jp(_text: &str) -> error::Result<Vec<u8>> {
    Err(Error::EncodingUnsupported("Japanese text encoding"))
}

/// Decode a two-byte Shift-JIS sequence to its single character. Used for
/// half-width Hiragana (reconstructed with lead byte 0x82), the raw
/// double-byte passthrough range, and large-font Kanji, all of which the
/// original codec resolves by handing the pair to a full Shift-JIS
/// decoder rather than a game-specific table.
fn decode_sjis_pair(lead: u8, trail: u8) -> error::Result<char> {
    let (cow, _, had_errors) = encoding_rs::SHIFT_JIS.decode(&[lead, trail]);
    if had_errors || cow.chars().count() != 1 {
        return Err(Error::Malformed(format!(
            "unrepresentable Shift-JIS pair {lead:02x} {trail:02x}"
        )));
    }
    Ok(cow.chars().next().unwrap())
}

fn resolve_kanji_hash(lead: u8, trail: u8, kanji_bitmap: &[u8]) -> error::Result<Option<char>> {
    let Some(trail_idx) = trail.checked_sub(1) else {
        return Ok(None);
    };
    let slot = (lead as usize - 0x88) * 0xfd + trail_idx as usize;
    let offset = slot * 22;

    if offset > kanji_bitmap.len().saturating_sub(22) {
        return Ok(None);
    }

    let glyph = &kanji_bitmap[offset..offset + 22];

    #[cfg(feature = "kanji-hash")]
    {
        let hash = crc32fast::hash(glyph);
        let found = KANJI_BY_HASH
            .binary_search_by_key(&hash, |&(h, _)| h)
            .ok()
            .map(|idx| KANJI_BY_HASH[idx].1);

        #[cfg(feature = "log")]
        if found.is_none() {
            log::warn!("unknown Kanji {lead:02x} {trail:02x}, hash = {hash:#010x}");
            for row in glyph.chunks_exact(2) {
                let mut v = u16::from_be_bytes([row[0], row[1]]);
                let mut line = String::with_capacity(16);
                for _ in 0..16 {
                    line.push(if v & 0x8000 != 0 { '#' } else { '.' });
                    v <<= 1;
                }
                log::warn!("{line}");
            }
        }

        Ok(found)
    }

    #[cfg(not(feature = "kanji-hash"))]
    {
        let _ = glyph;
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_ascii() {
        let data = b"HELLO\x00";
        assert_eq!(decode(data, TextVariant::Original).unwrap(), "HELLO");
    }

    #[test]
    fn decodes_control_code_with_argument() {
        // 0x02 (NUM) followed by a one-digit ASCII argument.
        let data = b"\x02" ;
        let mut v = data.to_vec();
        v.push(b'7');
        v.push(0);
        assert_eq!(decode(&v, TextVariant::Original).unwrap(), "{NUM 7}");
    }

    #[test]
    fn decodes_control_code_without_argument() {
        let data = [0x0d, 0x00];
        assert_eq!(decode(&data, TextVariant::Original).unwrap(), "{CR}");
    }

    #[test]
    fn round_trips_escape_characters() {
        let encoded = encode("a\\{b\\}c", Version::En, TextVariant::Original).unwrap();
        let decoded = decode(&encoded, TextVariant::Original).unwrap();
        assert_eq!(decoded, "a\\{b\\}c");
    }

    #[test]
    fn round_trips_command_with_argument() {
        let encoded = encode("{WAIT 42}", Version::En, TextVariant::Original).unwrap();
        let decoded = decode(&encoded, TextVariant::Original).unwrap();
        assert_eq!(decoded, "{WAIT 42}");
    }

    #[test]
    fn us_rejects_high_bit_characters() {
        // Code point 0x80 in the charset (Ç) must be rejected for US.
        let ch = ORIG_CHARSET[0x80 - 0x20];
        let text = ch.to_string();
        assert!(encode(&text, Version::Us, TextVariant::Original).is_err());
        assert!(encode(&text, Version::En, TextVariant::Original).is_ok());
    }

    #[test]
    fn decode_jp_falls_back_to_unknown_kanji_placeholder() {
        // Lead byte 0x88 with an out-of-range trail, no bitmap supplied.
        let data = [0x88, 0xff, 0x00];
        let text = decode_jp(&data, None).unwrap();
        assert_eq!(text, "{KANJI 88 ff}");
    }

    #[test]
    fn decode_jp_resolves_global_kanji_bank() {
        // lead 0x88, trail 0x01 -> KANJI1[0]
        let data = [0x88, 0x01, 0x00];
        let text = decode_jp(&data, None).unwrap();
        assert_eq!(text, KANJI1[0].to_string());
    }

    #[test]
    fn decode_jp_resolves_katakana() {
        let data = [0xa7, 0x00];
        let text = decode_jp(&data, None).unwrap();
        assert_eq!(text, KATAKANA[0].to_string());
    }

    #[test]
    fn encode_jp_is_unsupported() {
        assert!(matches!(
            encode_jp("hello"),
            Err(Error::EncodingUnsupported(_))
        ));
    }
}
