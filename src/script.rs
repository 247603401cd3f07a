//! The map bytecode disassembler: opcode tables, a recursive prefix
//! expression parser, per-instruction decoding heuristics (including the
//! "this looks like a string, not an opcode" detection that lets code and
//! text share one byte stream), and the address-recalculation/relocation
//! pass a script goes through after it's been edited and needs to be
//! written back at a new size.

use crate::alloc::format;
use crate::alloc::string::{String, ToString};
use crate::alloc::vec;
use crate::alloc::vec::Vec;
use crate::coords::{offset_to_addr, MAP_BASE_POINTER};
use crate::error::{self, Error};
use crate::text::{self, TextVariant};
use crate::version::Version;
use scroll::{Pread, Pwrite, LE};

/// Opcode byte value constants. Not every instruction mnemonic gets a
/// named constant here — only the ones [`parse_instruction`] needs to
/// special-case; the rest are handled purely by table lookup.
pub mod op {
    pub const RETURN: u8 = 0x00;
    pub const CALL: u8 = 0x01;
    pub const WINDOW: u8 = 0x03;
    pub const CLOSE: u8 = 0x04;
    pub const MESSAGE: u8 = 0x06;
    pub const ASSIGN: u8 = 0x08;
    pub const JUMP: u8 = 0x09;
    pub const BREAK: u8 = 0x0a;
    pub const IF: u8 = 0x0b;
    pub const WHILE: u8 = 0x0c;
    pub const WAIT: u8 = 0x0e;
    pub const SHOW: u8 = 0x0f;
    pub const HIDE: u8 = 0x10;
    pub const ANIM: u8 = 0x12;
    pub const MOVE: u8 = 0x13;
    pub const VFX: u8 = 0x14;
    pub const BATTLE: u8 = 0x15;
    pub const MENU: u8 = 0x16;
    pub const MAPFUNC: u8 = 0x17;
    pub const EXEC: u8 = 0x18;
    pub const SOUND: u8 = 0x21;
    pub const MUSIC: u8 = 0x22;
    pub const ENDING: u8 = 0x24;
    pub const GAMEOVER: u8 = 0x27;
}

/// (nominal length in bytes, mnemonic) per opcode 0x00..=0x28. Many
/// entries are placeholders for opcodes that are unused, unknown, or
/// whose real length must be scanned rather than looked up.
const OPCODES: [(u8, &str); 41] = [
    (1, "return"),
    (3, "call"),
    (1, "halt"),
    (2, "window"),
    (1, "close"),
    (1, "{0x05}"),
    (1, "message"),
    (1, "{0x07}"),
    (1, "let"),
    (3, "jump"),
    (3, "break"),
    (1, "if"),
    (1, "while"),
    (7, "{0x0d}"),
    (3, "wait"),
    (3, "show"),
    (3, "hide"),
    (12, "{0x11}"),
    (6, "anim"),
    (5, "move"),
    (2, "vfx"),
    (8, "battle"),
    (2, "menu"),
    (2, "mapfunc"),
    (5, "exec"),
    (4, "{0x19}"),
    (2, "{0x1a}"),
    (12, "{0x1b}"),
    (4, "{0x1c}"),
    (4, "{0x1d}"),
    (7, "{0x1e}"),
    (4, "{0x1f}"),
    (11, "{0x20}"),
    (4, "sound"),
    (4, "music"),
    (3, "{0x23}"),
    (1, "ending"),
    (6, "{0x25}"),
    (1, "nop"),
    (1, "gameover"),
    (3, "{0x28}"),
];

/// Mnemonic/operand name per expression opcode 0x00..=0x28. `None` marks
/// a gap in the table — a value the original decompiler never observed
/// in practice.
const EX_OPCODES: [Option<&str>; 41] = [
    Some("=="),
    Some("!="),
    Some(">"),
    Some(">="),
    Some("<"),
    Some("<="),
    Some("&"),
    Some("|"),
    Some("^"),
    Some("== 0"),
    Some("+"),
    Some("-"),
    Some("*"),
    Some("/"),
    Some("%"),
    None,
    Some(""),
    Some("result"),
    Some("rand"),
    Some("var"),
    Some("flag"),
    Some("addr"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some("party_size"),
    Some("gold"),
    Some("party"),
    Some("level"),
    Some("exp"),
    Some("status"),
    Some("inventory"),
    Some("spell"),
    Some("arm"),
];
// NOTE: the source table has 41 entries (0x00..=0x28); "fast_draw" and
// "tool" fall just past that range and are folded in below since Rust
// array literals can't conditionally extend — see `ex_opcode_name`.

fn ex_opcode_name(op: u8) -> error::Result<&'static str> {
    match op {
        0x29 => Ok("fast_draw"),
        0x2a => Ok("tool"),
        _ => EX_OPCODES
            .get(op as usize)
            .copied()
            .flatten()
            .ok_or_else(|| Error::Malformed(format!("unrecognized expression opcode {op:#04x}"))),
    }
}

/// Parse a recursive prefix expression starting at `data[offset]`.
/// Returns `(length_in_bytes, rendered_string)`; any embedded script
/// address (opcode 0x15) appends its absolute byte offset within `data`
/// to `reloc`.
pub fn parse_expression(
    data: &[u8],
    offset: usize,
    reloc: &mut Vec<usize>,
    assignment: bool,
) -> error::Result<(usize, String)> {
    let op = *data
        .get(offset)
        .ok_or_else(|| Error::Malformed("expression runs past end of data".into()))?;
    let mut length = 1usize;

    if op == 0x09 {
        let (lhs_len, lhs) = parse_expression(data, offset + 1, reloc, false)?;
        length += lhs_len;
        Ok((length, format!("({lhs} {})", ex_opcode_name(op)?)))
    } else if op < 0x10 {
        let (lhs_len, lhs) = parse_expression(data, offset + 1, reloc, false)?;
        let (rhs_len, rhs) = parse_expression(data, offset + 1 + lhs_len, reloc, false)?;
        length += lhs_len + rhs_len;
        Ok((length, format!("({lhs} {} {rhs})", ex_opcode_name(op)?)))
    } else if op == 0x10 {
        let v: i16 = data
            .pread_with(offset + 1, LE)
            .map_err(|_| Error::Malformed("truncated immediate in expression".into()))?;
        length += 2;
        Ok((length, v.to_string()))
    } else if op == 0x15 {
        let v: u16 = data
            .pread_with(offset + 1, LE)
            .map_err(|_| Error::Malformed("truncated address in expression".into()))?;
        reloc.push(offset + 1);
        length += 2;
        Ok((length, format!("(addr {v:04x})")))
    } else if op == 0x12 || op == 0x20 {
        Ok((length, ex_opcode_name(op)?.to_string()))
    } else if op == 0x11 || op == 0x21 {
        let mut s = ex_opcode_name(op)?.to_string();
        if assignment {
            let (lhs_len, lhs) = parse_expression(data, offset + 1, reloc, false)?;
            length += lhs_len;
            s.push_str(" = ");
            s.push_str(&lhs);
        }
        Ok((length, s))
    } else {
        let (rhs_len, rhs) = parse_expression(data, offset + 1, reloc, false)?;
        length += rhs_len;
        let mut s = format!("{}[{rhs}]", ex_opcode_name(op)?);

        if assignment {
            let (lhs_len, lhs) = parse_expression(data, offset + 1 + rhs_len, reloc, false)?;
            length += lhs_len;
            s.push_str(" = ");
            s.push_str(&lhs);
        }
        Ok((length, s))
    }
}

/// One decoded bytecode element. The three pseudo-ops the original
/// linker's output forces us to recognise — an entry-table slot, an
/// embedded string literal, and a self-referential filler pointer — are
/// distinct variants rather than a shared struct with an opcode tag,
/// since they carry different data and only `Regular` participates in
/// the opcode-keyed operand grammar.
#[derive(Debug, Clone)]
pub enum Instruction {
    /// One slot of a script's leading address table.
    Entry { addr: u16, target: u16, bytes: Vec<u8> },
    /// A text string embedded in the code stream rather than referenced
    /// through a MESSAGE opcode.
    String { addr: u16, disass: String, bytes: Vec<u8> },
    /// A linker-inserted self-pointer filler word, never executed.
    Ptr { addr: u16, bytes: [u8; 4] },
    /// An ordinary instruction.
    Regular {
        op: u8,
        addr: u16,
        bytes: Vec<u8>,
        disass: String,
        /// Byte offsets, relative to the start of this instruction, of
        /// any 16-bit script addresses embedded in its operands.
        reloc: Vec<usize>,
    },
}

impl Instruction {
    pub fn addr(&self) -> u16 {
        match self {
            Instruction::Entry { addr, .. }
            | Instruction::String { addr, .. }
            | Instruction::Ptr { addr, .. }
            | Instruction::Regular { addr, .. } => *addr,
        }
    }

    pub fn set_addr(&mut self, new_addr: u16) {
        match self {
            Instruction::Entry { addr, .. }
            | Instruction::String { addr, .. }
            | Instruction::Ptr { addr, .. }
            | Instruction::Regular { addr, .. } => *addr = new_addr,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            Instruction::Entry { bytes, .. } => bytes,
            Instruction::String { bytes, .. } => bytes,
            Instruction::Ptr { bytes, .. } => bytes,
            Instruction::Regular { bytes, .. } => bytes,
        }
    }

    pub fn disass(&self) -> String {
        match self {
            Instruction::Entry { target, .. } => format!("entry {target:02x}"),
            Instruction::String { disass, .. } => disass.clone(),
            Instruction::Ptr { .. } => "<PTR>".to_string(),
            Instruction::Regular { disass, .. } => disass.clone(),
        }
    }

    pub fn op(&self) -> Option<u8> {
        match self {
            Instruction::Regular { op, .. } => Some(*op),
            _ => None,
        }
    }

    /// Text of a MESSAGE or STRING instruction, encoded in the game
    /// character set and null-terminated.
    pub fn get_text(&self) -> error::Result<&[u8]> {
        match self {
            Instruction::Regular { op, bytes, .. } if *op == op::MESSAGE => Ok(&bytes[1..]),
            Instruction::String { bytes, .. } => Ok(bytes),
            other => Err(Error::NotTextInstruction {
                disassembly: other.disass(),
            }),
        }
    }

    /// Replace the text of a MESSAGE or STRING instruction. `text` must
    /// already be encoded in the game character set and null-terminated.
    pub fn set_text(&mut self, text: &[u8]) -> error::Result<()> {
        match self {
            Instruction::Regular { op, bytes, disass, .. } if *op == op::MESSAGE => {
                let mut new_bytes = vec![op::MESSAGE];
                new_bytes.extend_from_slice(text);
                *bytes = new_bytes;
                *disass = "message".to_string();
                Ok(())
            }
            Instruction::String { bytes, disass, .. } => {
                *bytes = text.to_vec();
                *disass = "string".to_string();
                Ok(())
            }
            other => Err(Error::NotTextInstruction {
                disassembly: other.disass(),
            }),
        }
    }

    /// Rewrite any relocatable addresses in this instruction's operands
    /// according to an old-address-to-new-address mapping. An [`Entry`]
    /// slot's single address and a [`Regular`] instruction's `reloc`
    /// offsets both go through the same address map; other variants have
    /// nothing to relocate.
    ///
    /// [`Entry`]: Instruction::Entry
    /// [`Regular`]: Instruction::Regular
    pub fn relocate(&mut self, addr_map: &crate::alloc::collections::BTreeMap<u16, u16>) -> error::Result<()> {
        match self {
            Instruction::Entry { target, bytes, .. } => {
                let new_addr = *addr_map.get(target).ok_or_else(|| {
                    Error::Malformed(format!("relocation target {target:04x} not in address map"))
                })?;
                *target = new_addr;
                bytes.pwrite_with(new_addr, 0, LE)?;
                Ok(())
            }
            Instruction::Regular { op, addr, bytes, reloc, .. } => {
                for &offset in reloc.iter() {
                    let old_addr: u16 = bytes.pread_with(offset, LE)?;
                    let new_addr = *addr_map.get(&old_addr).ok_or_else(|| {
                        Error::Malformed(format!("relocation target {old_addr:04x} not in address map"))
                    })?;

                    if *op == op::CALL && new_addr == 0xfffe {
                        return Err(Error::ReservedCallTarget {
                            addr: *addr,
                            new_addr,
                        });
                    }

                    bytes.pwrite_with(new_addr, offset, LE)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

fn hex_join(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:#x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode one instruction at `offset`. `base_pointer` is the pointer the
/// containing block is loaded at (almost always
/// [`crate::coords::MAP_BASE_POINTER`]); `kanji_bitmap` is forwarded to
/// the text codec for Japanese releases.
pub fn parse_instruction(
    data: &[u8],
    offset: usize,
    version: Version,
    variant: TextVariant,
    base_pointer: u32,
    kanji_bitmap: Option<&[u8]>,
) -> error::Result<Instruction> {
    let op = *data
        .get(offset)
        .ok_or_else(|| Error::Malformed("instruction offset past end of data".into()))?;

    let addr = offset_to_addr(offset, base_pointer);

    // The linker has a habit of inserting self-referential filler
    // pointers at 4-byte-aligned positions. Recognise and skip them.
    if offset % 4 == 0 {
        if let Ok(p) = data.pread_with::<u32>(offset, LE) {
            if p == offset as u32 + MAP_BASE_POINTER {
                let mut bytes = [0u8; 4];
                bytes.copy_from_slice(&data[offset..offset + 4]);
                return Ok(Instruction::Ptr { addr, bytes });
            }
        }
    }

    let word = data.pread_with::<u32>(offset, LE).ok();
    let looks_like_string = op == 0x05
        || op > 0x28
        || word == Some(0x20202020)
        || (op == 0x11 && !matches!(data.get(offset + 2), Some(0x00) | Some(0xff)));

    if looks_like_string {
        let end = find_byte(data, offset, 0x00)?;
        let decoded = decode_text(&data[offset..end], version, variant, kanji_bitmap)?;
        return Ok(Instruction::String {
            addr,
            disass: format!("string {decoded}"),
            bytes: data[offset..end + 1].to_vec(),
        });
    }

    let (length, mnemonic) = OPCODES
        .get(op as usize)
        .copied()
        .ok_or_else(|| Error::Malformed(format!("opcode {op:#04x} out of range")))?;
    let mut length = length as usize;
    let mut disass = mnemonic.to_string();
    let mut reloc: Vec<usize> = Vec::new();

    if op == op::MESSAGE {
        let end = find_byte(data, offset, 0x00)?;
        let decoded = decode_text(&data[offset + 1..end], version, variant, kanji_bitmap)?;
        disass = format!("{disass} {decoded}");
        length = end - offset + 1;
    } else if op == op::CALL || op == op::JUMP || op == op::BREAK {
        let target: u16 = data.pread_with(offset + 1, LE)?;
        disass = format!("{disass} {target:04x}");
        if op != op::CALL || target != 0xfffe {
            reloc.push(1);
        }
    } else if op == op::WINDOW {
        let sel = *require(data, offset + 1, 1)?.first().unwrap();
        disass = format!("{disass} {sel}");
        if sel == 3 {
            let params = require(data, offset + 2, 10)?;
            let vals: Vec<u16> = (0..5)
                .map(|i| params.pread_with::<u16>(i * 2, LE))
                .collect::<Result<_, _>>()?;
            disass = format!(
                "{disass} type {}, x/y = ({}, {}), w/h = ({}, {})",
                vals[0], vals[1], vals[2], vals[3], vals[4]
            );
            length += 10;
        }
    } else if op == op::ASSIGN {
        let mut ex_reloc = Vec::new();
        let (ex_len, ex_str) = parse_expression(data, offset + 1, &mut ex_reloc, true)?;
        reloc.extend(ex_reloc.into_iter().map(|x| x - offset));
        disass = format!("{disass} {ex_str}");
        length += ex_len;
    } else if op == op::IF || op == op::WHILE {
        let mut ex_reloc = Vec::new();
        let (ex_len, ex_str) = parse_expression(data, offset + 1, &mut ex_reloc, false)?;
        reloc.extend(ex_reloc.into_iter().map(|x| x - offset));
        reloc.push(1 + ex_len);
        let target: u16 = data.pread_with(offset + 1 + ex_len, LE)?;
        disass = format!("{disass} {ex_str}: (else jump {target:04x})");
        length += ex_len + 2;
    } else if op == 0x0d {
        let sel = *require(data, offset + 1, 1)?.first().unwrap();
        if matches!(sel, 0xfc | 0xfd | 0xfe) {
            length += 1;
        }
        disass = format!("{disass} {}", hex_join(require(data, offset + 1, length - 1)?));
    } else if op == op::WAIT {
        let sel: u16 = data.pread_with(offset + 1, LE)?;
        if matches!(sel, 0xfff2 | 0xfff3 | 0xfff9 | 0xfffc) {
            length += 2;
        }
        disass = format!("{disass} {}", hex_join(require(data, offset + 1, length - 1)?));
    } else if op == op::MOVE {
        let mut end = offset + 3;
        while !matches!(data.get(end), Some(0xfe) | Some(0xff)) {
            end = end
                .checked_add(1)
                .filter(|&e| e < data.len())
                .ok_or_else(|| Error::Malformed("unterminated move instruction".into()))?;
        }
        length = end - offset + 1;
        disass = format!("{disass} {}", hex_join(require(data, offset + 1, length - 1)?));
    } else if op == op::VFX {
        let sel = *require(data, offset + 1, 1)?.first().unwrap();
        length += match sel {
            0xf1 => 5,
            0xf4 | 0xfd => 6,
            0xf5 | 0xf6 => 3,
            0xfb => 2,
            0xff => 8,
            _ => 0,
        };
        disass = format!("{disass} {}", hex_join(require(data, offset + 1, length - 1)?));
    } else if op == op::MENU {
        let sel = *require(data, offset + 1, 1)?.first().unwrap();
        disass = format!("{disass} {sel:#x}");

        match sel {
            0x01 => disass.push_str(" (memory card)"),
            0x02 => {
                disass.push_str(" (name entry)");
                length += 2;
            }
            0x03 => {
                disass.push_str(" (buy)");
                let end = find_byte(data, offset, 0xff)?;
                length += end - offset - 1;
            }
            0x04 => disass.push_str(" (sell)"),
            0x07 => disass.push_str(" (upgrade)"),
            0x08 => {
                disass.push_str(" (create magic)");
                length += 1;
            }
            0x09 => {
                disass.push_str(" (load/save)");
                length += 1;
            }
            0x0a => disass.push_str(" (reload)"),
            0x0e => disass.push_str(" (trial results)"),
            0xff => disass.push_str(" (change)"),
            _ => {}
        }

        if length > 2 {
            disass = format!("{disass} {}", hex_join(require(data, offset + 2, length - 2)?));
        }
    } else if op == op::EXEC {
        let p: u32 = data.pread_with(offset + 1, LE)?;
        disass = format!("{disass} {p:08x}");
    } else if op == 0x19 || op == 0x1d {
        let sel = *require(data, offset + 3, 1)?.first().unwrap();
        if sel == 0xff {
            length += 3;
        }
        disass = format!("{disass} {}", hex_join(require(data, offset + 1, length - 1)?));
    } else if op == 0x1a {
        let sel = *require(data, offset + 1, 1)?.first().unwrap();
        if matches!(sel, 0xfe | 0xff) {
            let end = find_seq(data, offset + 2, &[0xff, 0xff])?;
            length = end - offset + 2;
        } else {
            let end = find_byte(data, offset + 2, 0xff)?;
            length = end - offset + 1;
        }
        disass = format!("{disass} {}", hex_join(require(data, offset + 1, length - 1)?));
    } else if op == 0x1f {
        let sel = *require(data, offset + 1, 1)?.first().unwrap();
        if sel != 0 {
            length += 10;
        }
        disass = format!("{disass} {}", hex_join(require(data, offset + 1, length - 1)?));
    } else if op == 0x23 {
        let sel = *require(data, offset + 2, 1)?.first().unwrap();
        if sel < 0x80 {
            length += 6;
        }
        disass = format!("{disass} {}", hex_join(require(data, offset + 1, length - 1)?));
    } else if length > 1 {
        disass = format!("{disass} {}", hex_join(require(data, offset + 1, length - 1)?));
    }

    let bytes = require(data, offset, length)?.to_vec();
    Ok(Instruction::Regular {
        op,
        addr,
        bytes,
        disass,
        reloc,
    })
}

fn decode_text(
    data: &[u8],
    version: Version,
    variant: TextVariant,
    kanji_bitmap: Option<&[u8]>,
) -> error::Result<String> {
    if version.is_japanese() {
        text::decode_jp(data, kanji_bitmap)
    } else {
        text::decode(data, variant)
    }
}

fn require(data: &[u8], offset: usize, len: usize) -> error::Result<&[u8]> {
    data.get(offset..offset + len)
        .ok_or_else(|| Error::Overrun { needed: offset + len, limit: data.len() })
}

fn find_byte(data: &[u8], from: usize, byte: u8) -> error::Result<usize> {
    data[from..]
        .iter()
        .position(|&b| b == byte)
        .map(|i| from + i)
        .ok_or_else(|| Error::Malformed(format!("no terminator byte {byte:#04x} found")))
}

fn find_seq(data: &[u8], from: usize, seq: &[u8]) -> error::Result<usize> {
    data[from..]
        .windows(seq.len())
        .position(|w| w == seq)
        .map(|i| from + i)
        .ok_or_else(|| Error::Malformed("no terminator sequence found".into()))
}

/// Recalculate every instruction's address starting from `start_addr`,
/// returning the old-to-new address map needed by [`fixup_script`].
pub fn recalc_script_addr(
    script: &mut [Instruction],
    start_addr: u16,
) -> crate::alloc::collections::BTreeMap<u16, u16> {
    let mut addr_map = crate::alloc::collections::BTreeMap::new();
    let mut new_addr = start_addr;

    for instr in script.iter_mut() {
        let old_addr = instr.addr();
        instr.set_addr(new_addr);
        addr_map.insert(old_addr, new_addr);
        new_addr = new_addr.wrapping_add(instr.len() as u16);
    }

    addr_map
}

/// Rewrite every instruction's relocatable operands according to an
/// old-to-new address mapping.
pub fn fixup_script(
    script: &mut [Instruction],
    addr_map: &crate::alloc::collections::BTreeMap<u16, u16>,
) -> error::Result<()> {
    for instr in script.iter_mut() {
        instr.relocate(addr_map)?;
    }
    Ok(())
}

/// Concatenate a script's instructions back into a byte stream.
pub fn get_script_data(script: &[Instruction]) -> Vec<u8> {
    let mut data = Vec::new();
    for instr in script {
        data.extend_from_slice(instr.bytes());
    }
    data
}

/// Pad `data` up to a 4-byte boundary with zero bytes.
pub fn align4(mut data: Vec<u8>) -> Vec<u8> {
    let rem = data.len() % 4;
    if rem != 0 {
        data.extend(vec![0u8; 4 - rem]);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_return_instruction() {
        let data = [op::RETURN];
        let instr =
            parse_instruction(&data, 0, Version::En, TextVariant::Original, MAP_BASE_POINTER, None)
                .unwrap();
        assert_eq!(instr.len(), 1);
        assert_eq!(instr.disass(), "return");
    }

    #[test]
    fn parses_call_with_reloc() {
        let mut data = vec![op::CALL];
        data.extend_from_slice(&0x1234u16.to_le_bytes());
        let instr =
            parse_instruction(&data, 0, Version::En, TextVariant::Original, MAP_BASE_POINTER, None)
                .unwrap();
        assert_eq!(instr.len(), 3);
        match &instr {
            Instruction::Regular { reloc, .. } => assert_eq!(reloc, &vec![1]),
            _ => panic!("expected Regular"),
        }
    }

    #[test]
    fn call_to_reserved_target_is_not_relocated() {
        let mut data = vec![op::CALL];
        data.extend_from_slice(&0xfffeu16.to_le_bytes());
        let instr =
            parse_instruction(&data, 0, Version::En, TextVariant::Original, MAP_BASE_POINTER, None)
                .unwrap();
        match &instr {
            Instruction::Regular { reloc, .. } => assert!(reloc.is_empty()),
            _ => panic!("expected Regular"),
        }
    }

    #[test]
    fn relocate_rejects_new_reserved_call_target() {
        let mut data = vec![op::CALL];
        data.extend_from_slice(&0x1000u16.to_le_bytes());
        let mut instr =
            parse_instruction(&data, 0, Version::En, TextVariant::Original, MAP_BASE_POINTER, None)
                .unwrap();

        let mut addr_map = crate::alloc::collections::BTreeMap::new();
        addr_map.insert(0x1000, 0xfffe);

        assert!(instr.relocate(&addr_map).is_err());
    }

    #[test]
    fn parses_string_literal_heuristic() {
        // Four spaces (0x20202020) triggers the string-literal heuristic.
        let mut data = b"    ".to_vec();
        data.push(0);
        let instr =
            parse_instruction(&data, 0, Version::En, TextVariant::Original, MAP_BASE_POINTER, None)
                .unwrap();
        assert!(matches!(instr, Instruction::String { .. }));
    }

    #[test]
    fn parses_self_pointer_filler() {
        let offset = 0x100usize;
        let p = offset as u32 + MAP_BASE_POINTER;
        let data = p.to_le_bytes();

        // pad data so offset math lines up: simulate as if this 4-byte
        // word sat at byte offset `offset` in a larger buffer.
        let mut buf = vec![0u8; offset];
        buf.extend_from_slice(&data);

        let instr = parse_instruction(
            &buf,
            offset,
            Version::En,
            TextVariant::Original,
            MAP_BASE_POINTER,
            None,
        )
        .unwrap();
        assert!(matches!(instr, Instruction::Ptr { .. }));
    }

    #[test]
    fn expression_binary_operator_round_trip() {
        // (var == 5): var opcode 0x13 is a gap slot; use 0x10 immediate
        // on both sides for a safe smoke test: "==" applied to 5 and 7.
        let mut data = vec![0x00u8]; // "==" binary op
        data.push(0x10); // immediate lhs
        data.extend_from_slice(&5i16.to_le_bytes());
        data.push(0x10); // immediate rhs
        data.extend_from_slice(&7i16.to_le_bytes());

        let mut reloc = Vec::new();
        let (len, s) = parse_expression(&data, 0, &mut reloc, false).unwrap();
        assert_eq!(len, data.len());
        assert_eq!(s, "(5 == 7)");
    }

    #[test]
    fn align4_pads_to_boundary() {
        assert_eq!(align4(vec![1, 2, 3]).len(), 4);
        assert_eq!(align4(vec![1, 2, 3, 4]).len(), 4);
    }
}
