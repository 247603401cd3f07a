//! The apex of this crate: a whole map data block parsed into its
//! constituent sections, scripts and Kanji bitmap, and the rewrite
//! algorithm that lets a caller replace those scripts (and any strings
//! embedded directly in the block's MIPS code) and get back a freshly
//! serialised block with every downstream pointer, address, jump operand
//! and split MIPS constant relocated to match.
//!
//! A map block is laid out, roughly, as: a 0x40-byte header, an 18-entry
//! section pointer table, a global script entry table, one or two script
//! sections (each its own local entry table followed by instructions), a
//! Kanji bitmap (Japanese releases only), a music offset table and its
//! LZSS-compressed sequence data, a MIPS code region, and finally a
//! graphics block pinned at the fixed offset 0x15000.

use crate::alloc::collections::BTreeMap;
use crate::alloc::format;
use crate::alloc::vec::Vec;
use crate::coords::{addr_to_offset, offset_to_addr, offset_to_pointer, pointer_to_offset, MAP_BASE_POINTER, MAP_GFX_POINTER};
use crate::data;
use crate::error::{self, Error};
use crate::lzss;
use crate::script::{self, Instruction};
use crate::text::TextVariant;
use crate::version::Version;
use scroll::{Pread, Pwrite, LE};

/// Number of entries in the section pointer table at header offset 0x40.
const NUM_SECTIONS: usize = 18;

/// The fixed byte offset a map's graphics data must start at, before and
/// after any rewrite.
pub const GFX_ANCHOR: usize = 0x15000;

/// Section indices of interest within the 18-entry pointer table at
/// header offset 0x40. A handful of other indices (10, 11, 12, 13, 15)
/// are referenced only positionally during rewrite and have no name of
/// their own in the original reference tool either.
pub mod section {
    pub const ACTOR: usize = 5;
    pub const ENTRY: usize = 6;
    pub const SCRIPT_1: usize = 7;
    pub const SCRIPT_2: usize = 8;
    pub const FLAG: usize = 9;
    pub const KANJI: usize = 14;
    pub const MUSIC_TABLE: usize = 16;
    pub const MUSIC_DATA: usize = 17;
}

/// Maps numbered 37 and 119 have a local script entry table whose first
/// slot is *not* the address of the first instruction — the second slot
/// is used instead. A known anomaly of the original game data, not a
/// parsing bug.
const FIRST_INSTR_EXCEPTION_MAPS: [u32; 2] = [37, 119];

fn find_null(data: &[u8], from: usize) -> error::Result<usize> {
    data.get(from..)
        .and_then(|rest| rest.iter().position(|&b| b == 0))
        .map(|i| from + i)
        .ok_or_else(|| Error::Malformed("no null terminator found".into()))
}

/// A parsed map data block: the section pointer table, script bounds,
/// and (for Japanese releases) the extracted Kanji bitmap, all derived
/// from one owned byte buffer.
#[derive(Debug, Clone)]
pub struct MapData {
    version: Version,
    map_number: u32,
    variant: TextVariant,

    data: Vec<u8>,
    pointers: [u32; NUM_SECTIONS],
    offsets: [usize; NUM_SECTIONS],

    entry_table_start: usize,
    entry_table_end: usize,

    script1_start: usize,
    script1_end: usize,
    script1_first_instr: usize,

    script2_start: Option<usize>,
    script2_end: Option<usize>,
    script2_first_instr: Option<usize>,

    kanji_bitmap: Vec<u8>,
}

impl MapData {
    /// Parse a map data block. `map_number` is the catalogue number the
    /// caller knows this map by — needed only to resolve the two
    /// anomalous entry-table layouts and the code-string schedule.
    pub fn new(map_block: &[u8], map_number: u32, version: Version, variant: TextVariant) -> error::Result<MapData> {
        let mut md = MapData {
            version,
            map_number,
            variant,
            data: Vec::new(),
            pointers: [0; NUM_SECTIONS],
            offsets: [0; NUM_SECTIONS],
            entry_table_start: 0,
            entry_table_end: 0,
            script1_start: 0,
            script1_end: 0,
            script1_first_instr: 0,
            script2_start: None,
            script2_end: None,
            script2_first_instr: None,
            kanji_bitmap: Vec::new(),
        };
        md.set_data(map_block)?;
        Ok(md)
    }

    /// Replace the binary map data and re-derive every bound and pointer
    /// view from it. Called both by [`MapData::new`] and, internally, by
    /// [`MapData::set_scripts`] once a rewritten block has been
    /// assembled.
    pub fn set_data(&mut self, map_block: &[u8]) -> error::Result<()> {
        let data = map_block.to_vec();

        if data.len() < 0x40 + NUM_SECTIONS * 4 {
            return Err(Error::Malformed("map block shorter than its section pointer table".into()));
        }

        let mut pointers = [0u32; NUM_SECTIONS];
        let mut offset = 0x40usize;
        for slot in pointers.iter_mut() {
            *slot = data.gread_with::<u32>(&mut offset, LE)?;
        }

        let mut offsets = [0usize; NUM_SECTIONS];
        for (i, p) in pointers.iter().enumerate() {
            offsets[i] = pointer_to_offset(*p);
        }

        let entry_table_start = offsets[section::ENTRY];
        let entry_table_end = offsets[section::SCRIPT_1];

        let script1_start = offsets[section::SCRIPT_1];
        let script1_end = if pointers[section::SCRIPT_2] != 0 {
            offsets[section::SCRIPT_2] - 4
        } else {
            offsets[section::KANJI] - 4
        };

        let (script2_start, script2_end) = if pointers[section::SCRIPT_2] != 0 {
            let start = offsets[section::SCRIPT_2];
            let end = if pointers[section::MUSIC_TABLE] != 0
                && pointers[section::MUSIC_TABLE] < pointers[section::KANJI]
            {
                offsets[section::MUSIC_TABLE] - 4
            } else {
                offsets[section::KANJI] - 4
            };
            (Some(start), Some(end))
        } else {
            (None, None)
        };

        let first_addr_offset = if FIRST_INSTR_EXCEPTION_MAPS.contains(&self.map_number) {
            script1_start + 2
        } else {
            script1_start
        };
        let script1_first_instr = addr_to_offset(data.pread_with::<u16>(first_addr_offset, LE)?);

        let script2_first_instr = match script2_start {
            Some(start) => Some(addr_to_offset(data.pread_with::<u16>(start, LE)?)),
            None => None,
        };

        let kanji_end = if pointers[section::FLAG] != 0 {
            offsets[section::FLAG]
        } else if pointers[10] != 0 {
            offsets[10]
        } else {
            offsets[section::MUSIC_TABLE]
        };
        let kanji_start = offsets[section::KANJI];
        let mut kanji_bitmap = data
            .get(kanji_start..kanji_end)
            .ok_or_else(|| Error::Malformed("Kanji bitmap region runs past end of map data".into()))?
            .to_vec();
        let rem = kanji_bitmap.len() % 22;
        if rem != 0 {
            kanji_bitmap.truncate(kanji_bitmap.len() - rem);
        }

        self.data = data;
        self.pointers = pointers;
        self.offsets = offsets;
        self.entry_table_start = entry_table_start;
        self.entry_table_end = entry_table_end;
        self.script1_start = script1_start;
        self.script1_end = script1_end;
        self.script1_first_instr = script1_first_instr;
        self.script2_start = script2_start;
        self.script2_end = script2_end;
        self.script2_first_instr = script2_first_instr;
        self.kanji_bitmap = kanji_bitmap;

        Ok(())
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn map_number(&self) -> u32 {
        self.map_number
    }

    /// The map's current serialised byte block.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The map's Kanji bitmap, if this is a Japanese release with one.
    /// Empty for western releases.
    pub fn kanji_bitmap(&self) -> &[u8] {
        &self.kanji_bitmap
    }

    fn extract_entries(&self, offset: usize, end_offset: usize) -> error::Result<Vec<u16>> {
        let mut entries = Vec::new();
        let mut o = offset;
        while o < end_offset {
            entries.push(self.data.gread_with::<u16>(&mut o, LE)?);
        }
        Ok(entries)
    }

    /// The global script entry table, between sections 6 (ENTRY) and 7
    /// (SCRIPT_1), as a list of addresses.
    pub fn get_global_entries(&self) -> error::Result<Vec<u16>> {
        self.extract_entries(self.entry_table_start, self.entry_table_end)
    }

    /// The first script section's own local entry table.
    pub fn get_script1_entries(&self) -> error::Result<Vec<u16>> {
        self.extract_entries(self.script1_start, self.script1_first_instr)
    }

    /// The second script section's local entry table, if present.
    pub fn get_script2_entries(&self) -> error::Result<Vec<u16>> {
        match self.script2_start {
            Some(start) => self.extract_entries(start, self.script2_first_instr.unwrap()),
            None => Ok(Vec::new()),
        }
    }

    fn extract_script(&self, offset: usize, first_instr: usize, end_offset: usize) -> error::Result<Vec<Instruction>> {
        let mut out = Vec::new();
        let mut o = offset;

        while o < first_instr {
            let addr = offset_to_addr(o, MAP_BASE_POINTER);
            let bytes = self.data[o..o + 2].to_vec();
            let target = self.data.gread_with::<u16>(&mut o, LE)?;
            out.push(Instruction::Entry { addr, target, bytes });
        }

        while o < end_offset {
            let kanji_bitmap = if self.kanji_bitmap.is_empty() { None } else { Some(self.kanji_bitmap.as_slice()) };
            let instr = script::parse_instruction(&self.data, o, self.version, self.variant, MAP_BASE_POINTER, kanji_bitmap)?;
            o += instr.len();
            out.push(instr);
        }

        Ok(out)
    }

    /// The first script section, as a list of decoded instructions
    /// (local entry table pseudo-ops included).
    pub fn get_script1(&self) -> error::Result<Vec<Instruction>> {
        self.extract_script(self.script1_start, self.script1_first_instr, self.script1_end)
    }

    /// The second script section, if present.
    pub fn get_script2(&self) -> error::Result<Vec<Instruction>> {
        match self.script2_start {
            Some(start) => self.extract_script(start, self.script2_first_instr.unwrap(), self.script2_end.unwrap()),
            None => Ok(Vec::new()),
        }
    }

    /// Locate the MIPS code region's `(start_offset, end_offset)` in the
    /// current data. The start has no section pointer of its own: it
    /// follows either section 10 directly (maps 6 and 116, where section
    /// 10 trails the music table) or the music data's last
    /// LZSS-compressed sequence block, located by walking the music
    /// offset table to its `0xFFFFFFFF` terminator. The end is always
    /// read from the header's text-length field at offset 0x0C.
    pub fn find_mips_code(&self) -> error::Result<(usize, usize)> {
        let start_offset = if self.pointers[10] > self.pointers[section::MUSIC_TABLE] {
            pointer_to_offset(self.pointers[10])
        } else {
            let mut offset = self.offsets[section::MUSIC_TABLE];
            let mut data_start = None;

            loop {
                let entry = self.data.gread_with::<u32>(&mut offset, LE)?;
                if entry == 0xffff_ffff {
                    break;
                }
                data_start = Some(self.offsets[section::MUSIC_DATA] + entry as usize);
            }

            let data_start = data_start
                .ok_or_else(|| Error::Malformed("music offset table has no entries".into()))?;

            let mut start = data_start + lzss::compressed_size(&self.data[data_start..]);
            if start % 4 != 0 {
                start += 4 - start % 4;
            }
            start
        };

        let end_offset = self.data.pread_with::<u32>(0x0c, LE)? as usize;

        Ok((start_offset, end_offset))
    }

    /// Translatable strings embedded directly in the map's MIPS code, per
    /// the version- and map-number-keyed schedule in [`crate::data`].
    pub fn get_code_strings(&self) -> error::Result<Vec<Vec<u8>>> {
        let mut strings = Vec::new();

        if let Some(entries) = data::map_string_data(self.version, self.map_number) {
            let (exe_start, _) = self.find_mips_code()?;

            for &(offset, _max_size) in entries {
                let start = exe_start + offset as usize;
                let end = find_null(&self.data, start)?;
                strings.push(self.data[start..end].to_vec());
            }
        }

        Ok(strings)
    }

    /// Replace this map's script code (and, optionally, any
    /// code-embedded strings), relocating every downstream pointer,
    /// address, jump operand and split MIPS constant to match the new
    /// size. `script2` may be empty to mean "no second script section".
    ///
    /// On success, the map's views (entry tables, scripts, code strings)
    /// reflect the rewritten block; on failure, nothing about `self` has
    /// been changed — the new block is built in a scratch buffer and
    /// only swapped in at the very end.
    pub fn set_scripts(
        &mut self,
        script1: Vec<Instruction>,
        script2: Vec<Instruction>,
        code_strings: &[Vec<u8>],
    ) -> error::Result<()> {
        // 1. Strip PTR pseudo-ops: filler the linker inserted, never
        // meant to be relocated as if it were real code.
        let mut script1: Vec<Instruction> = script1.into_iter().filter(|i| !matches!(i, Instruction::Ptr { .. })).collect();
        let mut script2: Vec<Instruction> = script2.into_iter().filter(|i| !matches!(i, Instruction::Ptr { .. })).collect();

        if script1.is_empty() {
            return Err(Error::Malformed("script 1 must contain at least one instruction".into()));
        }

        let mut new_data = self.data[..self.entry_table_start].to_vec();

        // 2. Re-address script 1, and script 2 if present.
        let start_addr1 = offset_to_addr(self.script1_start, MAP_BASE_POINTER);
        let mut addr_map = script::recalc_script_addr(&mut script1, start_addr1);

        let last1 = script1.last().unwrap();
        let mut new_script1_end = addr_to_offset(last1.addr()) + last1.len();
        if new_script1_end % 4 != 0 {
            new_script1_end += 4 - new_script1_end % 4;
        }

        let has_script2 = !script2.is_empty();
        let new_script2_start = if has_script2 { Some(new_script1_end + 4) } else { None };

        if let Some(s2_start) = new_script2_start {
            new_data.pwrite_with(offset_to_pointer(s2_start), 0x40 + section::SCRIPT_2 * 4, LE)?;

            let start_addr2 = offset_to_addr(s2_start, MAP_BASE_POINTER);
            let addr_map2 = script::recalc_script_addr(&mut script2, start_addr2);
            addr_map.extend(addr_map2);
        }

        // 3. Rewrite the global entry table, remapping every address
        // through the merged map; entries with no surviving target
        // become 0.
        for e in self.get_global_entries()? {
            let new_addr = addr_map.get(&e).copied().unwrap_or(0);
            new_data.extend_from_slice(&new_addr.to_le_bytes());
        }

        if new_data.len() != self.script1_start {
            return Err(Error::Malformed("global entry table length changed unexpectedly during rewrite".into()));
        }

        // 4. Emit script bodies, each followed by a fresh self-pointer
        // filler word.
        script::fixup_script(&mut script1, &addr_map)?;
        new_data.extend_from_slice(&script::get_script_data(&script1));
        new_data = script::align4(new_data);
        new_data.extend_from_slice(&offset_to_pointer(new_data.len()).to_le_bytes());

        if has_script2 {
            let s2_start = new_script2_start.unwrap();
            if new_data.len() != s2_start {
                return Err(Error::Malformed("script 2 start offset mismatch during rewrite".into()));
            }
            script::fixup_script(&mut script2, &addr_map)?;
            new_data.extend_from_slice(&script::get_script_data(&script2));
            new_data = script::align4(new_data);
            new_data.extend_from_slice(&offset_to_pointer(new_data.len()).to_le_bytes());
        }

        if new_data.len() % 4 != 0 {
            return Err(Error::Malformed("script region misaligned after rewrite".into()));
        }

        // 5/6. Copy the intervening non-code region up to the graphics
        // anchor, computing the delta the rest of the block must shift
        // by before doing so.
        let old_min = self.offsets[section::MUSIC_TABLE].min(self.offsets[section::KANJI]);
        let delta: i64 = new_data.len() as i64 - old_min as i64;

        let src_end = GFX_ANCHOR.min(self.data.len());
        if old_min <= src_end {
            new_data.extend_from_slice(&self.data[old_min..src_end]);
        }

        if new_data.len() > GFX_ANCHOR {
            new_data.truncate(GFX_ANCHOR);
        } else if new_data.len() < GFX_ANCHOR {
            new_data.resize(GFX_ANCHOR, 0);
        }

        // 7. Locate and relocate the MIPS code window.
        let (old_exe_start, old_exe_end) = self.find_mips_code()?;
        let start_pointer = offset_to_pointer(old_exe_start);
        let end_pointer = offset_to_pointer(old_exe_end);

        let exe_start = (old_exe_start as i64 + delta) as usize;
        let exe_end = (old_exe_end as i64 + delta) as usize;

        if exe_end > GFX_ANCHOR {
            return Err(Error::Overrun { needed: exe_end, limit: GFX_ANCHOR });
        }

        let mut offset = exe_start;
        while offset < exe_end {
            let w = new_data.pread_with::<u32>(offset, LE)?;

            if w >= start_pointer && w < end_pointer {
                // Linear pointer: a jump table entry, a vector slot, etc.
                new_data.pwrite_with((w as i64 + delta) as u32, offset, LE)?;
            } else if matches!(w & 0xfc00_0000, 0x0800_0000 | 0x0c00_0000) {
                // j/jal: 26-bit operand encodes the target's low 28 bits.
                let target = ((w & 0x03ff_ffff) << 2) | 0x8000_0000;
                if target >= start_pointer && target <= end_pointer {
                    // `div_euclid`, not `/`: the original floors toward
                    // -inf rather than truncating toward zero. Only
                    // distinguishable for a `delta` not itself a
                    // multiple of 4, which the rewrite's alignment
                    // invariants never produce — kept faithful anyway.
                    let n = (w & 0xfc00_0000) | ((w & 0x03ff_ffff).wrapping_add(delta.div_euclid(4) as u32) & 0x03ff_ffff);
                    new_data.pwrite_with(n, offset, LE)?;
                }
            } else if (w & 0xfc00_fffc) == 0x3c00_8014 {
                // lui rX, 0x8014..0x8017: the start of a split 32-bit
                // constant. Examine the following instruction(s).
                let w2 = new_data.pread_with::<u32>(offset + 4, LE)?;

                if matches!(
                    w2 & 0xfc00_0000,
                    0x2400_0000 | 0x8400_0000 | 0x8c00_0000 | 0x9000_0000 | 0x9400_0000 | 0xa000_0000 | 0xa400_0000 | 0xac00_0000
                ) {
                    // lui + addiu/load/store: HI/LO pair.
                    relocate_hilo(&mut new_data, offset, offset + 4, start_pointer, delta)?;
                } else if (w2 & 0xfc00_0000) == 0x3400_0000 {
                    // lui + ori: fixed-address reference (graphics
                    // start), never relocated.
                } else if (w2 & 0xfc00_07ff) == 0x0000_0021 {
                    // lui + addu: expect a load/store two instructions
                    // past the lui.
                    let w3 = new_data.pread_with::<u32>(offset + 8, LE)?;
                    if matches!(
                        w3 & 0xfc00_0000,
                        0x8400_0000 | 0x8c00_0000 | 0x9000_0000 | 0x9400_0000 | 0xa000_0000 | 0xa400_0000 | 0xac00_0000
                    ) {
                        relocate_hilo(&mut new_data, offset, offset + 8, start_pointer, delta)?;
                    } else {
                        return Err(Error::UnrecognizedMips { offset, words: [w, w2, w3] });
                    }
                } else {
                    let w3 = new_data.pread_with::<u32>(offset + 8, LE)?;
                    return Err(Error::UnrecognizedMips { offset, words: [w, w2, w3] });
                }
            }

            offset += 4;
        }

        // 8. Inject replacement code-literal strings.
        if !code_strings.is_empty() {
            let schedule = data::map_string_data(self.version, self.map_number)
                .ok_or_else(|| Error::Malformed("no code-string schedule for this map".into()))?;

            for (i, s) in code_strings.iter().enumerate() {
                let &(rel_offset, max_size) = schedule
                    .get(i)
                    .ok_or_else(|| Error::Malformed("more code strings supplied than the schedule has slots for".into()))?;

                if s.len() > max_size as usize {
                    return Err(Error::RangeError(format!(
                        "code string {i} is {} bytes, exceeds scheduled maximum of {max_size}",
                        s.len()
                    )));
                }

                let mut padded = s.clone();
                padded.resize(max_size as usize, 0);

                let start = exe_start + rel_offset as usize;
                let slot = new_data
                    .get_mut(start..start + max_size as usize)
                    .ok_or(Error::Overrun { needed: start + max_size as usize, limit: new_data.len() })?;
                slot.copy_from_slice(&padded);
            }
        }

        // 9. Shift every section pointer past the script region.
        for &s in &[section::FLAG, 10, 11, 12, 13, section::KANJI, 15, section::MUSIC_TABLE, section::MUSIC_DATA] {
            let off = 0x40 + s * 4;
            let p = new_data.pread_with::<u32>(off, LE)?;
            if p != 0 {
                new_data.pwrite_with((p as i64 + delta) as u32, off, LE)?;
            }
        }

        // 10. Shift EXEC instructions' embedded absolute pointers.
        for instr in script1.iter().chain(script2.iter()) {
            if let Instruction::Regular { op, addr, .. } = instr {
                if *op == script::op::EXEC {
                    let off = addr_to_offset(*addr);
                    let p = new_data.pread_with::<u32>(off + 1, LE)?;
                    new_data.pwrite_with((p as i64 + delta) as u32, off + 1, LE)?;
                }
            }
        }

        // 11. Shift the header's entry pointer and text-length bookkeeping.
        for off in [0usize, 12] {
            let p = new_data.pread_with::<u32>(off, LE)?;
            new_data.pwrite_with((p as i64 + delta) as u32, off, LE)?;
        }

        // 12. Copy the graphics and sound tail verbatim.
        let tail = self
            .data
            .get(GFX_ANCHOR..)
            .ok_or_else(|| Error::Malformed("map block shorter than the graphics anchor".into()))?;
        new_data.extend_from_slice(tail);

        // 13. Reparse so every view reflects the new layout.
        self.set_data(&new_data)
    }
}

/// Combine a split HI/LO 32-bit constant spanning two instructions,
/// relocate it by `delta` if it falls inside the code region, and write
/// the adjusted halves back. `hi_offset` is the `lui`'s byte offset;
/// `lo_offset` is the byte offset of the instruction carrying the signed
/// 16-bit low half (either the very next instruction, or the one after
/// an intervening `addu`).
fn relocate_hilo(data: &mut [u8], hi_offset: usize, lo_offset: usize, start_pointer: u32, delta: i64) -> error::Result<()> {
    let hi = data.pread_with::<u32>(hi_offset, LE)? & 0xffff;
    let lo_signed = data.pread_with::<u16>(lo_offset, LE)? as i16;

    let p = ((hi as i64) << 16) + lo_signed as i64;

    if p >= start_pointer as i64 && p <= MAP_GFX_POINTER as i64 {
        let new_p = p + delta;

        let mut new_hi = ((new_p >> 16) & 0xffff) as u16;
        let new_lo = (new_p & 0xffff) as u16;
        if new_lo >= 0x8000 {
            new_hi = new_hi.wrapping_add(1);
        }

        data.pwrite_with(new_hi, hi_offset, LE)?;
        data.pwrite_with(new_lo, lo_offset, LE)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::vec;

    const BASE: u32 = MAP_BASE_POINTER;

    /// Build a minimal, self-consistent map block: header, section
    /// pointer table, an empty global entry table, one script section
    /// (entry table of one slot plus two `return`s), no second script,
    /// no Kanji bitmap, and the real fixed graphics anchor padded out
    /// with a recognizable tail so the rewrite path has something to
    /// preserve.
    fn build_minimal_map() -> Vec<u8> {
        // Layout: header+table (0x40 + 18*4 = 0xa8), entry table (0
        // global entries, so ENTRY == SCRIPT_1), script1 (one entry slot
        // + two `return`s, sized to a 4-byte boundary), self-pointer,
        // Kanji bitmap start == end (no JP data for a western fixture).
        let entry_table_start = 0x40 + NUM_SECTIONS * 4; // 0xa8
        let script1_start = entry_table_start; // no global entries
        let script1_entry_table_len = 2usize; // one slot
        let script1_first_instr = script1_start + script1_entry_table_len;
        // Two `return`s rather than one: entry table + body must sum to a
        // multiple of 4 bytes (script1_start is itself 4-aligned), or the
        // alignment padding before the self-pointer would land inside the
        // body and get decoded as a spurious trailing `return` (opcode 0).
        let script1_body_len = 2usize;
        let script1_end_unaligned = script1_first_instr + script1_body_len;
        let script1_end = script1_end_unaligned + ((4 - script1_end_unaligned % 4) % 4);
        let kanji_start = script1_end + 4; // skip self-pointer

        let mut data = vec![0u8; kanji_start];

        // Header: entry pointer (arbitrary), ... text-length at 0x0c.
        data[0..4].copy_from_slice(&BASE.to_le_bytes());
        data[12..16].copy_from_slice(&(kanji_start as u32).to_le_bytes());

        let mut pointers = [0u32; NUM_SECTIONS];
        pointers[section::ENTRY] = offset_to_pointer(entry_table_start);
        pointers[section::SCRIPT_1] = offset_to_pointer(script1_start);
        pointers[section::KANJI] = offset_to_pointer(kanji_start);
        // MUSIC_TABLE left at 0 (null): script1_end derives from KANJI
        // when SCRIPT_2 is absent, so its value doesn't matter here.
        // Section 10 trailing it is the map-6/116 special case
        // `find_mips_code` uses to locate an (empty, here) MIPS code
        // window without needing a real music offset table.
        pointers[10] = offset_to_pointer(kanji_start);

        for (i, p) in pointers.iter().enumerate() {
            data[0x40 + i * 4..0x40 + i * 4 + 4].copy_from_slice(&p.to_le_bytes());
        }

        // Script 1 local entry table: one slot pointing at the first
        // instruction.
        let first_instr_addr = offset_to_addr(script1_first_instr, BASE);
        data[script1_start..script1_start + 2].copy_from_slice(&first_instr_addr.to_le_bytes());

        // Script body: two `return`s (opcode 0 each).
        data[script1_first_instr] = script::op::RETURN;
        data[script1_first_instr + 1] = script::op::RETURN;

        // Self-pointer filler immediately after script1_end.
        let self_ptr = offset_to_pointer(script1_end);
        data[script1_end..script1_end + 4].copy_from_slice(&self_ptr.to_le_bytes());

        // Real map blocks always extend past the fixed graphics anchor;
        // `set_scripts`'s tail-copy step needs that region to exist even
        // in a minimal fixture. Pad out to it plus a recognizable tail.
        data.resize(GFX_ANCHOR, 0);
        data.extend_from_slice(&[0xfeu8; 16]);

        data
    }

    #[test]
    fn parses_minimal_map_and_extracts_script1() {
        let block = build_minimal_map();
        let map = MapData::new(&block, 1, Version::Us, TextVariant::Original).unwrap();

        assert!(map.get_global_entries().unwrap().is_empty());
        assert_eq!(map.get_script2().unwrap().len(), 0);

        let script1 = map.get_script1().unwrap();
        assert_eq!(script1.len(), 3); // one Entry pseudo-op + two `return`s
        assert!(matches!(script1[0], Instruction::Entry { .. }));
        assert_eq!(script1[1].disass(), "return");
        assert_eq!(script1[2].disass(), "return");
    }

    #[test]
    fn uses_second_entry_table_slot_for_anomalous_map_numbers() {
        let mut block = build_minimal_map();
        // Corrupt slot 0 so a normal parse would derive a nonsense
        // first-instruction offset; put the real address in slot 1.
        let entry_table_start = 0x40 + NUM_SECTIONS * 4;
        let real_addr = block.pread_with::<u16>(entry_table_start, LE).unwrap();
        block[entry_table_start..entry_table_start + 2].copy_from_slice(&0xffffu16.to_le_bytes());
        block[entry_table_start + 2..entry_table_start + 4].copy_from_slice(&real_addr.to_le_bytes());

        // Widen the fixture by two bytes so slot 1 exists; simplest is
        // to just re-derive a fixture with map number 37's exception
        // path pointed at the same (now second) slot — here we only
        // check that map number 37 reads the second slot rather than
        // erroring on the corrupted first slot's nonsense offset.
        let map = MapData::new(&block, 37, Version::Us, TextVariant::Original);
        assert!(map.is_ok());
    }

    #[test]
    fn set_scripts_round_trips_unchanged_script() {
        let block = build_minimal_map();
        let mut map = MapData::new(&block, 1, Version::Us, TextVariant::Original).unwrap();

        let script1 = map.get_script1().unwrap();
        map.set_scripts(script1, Vec::new(), &[]).unwrap();

        // The rewritten script should disassemble identically.
        let script1_after = map.get_script1().unwrap();
        assert_eq!(script1_after.len(), 3);
        assert_eq!(script1_after[1].disass(), "return");
        assert_eq!(script1_after[2].disass(), "return");

        // A no-op rewrite must produce a block byte-identical to the
        // original up to the graphics anchor.
        assert_eq!(&map.data()[..GFX_ANCHOR], &block[..GFX_ANCHOR]);
    }

    #[test]
    fn relocate_hilo_adjusts_pointer_within_code_region() {
        let mut data = vec![0u8; 16];
        let p: u32 = BASE + 0x100;
        let hi = (p >> 16) as u16;
        let lo = (p & 0xffff) as u16;
        data.pwrite_with(hi, 0, LE).unwrap();
        data.pwrite_with(lo, 4, LE).unwrap();

        relocate_hilo(&mut data, 0, 4, BASE, 0x40).unwrap();

        let new_hi = data.pread_with::<u16>(0, LE).unwrap();
        let new_lo = data.pread_with::<u16>(4, LE).unwrap();
        let new_p = ((new_hi as u32) << 16) | new_lo as u32;
        assert_eq!(new_p, p + 0x40);
    }

    #[test]
    fn relocate_hilo_leaves_pointer_outside_region_untouched() {
        let mut data = vec![0u8; 16];
        let p: u32 = BASE - 0x1000; // below start_pointer
        data.pwrite_with((p >> 16) as u16, 0, LE).unwrap();
        data.pwrite_with((p & 0xffff) as u16, 4, LE).unwrap();

        relocate_hilo(&mut data, 0, 4, BASE, 0x40).unwrap();

        let new_p = ((data.pread_with::<u16>(0, LE).unwrap() as u32) << 16)
            | data.pread_with::<u16>(4, LE).unwrap() as u32;
        assert_eq!(new_p, p);
    }
}
