//! A whole-module round-trip for the map-data rewriter: parse a minimal,
//! hand-built map block, read its script back out through the public
//! API, hand it straight back to `set_scripts` unchanged, and check the
//! block still parses to the same script afterward.

use wildbytes::coords::{offset_to_addr, offset_to_pointer, MAP_BASE_POINTER};
use wildbytes::mapdata::{self, MapData};
use wildbytes::script::op;
use wildbytes::text::TextVariant;
use wildbytes::version::Version;

const NUM_SECTIONS: usize = 18;

/// Build a minimal, self-consistent map block: header + 18-entry section
/// pointer table, an empty global entry table, a single script section
/// (one local entry-table slot plus two `return` instructions, sized to
/// land on a 4-byte boundary without padding), no second script section,
/// and no Kanji bitmap (western layout).
fn build_minimal_map() -> Vec<u8> {
    let entry_table_start = 0x40 + NUM_SECTIONS * 4;
    let script1_start = entry_table_start;
    let script1_first_instr = script1_start + 2;
    // Two `return`s, not one: entry table (2 bytes) + body must sum to a
    // multiple of 4 (script1_start is itself 4-aligned), or the alignment
    // padding before the self-pointer lands inside the body and gets
    // decoded as a spurious trailing `return` (opcode 0).
    let script1_end_unaligned = script1_first_instr + 2;
    let script1_end = script1_end_unaligned + ((4 - script1_end_unaligned % 4) % 4);
    let kanji_start = script1_end + 4;

    let mut data = vec![0u8; kanji_start];
    data[0..4].copy_from_slice(&MAP_BASE_POINTER.to_le_bytes());
    data[12..16].copy_from_slice(&(kanji_start as u32).to_le_bytes());

    let mut pointers = [0u32; NUM_SECTIONS];
    pointers[mapdata::section::ENTRY] = offset_to_pointer(entry_table_start);
    pointers[mapdata::section::SCRIPT_1] = offset_to_pointer(script1_start);
    pointers[mapdata::section::KANJI] = offset_to_pointer(kanji_start);
    // Section 10 trailing the (absent) music table is the map-6/116
    // special case `find_mips_code` uses to locate an (empty, here) MIPS
    // code window without needing a real music offset table.
    pointers[10] = offset_to_pointer(kanji_start);

    for (i, p) in pointers.iter().enumerate() {
        data[0x40 + i * 4..0x40 + i * 4 + 4].copy_from_slice(&p.to_le_bytes());
    }

    let first_instr_addr = offset_to_addr(script1_first_instr, MAP_BASE_POINTER);
    data[script1_start..script1_start + 2].copy_from_slice(&first_instr_addr.to_le_bytes());
    data[script1_first_instr] = op::RETURN;
    data[script1_first_instr + 1] = op::RETURN;

    let self_ptr = offset_to_pointer(script1_end);
    data[script1_end..script1_end + 4].copy_from_slice(&self_ptr.to_le_bytes());

    // Real map blocks always extend past the fixed graphics anchor;
    // pad out to it plus a recognizable graphics/sound tail so the
    // rewrite's tail-copy step has something real to preserve.
    data.resize(mapdata::GFX_ANCHOR, 0);
    data.extend_from_slice(&[0xfeu8; 16]);

    data
}

#[test]
fn parses_and_rewrites_minimal_map_unchanged() {
    let block = build_minimal_map();
    let mut map = MapData::new(&block, 1, Version::Us, TextVariant::Original).unwrap();

    let script1 = map.get_script1().unwrap();
    assert_eq!(script1.len(), 3);
    assert_eq!(script1[1].disass(), "return");
    assert_eq!(script1[2].disass(), "return");
    assert!(map.get_global_entries().unwrap().is_empty());
    assert_eq!(map.get_code_strings().unwrap().len(), 0);

    map.set_scripts(script1, Vec::new(), &[]).unwrap();

    let after = map.get_script1().unwrap();
    assert_eq!(after.len(), 3);
    assert_eq!(after[1].disass(), "return");
    assert_eq!(after[2].disass(), "return");
    assert_eq!(map.get_script2().unwrap().len(), 0);

    // The graphics/sound tail past the anchor must survive untouched.
    assert_eq!(&map.data()[mapdata::GFX_ANCHOR..], &[0xfeu8; 16]);

    // A no-op rewrite (same scripts, no code-string replacements) must
    // produce a block byte-identical to the original up to the anchor.
    assert_eq!(&map.data()[..mapdata::GFX_ANCHOR], &block[..mapdata::GFX_ANCHOR]);
}
