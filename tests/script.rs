//! Whole-script round-trip: decode a short sequence of real instruction
//! encodings, re-address and fix them up as if the script had grown, and
//! check the disassembly and relocated operands land where expected.

use wildbytes::coords::MAP_BASE_POINTER;
use wildbytes::script::{self, op, Instruction};
use wildbytes::text::TextVariant;
use wildbytes::version::Version;

fn decode_all(data: &[u8]) -> Vec<Instruction> {
    let mut out = Vec::new();
    let mut offset = 0;
    while offset < data.len() {
        let instr = script::parse_instruction(
            data,
            offset,
            Version::En,
            TextVariant::Original,
            MAP_BASE_POINTER,
            None,
        )
        .unwrap();
        offset += instr.len();
        out.push(instr);
    }
    out
}

#[test]
fn decodes_call_jump_and_return() {
    let mut data = vec![op::CALL];
    data.extend_from_slice(&0x2000u16.to_le_bytes());
    data.push(op::JUMP);
    data.extend_from_slice(&0x2003u16.to_le_bytes());
    data.push(op::RETURN);

    let script = decode_all(&data);
    assert_eq!(script.len(), 3);
    assert_eq!(script[0].disass(), "call 2000");
    assert_eq!(script[1].disass(), "jump 2003");
    assert_eq!(script[2].disass(), "return");
}

#[test]
fn recalc_and_fixup_rewrite_relocatable_operands() {
    // call 0x0003 (the address of the `return` below, once addressed
    // from 0); return.
    let mut data = vec![op::CALL];
    data.extend_from_slice(&0x0003u16.to_le_bytes());
    data.push(op::RETURN);

    let mut parsed = decode_all(&data);
    let addr_map = script::recalc_script_addr(&mut parsed, 0x1000);
    script::fixup_script(&mut parsed, &addr_map).unwrap();

    assert_eq!(parsed[0].addr(), 0x1000);
    assert_eq!(parsed[1].addr(), 0x1003);
    assert_eq!(parsed[0].disass(), "call 1003");

    let rebuilt = script::get_script_data(&parsed);
    let mut expected = vec![op::CALL];
    expected.extend_from_slice(&0x1003u16.to_le_bytes());
    expected.push(op::RETURN);
    assert_eq!(rebuilt, expected);
}
