//! Version-keyed static data schedules: where translatable strings, fonts
//! and scripts live inside the executable, the `UT0.OVR` overlay, and a
//! map's own MIPS code. Every table here is transcribed from the original
//! reference tool's data module; nothing is invented, and absent entries
//! (an entry the original simply never had, like French/Italian map-name
//! tables) stay `None` rather than guessing a value.
//!
//! These are plain functions from [`Version`] to `&'static` slices, never
//! runtime-constructed collections — in keeping with this crate's
//! preference for zero-cost static tables over heap-built maps.

use crate::text::TextVariant;
use crate::version::Version;

/// One entry of `exec_string_data`: a translatable string array embedded
/// directly in the main executable.
#[derive(Debug, Clone, Copy)]
pub struct ExecStringEntry {
    pub table_offset: u32,
    pub num_strings: u32,
    pub data_offset: Option<u32>,
    pub data_size: u32,
    pub special_bytes: u32,
    pub special_hack: bool,
    pub trans_dir: &'static str,
    pub trans_file: &'static str,
}

/// One entry of `exec_string_data2`: a second, differently-shaped
/// executable string schedule.
#[derive(Debug, Clone, Copy)]
pub struct ExecStringEntry2 {
    pub offset: u32,
    pub num_strings: u32,
    pub max_string_len: u32,
    /// `None` means the original reference tool recorded no western
    /// variant for this entry. Some `Some(TextVariant::Original)` values
    /// here (`best_runners.txt`, `trial_result.txt`, `miss.txt`,
    /// `ok.txt`) stand in for the original's plain `"ascii"` codec,
    /// which `TextVariant` has no dedicated case for — `Original` and
    /// `"ascii"` agree below 0x80 but diverge above it, where
    /// `origCharset` maps bytes `"ascii"` would reject to glyphs. No
    /// current caller reads this field, so the conflation is latent.
    pub encoding: Option<TextVariant>,
    pub trans_dir: &'static str,
    pub trans_file: &'static str,
}

/// One entry of `util_file_data`: a translatable string array embedded in
/// the `UT0.OVR` overlay.
#[derive(Debug, Clone, Copy)]
pub struct UtilFileEntry {
    pub table_offset: u32,
    pub num_strings: u32,
    pub data_offset: u32,
    pub data_size: u32,
    pub max_string_len: u32,
    pub trans_dir: &'static str,
    pub trans_file: &'static str,
}

/// One entry of `font_data`: a glyph sheet descriptor. `line_spacing` is
/// the Japanese per-version meaning; western entries use the same slot
/// for "characters per output row" where the original's column carried
/// no line-spacing value (recorded as 0 there, matching the source).
#[derive(Debug, Clone, Copy)]
pub struct FontEntry {
    pub offset: u32,
    pub num_chars: u32,
    pub char_width: u32,
    pub char_height: u32,
    pub line_spacing: u32,
    pub out_chars_per_row: u32,
    pub trans_dir: &'static str,
    pub trans_file: &'static str,
}

/// `exec_script_data`: a single per-version descriptor of bytecode script
/// code embedded directly in the executable (as opposed to a map block).
#[derive(Debug, Clone, Copy)]
pub struct ExecScriptEntry {
    pub table_offset: u32,
    pub num_scripts: u32,
    pub data_offset: u32,
    pub data_size: u32,
}

/// One texture sheet descriptor, part of a [`TextureEntry`].
#[derive(Debug, Clone, Copy)]
pub struct TextureDescriptor {
    pub pixel_section: u32,
    pub clut_section: u32,
    pub dimensions: (u32, u32),
    pub clut_offset: u32,
    pub trans_file: &'static str,
}

/// One archive file's texture schedule, part of `texture_data`.
#[derive(Debug, Clone, Copy)]
pub struct TextureEntry {
    pub sub_dir: &'static str,
    pub file_name: &'static str,
    pub archive_size: Option<u32>,
    pub last_section_size: i32,
    pub textures: &'static [TextureDescriptor],
}

/// A map number's schedule of translatable strings embedded in its MIPS
/// code, as `(offset, max_size)` pairs. Consumed directly by the map
/// rewriter's code-string injection step.
pub type MapStringEntry = (u32, &'static [(u32, u32)]);

macro_rules! exec_string_entry {
    ($table_offset:expr, $num_strings:expr, $data_offset:expr, $data_size:expr, $special_bytes:expr, $special_hack:expr, $trans_dir:expr, $trans_file:expr) => {
        ExecStringEntry {
            table_offset: $table_offset,
            num_strings: $num_strings,
            data_offset: $data_offset,
            data_size: $data_size,
            special_bytes: $special_bytes,
            special_hack: $special_hack,
            trans_dir: $trans_dir,
            trans_file: $trans_file,
        }
    };
}

const EXEC_STRING_DATA_JP: &[ExecStringEntry] = &[
    exec_string_entry!(0xf4c, 6, None, 0xb0, 0, false, "exe", "menu_help.txt"),
    exec_string_entry!(0x1018, 256, None, 0x988, 1, false, "exe", "item.txt"),
    exec_string_entry!(0x1da4, 256, None, 0xa38, 0, false, "exe", "item_help.txt"),
    exec_string_entry!(0x4fe8, 8, None, 0x68, 1, false, "exe", "arm.txt"),
    exec_string_entry!(0x5074, 8, None, 0xd0, 0, false, "exe", "arm_help.txt"),
    exec_string_entry!(0x51cc, 33, None, 0xd8, 1, false, "exe", "fast_draw.txt"),
    exec_string_entry!(0x532c, 32, None, 0x2f4, 0, false, "exe", "fast_draw_help.txt"),
    exec_string_entry!(0x5868, 46, Some(0x5ea0), 0x1f4, 1, false, "exe", "magic2.txt"),
    exec_string_entry!(0x6098, 64, None, 0x668, 0, false, "exe", "magic_help.txt"),
    exec_string_entry!(0x6e0c, 18, None, 0xa4, 0, false, "exe", "auto_cmd.txt"),
    exec_string_entry!(0x6efc, 18, None, 0x7c, 0, false, "exe", "auto_cmd_help.txt"),
    exec_string_entry!(0x6fc8, 3, None, 0xc, 0, false, "exe", "technique.txt"),
    exec_string_entry!(0x6fe8, 10, None, 0x64, 3, false, "exe", "config.txt"),
    exec_string_entry!(0x7078, 10, None, 0xa4, 0, false, "exe", "config_help.txt"),
    exec_string_entry!(0x7148, 31, None, 0xec, 1, true, "exe", "config_setting.txt"),
    exec_string_entry!(0x72b4, 12, None, 0x64, 0, false, "exe", "menu.txt"),
    exec_string_entry!(0x734c, 2, None, 0x14, 0, false, "exe", "menu2.txt"),
    exec_string_entry!(0x736c, 12, None, 0x6c, 0, false, "exe", "tool.txt"),
    exec_string_entry!(0x740c, 12, None, 0x104, 0, false, "exe", "tool_help.txt"),
    exec_string_entry!(0x7544, 128, None, 0x26c, 0, false, "exe", "map_name.txt"),
    exec_string_entry!(0x840c, 20, None, 0x22c, 1, false, "exe", "memory_card.txt"),
    exec_string_entry!(0x88ac, 21, None, 0x80, 0, false, "exe", "icon.txt"),
    exec_string_entry!(0x8984, 10, None, 0x70, 0, false, "exe", "window.txt"),
    exec_string_entry!(0x8a20, 22, None, 0x174, 0, false, "exe", "load_save.txt"),
    exec_string_entry!(0x8e98, 13, None, 0x50, 0, false, "exe", "controller.txt"),
    exec_string_entry!(0x9228, 70, None, 0x3dc, 0, false, "exe", "battle.txt"),
    exec_string_entry!(0x9798, 256, None, 0x734, 0, false, "exe", "enemy.txt"),
    exec_string_entry!(0xa2f0, 11, None, 0xc4, 0, false, "exe", "command_help.txt"),
    exec_string_entry!(0xae20, 214, None, 0x7b4, 1, false, "exe", "attack.txt"),
    exec_string_entry!(0xc53c, 13, None, 0x78, 0, false, "exe", "force.txt"),
    exec_string_entry!(0xc5ec, 14, None, 0x144, 0, false, "exe", "force_help.txt"),
    exec_string_entry!(0xc7e4, 21, None, 0xd0, 1, false, "exe", "guardian.txt"),
];

const EXEC_STRING_DATA_US: &[ExecStringEntry] = &[
    exec_string_entry!(0xf54, 6, None, 0xac, 0, false, "exe", "menu_help.txt"),
    exec_string_entry!(0x101c, 256, None, 0xad8, 1, false, "exe", "item.txt"),
    exec_string_entry!(0x1ef8, 256, None, 0xaac, 0, false, "exe", "item_help.txt"),
    exec_string_entry!(0x51b0, 8, None, 0x58, 1, false, "exe", "arm.txt"),
    exec_string_entry!(0x522c, 8, None, 0xbc, 0, false, "exe", "arm_help.txt"),
    exec_string_entry!(0x5370, 33, None, 0xdc, 1, false, "exe", "fast_draw.txt"),
    exec_string_entry!(0x54d4, 32, None, 0x2e8, 0, false, "exe", "fast_draw_help.txt"),
    exec_string_entry!(0x5a04, 46, Some(0x5f22), 0x1d2, 1, false, "exe", "magic2.txt"),
    exec_string_entry!(0x60f8, 64, None, 0x5c8, 0, false, "exe", "magic_help.txt"),
    exec_string_entry!(0x6dcc, 18, None, 0x94, 0, false, "exe", "auto_cmd.txt"),
    exec_string_entry!(0x6eac, 18, None, 0xac, 0, false, "exe", "auto_cmd_help.txt"),
    exec_string_entry!(0x6fa4, 3, None, 0x18, 0, false, "exe", "technique.txt"),
    exec_string_entry!(0x6fcc, 10, None, 0x64, 3, false, "exe", "config.txt"),
    exec_string_entry!(0x705c, 10, None, 0xc8, 0, false, "exe", "config_help.txt"),
    exec_string_entry!(0x7150, 31, None, 0x104, 1, true, "exe", "config_setting.txt"),
    exec_string_entry!(0x72d4, 12, None, 0x84, 0, false, "exe", "menu.txt"),
    exec_string_entry!(0x738c, 2, None, 0x18, 0, false, "exe", "menu2.txt"),
    exec_string_entry!(0x73b0, 12, None, 0x50, 0, false, "exe", "tool.txt"),
    exec_string_entry!(0x7434, 12, None, 0x110, 0, false, "exe", "tool_help.txt"),
    exec_string_entry!(0x7578, 128, None, 0x330, 0, false, "exe", "map_name.txt"),
    exec_string_entry!(0x8508, 20, None, 0x280, 1, false, "exe", "memory_card.txt"),
    exec_string_entry!(0x883c, 21, None, 0x74, 0, false, "exe", "icon.txt"),
    exec_string_entry!(0x8908, 10, None, 0x5c, 0, false, "exe", "window.txt"),
    exec_string_entry!(0x8990, 22, None, 0x154, 0, false, "exe", "load_save.txt"),
    exec_string_entry!(0x8de8, 13, None, 0x58, 0, false, "exe", "controller.txt"),
    exec_string_entry!(0x918c, 70, None, 0x4f4, 0, false, "exe", "battle.txt"),
    exec_string_entry!(0x9814, 256, None, 0x7a4, 0, false, "exe", "enemy.txt"),
    exec_string_entry!(0xa3e0, 11, None, 0xdc, 0, false, "exe", "command_help.txt"),
    exec_string_entry!(0xaf28, 214, None, 0xa34, 1, false, "exe", "attack.txt"),
    exec_string_entry!(0xc8c4, 13, None, 0xa4, 0, false, "exe", "force.txt"),
    exec_string_entry!(0xc9a0, 14, None, 0x184, 0, false, "exe", "force_help.txt"),
    exec_string_entry!(0xcbd8, 21, None, 0xe0, 1, false, "exe", "guardian.txt"),
];

const EXEC_STRING_DATA_EN: &[ExecStringEntry] = &[
    exec_string_entry!(0xf4c, 6, None, 0xac, 0, false, "exe", "menu_help.txt"),
    exec_string_entry!(0x1014, 256, None, 0xad8, 1, false, "exe", "item.txt"),
    exec_string_entry!(0x1ef0, 256, None, 0xaac, 0, false, "exe", "item_help.txt"),
    exec_string_entry!(0x51a8, 8, None, 0x58, 1, false, "exe", "arm.txt"),
    exec_string_entry!(0x5224, 8, None, 0xbc, 0, false, "exe", "arm_help.txt"),
    exec_string_entry!(0x5368, 33, None, 0xdc, 1, false, "exe", "fast_draw.txt"),
    exec_string_entry!(0x54cc, 32, None, 0x2e8, 0, false, "exe", "fast_draw_help.txt"),
    exec_string_entry!(0x59fc, 46, Some(0x5f1a), 0x1d2, 1, false, "exe", "magic2.txt"),
    exec_string_entry!(0x60f0, 64, None, 0x5c8, 0, false, "exe", "magic_help.txt"),
    exec_string_entry!(0x6dc4, 18, None, 0x94, 0, false, "exe", "auto_cmd.txt"),
    exec_string_entry!(0x6ea4, 18, None, 0xac, 0, false, "exe", "auto_cmd_help.txt"),
    exec_string_entry!(0x6f9c, 3, None, 0x18, 0, false, "exe", "technique.txt"),
    exec_string_entry!(0x6fc4, 10, None, 0x64, 3, false, "exe", "config.txt"),
    exec_string_entry!(0x7054, 10, None, 0xc8, 0, false, "exe", "config_help.txt"),
    exec_string_entry!(0x7148, 31, None, 0x104, 1, true, "exe", "config_setting.txt"),
    exec_string_entry!(0x72cc, 12, None, 0x84, 0, false, "exe", "menu.txt"),
    exec_string_entry!(0x7384, 2, None, 0x18, 0, false, "exe", "menu2.txt"),
    exec_string_entry!(0x73a8, 12, None, 0x50, 0, false, "exe", "tool.txt"),
    exec_string_entry!(0x742c, 12, None, 0x110, 0, false, "exe", "tool_help.txt"),
    exec_string_entry!(0x7570, 128, None, 0x330, 0, false, "exe", "map_name.txt"),
    exec_string_entry!(0x8500, 20, None, 0x278, 1, false, "exe", "memory_card.txt"),
    exec_string_entry!(0x882c, 21, None, 0x74, 0, false, "exe", "icon.txt"),
    exec_string_entry!(0x88f8, 10, None, 0x5c, 0, false, "exe", "window.txt"),
    exec_string_entry!(0x8980, 22, None, 0x14c, 0, false, "exe", "load_save.txt"),
    exec_string_entry!(0x8dd0, 13, None, 0x58, 0, false, "exe", "controller.txt"),
    exec_string_entry!(0x8f18, 6, None, 0x58, 0, false, "exe", "load_save2.txt"),
    exec_string_entry!(0x9230, 70, None, 0x4f4, 0, false, "exe", "battle.txt"),
    exec_string_entry!(0x98b8, 256, None, 0x7a4, 0, false, "exe", "enemy.txt"),
    exec_string_entry!(0xa484, 11, None, 0xdc, 0, false, "exe", "command_help.txt"),
    exec_string_entry!(0xafcc, 214, None, 0xa34, 1, false, "exe", "attack.txt"),
    exec_string_entry!(0xc968, 13, None, 0xa4, 0, false, "exe", "force.txt"),
    exec_string_entry!(0xca44, 14, None, 0x184, 0, false, "exe", "force_help.txt"),
    exec_string_entry!(0xcc7c, 21, None, 0xe0, 1, false, "exe", "guardian.txt"),
];

const EXEC_STRING_DATA_DE: &[ExecStringEntry] = &[
    exec_string_entry!(0xf44, 6, None, 0xbc, 0, false, "exe", "menu_help.txt"),
    exec_string_entry!(0x101c, 256, None, 0xa9c, 1, false, "exe", "item.txt"),
    exec_string_entry!(0x1ebc, 256, None, 0xae0, 0, false, "exe", "item_help.txt"),
    exec_string_entry!(0x51a8, 8, None, 0x58, 1, false, "exe", "arm.txt"),
    exec_string_entry!(0x5224, 8, None, 0xbc, 0, false, "exe", "arm_help.txt"),
    exec_string_entry!(0x5368, 33, None, 0xdc, 1, false, "exe", "fast_draw.txt"),
    exec_string_entry!(0x54cc, 32, None, 0x2d8, 0, false, "exe", "fast_draw_help.txt"),
    exec_string_entry!(0x59ec, 46, Some(0x6024), 0x20c, 1, false, "exe", "magic2.txt"),
    exec_string_entry!(0x6238, 64, None, 0x5f8, 0, false, "exe", "magic_help.txt"),
    exec_string_entry!(0x6f3c, 18, None, 0x98, 0, false, "exe", "auto_cmd.txt"),
    exec_string_entry!(0x7020, 18, None, 0xb0, 0, false, "exe", "auto_cmd_help.txt"),
    exec_string_entry!(0x711c, 3, None, 0x1c, 0, false, "exe", "technique.txt"),
    exec_string_entry!(0x7148, 10, None, 0x64, 3, false, "exe", "config.txt"),
    exec_string_entry!(0x71d8, 10, None, 0xdc, 0, false, "exe", "config_help.txt"),
    exec_string_entry!(0x72e0, 31, None, 0x114, 1, true, "exe", "config_setting.txt"),
    exec_string_entry!(0x7474, 12, None, 0x7c, 0, false, "exe", "menu.txt"),
    exec_string_entry!(0x7524, 2, None, 0x18, 0, false, "exe", "menu2.txt"),
    exec_string_entry!(0x7548, 12, None, 0x58, 0, false, "exe", "tool.txt"),
    exec_string_entry!(0x75d4, 12, None, 0x10c, 0, false, "exe", "tool_help.txt"),
    exec_string_entry!(0x7714, 128, None, 0x30c, 0, false, "exe", "map_name.txt"),
    exec_string_entry!(0x8680, 20, None, 0x344, 1, false, "exe", "memory_card.txt"),
    exec_string_entry!(0x8a78, 21, None, 0x88, 0, false, "exe", "icon.txt"),
    exec_string_entry!(0x8b58, 10, None, 0x54, 0, false, "exe", "window.txt"),
    exec_string_entry!(0x8bd8, 22, None, 0x19c, 0, false, "exe", "load_save.txt"),
    exec_string_entry!(0x9078, 13, None, 0x6c, 0, false, "exe", "controller.txt"),
    exec_string_entry!(0x91d4, 6, None, 0x64, 0, false, "exe", "load_save2.txt"),
    exec_string_entry!(0x94e8, 70, None, 0x4e8, 0, false, "exe", "battle.txt"),
    exec_string_entry!(0x9b64, 256, None, 0x7b8, 0, false, "exe", "enemy.txt"),
    exec_string_entry!(0xa744, 11, None, 0xe0, 0, false, "exe", "command_help.txt"),
    exec_string_entry!(0xb290, 214, None, 0xaa0, 1, false, "exe", "attack.txt"),
    exec_string_entry!(0xcc98, 13, None, 0x9c, 0, false, "exe", "force.txt"),
    exec_string_entry!(0xcd6c, 14, None, 0x180, 0, false, "exe", "force_help.txt"),
    exec_string_entry!(0xcfa0, 21, None, 0xe0, 1, false, "exe", "guardian.txt"),
];

const EXEC_STRING_DATA_ES: &[ExecStringEntry] = &[
    exec_string_entry!(0xf44, 6, None, 0xb0, 0, false, "exe", "menu_help.txt"),
    exec_string_entry!(0x1010, 256, None, 0xa18, 1, false, "exe", "item.txt"),
    exec_string_entry!(0x1e2c, 256, None, 0xa6c, 0, false, "exe", "item_help.txt"),
    exec_string_entry!(0x50a4, 8, None, 0x60, 1, false, "exe", "arm.txt"),
    exec_string_entry!(0x5128, 8, None, 0x98, 0, false, "exe", "arm_help.txt"),
    exec_string_entry!(0x5248, 33, None, 0xd0, 1, false, "exe", "fast_draw.txt"),
    exec_string_entry!(0x53a0, 32, None, 0x2b4, 0, false, "exe", "fast_draw_help.txt"),
    exec_string_entry!(0x589c, 46, Some(0x5ed4), 0x1d4, 1, false, "exe", "magic2.txt"),
    exec_string_entry!(0x60ac, 64, None, 0x5ec, 0, false, "exe", "magic_help.txt"),
    exec_string_entry!(0x6da4, 18, None, 0x98, 0, false, "exe", "auto_cmd.txt"),
    exec_string_entry!(0x6e88, 18, None, 0xa4, 0, false, "exe", "auto_cmd_help.txt"),
    exec_string_entry!(0x6f78, 3, None, 0x1c, 0, false, "exe", "technique.txt"),
    exec_string_entry!(0x6fa4, 10, None, 0x68, 3, false, "exe", "config.txt"),
    exec_string_entry!(0x7038, 10, None, 0xc0, 0, false, "exe", "config_help.txt"),
    exec_string_entry!(0x7124, 31, None, 0x100, 1, true, "exe", "config_setting.txt"),
    exec_string_entry!(0x72a4, 12, None, 0x74, 0, false, "exe", "menu.txt"),
    exec_string_entry!(0x734c, 2, None, 0x1c, 0, false, "exe", "menu2.txt"),
    exec_string_entry!(0x7374, 12, None, 0x58, 0, false, "exe", "tool.txt"),
    exec_string_entry!(0x7400, 12, None, 0x10c, 0, false, "exe", "tool_help.txt"),
    exec_string_entry!(0x7540, 128, None, 0x334, 0, false, "exe", "map_name.txt"),
    exec_string_entry!(0x84d4, 20, None, 0x298, 1, false, "exe", "memory_card.txt"),
    exec_string_entry!(0x8820, 21, None, 0x88, 0, false, "exe", "icon.txt"),
    exec_string_entry!(0x8900, 10, None, 0x58, 0, false, "exe", "window.txt"),
    exec_string_entry!(0x8984, 22, None, 0x164, 0, false, "exe", "load_save.txt"),
    exec_string_entry!(0x8dec, 13, None, 0x5c, 0, false, "exe", "controller.txt"),
    exec_string_entry!(0x8f38, 6, None, 0x68, 0, false, "exe", "load_save2.txt"),
    exec_string_entry!(0x925c, 70, None, 0x4c4, 0, false, "exe", "battle.txt"),
    exec_string_entry!(0x98b4, 256, None, 0x79c, 0, false, "exe", "enemy.txt"),
    exec_string_entry!(0xa474, 11, None, 0xd8, 0, false, "exe", "command_help.txt"),
    exec_string_entry!(0xafb8, 214, None, 0x9a8, 1, false, "exe", "attack.txt"),
    exec_string_entry!(0xc8c8, 13, None, 0xac, 0, false, "exe", "force.txt"),
    exec_string_entry!(0xc9ac, 14, None, 0x180, 0, false, "exe", "force_help.txt"),
    exec_string_entry!(0xcbdc, 21, None, 0xe0, 1, false, "exe", "guardian.txt"),
];

/// Per-version schedule of translatable string arrays embedded directly
/// in the main executable. Returns `None` for versions the original
/// reference tool never covered (FR, IT).
pub fn exec_string_data(version: Version) -> Option<&'static [ExecStringEntry]> {
    if version.is_japanese() {
        Some(EXEC_STRING_DATA_JP)
    } else {
        match version {
            Version::Us => Some(EXEC_STRING_DATA_US),
            Version::En => Some(EXEC_STRING_DATA_EN),
            Version::De => Some(EXEC_STRING_DATA_DE),
            Version::Es => Some(EXEC_STRING_DATA_ES),
            _ => None,
        }
    }
}

macro_rules! exec_string_entry2 {
    ($offset:expr, $num_strings:expr, $max_string_len:expr, $encoding:expr, $trans_dir:expr, $trans_file:expr) => {
        ExecStringEntry2 {
            offset: $offset,
            num_strings: $num_strings,
            max_string_len: $max_string_len,
            encoding: $encoding,
            trans_dir: $trans_dir,
            trans_file: $trans_file,
        }
    };
}

const EXEC_STRING_DATA2_JP1: &[ExecStringEntry2] = &[
    exec_string_entry2!(0xed8, 4, 19, None, "exe", "job.txt"),
    exec_string_entry2!(0xf24, 5, 7, Some(TextVariant::Original), "exe", "luck.txt"),
    exec_string_entry2!(0x868c, 1, 520, None, "exe", "name_entry.txt"),
    exec_string_entry2!(0xe0e4, 1, 20, Some(TextVariant::Original), "exe", "best_runners.txt"),
    exec_string_entry2!(0xe0f8, 1, 20, Some(TextVariant::Original), "exe", "trial_result.txt"),
    exec_string_entry2!(0xbd7b0, 1, 8, Some(TextVariant::Original), "exe", "miss.txt"),
    exec_string_entry2!(0xbd7f0, 1, 4, Some(TextVariant::Original), "exe", "ok.txt"),
];

const EXEC_STRING_DATA2_JP2: &[ExecStringEntry2] = &[
    exec_string_entry2!(0xed8, 4, 19, None, "exe", "job.txt"),
    exec_string_entry2!(0xf24, 5, 7, Some(TextVariant::Original), "exe", "luck.txt"),
    exec_string_entry2!(0x868c, 1, 520, None, "exe", "name_entry.txt"),
    exec_string_entry2!(0xe0e4, 1, 20, Some(TextVariant::Original), "exe", "best_runners.txt"),
    exec_string_entry2!(0xe0f8, 1, 20, Some(TextVariant::Original), "exe", "trial_result.txt"),
    exec_string_entry2!(0xcb52c, 1, 8, Some(TextVariant::Original), "exe", "miss.txt"),
    exec_string_entry2!(0xcb56c, 1, 4, Some(TextVariant::Original), "exe", "ok.txt"),
];

const EXEC_STRING_DATA2_US: &[ExecStringEntry2] = &[
    exec_string_entry2!(0xee0, 4, 19, None, "exe", "job.txt"),
    exec_string_entry2!(0xf2c, 5, 7, None, "exe", "luck.txt"),
    exec_string_entry2!(0x87dc, 1, 92, None, "exe", "name_entry.txt"),
    exec_string_entry2!(0x8ed2, 1, 18, None, "exe", "best_runners.txt"),
    exec_string_entry2!(0xe4dc, 1, 20, None, "exe", "trial_result.txt"),
    exec_string_entry2!(0xc1c48, 1, 8, None, "exe", "miss.txt"),
    exec_string_entry2!(0xc1c90, 1, 4, None, "exe", "ok.txt"),
];

const EXEC_STRING_DATA2_EN: &[ExecStringEntry2] = &[
    exec_string_entry2!(0xed8, 4, 19, None, "exe", "job.txt"),
    exec_string_entry2!(0xf24, 5, 7, None, "exe", "luck.txt"),
    exec_string_entry2!(0x87cc, 1, 92, None, "exe", "name_entry.txt"),
    exec_string_entry2!(0x8eba, 1, 18, None, "exe", "best_runners.txt"),
    exec_string_entry2!(0xe580, 1, 20, None, "exe", "trial_result.txt"),
    exec_string_entry2!(0xc1a80, 1, 8, None, "exe", "miss.txt"),
    exec_string_entry2!(0xc1ac8, 1, 4, None, "exe", "ok.txt"),
];

const EXEC_STRING_DATA2_DE: &[ExecStringEntry2] = &[
    exec_string_entry2!(0xed0, 4, 19, None, "exe", "job.txt"),
    exec_string_entry2!(0xf1c, 5, 7, None, "exe", "luck.txt"),
    exec_string_entry2!(0x8a18, 1, 92, None, "exe", "name_entry.txt"),
    exec_string_entry2!(0x9176, 1, 18, None, "exe", "best_runners.txt"),
    exec_string_entry2!(0xe8a4, 1, 20, None, "exe", "trial_result.txt"),
    exec_string_entry2!(0xc1f8c, 1, 8, None, "exe", "miss.txt"),
    exec_string_entry2!(0xc1fd4, 1, 4, None, "exe", "ok.txt"),
];

const EXEC_STRING_DATA2_ES: &[ExecStringEntry2] = &[
    exec_string_entry2!(0xed0, 4, 19, None, "exe", "job.txt"),
    exec_string_entry2!(0xf1c, 5, 7, None, "exe", "luck.txt"),
    exec_string_entry2!(0x87c0, 1, 92, None, "exe", "name_entry.txt"),
    exec_string_entry2!(0x8eda, 1, 18, None, "exe", "best_runners.txt"),
    exec_string_entry2!(0xe4e0, 1, 20, None, "exe", "trial_result.txt"),
    exec_string_entry2!(0xc1bc8, 1, 8, None, "exe", "miss.txt"),
    exec_string_entry2!(0xc1c10, 1, 4, None, "exe", "ok.txt"),
];

/// Per-version secondary schedule of executable-embedded strings.
/// `None` for FR/IT, which the original never covered.
pub fn exec_string_data2(version: Version) -> Option<&'static [ExecStringEntry2]> {
    match version {
        Version::Jp1 => Some(EXEC_STRING_DATA2_JP1),
        Version::Jp2 => Some(EXEC_STRING_DATA2_JP2),
        Version::Us => Some(EXEC_STRING_DATA2_US),
        Version::En => Some(EXEC_STRING_DATA2_EN),
        Version::De => Some(EXEC_STRING_DATA2_DE),
        Version::Es => Some(EXEC_STRING_DATA2_ES),
        _ => None,
    }
}

macro_rules! util_entry {
    ($table_offset:expr, $num_strings:expr, $data_offset:expr, $data_size:expr, $max_string_len:expr, $trans_dir:expr, $trans_file:expr) => {
        UtilFileEntry {
            table_offset: $table_offset,
            num_strings: $num_strings,
            data_offset: $data_offset,
            data_size: $data_size,
            max_string_len: $max_string_len,
            trans_dir: $trans_dir,
            trans_file: $trans_file,
        }
    };
}

const UTIL_FILE_DATA_JP1: &[UtilFileEntry] = &[
    util_entry!(0xe778, 64, 0x0, 0x3a8, 21, "exe", "magic.txt"),
    util_entry!(0xe878, 4, 0x3a8, 0x28, 17, "exe", "character.txt"),
];
const UTIL_FILE_DATA_JP2: &[UtilFileEntry] = &[
    util_entry!(0xe784, 64, 0x0, 0x3a8, 21, "exe", "magic.txt"),
    util_entry!(0xe884, 4, 0x3a8, 0x28, 17, "exe", "character.txt"),
];
const UTIL_FILE_DATA_US: &[UtilFileEntry] = &[
    util_entry!(0xe23c, 64, 0x0, 0x278, 11, "exe", "magic.txt"),
    util_entry!(0xe33c, 4, 0x278, 0x20, 9, "exe", "character.txt"),
];
const UTIL_FILE_DATA_EN: &[UtilFileEntry] = &[
    util_entry!(0xd9b0, 64, 0x0, 0x278, 11, "exe", "magic.txt"),
    util_entry!(0xdab0, 4, 0x278, 0x20, 9, "exe", "character.txt"),
];
const UTIL_FILE_DATA_DE: &[UtilFileEntry] = &[
    util_entry!(0xd9a0, 64, 0x0, 0x278, 11, "exe", "magic.txt"),
    util_entry!(0xdaa0, 4, 0x278, 0x20, 9, "exe", "character.txt"),
];
const UTIL_FILE_DATA_ES: &[UtilFileEntry] = &[
    util_entry!(0xd9a8, 64, 0x0, 0x284, 11, "exe", "magic.txt"),
    util_entry!(0xdaa8, 4, 0x284, 0x20, 9, "exe", "character.txt"),
];

/// Per-version schedule of translatable strings embedded in the
/// `UT0.OVR` overlay. `None` for FR/IT.
pub fn util_file_data(version: Version) -> Option<&'static [UtilFileEntry]> {
    match version {
        Version::Jp1 => Some(UTIL_FILE_DATA_JP1),
        Version::Jp2 => Some(UTIL_FILE_DATA_JP2),
        Version::Us => Some(UTIL_FILE_DATA_US),
        Version::En => Some(UTIL_FILE_DATA_EN),
        Version::De => Some(UTIL_FILE_DATA_DE),
        Version::Es => Some(UTIL_FILE_DATA_ES),
        _ => None,
    }
}

const MAP_STRING_DATA_JP: &[MapStringEntry] = &[
    (5, &[(0, 12), (12, 8), (20, 12), (32, 12), (44, 12)]),
    (36, &[(16, 16)]),
    (51, &[(0, 20)]),
    (57, &[(0, 20)]),
];

const MAP_STRING_DATA_INT: &[MapStringEntry] = &[
    (5, &[(0, 8), (8, 8), (16, 8), (24, 8), (32, 12)]),
    (36, &[(16, 8)]),
    (51, &[(0, 12)]),
    (57, &[(0, 12)]),
];

/// Per-map-number schedule of translatable strings embedded in a map's
/// MIPS code, as `(offset, max_size)` pairs, consumed by the map
/// rewriter's code-string injection step (core spec §4.6 step 8).
pub fn map_string_data(version: Version, map_number: u32) -> Option<&'static [(u32, u32)]> {
    let table = if version.is_japanese() {
        MAP_STRING_DATA_JP
    } else {
        MAP_STRING_DATA_INT
    };
    table
        .iter()
        .find(|(n, _)| *n == map_number)
        .map(|(_, entries)| *entries)
}

macro_rules! font_entry {
    ($offset:expr, $num_chars:expr, $char_width:expr, $char_height:expr, $line_spacing:expr, $out_chars_per_row:expr, $trans_dir:expr, $trans_file:expr) => {
        FontEntry {
            offset: $offset,
            num_chars: $num_chars,
            char_width: $char_width,
            char_height: $char_height,
            line_spacing: $line_spacing,
            out_chars_per_row: $out_chars_per_row,
            trans_dir: $trans_dir,
            trans_file: $trans_file,
        }
    };
}

const FONT_DATA_JP1: &[FontEntry] = &[
    font_entry!(0xe10c, 465, 12, 11, 1, 32, "gfx", "kanji.png"),
    font_entry!(0xc120c, 524, 12, 11, 1, 32, "gfx", "dialog_font.png"),
];
const FONT_DATA_JP2: &[FontEntry] = &[
    font_entry!(0xe10c, 465, 12, 11, 1, 32, "gfx", "kanji.png"),
    font_entry!(0xc0e04, 524, 12, 11, 1, 32, "gfx", "dialog_font.png"),
];
const FONT_DATA_US: &[FontEntry] = &[
    font_entry!(0xe4f0, 96, 8, 16, 0, 16, "gfx", "dialog_font.png"),
    font_entry!(0xeaf0, 96, 8, 16, 0, 16, "gfx", "dialog_font2.png"),
    font_entry!(0xf0f0, 96, 8, 16, 0, 16, "gfx", "dialog_font3.png"),
    font_entry!(0xf6f0, 96, 8, 16, 0, 16, "gfx", "dialog_font4.png"),
];
const FONT_DATA_EN: &[FontEntry] = &[font_entry!(0xe594, 224, 8, 16, 0, 16, "gfx", "dialog_font.png")];
const FONT_DATA_DE: &[FontEntry] = &[font_entry!(0xe8b8, 224, 8, 16, 0, 16, "gfx", "dialog_font.png")];
const FONT_DATA_ES: &[FontEntry] = &[font_entry!(0xe4f4, 224, 8, 16, 0, 16, "gfx", "dialog_font.png")];

/// Per-version font glyph sheet descriptors. `None` for FR/IT.
pub fn font_data(version: Version) -> Option<&'static [FontEntry]> {
    match version {
        Version::Jp1 => Some(FONT_DATA_JP1),
        Version::Jp2 => Some(FONT_DATA_JP2),
        Version::Us => Some(FONT_DATA_US),
        Version::En => Some(FONT_DATA_EN),
        Version::De => Some(FONT_DATA_DE),
        Version::Es => Some(FONT_DATA_ES),
        _ => None,
    }
}

/// Per-version descriptor locating bytecode script code embedded
/// directly in the executable. `None` for FR/IT.
pub fn exec_script_data(version: Version) -> Option<ExecScriptEntry> {
    let e = |table_offset, num_scripts, data_offset, data_size| {
        Some(ExecScriptEntry {
            table_offset,
            num_scripts,
            data_offset,
            data_size,
        })
    };

    if version.is_japanese() {
        e(0x8f80, 10, 0x9078, 0x1ac)
    } else {
        match version {
            Version::Us => e(0x8ee8, 10, 0x8fe0, 0x1a8),
            Version::En => e(0x8f8c, 10, 0x9084, 0x1a8),
            Version::De => e(0x9254, 10, 0x934c, 0x198),
            Version::Es => e(0x8fbc, 10, 0x90b4, 0x1a4),
            _ => None,
        }
    }
}

/// Per-version offset of the map-name translation table within the
/// executable. The original reference tool carries no FR/IT entry, so
/// those return `None` rather than an invented value (see DESIGN.md).
pub fn map_name_table_offset(version: Version) -> Option<u32> {
    if version.is_japanese() {
        Some(0x7544)
    } else {
        match version {
            Version::Us => Some(0x7578),
            Version::En => Some(0x7570),
            Version::De => Some(0x7714),
            Version::Es => Some(0x7540),
            _ => None,
        }
    }
}

macro_rules! texture_descriptor {
    ($pixel_section:expr, $clut_section:expr, $dimensions:expr, $clut_offset:expr, $trans_file:expr) => {
        TextureDescriptor {
            pixel_section: $pixel_section,
            clut_section: $clut_section,
            dimensions: $dimensions,
            clut_offset: $clut_offset,
            trans_file: $trans_file,
        }
    };
}

const UT0_TEXTURES: &[TextureDescriptor] = &[
    texture_descriptor!(1, 0, (256, 256), 0, "memory_card.png"),
    texture_descriptor!(3, 2, (256, 256), 0, "name_entry.png"),
    texture_descriptor!(5, 4, (256, 256), 32, "load_save.png"),
];

const SY_TEXTURES: &[TextureDescriptor] = &[
    texture_descriptor!(1, 0, (256, 256), 0x1c0, "menu_font.png"),
    texture_descriptor!(2, 0, (256, 256), 0x260, "menu_labels.png"),
];

/// Static (version-independent) schedule of archive files containing
/// translatable texture sheets, and the texture descriptors within each.
pub fn texture_data() -> &'static [TextureEntry] {
    const DATA: &[TextureEntry] = &[
        TextureEntry {
            sub_dir: "SYS",
            file_name: "UT0.BIN",
            archive_size: None,
            last_section_size: 0x200,
            textures: UT0_TEXTURES,
        },
        TextureEntry {
            sub_dir: "SYS",
            file_name: "SY0.BIN",
            archive_size: Some(0xb000),
            last_section_size: -1,
            textures: SY_TEXTURES,
        },
        TextureEntry {
            sub_dir: "SYS",
            file_name: "SY1.BIN",
            archive_size: Some(0xb000),
            last_section_size: -1,
            textures: SY_TEXTURES,
        },
    ];
    DATA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exec_string_data_has_no_fr_it_entry() {
        assert!(exec_string_data(Version::Fr).is_none());
        assert!(exec_string_data(Version::It).is_none());
        assert!(exec_string_data(Version::Us).is_some());
    }

    #[test]
    fn map_name_table_offset_matches_original_per_version() {
        assert_eq!(map_name_table_offset(Version::Us), Some(0x7578));
        assert_eq!(map_name_table_offset(Version::Jp1), Some(0x7544));
        assert_eq!(map_name_table_offset(Version::Fr), None);
    }

    #[test]
    fn map_string_data_looks_up_by_map_number() {
        let entries = map_string_data(Version::Us, 5).unwrap();
        assert_eq!(entries, &[(0, 8), (8, 8), (16, 8), (24, 8), (32, 12)]);
        assert!(map_string_data(Version::Us, 9999).is_none());

        let jp_entries = map_string_data(Version::Jp1, 36).unwrap();
        assert_eq!(jp_entries, &[(16, 16)]);
    }

    #[test]
    fn exec_script_data_picks_version() {
        let us = exec_script_data(Version::Us).unwrap();
        assert_eq!(us.table_offset, 0x8ee8);
        assert_eq!(us.num_scripts, 10);
        assert!(exec_script_data(Version::Fr).is_none());
    }

    #[test]
    fn texture_data_has_three_archive_entries() {
        assert_eq!(texture_data().len(), 3);
        assert_eq!(texture_data()[0].textures.len(), 3);
    }
}
