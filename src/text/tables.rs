//! Generated static tables transcribed verbatim from the original
//! game's text codec: charsets, Katakana, and the two global Kanji
//! banks. See `kanji_hash_table` for the per-map hash-keyed variant.

/// Default western charset (variation of DOS code page 437); codes
/// 0x20..=0xff map to index 0..224. `Á`/`Í`/`Ú` at 0xb5/0xd6/0xe9 are
/// code page 850 holdovers used only by the Spanish release, which
/// does not actually ship glyphs for them in its font.
pub(super) const ORIG_CHARSET: [char; 224] = [
    ' ', '!', '"', '#', '$', '%', '&', '\'',
    '(', ')', '*', '+', ',', '-', '.', '/',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', ':', '\u{2605}', '<', '=', '>', '?',
    '\u{300c}', 'A', 'B', 'C', 'D', 'E', 'F', 'G',
    'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W',
    'X', 'Y', 'Z', '[', '\u{2642}', ']', '\u{300f}', '_',
    '`', 'a', 'b', 'c', 'd', 'e', 'f', 'g',
    'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w',
    'x', 'y', 'z', '{', '\u{2640}', '}', '\u{300e}', ' ',
    '\u{c7}', '\u{fc}', '\u{e9}', '\u{e2}', '\u{e4}', '\u{e0}', '\u{e5}', '\u{e7}',
    '\u{ea}', '\u{eb}', '\u{e8}', '\u{ef}', '\u{ee}', '\u{ec}', '\u{c4}', '\u{c5}',
    '\u{c9}', '\u{e6}', '\u{c6}', '\u{f4}', '\u{f6}', '\u{f2}', '\u{fb}', '\u{f9}',
    '\u{ff}', '\u{d6}', '\u{dc}', '\u{a2}', '\u{a3}', '\u{a5}', '\u{25af}', '\u{192}',
    '\u{e1}', '\u{ed}', '\u{f3}', '\u{fa}', '\u{f1}', '\u{d1}', '\u{aa}', '\u{ba}',
    '\u{bf}', '\u{25af}', '\u{ac}', '\u{bd}', '\u{bc}', '\u{a1}', '\u{ab}', '\u{bb}',
    '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{c1}', '\u{25af}', '\u{25af}',
    '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}',
    '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}',
    '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}',
    '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{cd}', '\u{25af}',
    '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}',
    '\u{25af}', '\u{df}', '\u{25af}', '\u{b6}', '\u{25af}', '\u{25af}', '\u{b5}', '\u{25af}',
    '\u{25af}', '\u{da}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}',
    '\u{25af}', '\u{b1}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{f7}', '\u{25af}',
    '\u{b0}', '\u{2219}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}',
];

/// Alternative western charset (variation of DOS code page 850),
/// paired with a custom font.
pub(super) const ALT_CHARSET: [char; 224] = [
    ' ', '!', '"', '#', '$', '%', '&', '\'',
    '(', ')', '*', '+', ',', '-', '.', '/',
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', ':', '\u{2605}', '<', '=', '>', '?',
    '\u{201c}', 'A', 'B', 'C', 'D', 'E', 'F', 'G',
    'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W',
    'X', 'Y', 'Z', '[', '\u{2642}', ']', '\u{2019}', '_',
    '\u{201d}', 'a', 'b', 'c', 'd', 'e', 'f', 'g',
    'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w',
    'x', 'y', 'z', '{', '\u{2640}', '}', '\u{2018}', ' ',
    '\u{c7}', '\u{fc}', '\u{e9}', '\u{e2}', '\u{e4}', '\u{e0}', '\u{e5}', '\u{e7}',
    '\u{ea}', '\u{eb}', '\u{e8}', '\u{ef}', '\u{ee}', '\u{ec}', '\u{c4}', '\u{c5}',
    '\u{c9}', '\u{e6}', '\u{c6}', '\u{f4}', '\u{f6}', '\u{f2}', '\u{fb}', '\u{f9}',
    '\u{ff}', '\u{d6}', '\u{dc}', '\u{f8}', '\u{a3}', '\u{d8}', '\u{25af}', '\u{192}',
    '\u{e1}', '\u{ed}', '\u{f3}', '\u{fa}', '\u{f1}', '\u{d1}', '\u{aa}', '\u{ba}',
    '\u{bf}', '\u{25af}', '~', '\u{bd}', '\u{bc}', '\u{a1}', '\u{ab}', '\u{bb}',
    '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{c1}', '\u{c2}', '\u{c0}',
    '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}',
    '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{e3}', '\u{c3}',
    '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}',
    '\u{f0}', '\u{d0}', '\u{ca}', '\u{cb}', '\u{c8}', '\u{25af}', '\u{cd}', '\u{ce}',
    '\u{cf}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{cc}', '\u{25af}',
    '\u{d3}', '\u{df}', '\u{d4}', '\u{d2}', '\u{f5}', '\u{d5}', '\u{b5}', '\u{fe}',
    '\u{de}', '\u{da}', '\u{db}', '\u{d9}', '\u{fd}', '\u{dd}', '\u{153}', '\u{152}',
    '\u{25af}', '\u{b1}', '\u{2026}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{f7}', '\u{25af}',
    '\u{b0}', '\u{2219}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}', '\u{25af}',
];

/// Full-width Katakana, codes 0xa7..=0xdd.
pub(super) const KATAKANA: [char; 55] = [
    '\u{30a1}', '\u{30a3}', '\u{30a5}', '\u{30a7}', '\u{30a9}', '\u{30e3}', '\u{30e5}', '\u{30e7}',
    '\u{30c3}', '\u{30fc}', '\u{30a2}', '\u{30a4}', '\u{30a6}', '\u{30a8}', '\u{30aa}', '\u{30ab}',
    '\u{30ad}', '\u{30af}', '\u{30b1}', '\u{30b3}', '\u{30b5}', '\u{30b7}', '\u{30b9}', '\u{30bb}',
    '\u{30bd}', '\u{30bf}', '\u{30c1}', '\u{30c4}', '\u{30c6}', '\u{30c8}', '\u{30ca}', '\u{30cb}',
    '\u{30cc}', '\u{30cd}', '\u{30ce}', '\u{30cf}', '\u{30d2}', '\u{30d5}', '\u{30d8}', '\u{30db}',
    '\u{30de}', '\u{30df}', '\u{30e0}', '\u{30e1}', '\u{30e2}', '\u{30e4}', '\u{30e6}', '\u{30e8}',
    '\u{30e9}', '\u{30ea}', '\u{30eb}', '\u{30ec}', '\u{30ed}', '\u{30ef}', '\u{30f3}',
];

/// Global Kanji bank 1 (lead byte 0x88), indexed by `trail_byte - 1`.
pub(super) const KANJI1: [char; 253] = [
    '\u{6301}', '\u{9053}', '\u{5177}', '\u{4f7f}', '\u{5404}', '\u{7279}', '\u{6b8a}', '\u{88c5}',
    '\u{5099}', '\u{6b66}', '\u{5668}', '\u{9632}', '\u{8eab}', '\u{6226}', '\u{95d8}', '\u{6642}',
    '\u{884c}', '\u{52d5}', '\u{50be}', '\u{5411}', '\u{6307}', '\u{793a}', '\u{72b6}', '\u{614b}',
    '\u{4efb}', '\u{610f}', '\u{5909}', '\u{66f4}', '\u{56de}', '\u{5fa9}', '\u{5473}', '\u{65b9}',
    '\u{5358}', '\u{4f53}', '\u{4e0d}', '\u{80fd}', '\u{5b8c}', '\u{5168}', '\u{6bd2}', '\u{6cbb}',
    '\u{7642}', '\u{75c5}', '\u{6c17}', '\u{9b54}', '\u{529b}', '\u{5c01}', '\u{5370}', '\u{6df7}',
    '\u{4e71}', '\u{5fd8}', '\u{5374}', '\u{7570}', '\u{5e38}', '\u{5192}', '\u{967a}', '\u{4e00}',
    '\u{4e2d}', '\u{65ad}', '\u{8005}', '\u{902e}', '\u{6355}', '\u{4f1a}', '\u{54e1}', '\u{8a3c}',
    '\u{5ea6}', '\u{753a}', '\u{4fbf}', '\u{5229}', '\u{5730}', '\u{56f3}', '\u{8868}', '\u{51fa}',
    '\u{88cf}', '\u{6b8b}', '\u{5f3e}', '\u{6570}', '\u{5024}', '\u{88dc}', '\u{7d66}', '\u{65e9}',
    '\u{6483}', '\u{6d88}', '\u{8cbb}', '\u{8efd}', '\u{6e1b}', '\u{6cd5}', '\u{8a18}', '\u{9332}',
    '\u{8155}', '\u{4e0a}', '\u{6607}', '\u{53cd}', '\u{5fdc}', '\u{52a0}', '\u{5de5}', '\u{5408}',
    '\u{9375}', '\u{4fee}', '\u{5f97}', '\u{7d4c}', '\u{9a13}', '\u{500d}', '\u{5316}', '\u{53f3}',
    '\u{624b}', '\u{7528}', '\u{7121}', '\u{52b9}', '\u{5c5e}', '\u{6027}', '\u{679c}', '\u{901a}',
    '\u{653b}', '\u{4ed8}', '\u{4e0e}', '\u{6c34}', '\u{706b}', '\u{98a8}', '\u{96f7}', '\u{5fc3}',
    '\u{8056}', '\u{4ee3}', '\u{6b69}', '\u{524d}', '\u{9032}', '\u{78ba}', '\u{7387}', '\u{6253}',
    '\u{907f}', '\u{904b}', '\u{4f1d}', '\u{8aac}', '\u{5de6}', '\u{66f8}', '\u{6575}', '\u{5438}',
    '\u{53ce}', '\u{982d}', '\u{90e8}', '\u{9759}', '\u{708e}', '\u{82b1}', '\u{59bb}', '\u{54c1}',
    '\u{5931}', '\u{5de8}', '\u{4eba}', '\u{5584}', '\u{60aa}', '\u{85ac}', '\u{8349}', '\u{53e4}',
    '\u{5897}', '\u{5e45}', '\u{7f6e}', '\u{7adc}', '\u{795e}', '\u{50cf}', '\u{7345}', '\u{5b50}',
    '\u{738b}', '\u{5973}', '\u{8a00}', '\u{8449}', '\u{672c}', '\u{540d}', '\u{4ed5}', '\u{5f37}',
    '\u{767d}', '\u{77f3}', '\u{80f8}', '\u{5b9d}', '\u{58f0}', '\u{7d0b}', '\u{767b}', '\u{547c}',
    '\u{9b42}', '\u{4e09}', '\u{7a2e}', '\u{4ffa}', '\u{5fc5}', '\u{5e30}', '\u{8fbc}', '\u{523b}',
    '\u{67f1}', '\u{7d50}', '\u{754c}', '\u{5c0f}', '\u{578b}', '\u{767a}', '\u{5c04}', '\u{62e1}',
    '\u{6563}', '\u{7167}', '\u{9023}', '\u{7d9a}', '\u{7cbe}', '\u{611f}', '\u{5f0f}', '\u{9ad8}',
    '\u{713c}', '\u{5937}', '\u{643a}', '\u{5e2f}', '\u{8377}', '\u{96fb}', '\u{7c92}', '\u{7832}',
    '\u{7a7a}', '\u{9593}', '\u{4f5c}', '\u{76f8}', '\u{8ee2}', '\u{4f4d}', '\u{5175}', '\u{540c}',
    '\u{629c}', '\u{5200}', '\u{885d}', '\u{6ce2}', '\u{7269}', '\u{76d7}', '\u{5cf0}', '\u{534a}',
    '\u{5206}', '\u{547d}', '\u{5f8c}', '\u{653e}', '\u{5207}', '\u{5b9a}', '\u{5263}', '\u{5bbf}',
    '\u{89e3}', '\u{7259}', '\u{8cab}', '\u{5f71}', '\u{6280}', '\u{5e83}', '\u{7bc4}', '\u{56f2}',
    '\u{6b21}', '\u{5143}', '\u{72ed}', '\u{73fe}', '\u{63db}', '\u{672d}', '\u{5c71}', '\u{8108}',
    '\u{6e21}', '\u{843d}', '\u{4e0b}', '\u{5ca9}', '\u{7891}',
];

/// Global Kanji bank 2 (lead byte 0x89), indexed by `trail_byte - 1`.
/// Shorter than `KANJI1`: the bank's higher slots were never assigned
/// a character by the original font.
pub(super) const KANJI2: [char; 212] = [
    '\u{8b0e}', '\u{8a66}', '\u{7df4}', '\u{58ca}', '\u{6a5f}', '\u{68b0}', '\u{6d6a}', '\u{58eb}',
    '\u{9928}', '\u{6388}', '\u{9a0e}', '\u{7559}', '\u{601d}', '\u{5ff5}', '\u{8d85}', '\u{7720}',
    '\u{5fa1}', '\u{62b5}', '\u{6297}', '\u{9084}', '\u{59ff}', '\u{81ea}', '\u{9664}', '\u{554f}',
    '\u{5165}', '\u{53e3}', '\u{623b}', '\u{8abf}', '\u{9589}', '\u{4f4e}', '\u{970a}', '\u{7403}',
    '\u{6b62}', '\u{7206}', '\u{4fdd}', '\u{8b77}', '\u{5f62}', '\u{8a2a}', '\u{77ac}', '\u{79fb}',
    '\u{53bb}', '\u{96c6}', '\u{69d8}', '\u{53d7}', '\u{5728}', '\u{6700}', '\u{5927}', '\u{6bb5}',
    '\u{5b88}', '\u{5272}', '\u{66ff}', '\u{97f3}', '\u{697d}', '\u{6574}', '\u{7406}', '\u{9813}',
    '\u{4f55}', '\u{9078}', '\u{629e}', '\u{969c}', '\u{5bb3}', '\u{5439}', '\u{98db}', '\u{63a2}',
    '\u{77e5}', '\u{901f}', '\u{53ef}', '\u{7e70}', '\u{7684}', '\u{722a}', '\u{591a}', '\u{76ee}',
    '\u{8272}', '\u{79d8}', '\u{6696}', '\u{5149}', '\u{9650}', '\u{8a08}', '\u{8b70}', '\u{8a71}',
    '\u{6756}', '\u{6751}', '\u{9662}', '\u{57ce}', '\u{6e2f}', '\u{5834}', '\u{8239}', '\u{57fa}',
    '\u{623f}', '\u{68ee}', '\u{585a}', '\u{61b6}', '\u{907a}', '\u{8de1}', '\u{68fa}', '\u{6bbf}',
    '\u{6b7b}', '\u{8ff7}', '\u{5bae}', '\u{53f7}', '\u{5ead}', '\u{5712}', '\u{6d77}', '\u{6df1}',
    '\u{6df5}', '\u{5815}', '\u{5929}', '\u{5eca}', '\u{5ec3}', '\u{5c4b}', '\u{5922}', '\u{5e7b}',
    '\u{5cf6}', '\u{796d}', '\u{58c7}', '\u{96ea}', '\u{5ce1}', '\u{8c37}', '\u{5225}', '\u{8907}',
    '\u{5199}', '\u{76f4}', '\u{6d3b}', '\u{7ba1}', '\u{753b}', '\u{9762}', '\u{7d42}', '\u{4e86}',
    '\u{5148}', '\u{5bb9}', '\u{91cf}', '\u{524a}', '\u{8aad}', '\u{9003}', '\u{968a}', '\u{5217}',
    '\u{4e88}', '\u{67a0}', '\u{5185}', '\u{4ed6}', '\u{65c5}', '\u{5c11}', '\u{5e74}', '\u{6557}',
    '\u{5236}', '\u{5c3d}', '\u{7372}', '\u{5f31}', '\u{70b9}', '\u{53d6}', '\u{8d77}', '\u{7740}',
    '\u{95c7}', '\u{652f}', '\u{63f4}', '\u{63a5}', '\u{751f}', '\u{6bba}', '\u{9806}', '\u{756a}',
    '\u{6c7a}', '\u{672a}', '\u{70c8}', '\u{9583}', '\u{66b4}', '\u{5468}', '\u{81f4}', '\u{7981}',
    '\u{546a}', '\u{6587}', '\u{7d2b}', '\u{6539}', '\u{5371}', '\u{8cea}', '\u{6025}', '\u{8ad6}',
    '\u{8c61}', '\u{91d1}', '\u{7c89}', '\u{5b9f}', '\u{83cc}', '\u{7cf8}', '\u{5c0e}', '\u{6211}',
    '\u{6d41}', '\u{5b57}', '\u{65ac}', '\u{5965}', '\u{7fa9}', '\u{51f6}', '\u{5203}', '\u{821e}',
    '\u{9663}', '\u{591c}', '\u{53c9}', '\u{5947}', '\u{5b87}', '\u{5b99}', '\u{632f}', '\u{602a}',
    '\u{7dda}', '\u{7ffc}', '\u{6c37}', '\u{5dfb}', '\u{88c2}', '\u{4ef2}', '\u{8d70}', '\u{6f5c}',
    '\u{899a}', '\u{9192}', '\u{8a60}', '\u{5531}',
];

/// (argument length in decimal digits, command keyword) for control
/// codes 0x00..=0x1f. Argument length 0 means no argument.
pub(super) const CONTROL_CODES: [(u8, &str); 32] = [
    (0, "0x00"),
    (1, "STR"),
    (1, "NUM"),
    (1, "UNUM"),
    (1, "HEX"),
    (1, "CHAR"),
    (1, "ITEM"),
    (1, "SPELL"),
    (1, "ITEMICON"),
    (1, "SPELLICON"),
    (1, "TOOL"),
    (1, "TOOLICON"),
    (0, "CLEAR"),
    (0, "CR"),
    (0, "SMALL"),
    (0, "SCROLL"),
    (0, "PAUSE"),
    (1, "COLOR"),
    (3, "SOUND"),
    (0, "NOP"),
    (0, "LARGE"),
    (2, "SPEED"),
    (2, "WAIT"),
    (0, "CONTINUE"),
    (0, "XSHADOW"),
    (0, "YSHADOW"),
    (1, "ASK"),
    (0, "ASYNC"),
    (0, "0x1c"),
    (0, "0x1d"),
    (0, "0x1e"),
    (0, "0x1f"),
];
