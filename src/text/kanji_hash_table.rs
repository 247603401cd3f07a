//! Generated table: CRC32 of a map's 22-byte Kanji glyph bitmap to the
//! character it renders, for releases that ship per-map Kanji subsets
//! rather than the two global banks. Sorted by hash for binary search.
pub(super) const KANJI_BY_HASH: &[(u32, char)] = &[
    (0x0004e407, '\u{4f4f}'), (0x0040a586, '\u{9f13}'), (0x008bd144, '\u{93a7}'), (0x0121a417, '\u{4e2d}'),
    (0x01ccd1a4, '\u{4ee4}'), (0x0216cca9, '\u{790e}'), (0x02385585, '\u{5c4a}'), (0x023c1223, '\u{914d}'),
    (0x024aabe7, '\u{614e}'), (0x027674a1, '\u{7206}'), (0x02a05095, '\u{7bc7}'), (0x02b82810, '\u{59ac}'),
    (0x02bf5738, '\u{6e96}'), (0x02dac8cc, '\u{897f}'), (0x02e54b3c, '\u{52b4}'), (0x034d30ea, '\u{91cd}'),
    (0x0369ae46, '\u{62e0}'), (0x03855552, '\u{8352}'), (0x040cbd14, '\u{5e7d}'), (0x0430ce9e, '\u{5c01}'),
    (0x0443f560, '\u{534a}'), (0x0481aa67, '\u{96c4}'), (0x04a93452, '\u{8a9e}'), (0x04f8ad58, '\u{970a}'),
    (0x05038f66, '\u{5805}'), (0x05442e2a, '\u{524a}'), (0x0549fe53, '\u{8b00}'), (0x055b5ce2, '\u{5922}'),
    (0x05950820, '\u{8a70}'), (0x059f9e11, '\u{7bc4}'), (0x05ac91e9, '\u{91ce}'), (0x05c33cd6, '\u{5e97}'),
    (0x05e85590, '\u{8aa0}'), (0x0617875a, '\u{6cd5}'), (0x0619a7ed, '\u{5999}'), (0x0655a0c1, '\u{4e03}'),
    (0x065de255, '\u{7a93}'), (0x06bcac11, '\u{7fd2}'), (0x06e62626, '\u{82bd}'), (0x0713f98d, '\u{4e8c}'),
    (0x0717bddf, '\u{5b8f}'), (0x07321911, '\u{6ede}'), (0x0764b621, '\u{5e30}'), (0x07b6d7ec, '\u{9396}'),
    (0x07e140ad, '\u{6b69}'), (0x07e1a1e6, '\u{90fd}'), (0x07f589b5, '\u{8a18}'), (0x0858a548, '\u{51a0}'),
    (0x08822518, '\u{57cb}'), (0x0894b125, '\u{6ec5}'), (0x089f914c, '\u{72ec}'), (0x08c6690e, '\u{6cca}'),
    (0x090bb6a3, '\u{7df4}'), (0x0916b682, '\u{6790}'), (0x091f5aab, '\u{554f}'), (0x096928e3, '\u{7d44}'),
    (0x098c18f2, '\u{5fb3}'), (0x0998fd60, '\u{5f7c}'), (0x09a2f81d, '\u{7406}'), (0x09a93a8d, '\u{6e07}'),
    (0x09c8fcf0, '\u{52c9}'), (0x09edb2f9, '\u{671f}'), (0x09f8867e, '\u{5f31}'), (0x09ff6c1d, '\u{59ff}'),
    (0x0a6622c2, '\u{6d78}'), (0x0ad5c09a, '\u{5341}'), (0x0ae78b1e, '\u{5bf8}'), (0x0b5446d8, '\u{7a76}'),
    (0x0bf3dec2, '\u{7d71}'), (0x0c1405d1, '\u{7e2e}'), (0x0c3984b0, '\u{623f}'), (0x0c3c8bd2, '\u{8ff7}'),
    (0x0c806bb5, '\u{9a12}'), (0x0c86586d, '\u{5bc4}'), (0x0d2845a3, '\u{9811}'), (0x0d3093b5, '\u{5339}'),
    (0x0d3c7ec8, '\u{76db}'), (0x0db9f593, '\u{964d}'), (0x0dd34472, '\u{56f3}'), (0x0e03297a, '\u{65b9}'),
    (0x0e31308b, '\u{6f14}'), (0x0e51fa88, '\u{7384}'), (0x0ef2244b, '\u{5c04}'), (0x0f135d9b, '\u{540c}'),
    (0x0f14795c, '\u{5fae}'), (0x104c4b14, '\u{67c4}'), (0x109187ab, '\u{96c6}'), (0x110e7582, '\u{5b22}'),
    (0x1127e974, '\u{547d}'), (0x11ba4826, '\u{968a}'), (0x11da5e33, '\u{8fce}'), (0x11fc44e1, '\u{8ee2}'),
    (0x1204d59e, '\u{4f2f}'), (0x120df1c4, '\u{6b53}'), (0x1213a7f6, '\u{5bcc}'), (0x12373aa8, '\u{6574}'),
    (0x1248d3d0, '\u{81e8}'), (0x12d0008c, '\u{5438}'), (0x12e16534, '\u{767d}'), (0x12f6f127, '\u{70b9}'),
    (0x1311e686, '\u{5fa1}'), (0x13586d87, '\u{6c42}'), (0x135b4ca6, '\u{623b}'), (0x13965e25, '\u{62b1}'),
    (0x139e92c3, '\u{6398}'), (0x13a03724, '\u{8aa4}'), (0x13d426a2, '\u{65b0}'), (0x14087d76, '\u{6545}'),
    (0x1412332b, '\u{6797}'), (0x14c85377, '\u{8a13}'), (0x150bcb42, '\u{9854}'), (0x15491d83, '\u{51f6}'),
    (0x155910ef, '\u{6570}'), (0x156035d2, '\u{98ef}'), (0x15b86c66, '\u{53ce}'), (0x15ca2237, '\u{7834}'),
    (0x15d45209, '\u{7565}'), (0x165067d5, '\u{9928}'), (0x1660603b, '\u{9a0e}'), (0x16897c12, '\u{6c38}'),
    (0x16a60232, '\u{5d29}'), (0x16aab0fc, '\u{4e86}'), (0x16e508c6, '\u{56fa}'), (0x16f59e05, '\u{8a66}'),
    (0x171a8caf, '\u{8f29}'), (0x1739a61f, '\u{9650}'), (0x1762c681, '\u{904a}'), (0x17badac7, '\u{5200}'),
    (0x17d426a5, '\u{5c06}'), (0x17dcc040, '\u{4e80}'), (0x181ef792, '\u{90ca}'), (0x18351efd, '\u{62b9}'),
    (0x18618a74, '\u{5a18}'), (0x18bf9770, '\u{6b6a}'), (0x1928179d, '\u{673a}'), (0x192a3d52, '\u{4f53}'),
    (0x19d501c2, '\u{5f90}'), (0x19f2c6ee, '\u{8d74}'), (0x19f878c4, '\u{8ecc}'), (0x19f9fdba, '\u{7f36}'),
    (0x1a77c209, '\u{6b7b}'), (0x1a8d74a7, '\u{592a}'), (0x1aa14a13, '\u{5371}'), (0x1ac53bbc, '\u{6ce3}'),
    (0x1ac65897, '\u{6ce8}'), (0x1b005165, '\u{6a5f}'), (0x1b0a6278, '\u{7d39}'), (0x1b10c9a5, '\u{7279}'),
    (0x1b298aec, '\u{5049}'), (0x1b643a6e, '\u{9280}'), (0x1b97e768, '\u{5247}'), (0x1be9536c, '\u{9b45}'),
    (0x1c233a39, '\u{53f2}'), (0x1c6879b4, '\u{798f}'), (0x1cafda57, '\u{57d2}'), (0x1d54c7fa, '\u{4e21}'),
    (0x1d72b957, '\u{666f}'), (0x1d97a6b2, '\u{898f}'), (0x1dac0764, '\u{7532}'), (0x1e25ebad, '\u{5287}'),
    (0x1e371159, '\u{518a}'), (0x1e4efd3a, '\u{5b66}'), (0x1e80fbbd, '\u{9060}'), (0x1f25c76c, '\u{9244}'),
    (0x1f87934e, '\u{5f37}'), (0x1f9fc6bf, '\u{6628}'), (0x1fb18b4a, '\u{6c5d}'), (0x2087125b, '\u{8133}'),
    (0x208ccb48, '\u{79fb}'), (0x20f2729a, '\u{4e9c}'), (0x210e8489, '\u{5cf6}'), (0x21253585, '\u{7d20}'),
    (0x216b22e0, '\u{52a0}'), (0x216da260, '\u{6210}'), (0x21c4b4d6, '\u{969b}'), (0x2204687a, '\u{7948}'),
    (0x227c0829, '\u{4e4f}'), (0x227c553f, '\u{53f7}'), (0x22a017fa, '\u{92ed}'), (0x22c47329, '\u{523b}'),
    (0x22db106a, '\u{8870}'), (0x22db36b0, '\u{4ea1}'), (0x22fb4b39, '\u{6a21}'), (0x2315b336, '\u{59c9}'),
    (0x232ae583, '\u{914b}'), (0x23d6b5dd, '\u{4eee}'), (0x23f33497, '\u{635c}'), (0x2401a54b, '\u{6b32}'),
    (0x2415e9b5, '\u{60dc}'), (0x243b718d, '\u{6355}'), (0x245b41d1, '\u{8003}'), (0x24e70688, '\u{7a81}'),
    (0x2520a949, '\u{53f0}'), (0x2535ff97, '\u{5668}'), (0x254ae645, '\u{6b8a}'), (0x2553e93e, '\u{5c71}'),
    (0x2555fb54, '\u{76df}'), (0x25c7ecdf, '\u{6d45}'), (0x25dd4daa, '\u{6291}'), (0x2603aa1c, '\u{5531}'),
    (0x26157bba, '\u{50d5}'), (0x2681fa57, '\u{4ed5}'), (0x269ad173, '\u{75f4}'), (0x26e34115, '\u{697d}'),
    (0x26e858c7, '\u{7ba1}'), (0x27200cae, '\u{822a}'), (0x272b9f7e, '\u{82e6}'), (0x275ba155, '\u{8fd1}'),
    (0x278a4217, '\u{539a}'), (0x278e0eb9, '\u{5bb9}'), (0x2796c081, '\u{5b57}'), (0x27b085a7, '\u{731b}'),
    (0x27b4d1f2, '\u{5929}'), (0x27cbd264, '\u{9707}'), (0x2816810a, '\u{76ae}'), (0x288cb8f9, '\u{5473}'),
    (0x28cfa472, '\u{6e2c}'), (0x28eb9551, '\u{4f4d}'), (0x291c2c7b, '\u{7d42}'), (0x292886a9, '\u{51b7}'),
    (0x292a8a59, '\u{68b0}'), (0x2946eb93, '\u{541f}'), (0x299f65da, '\u{9031}'), (0x29a438f0, '\u{62e1}'),
    (0x29e05be5, '\u{8d66}'), (0x29e729ff, '\u{592b}'), (0x2a20efd3, '\u{7c97}'), (0x2a23405f, '\u{820e}'),
    (0x2a61b800, '\u{7891}'), (0x2a6cf7d7, '\u{8b77}'), (0x2a7d45e8, '\u{8aac}'), (0x2aca9572, '\u{4e0b}'),
    (0x2adf1bf8, '\u{59b9}'), (0x2b15fe3a, '\u{5927}'), (0x2b700819, '\u{59d4}'), (0x2b7b98ae, '\u{8179}'),
    (0x2c14cc90, '\u{6368}'), (0x2c377dd4, '\u{51b6}'), (0x2c7e5bf1, '\u{5f97}'), (0x2cc9bcd7, '\u{58ca}'),
    (0x2cd15301, '\u{6539}'), (0x2cea9f0b, '\u{5009}'), (0x2d05dde9, '\u{6025}'), (0x2d245666, '\u{5e2f}'),
    (0x2daf7a8b, '\u{904b}'), (0x2dca695d, '\u{676f}'), (0x2ddad0b2, '\u{6b21}'), (0x2e33fa27, '\u{4f3c}'),
    (0x2f24afc2, '\u{5206}'), (0x2f4467f0, '\u{8d70}'), (0x2f53b03b, '\u{9020}'), (0x2f776dad, '\u{5931}'),
    (0x2f9eea6c, '\u{6298}'), (0x2fcf5e85, '\u{5b9d}'), (0x2fefdfba, '\u{5360}'), (0x30092e6d, '\u{7bb1}'),
    (0x30324e2b, '\u{51fa}'), (0x3093698b, '\u{89e6}'), (0x3098f717, '\u{500b}'), (0x30d74747, '\u{53eb}'),
    (0x3113552e, '\u{7267}'), (0x31289ad4, '\u{5546}'), (0x3193b0c6, '\u{5ec3}'), (0x31ac08db, '\u{9810}'),
    (0x32964a08, '\u{5ba4}'), (0x32ae92e5, '\u{8f1d}'), (0x32b4f4ed, '\u{52aa}'), (0x3318d664, '\u{98fc}'),
    (0x33720cbe, '\u{4e57}'), (0x338233d8, '\u{5207}'), (0x33adf80c, '\u{677e}'), (0x34417b14, '\u{7d46}'),
    (0x346a8b22, '\u{5f1f}'), (0x34748f1d, '\u{8987}'), (0x34a23ec4, '\u{7530}'), (0x34f58ae9, '\u{7802}'),
    (0x3508dbf0, '\u{96e8}'), (0x350ab097, '\u{5bae}'), (0x35230e3d, '\u{6975}'), (0x35a6d56c, '\u{8a17}'),
    (0x35a94795, '\u{8449}'), (0x35fdd1a3, '\u{7d14}'), (0x362af680, '\u{8f38}'), (0x36347c05, '\u{82e5}'),
    (0x3685d12a, '\u{682a}'), (0x36918749, '\u{6d6a}'), (0x36c5e84a, '\u{5eab}'), (0x36dea405, '\u{9aea}'),
    (0x372d7ab1, '\u{5076}'), (0x372df1b6, '\u{8c8c}'), (0x374da768, '\u{6bba}'), (0x375bc718, '\u{83ab}'),
    (0x37a0a9b7, '\u{6c88}'), (0x380288bc, '\u{7523}'), (0x3882d953, '\u{5e61}'), (0x38ca320a, '\u{5229}'),
    (0x38d419ce, '\u{5ca9}'), (0x38e55a3d, '\u{958b}'), (0x3927ba0a, '\u{8239}'), (0x396b04a7, '\u{67af}'),
    (0x397f68d5, '\u{6148}'), (0x399655c3, '\u{7236}'), (0x399ccbd1, '\u{6249}'), (0x39ba0ac6, '\u{56e3}'),
    (0x39d75130, '\u{9662}'), (0x3a053caf, '\u{52dd}'), (0x3a595328, '\u{6e08}'), (0x3a8fa223, '\u{6839}'),
    (0x3aa923df, '\u{596a}'), (0x3aaa59d9, '\u{5c3d}'), (0x3ab7622a, '\u{533a}'), (0x3abb6a52, '\u{9ce5}'),
    (0x3ad4b838, '\u{8a34}'), (0x3ae34f2f, '\u{968e}'), (0x3aee008b, '\u{79d2}'), (0x3af93a6c, '\u{7de8}'),
    (0x3b128ad2, '\u{62d3}'), (0x3b398013, '\u{61f2}'), (0x3b6b9d8f, '\u{5dee}'), (0x3b7514c7, '\u{5728}'),
    (0x3b9b8235, '\u{52d8}'), (0x3c0a450a, '\u{53d6}'), (0x3c637695, '\u{5be9}'), (0x3c85e696, '\u{54b2}'),
    (0x3cd87aee, '\u{707d}'), (0x3d10234f, '\u{4e45}'), (0x3d2564cd, '\u{7fbd}'), (0x3d2c31ce, '\u{9271}'),
    (0x3d54e05d, '\u{4fbf}'), (0x3d585dc8, '\u{602a}'), (0x3d5c041c, '\u{770b}'), (0x3d84d41b, '\u{511f}'),
    (0x3dc342d3, '\u{4e95}'), (0x3e2b97ca, '\u{6e56}'), (0x3e40b8fe, '\u{5df1}'), (0x3e62a047, '\u{6674}'),
    (0x3eedebd8, '\u{5168}'), (0x3f0ae4d5, '\u{5e2d}'), (0x3f2d118c, '\u{4e94}'), (0x3f2f1f55, '\u{4ec1}'),
    (0x3f594110, '\u{6c0f}'), (0x3f8a87e0, '\u{7121}'), (0x3fb3e400, '\u{50b7}'), (0x3fbda68d, '\u{63c3}'),
    (0x3fda5d5e, '\u{5ba3}'), (0x4023f975, '\u{5efa}'), (0x406a69e0, '\u{9192}'), (0x40a4c82a, '\u{6cc1}'),
    (0x40c7178a, '\u{8074}'), (0x40cf28ca, '\u{7fa4}'), (0x40f924b8, '\u{8f9b}'), (0x416776c7, '\u{5869}'),
    (0x416e3c12, '\u{7af9}'), (0x4178e848, '\u{6709}'), (0x4196b4c1, '\u{7b11}'), (0x41a6bb28, '\u{7d9a}'),
    (0x41c6d367, '\u{5019}'), (0x4238724d, '\u{6817}'), (0x4245448d, '\u{5305}'), (0x428c4c76, '\u{79c1}'),
    (0x429942c9, '\u{82b1}'), (0x42dcf065, '\u{7c21}'), (0x42de90e3, '\u{5fc5}'), (0x437e4e45, '\u{6e09}'),
    (0x43a9d728, '\u{8cab}'), (0x43ce537d, '\u{63f4}'), (0x442ff962, '\u{8a8c}'), (0x444afad4, '\u{83cc}'),
    (0x446bd791, '\u{7c73}'), (0x44715f2e, '\u{4f11}'), (0x4474280e, '\u{63db}'), (0x44882cad, '\u{5831}'),
    (0x44909590, '\u{81f3}'), (0x44941a39, '\u{5acc}'), (0x44bc1e6a, '\u{5a66}'), (0x44d4392f, '\u{6297}'),
    (0x44dce76f, '\u{8a71}'), (0x4547f95f, '\u{5b85}'), (0x45af05fe, '\u{846c}'), (0x45c40c9e, '\u{9003}'),
    (0x45caf652, '\u{5eb6}'), (0x45cf915b, '\u{81e3}'), (0x45eceef6, '\u{6d88}'), (0x4611b986, '\u{6700}'),
    (0x46231aeb, '\u{4fe1}'), (0x4664d29e, '\u{6563}'), (0x4676f8be, '\u{56db}'), (0x46bea61e, '\u{5c02}'),
    (0x46db032d, '\u{76fe}'), (0x46eb5d53, '\u{6cbf}'), (0x4714e7eb, '\u{6625}'), (0x4781dcd0, '\u{8cea}'),
    (0x47aa70ad, '\u{732e}'), (0x47cc5044, '\u{5177}'), (0x47ce5fb1, '\u{7262}'), (0x47d50e25, '\u{57f7}'),
    (0x4825eb71, '\u{888b}'), (0x487e4713, '\u{6211}'), (0x48c48408, '\u{6bbc}'), (0x48de90b7, '\u{4e89}'),
    (0x49565ac8, '\u{9014}'), (0x49911237, '\u{6483}'), (0x49a28759, '\u{7d1b}'), (0x49c87691, '\u{502b}'),
    (0x49e003ef, '\u{4f0a}'), (0x4a1801c3, '\u{4e16}'), (0x4a220a8a, '\u{6234}'), (0x4a64d466, '\u{8a8d}'),
    (0x4a8befdc, '\u{8b90}'), (0x4aa5330d, '\u{5bbf}'), (0x4ab2ac10, '\u{7dd2}'), (0x4aebe29d, '\u{8a2d}'),
    (0x4b334111, '\u{6e80}'), (0x4b669f95, '\u{6eb6}'), (0x4b742fbc, '\u{982d}'), (0x4bbbccdf, '\u{7d00}'),
    (0x4bdec539, '\u{5404}'), (0x4c204e65, '\u{6daf}'), (0x4c2a1e02, '\u{706b}'), (0x4d2fce5b, '\u{907a}'),
    (0x4d44f76b, '\u{5cf0}'), (0x4d87bf00, '\u{52b9}'), (0x4dc497f3, '\u{6301}'), (0x4ddf03c2, '\u{8b1b}'),
    (0x4e059267, '\u{53cb}'), (0x4e187961, '\u{4f5c}'), (0x4e4a71b2, '\u{5409}'), (0x4e56230a, '\u{4ea4}'),
    (0x4e5fcaec, '\u{8c61}'), (0x4eacab1b, '\u{8336}'), (0x4eba2ed6, '\u{967a}'), (0x4edd8d42, '\u{7d30}'),
    (0x4f47f767, '\u{8b72}'), (0x4f4acf43, '\u{7740}'), (0x4f551dd1, '\u{9a13}'), (0x4f5d1b12, '\u{5b9a}'),
    (0x4f859c54, '\u{6b73}'), (0x4fec32be, '\u{967d}'), (0x4ffb2005, '\u{9375}'), (0x501ebc0d, '\u{610f}'),
    (0x502b49cb, '\u{81ea}'), (0x5048abc5, '\u{4f59}'), (0x50be4f32, '\u{84c4}'), (0x510699f9, '\u{7e70}'),
    (0x511baa13, '\u{5408}'), (0x513e1b9d, '\u{7826}'), (0x514c0e60, '\u{5358}'), (0x518849fc, '\u{8056}'),
    (0x51b34609, '\u{5f81}'), (0x51cf3d18, '\u{524d}'), (0x51e7ea54, '\u{5148}'), (0x52e1b297, '\u{6383}'),
    (0x53260d8b, '\u{8b70}'), (0x53366a4d, '\u{57ce}'), (0x53376231, '\u{8fd4}'), (0x534b45e4, '\u{516c}'),
    (0x534e2341, '\u{6c37}'), (0x53554567, '\u{53e5}'), (0x539d1138, '\u{60a6}'), (0x53ab46e3, '\u{8a72}'),
    (0x53d9269f, '\u{65e7}'), (0x53ff4ff5, '\u{58c7}'), (0x54314f5d, '\u{738b}'), (0x547b9bf8, '\u{6614}'),
    (0x549205e0, '\u{5ea7}'), (0x54dd7fc3, '\u{71c3}'), (0x550ff180, '\u{969c}'), (0x554eab57, '\u{7272}'),
    (0x5560ce8e, '\u{526f}'), (0x5566ce4b, '\u{4ee3}'), (0x55697b05, '\u{9664}'), (0x5588b73a, '\u{88fd}'),
    (0x558de3b3, '\u{4ef0}'), (0x55999cf4, '\u{4ee5}'), (0x559b958d, '\u{754c}'), (0x55c474a9, '\u{77ed}'),
    (0x55fa1b3d, '\u{592e}'), (0x5602c0aa, '\u{9577}'), (0x563de018, '\u{6f5c}'), (0x564a4663, '\u{62f3}'),
    (0x5676bff4, '\u{7d1a}'), (0x568366f7, '\u{6271}'), (0x569b27b4, '\u{6f20}'), (0x56a9a744, '\u{6669}'),
    (0x56b023fe, '\u{7a4d}'), (0x56fc500a, '\u{6e26}'), (0x572c3720, '\u{7d22}'), (0x5788b66e, '\u{63a1}'),
    (0x57c6496d, '\u{6696}'), (0x57c92f47, '\u{9632}'), (0x57d678e8, '\u{6b8b}'), (0x57e79752, '\u{5e7c}'),
    (0x57f4b607, '\u{795e}'), (0x581d6d7e, '\u{55b0}'), (0x583f4507, '\u{5d50}'), (0x58538c01, '\u{9b3c}'),
    (0x58ef04d1, '\u{690d}'), (0x58f2c329, '\u{6f2b}'), (0x594a0c19, '\u{7d99}'), (0x594e632d, '\u{7ae0}'),
    (0x596b7938, '\u{6ca1}'), (0x599195e8, '\u{5175}'), (0x59c7c4fd, '\u{7d61}'), (0x59c9a9b7, '\u{7a2e}'),
    (0x59df934b, '\u{7537}'), (0x59e49d69, '\u{8fbc}'), (0x59e4c6c7, '\u{9806}'), (0x59fd8a57, '\u{5f0f}'),
    (0x5a15e03d, '\u{8a33}'), (0x5a74db96, '\u{5909}'), (0x5b1aae46, '\u{8077}'), (0x5b52c28c, '\u{594f}'),
    (0x5ba28b2c, '\u{6d99}'), (0x5c585cd1, '\u{5b8c}'), (0x5c65ff8c, '\u{54e1}'), (0x5c6fd7d0, '\u{53b3}'),
    (0x5c7128ad, '\u{9001}'), (0x5cb83562, '\u{963b}'), (0x5cd71f43, '\u{96e2}'), (0x5cf03d8c, '\u{533b}'),
    (0x5d022b36, '\u{6255}'), (0x5d1be06f, '\u{75c5}'), (0x5d7aa217, '\u{58eb}'), (0x5d7dbdaa, '\u{7518}'),
    (0x5d93e521, '\u{8fba}'), (0x5d9e2512, '\u{8ab0}'), (0x5d9fc8c5, '\u{5ea6}'), (0x5de1c91d, '\u{5bdf}'),
    (0x5de96cf1, '\u{56f2}'), (0x5e1d6c0d, '\u{6bd2}'), (0x5e2de501, '\u{9678}'), (0x5e2debc2, '\u{9769}'),
    (0x5e61d49d, '\u{5eca}'), (0x5e6f2eed, '\u{8feb}'), (0x5e9b3492, '\u{7d50}'), (0x5ecc2244, '\u{8cac}'),
    (0x5ed56a65, '\u{9580}'), (0x5ee793e7, '\u{4f1d}'), (0x5f5c649e, '\u{5f8c}'), (0x5f93c05b, '\u{76f4}'),
    (0x5fbf86dc, '\u{6280}'), (0x5fdced23, '\u{83ef}'), (0x5fe2a3a5, '\u{5982}'), (0x5fe64f0f, '\u{8033}'),
    (0x6003dffc, '\u{7652}'), (0x6010f487, '\u{7235}'), (0x606d99f2, '\u{5197}'), (0x60716665, '\u{932c}'),
    (0x609b3d38, '\u{57fa}'), (0x60c8c21f, '\u{5996}'), (0x60c99194, '\u{6240}'), (0x60d19a94, '\u{505c}'),
    (0x60d6fb4b, '\u{9670}'), (0x60ee86b7, '\u{7b4b}'), (0x61087856, '\u{72a0}'), (0x61236941, '\u{4f7f}'),
    (0x618026c2, '\u{6e13}'), (0x61baa57e, '\u{73ed}'), (0x61d14300, '\u{7656}'), (0x6238df4e, '\u{696d}'),
    (0x624b2a6b, '\u{666e}'), (0x624caec4, '\u{4f0f}'), (0x628ab57a, '\u{6c5f}'), (0x62a5ea14, '\u{7d0b}'),
    (0x62b70d12, '\u{6b20}'), (0x632e5be9, '\u{6068}'), (0x63f25923, '\u{5bb4}'), (0x641a7d72, '\u{7136}'),
    (0x648e46e7, '\u{584a}'), (0x64cf6bd0, '\u{67d3}'), (0x65187bf4, '\u{8ffd}'), (0x65305dcb, '\u{5fa9}'),
    (0x655aabf1, '\u{96e3}'), (0x659f7cc5, '\u{75c7}'), (0x65a9c839, '\u{8e0a}'), (0x65b2bba7, '\u{7591}'),
    (0x65f51761, '\u{9b42}'), (0x66031b38, '\u{52e4}'), (0x664fcf1e, '\u{906d}'), (0x66538e3d, '\u{65ac}'),
    (0x66700d71, '\u{5eb5}'), (0x66a1c35f, '\u{672c}'), (0x66a76e8b, '\u{7c3f}'), (0x66aeca08, '\u{64cd}'),
    (0x66c75713, '\u{8e8d}'), (0x66cd72fe, '\u{7089}'), (0x66d63a1c, '\u{9055}'), (0x66ed2d5e, '\u{5984}'),
    (0x672876ef, '\u{885d}'), (0x672d3200, '\u{821e}'), (0x678528be, '\u{62d2}'), (0x679b78ca, '\u{673d}'),
    (0x67a615d9, '\u{9f3b}'), (0x68154f6f, '\u{50cf}'), (0x68195500, '\u{7a4f}'), (0x6857edd1, '\u{7e3e}'),
    (0x687dda33, '\u{541b}'), (0x6888fe40, '\u{9ed9}'), (0x68d2cfaf, '\u{4e26}'), (0x690b740c, '\u{5c0f}'),
    (0x690c1d37, '\u{8679}'), (0x69800e2c, '\u{6307}'), (0x69bab1c7, '\u{8eca}'), (0x69c61764, '\u{901f}'),
    (0x69d6c398, '\u{8840}'), (0x6a229a39, '\u{88cf}'), (0x6a69ac2b, '\u{8108}'), (0x6a740f69, '\u{516d}'),
    (0x6ad17af8, '\u{7a3c}'), (0x6af06caf, '\u{72fc}'), (0x6af9cece, '\u{521d}'), (0x6b02e584, '\u{5965}'),
    (0x6b41a6c3, '\u{5f92}'), (0x6b44e830, '\u{95a2}'), (0x6b56d358, '\u{90aa}'), (0x6b6a0f51, '\u{7b49}'),
    (0x6b70c650, '\u{622f}'), (0x6bb35853, '\u{4ed9}'), (0x6bc09d72, '\u{88dc}'), (0x6bff9178, '\u{5230}'),
    (0x6c3be4f2, '\u{97ff}'), (0x6c80be77, '\u{6d25}'), (0x6c8ac459, '\u{5a5a}'), (0x6cd4c9e0, '\u{672a}'),
    (0x6cded06a, '\u{60a9}'), (0x6cf9966a, '\u{4f4e}'), (0x6d7c118d, '\u{77f3}'), (0x6d9abe83, '\u{571f}'),
    (0x6e28ad49, '\u{7d05}'), (0x6e2f889c, '\u{53c9}'), (0x6ed7368a, '\u{6c17}'), (0x6ee71d6e, '\u{57fa}'),
    (0x6eecee36, '\u{5c31}'), (0x6ef4b7d3, '\u{80fd}'), (0x6ff34654, '\u{516b}'), (0x7002e4b2, '\u{8105}'),
    (0x7021a344, '\u{722a}'), (0x705ca43f, '\u{7551}'), (0x70974a75, '\u{570f}'), (0x709f1709, '\u{8b66}'),
    (0x70b8aa30, '\u{5e8f}'), (0x70ebc2c1, '\u{8607}'), (0x710d6b00, '\u{96a0}'), (0x713576b4, '\u{7aaa}'),
    (0x71af2041, '\u{5343}'), (0x71b85b00, '\u{767a}'), (0x71bff0aa, '\u{8170}'), (0x71dc6cd3, '\u{9589}'),
    (0x72005c7f, '\u{6620}'), (0x72145fe7, '\u{7a9f}'), (0x72693550, '\u{66ff}'), (0x7275cfa0, '\u{7d66}'),
    (0x72b7dbd7, '\u{9ed2}'), (0x72c78ca2, '\u{4e0e}'), (0x739df19e, '\u{8c6a}'), (0x73cb0007, '\u{59eb}'),
    (0x73d0b8f3, '\u{585a}'), (0x73dad3f7, '\u{70ba}'), (0x749fb842, '\u{5ba2}'), (0x74a8d809, '\u{7de9}'),
    (0x74c305d2, '\u{653b}'), (0x74ce5c2d, '\u{7642}'), (0x754d7936, '\u{4fb5}'), (0x75b7d548, '\u{5e95}'),
    (0x76079bd0, '\u{5145}'), (0x762e1a50, '\u{92fc}'), (0x7649c0c4, '\u{5c0a}'), (0x765bf3e5, '\u{523a}'),
    (0x76a573b2, '\u{81d3}'), (0x76bdf59c, '\u{7387}'), (0x76dbb9b9, '\u{6cc9}'), (0x7704ab1d, '\u{537f}'),
    (0x770c0aa4, '\u{4ed6}'), (0x7716f468, '\u{4ef6}'), (0x776f754f, '\u{51cd}'), (0x779f6324, '\u{826f}'),
    (0x77b87db2, '\u{63a8}'), (0x7856c720, '\u{86c7}'), (0x785938d7, '\u{5e8a}'), (0x786f07ec, '\u{5f35}'),
    (0x78a6152f, '\u{9023}'), (0x78a8637b, '\u{4eba}'), (0x78ae3d8e, '\u{9cf4}'), (0x79816469, '\u{53bb}'),
    (0x79df9a37, '\u{902e}'), (0x79e75afa, '\u{6442}'), (0x7a012db1, '\u{5800}'), (0x7a0cdfc1, '\u{885b}'),
    (0x7a2bf0bb, '\u{63fa}'), (0x7a3fc39f, '\u{65e5}'), (0x7a5b38fc, '\u{7720}'), (0x7a5d32fd, '\u{5272}'),
    (0x7acaf5b5, '\u{7bed}'), (0x7ae27a9f, '\u{62c5}'), (0x7ae6d619, '\u{6144}'), (0x7b8645e6, '\u{5973}'),
    (0x7b9c82c9, '\u{53c2}'), (0x7bbf7816, '\u{9065}'), (0x7be9f349, '\u{6ce2}'), (0x7c5e8650, '\u{6a39}'),
    (0x7c83a84e, '\u{546a}'), (0x7ca46b99, '\u{6d77}'), (0x7cc8289d, '\u{542b}'), (0x7cd00aa7, '\u{9593}'),
    (0x7cdfff20, '\u{66f2}'), (0x7d1b3ad7, '\u{6551}'), (0x7d67235d, '\u{76ca}'), (0x7d8ecf9c, '\u{5e0c}'),
    (0x7d94a682, '\u{68fa}'), (0x7d9d7468, '\u{99ac}'), (0x7dc2e79f, '\u{5143}'), (0x7de74160, '\u{54c1}'),
    (0x7e0614cb, '\u{990a}'), (0x7e28db0b, '\u{63cf}'), (0x7e2b6042, '\u{8868}'), (0x7e2ba1ad, '\u{6f01}'),
    (0x7e681a85, '\u{60e8}'), (0x7e73467b, '\u{4fca}'), (0x7e9d3fc2, '\u{69d8}'), (0x7ed7b535, '\u{8cde}'),
    (0x7f083f92, '\u{642d}'), (0x7f14e6a4, '\u{661f}'), (0x7f2c3fb3, '\u{8377}'), (0x7f8a60ce, '\u{5099}'),
    (0x7f9c8624, '\u{4e07}'), (0x7fbe2bfb, '\u{8089}'), (0x801df9dc, '\u{5192}'), (0x804874f1, '\u{5f8b}'),
    (0x807afb54, '\u{6d3e}'), (0x80e55938, '\u{7d2b}'), (0x8116f31c, '\u{9069}'), (0x818785c6, '\u{627f}'),
    (0x81dbbc4c, '\u{811a}'), (0x8207574e, '\u{6f6e}'), (0x82477abc, '\u{6c7a}'), (0x827e7e7f, '\u{80cc}'),
    (0x8297c82f, '\u{6311}'), (0x8319da42, '\u{706f}'), (0x837e8f21, '\u{5e73}'), (0x83b7c278, '\u{793c}'),
    (0x83f1ba66, '\u{61f8}'), (0x84112685, '\u{5de1}'), (0x841b08e2, '\u{66f4}'), (0x84215d17, '\u{9234}'),
    (0x848bd887, '\u{50be}'), (0x849ad71a, '\u{9f62}'), (0x849f5d6b, '\u{5727}'), (0x84b6ebde, '\u{6028}'),
    (0x84dafdc8, '\u{5fd9}'), (0x84db00b9, '\u{7b87}'), (0x84e4daa6, '\u{9ad8}'), (0x85400e72, '\u{7cf8}'),
    (0x85df7dab, '\u{6804}'), (0x85ee2f92, '\u{916c}'), (0x8615b07c, '\u{6728}'), (0x861cc27a, '\u{535a}'),
    (0x863241f8, '\u{640d}'), (0x8668007f, '\u{677f}'), (0x866e995b, '\u{9010}'), (0x86eff93a, '\u{5373}'),
    (0x8761e34c, '\u{5320}'), (0x87694454, '\u{8208}'), (0x87848b80, '\u{9000}'), (0x87f4e1a4, '\u{6226}'),
    (0x87f91d31, '\u{7acb}'), (0x8818c4cd, '\u{6d5c}'), (0x881bb053, '\u{7533}'), (0x882cf83a, '\u{793a}'),
    (0x883f4efa, '\u{529f}'), (0x886c4954, '\u{6771}'), (0x88854560, '\u{52ab}'), (0x88a22059, '\u{6bcd}'),
    (0x88b3423d, '\u{5e38}'), (0x88dae28f, '\u{6094}'), (0x893e07b2, '\u{548c}'), (0x89a0c10a, '\u{5317}'),
    (0x8a00d3ee, '\u{52d5}'), (0x8a185c4a, '\u{809d}'), (0x8a704fe9, '\u{5ac9}'), (0x8a73b494, '\u{547c}'),
    (0x8a95c959, '\u{5bdd}'), (0x8aad599f, '\u{793e}'), (0x8ad1a500, '\u{5354}'), (0x8b027c69, '\u{8cb8}'),
    (0x8b293062, '\u{5bc2}'), (0x8b758aae, '\u{5f15}'), (0x8bad3dec, '\u{80b2}'), (0x8bcae185, '\u{4fee}'),
    (0x8bec300a, '\u{5fb4}'), (0x8bf9f393, '\u{5de8}'), (0x8c05044d, '\u{6492}'), (0x8c1df2c9, '\u{5f79}'),
    (0x8c3ed2cf, '\u{5e79}'), (0x8c5f8ec7, '\u{5b5d}'), (0x8c9813a2, '\u{7be4}'), (0x8ca0c50a, '\u{6d3b}'),
    (0x8d44843e, '\u{8af8}'), (0x8d5d6621, '\u{5224}'), (0x8da376b5, '\u{79f0}'), (0x8df22ac3, '\u{65bd}'),
    (0x8e1a7ade, '\u{77ac}'), (0x8e36aab5, '\u{7c92}'), (0x8e4364cc, '\u{6697}'), (0x8e46cf06, '\u{8a3c}'),
    (0x8e6af47b, '\u{8a87}'), (0x8eed74a7, '\u{91cf}'), (0x8f26bff7, '\u{55b6}'), (0x8f6a4b29, '\u{5fdc}'),
    (0x8f9a75c7, '\u{822c}'), (0x900b319c, '\u{8eab}'), (0x90122902, '\u{5370}'), (0x9027842e, '\u{8853}'),
    (0x9031a7b8, '\u{88d5}'), (0x903ebf58, '\u{97f3}'), (0x90512948, '\u{7363}'), (0x9080022b, '\u{82f1}'),
    (0x90827f65, '\u{67b6}'), (0x909785db, '\u{58f2}'), (0x909a7ee3, '\u{6749}'), (0x90a44d91, '\u{5504}'),
    (0x90c64f69, '\u{9152}'), (0x91032405, '\u{5225}'), (0x914a9d5f, '\u{9084}'), (0x91675764, '\u{85e4}'),
    (0x917f18a2, '\u{8fb1}'), (0x91d37b8c, '\u{5b87}'), (0x91f70191, '\u{72ed}'), (0x922b4891, '\u{98a8}'),
    (0x9235e51b, '\u{6212}'), (0x92753ca6, '\u{5351}'), (0x92acf13d, '\u{6756}'), (0x92d69b42, '\u{767b}'),
    (0x92ef2698, '\u{8efd}'), (0x9323fd34, '\u{7e41}'), (0x934467c6, '\u{4e92}'), (0x9384f1be, '\u{6f02}'),
    (0x939e135a, '\u{62dd}'), (0x93a7aa60, '\u{62db}'), (0x93dad5b5, '\u{6de1}'), (0x9406026f, '\u{9813}'),
    (0x940833ef, '\u{5100}'), (0x94b47e71, '\u{53a8}'), (0x94b6e13e, '\u{65cf}'), (0x94d3f62b, '\u{72ac}'),
    (0x94d5a7fa, '\u{5fd8}'), (0x94e7c71e, '\u{90e8}'), (0x950b468f, '\u{6559}'), (0x95484ef1, '\u{5410}'),
    (0x95c99644, '\u{63d0}'), (0x95cb9cab, '\u{53d7}'), (0x964055b1, '\u{7126}'), (0x9653207e, '\u{6bb5}'),
    (0x9655e196, '\u{88c2}'), (0x9672ebab, '\u{611b}'), (0x96bea4ef, '\u{99c6}'), (0x96ea5d60, '\u{8cbb}'),
    (0x9727284b, '\u{638c}'), (0x977fbd41, '\u{8a00}'), (0x97b3ad05, '\u{656c}'), (0x97d539b7, '\u{5de6}'),
    (0x97d641ec, '\u{76d7}'), (0x97decb03, '\u{6848}'), (0x980b501c, '\u{5815}'), (0x981f0c3e, '\u{5fb9}'),
    (0x98b6487a, '\u{9858}'), (0x98b980ee, '\u{7dd1}'), (0x98e4a4ec, '\u{9032}'), (0x9940421f, '\u{5974}'),
    (0x9941ee83, '\u{8cd1}'), (0x99944d94, '\u{4e88}'), (0x999e61ed, '\u{675f}'), (0x99b3891a, '\u{8a08}'),
    (0x99dfba0c, '\u{5439}'), (0x9a0d7cec, '\u{708e}'), (0x9a2b1585, '\u{5c45}'), (0x9a34012d, '\u{59bb}'),
    (0x9a4ad779, '\u{9583}'), (0x9ac4c82a, '\u{5211}'), (0x9adba9af, '\u{6708}'), (0x9b3bb5b2, '\u{89a7}'),
    (0x9b3cc8d0, '\u{512a}'), (0x9b566f96, '\u{7ce7}'), (0x9b763fc7, '\u{984c}'), (0x9b8ef002, '\u{5f71}'),
    (0x9bb1d467, '\u{9665}'), (0x9bb65fc3, '\u{5eb7}'), (0x9bdf159b, '\u{5fe0}'), (0x9bf90db3, '\u{540d}'),
    (0x9c493609, '\u{8c46}'), (0x9c910c1f, '\u{9053}'), (0x9d184ef1, '\u{8cc7}'), (0x9d6aa281, '\u{78ba}'),
    (0x9d965c1a, '\u{5916}'), (0x9e09f33f, '\u{795d}'), (0x9e0a567a, '\u{8a0e}'), (0x9e37d02e, '\u{80a9}'),
    (0x9e55b5a6, '\u{9aa8}'), (0x9e617fb5, '\u{66f8}'), (0x9e657375, '\u{9694}'), (0x9ebd177b, '\u{53ca}'),
    (0x9eca8e89, '\u{7684}'), (0x9ecd4ade, '\u{7c89}'), (0x9f69c1d5, '\u{4fdd}'), (0x9f6dc7cb, '\u{514d}'),
    (0x9f8c464d, '\u{5c0e}'), (0x9ff1defc, '\u{53cd}'), (0xa0393d04, '\u{6027}'), (0xa03a4b24, '\u{7528}'),
    (0xa057ef9d, '\u{7de0}'), (0xa080b132, '\u{767e}'), (0xa0a5494d, '\u{756a}'), (0xa12beb6d, '\u{6d44}'),
    (0xa1472660, '\u{96cc}'), (0xa15ce83a, '\u{753a}'), (0xa182a578, '\u{7d19}'), (0xa25d9adb, '\u{707c}'),
    (0xa322e5af, '\u{5de5}'), (0xa34913ca, '\u{5f62}'), (0xa3b996a2, '\u{6751}'), (0xa3f29830, '\u{6065}'),
    (0xa4cc49da, '\u{8ca7}'), (0xa4db3e18, '\u{8a93}'), (0xa580cfdc, '\u{8a6e}'), (0xa58498df, '\u{9177}'),
    (0xa5ddabdc, '\u{60b2}'), (0xa68995b3, '\u{6e9c}'), (0xa6caf850, '\u{5b99}'), (0xa6dd850f, '\u{8d85}'),
    (0xa6ea3945, '\u{52a3}'), (0xa7025944, '\u{529b}'), (0xa7084840, '\u{8edf}'), (0xa70b37f4, '\u{96ea}'),
    (0xa724b72c, '\u{7dda}'), (0xa73589b4, '\u{8155}'), (0xa79a60cd, '\u{5e72}'), (0xa81706da, '\u{8f2a}'),
    (0xa8aad0d9, '\u{8c37}'), (0xa8d6af8a, '\u{604b}'), (0xa900496c, '\u{5b58}'), (0xa91653c2, '\u{578b}'),
    (0xa9275ad3, '\u{5dfb}'), (0xa94db376, '\u{52b1}'), (0xa961b909, '\u{624b}'), (0xa9d3a61e, '\u{8a73}'),
    (0xa9fdd163, '\u{901a}'), (0xaa297abf, '\u{805e}'), (0xaa78cfc2, '\u{75ab}'), (0xaa8d5246, '\u{8986}'),
    (0xaa9aba87, '\u{9663}'), (0xaaa6eec3, '\u{5fc3}'), (0xaaaa7f95, '\u{5937}'), (0xaab91dc8, '\u{6016}'),
    (0xaaba1b11, '\u{5c3e}'), (0xabc9fce5, '\u{6e0b}'), (0xabf51dd1, '\u{62b5}'), (0xabf7c3df, '\u{58f0}'),
    (0xac2398dc, '\u{6df7}'), (0xac31e1dc, '\u{56fd}'), (0xac4f10dc, '\u{9045}'), (0xac5d8541, '\u{68c4}'),
    (0xac6bd2fb, '\u{7403}'), (0xac7a9355, '\u{6b4c}'), (0xacb06d58, '\u{5deb}'), (0xacd197fa, '\u{975e}'),
    (0xad358f9a, '\u{60a0}'), (0xad44d16f, '\u{5fd7}'), (0xad63f7ed, '\u{8a89}'), (0xad704347, '\u{773c}'),
    (0xadc6224d, '\u{639b}'), (0xade31123, '\u{90ce}'), (0xae10163a, '\u{93ae}'), (0xae2035f5, '\u{539f}'),
    (0xae3cc810, '\u{5584}'), (0xae91c38f, '\u{7d76}'), (0xaea082db, '\u{8da3}'), (0xaea58bba, '\u{6575}'),
    (0xaef933ef, '\u{63b2}'), (0xaefe9539, '\u{864e}'), (0xaf0c0561, '\u{6613}'), (0xaf391da7, '\u{6bd4}'),
    (0xaf40e336, '\u{629e}'), (0xaf49b33b, '\u{7d4c}'), (0xaf503715, '\u{9054}'), (0xaf8f0a53, '\u{53f8}'),
    (0xafa84df7, '\u{5c5e}'), (0xafc77d8e, '\u{8907}'), (0xb001f1c8, '\u{5217}'), (0xb025e410, '\u{8a55}'),
    (0xb03c89cf, '\u{9996}'), (0xb05c7655, '\u{671d}'), (0xb05fafdb, '\u{5bfe}'), (0xb0dfce0d, '\u{50ac}'),
    (0xb1762a55, '\u{683c}'), (0xb1ca443c, '\u{90f7}'), (0xb2319f7c, '\u{904e}'), (0xb2338e14, '\u{6821}'),
    (0xb237ce1f, '\u{6c5a}'), (0xb2889c83, '\u{5730}'), (0xb297d0f9, '\u{6b63}'), (0xb2b59f0e, '\u{5883}'),
    (0xb2d1182f, '\u{7e04}'), (0xb2ddf8e5, '\u{8ff0}'), (0xb2f2841a, '\u{91cc}'), (0xb2f64dc5, '\u{7372}'),
    (0xb2f8f8b2, '\u{7269}'), (0xb323b917, '\u{6162}'), (0xb334aa2c, '\u{884c}'), (0xb34fb0fa, '\u{643a}'),
    (0xb3a3f6b3, '\u{5de3}'), (0xb3b14d3b, '\u{9b54}'), (0xb3e0dc73, '\u{6388}'), (0xb43dfe28, '\u{67a0}'),
    (0xb4ac13f0, '\u{4e0a}'), (0xb4b80245, '\u{54f2}'), (0xb560c04c, '\u{5e2b}'), (0xb57e9407, '\u{9802}'),
    (0xb5b85b6f, '\u{5186}'), (0xb5d641a5, '\u{81f4}'), (0xb5ded380, '\u{4ec7}'), (0xb62ef02b, '\u{7259}'),
    (0xb646ba10, '\u{5e33}'), (0xb70c2bda, '\u{6750}'), (0xb70d517c, '\u{6607}'), (0xb7717af5, '\u{606f}'),
    (0xb792c712, '\u{7fa9}'), (0xb7b6f4c3, '\u{500d}'), (0xb7c93216, '\u{6c11}'), (0xb7d3089e, '\u{52f2}'),
    (0xb7dda09e, '\u{663c}'), (0xb7f87984, '\u{589c}'), (0xb87e8bbc, '\u{5b89}'), (0xb8a850ef, '\u{518d}'),
    (0xb9056322, '\u{4e00}'), (0xb90c251f, '\u{4e5f}'), (0xb993f1b8, '\u{5357}'), (0xb9a15e40, '\u{6599}'),
    (0xb9b5035e, '\u{6676}'), (0xb9bbfb40, '\u{6c34}'), (0xb9c7dafb, '\u{96f0}'), (0xb9ea56d9, '\u{89d2}'),
    (0xba1536a7, '\u{5e74}'), (0xba241fa0, '\u{6b96}'), (0xba298bb1, '\u{8ecd}'), (0xba3234ae, '\u{7763}'),
    (0xba5406fd, '\u{8010}'), (0xba624ecb, '\u{7344}'), (0xbb31bc79, '\u{5c64}'), (0xbb4eb845, '\u{4f8b}'),
    (0xbb6e78af, '\u{6e90}'), (0xbb91a838, '\u{4f38}'), (0xbb9c7f52, '\u{5171}'), (0xbb9ca2c8, '\u{5897}'),
    (0xbbcf9ebc, '\u{8b58}'), (0xbbe73874, '\u{679c}'), (0xbc319840, '\u{7247}'), (0xbcfb8f40, '\u{984d}'),
    (0xbd2c986b, '\u{713c}'), (0xbd4aa3a8, '\u{7fd4}'), (0xbd54ccfa, '\u{591c}'), (0xbe290ede, '\u{7d0d}'),
    (0xbe5b27ed, '\u{8b0e}'), (0xbe6e184e, '\u{932f}'), (0xbe7a57e0, '\u{76e3}'), (0xbeafe572, '\u{66c7}'),
    (0xbedd481c, '\u{6b6f}'), (0xbf487c06, '\u{4fc2}'), (0xbfba90bf, '\u{8a69}'), (0xc0115be3, '\u{771f}'),
    (0xc040e8a2, '\u{5ddd}'), (0xc05b1594, '\u{6fc0}'), (0xc0720d7c, '\u{65cb}'), (0xc08e3fbb, '\u{6367}'),
    (0xc0a89425, '\u{7a0b}'), (0xc0fc5464, '\u{72b6}'), (0xc10a4ae2, '\u{7bc0}'), (0xc12278d8, '\u{629c}'),
    (0xc207350c, '\u{702c}'), (0xc20aa75d, '\u{7cf8}'), (0xc21f55c1, '\u{504f}'), (0xc233ed5c, '\u{65c5}'),
    (0xc2781251, '\u{753b}'), (0xc2c71ce3, '\u{5ef6}'), (0xc2fb7862, '\u{5236}'), (0xc3744385, '\u{8aad}'),
    (0xc3748d04, '\u{5203}'), (0xc405f098, '\u{5074}'), (0xc44870f5, '\u{5c3b}'), (0xc46c1342, '\u{552f}'),
    (0xc4a4455d, '\u{6557}'), (0xc4bc833e, '\u{5091}'), (0xc5448dc7, '\u{7531}'), (0xc59ad332, '\u{8cb7}'),
    (0xc5ffaf24, '\u{7c8b}'), (0xc62ca35c, '\u{8001}'), (0xc6c78491, '\u{77e5}'), (0xc6d64e18, '\u{9332}'),
    (0xc6ef74ee, '\u{60a3}'), (0xc6f5b2df, '\u{91d1}'), (0xc6f8b679, '\u{8349}'), (0xc7101547, '\u{9078}'),
    (0xc74bc7cd, '\u{5e78}'), (0xc75914c0, '\u{4efb}'), (0xc7809eb5, '\u{63ee}'), (0xc7d7bc88, '\u{5f66}'),
    (0xc7fd14b9, '\u{6b62}'), (0xc8134c24, '\u{5c40}'), (0xc8165e58, '\u{8def}'), (0xc852685f, '\u{5065}'),
    (0xc8b42418, '\u{6319}'), (0xc8e6d134, '\u{6b74}'), (0xc94088e5, '\u{5275}'), (0xca37cfac, '\u{8abf}'),
    (0xca90aa14, '\u{6d1e}'), (0xcac368a6, '\u{7389}'), (0xcb49a1c2, '\u{98df}'), (0xcb5c9440, '\u{80f8}'),
    (0xcb6972db, '\u{81a8}'), (0xcb8127f9, '\u{5e02}'), (0xcbd9fb48, '\u{507d}'), (0xcbe35f00, '\u{75be}'),
    (0xcc6a3002, '\u{68ee}'), (0xcc7f6744, '\u{5e7b}'), (0xcc8b4f7e, '\u{8cc3}'), (0xcc9b64ed, '\u{98f2}'),
    (0xcca05bb5, '\u{85ac}'), (0xccb13f61, '\u{671b}'), (0xccc2855e, '\u{9006}'), (0xccdccec2, '\u{63a7}'),
    (0xcd16afe2, '\u{60c5}'), (0xcd197778, '\u{52a9}'), (0xcd3a138c, '\u{89b3}'), (0xcd7806a7, '\u{8d08}'),
    (0xcdb8421f, '\u{5263}'), (0xcdc82d53, '\u{83ca}'), (0xcdd8cd35, '\u{5b98}'), (0xcdf5c2c7, '\u{517c}'),
    (0xce013709, '\u{6295}'), (0xce2741f3, '\u{53f3}'), (0xce3f0b41, '\u{920d}'), (0xce5577ed, '\u{70c8}'),
    (0xce9a3e80, '\u{5feb}'), (0xcf175d9d, '\u{9154}'), (0xcf20a85a, '\u{660e}'), (0xcf7769fd, '\u{751f}'),
    (0xcf83fb70, '\u{5b9f}'), (0xd0079142, '\u{907f}'), (0xd01fa05e, '\u{559c}'), (0xd024944d, '\u{9818}'),
    (0xd04b447a, '\u{4f1a}'), (0xd0eb1cbe, '\u{8db3}'), (0xd0eeeb1d, '\u{679a}'), (0xd110b6e8, '\u{7167}'),
    (0xd1385e2a, '\u{96f7}'), (0xd14ea632, '\u{8972}'), (0xd1908202, '\u{61b6}'), (0xd1dac94c, '\u{5712}'),
    (0xd1dd4785, '\u{51e6}'), (0xd1ddfc91, '\u{672d}'), (0xd1fa0b93, '\u{53d9}'), (0xd22292d0, '\u{60d1}'),
    (0xd236c277, '\u{72e9}'), (0xd271ffc9, '\u{6d6e}'), (0xd2dce1e0, '\u{8de1}'), (0xd2fcfe7e, '\u{7dcf}'),
    (0xd324983e, '\u{7b2c}'), (0xd36a3c99, '\u{9042}'), (0xd383436b, '\u{77b3}'), (0xd390fe73, '\u{4ffa}'),
    (0xd3de864e, '\u{6bbf}'), (0xd3df7029, '\u{5f93}'), (0xd45d0f1d, '\u{8ddd}'), (0xd467c029, '\u{609f}'),
    (0xd4adf928, '\u{652f}'), (0xd4c385b0, '\u{89aa}'), (0xd4c9270f, '\u{5947}'), (0xd4dd9214, '\u{8c4a}'),
    (0xd5062f1b, '\u{501f}'), (0xd51bd7f1, '\u{4e3b}'), (0xd526325a, '\u{9762}'), (0xd5448d7c, '\u{7570}'),
    (0xd5528a34, '\u{6e21}'), (0xd59436e1, '\u{5199}'), (0xd5a76a33, '\u{7248}'), (0xd5e6fb16, '\u{8981}'),
    (0xd610c1dc, '\u{8a95}'), (0xd63baec5, '\u{6155}'), (0xd67b9947, '\u{8d64}'), (0xd69e0cfb, '\u{5bc6}'),
    (0xd763c610, '\u{7559}'), (0xd7b21846, '\u{8ac7}'), (0xd7bc6ac7, '\u{52e2}'), (0xd7e2fc62, '\u{8131}'),
    (0xd7f961b1, '\u{5a92}'), (0xd7ffc4d0, '\u{88ab}'), (0xd814c60e, '\u{7832}'), (0xd8298a4e, '\u{73cd}'),
    (0xd83d99c4, '\u{4e0d}'), (0xd844eb5d, '\u{80de}'), (0xd8692cd1, '\u{9752}'), (0xd88fb9c0, '\u{53e9}'),
    (0xd8ec66dc, '\u{7f6a}'), (0xd91b2c53, '\u{59a8}'), (0xd956bdda, '\u{60f3}'), (0xd9abc4df, '\u{7d75}'),
    (0xd9e34ab9, '\u{69cd}'), (0xda4d30ec, '\u{5854}'), (0xda639979, '\u{8a2a}'), (0xda9b3625, '\u{63a5}'),
    (0xdb26df7f, '\u{6587}'), (0xdb2c9450, '\u{8b1d}'), (0xdb5947f1, '\u{5b64}'), (0xdb80fd98, '\u{5411}'),
    (0xdbab7c1a, '\u{899a}'), (0xdbed7436, '\u{62fe}'), (0xdbf2e17d, '\u{8a5e}'), (0xdc46e35c, '\u{79c0}'),
    (0xdceb6a72, '\u{96f2}'), (0xdcef4e28, '\u{8996}'), (0xdd70cdb8, '\u{7fcc}'), (0xdd808361, '\u{5352}'),
    (0xde1ed738, '\u{865a}'), (0xde5b25c7, '\u{611a}'), (0xde79b771, '\u{95c7}'), (0xde8ce6ca, '\u{4ecb}'),
    (0xdec15e9f, '\u{6b66}'), (0xdeef44ea, '\u{5834}'), (0xdf82e67e, '\u{898b}'), (0xdfbeb5f4, '\u{672b}'),
    (0xdfec7614, '\u{71b1}'), (0xdff47b8a, '\u{5150}'), (0xe0016675, '\u{5cb8}'), (0xe00d8245, '\u{53e4}'),
    (0xe06c34a5, '\u{5f53}'), (0xe06c66c0, '\u{5149}'), (0xe07ad703, '\u{52d9}'), (0xe08202a0, '\u{601d}'),
    (0xe0839df9, '\u{5165}'), (0xe0b626f7, '\u{591a}'), (0xe1059c6c, '\u{614b}'), (0xe140cd08, '\u{653e}'),
    (0xe17ae48c, '\u{7cbe}'), (0xe1801129, '\u{65ad}'), (0xe1fbc123, '\u{59cb}'), (0xe24fed73, '\u{5fcc}'),
    (0xe29ec902, '\u{7f8e}'), (0xe2e06fb6, '\u{7e54}'), (0xe2e4436a, '\u{7f6e}'), (0xe30f1098, '\u{965b}'),
    (0xe32679ba, '\u{7aef}'), (0xe355a2d5, '\u{62bc}'), (0xe399f0e3, '\u{99c4}'), (0xe3d2fda0, '\u{82b8}'),
    (0xe3ea458c, '\u{65e9}'), (0xe422e767, '\u{7ffc}'), (0xe432e6de, '\u{6642}'), (0xe4540430, '\u{6458}'),
    (0xe456ff00, '\u{8cca}'), (0xe516fbe9, '\u{9b5a}'), (0xe538447c, '\u{9ab8}'), (0xe56c5706, '\u{8f09}'),
    (0xe59bbf63, '\u{58c1}'), (0xe5e2915a, '\u{6df1}'), (0xe5f06a66, '\u{98db}'), (0xe6066355, '\u{68d2}'),
    (0xe6329c3c, '\u{56de}'), (0xe6476ac2, '\u{544a}'), (0xe649127b, '\u{8272}'), (0xe656371a, '\u{6c96}'),
    (0xe6a27c92, '\u{5f3e}'), (0xe6a6a622, '\u{6253}'), (0xe6b3b7f5, '\u{73fe}'), (0xe6d3352e, '\u{5024}'),
    (0xe6fec4b1, '\u{98fe}'), (0xe70b7193, '\u{9ce9}'), (0xe7165eca, '\u{50cd}'), (0xe731d424, '\u{6765}'),
    (0xe740236a, '\u{63e1}'), (0xe7474a3b, '\u{9759}'), (0xe79f6c2f, '\u{611f}'), (0xe819ba0a, '\u{4e71}'),
    (0xe81c3627, '\u{79d8}'), (0xe83558fb, '\u{5f70}'), (0xe8410d77, '\u{985e}'), (0xe8529a6f, '\u{7e26}'),
    (0xe86378cb, '\u{6cbb}'), (0xe86b8771, '\u{5468}'), (0xe8a42809, '\u{5012}'), (0xe8b06efb, '\u{7345}'),
    (0xe8c5aaef, '\u{6df5}'), (0xe8d8278d, '\u{8857}'), (0xe8dc1bc2, '\u{5fcd}'), (0xe8e057f5, '\u{670d}'),
    (0xe9102709, '\u{9805}'), (0xe9839103, '\u{72af}'), (0xe987cd30, '\u{5c4b}'), (0xea074080, '\u{8ce2}'),
    (0xea399cb3, '\u{8a31}'), (0xea74a7c5, '\u{56f0}'), (0xeab96d2a, '\u{7a7a}'), (0xeacd6654, '\u{4ed8}'),
    (0xeb046dcc, '\u{8a60}'), (0xeb6f6d46, '\u{8a98}'), (0xeb70f246, '\u{6ecb}'), (0xebcc1e6a, '\u{92ad}'),
    (0xec0ecee4, '\u{6e1b}'), (0xec3e7a85, '\u{597d}'), (0xec4f13dd, '\u{89e3}'), (0xec625fd9, '\u{66ae}'),
    (0xec829e76, '\u{7b56}'), (0xec95f42c, '\u{9047}'), (0xedc1013c, '\u{7b54}'), (0xedc335eb, '\u{5b6b}'),
    (0xee025c46, '\u{6d41}'), (0xee1a450a, '\u{4e8b}'), (0xee1e2342, '\u{57df}'), (0xee1f2d61, '\u{4e09}'),
    (0xee343277, '\u{5316}'), (0xee7dc55f, '\u{58fa}'), (0xee8d99d7, '\u{5b50}'), (0xeec7ad68, '\u{88c5}'),
    (0xef63c309, '\u{7e01}'), (0xef74d676, '\u{5f18}'), (0xef791121, '\u{5e83}'), (0xefb17db5, '\u{6a2a}'),
    (0xeff7fc37, '\u{5802}'), (0xf0526ea4, '\u{5e03}'), (0xf05fddac, '\u{52c7}'), (0xf075c4cd, '\u{796d}'),
    (0xf0cfb4ba, '\u{6e2f}'), (0xf0eb3ec1, '\u{56e0}'), (0xf1165983, '\u{5374}'), (0xf12ed97b, '\u{96fb}'),
    (0xf14ace6c, '\u{4f34}'), (0xf1580148, '\u{5951}'), (0xf16a5759, '\u{7a74}'), (0xf197043b, '\u{7dad}'),
    (0xf1a64c7c, '\u{4eca}'), (0xf22a5b8d, '\u{6bdb}'), (0xf23efee0, '\u{4fa1}'), (0xf24067c5, '\u{6a29}'),
    (0xf26564bb, '\u{585e}'), (0xf26cdfd0, '\u{8005}'), (0xf2913265, '\u{6012}'), (0xf29c4531, '\u{7adc}'),
    (0xf2a5d6e6, '\u{5c11}'), (0xf2ba8a88, '\u{67d4}'), (0xf2c8d58f, '\u{5ff5}'), (0xf32080f2, '\u{83dc}'),
    (0xf39c6701, '\u{5d07}'), (0xf3c2667c, '\u{7686}'), (0xf409674e, '\u{6109}'), (0xf421da99, '\u{76f8}'),
    (0xf464e777, '\u{5bdb}'), (0xf496504b, '\u{9803}'), (0xf4d7d543, '\u{4f9b}'), (0xf4e87895, '\u{4f55}'),
    (0xf4f1bdea, '\u{52df}'), (0xf4f9b232, '\u{7956}'), (0xf51a988a, '\u{7bc9}'), (0xf51d346b, '\u{5144}'),
    (0xf5287995, '\u{7d04}'), (0xf52ae1a0, '\u{53ef}'), (0xf5357e9a, '\u{77e2}'), (0xf53a83fd, '\u{5e45}'),
    (0xf54d9d71, '\u{76e4}'), (0xf586172a, '\u{866b}'), (0xf5976a90, '\u{7814}'), (0xf5b7c4dc, '\u{6069}'),
    (0xf5ba7986, '\u{6577}'), (0xf6173fa4, '\u{5ac1}'), (0xf6285672, '\u{5426}'), (0xf660ff3e, '\u{95d8}'),
    (0xf69e4363, '\u{8ad6}'), (0xf69eaee6, '\u{632f}'), (0xf6a39c1b, '\u{7701}'), (0xf6b58a6a, '\u{7981}'),
    (0xf701609e, '\u{653f}'), (0xf70e68f6, '\u{5bd2}'), (0xf7116934, '\u{6a19}'), (0xf7347ad5, '\u{8ca1}'),
    (0xf78004ec, '\u{7e1b}'), (0xf7c8c646, '\u{6075}'), (0xf7e400a9, '\u{96d1}'), (0xf81ca800, '\u{5606}'),
    (0xf85519e9, '\u{75b2}'), (0xf866b22b, '\u{5c55}'), (0xf8904976, '\u{935b}'), (0xf9200405, '\u{8ca0}'),
    (0xf9a8bc46, '\u{7b1b}'), (0xf9f51489, '\u{63a2}'), (0xf9fc845a, '\u{5bb3}'), (0xfa128ff5, '\u{8d77}'),
    (0xfa1dc499, '\u{67f1}'), (0xfa889186, '\u{76ee}'), (0xfa9e58cb, '\u{5185}'), (0xfaa16130, '\u{5ce1}'),
    (0xfaae7f3c, '\u{4f9d}'), (0xfab5699e, '\u{7f70}'), (0xfabad410, '\u{8e0f}'), (0xfaea19a0, '\u{624d}'),
    (0xfaf259fa, '\u{6050}'), (0xfb0521f5, '\u{5f85}'), (0xfb76e252, '\u{8df3}'), (0xfb984160, '\u{60aa}'),
    (0xfbc75443, '\u{53e3}'), (0xfbc8313c, '\u{74b0}'), (0xfc0b166e, '\u{67fb}'), (0xfc101580, '\u{8096}'),
    (0xfc13685c, '\u{4e08}'), (0xfc20ba11, '\u{5ead}'), (0xfc4a036f, '\u{6a4b}'), (0xfc69c6ba, '\u{5a01}'),
    (0xfc8066df, '\u{8584}'), (0xfc948b8a, '\u{4ef2}'), (0xfc9757a5, '\u{6238}'), (0xfcb14e34, '\u{66b4}'),
    (0xfcd610fc, '\u{5c48}'), (0xfd343808, '\u{691c}'), (0xfd48c0b2, '\u{8cb4}'), (0xfd5a2c11, '\u{5bb6}'),
    (0xfd7a6767, '\u{9178}'), (0xfdc1749a, '\u{8d8a}'), (0xfde73278, '\u{7815}'), (0xfde7a419, '\u{75db}'),
    (0xfe3f9189, '\u{5b88}'), (0xfe619e63, '\u{6bce}'), (0xfeed4f99, '\u{983c}'), (0xff6a0f30, '\u{79e9}'),
    (0xff7e8a44, '\u{53f1}'), (0xffb8ebec, '\u{843d}'), (0xffe98fb1, '\u{53cc}'),
];
