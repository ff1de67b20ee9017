//! VerusHash kernel constants.
//!
//! The permutation draws everything from two fixed tables: the Haraka512
//! round-constant table and the eight 64-bit sponge initialization words.
//! Both are consensus data: changing a single bit changes every digest.

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Input block absorbed per permutation call (in bytes).
pub const BLOCK_SIZE: usize = 64;

/// Digest size in bytes (256-bit output).
pub const DIGEST_SIZE: usize = 32;

/// Number of diffusion rounds in the permutation.
pub const ROUNDS: usize = 8;

/// Byte offset of the 64-bit bit-length field in the closing block.
pub const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

/// Padding marker appended after the last message byte.
pub const PAD_MARKER: u8 = 0x80;

// =============================================================================
// ROUND CONSTANTS
// =============================================================================

/// Haraka512 round-constant table: eight 128-bit constants, each stored as
/// four 32-bit words in little-endian lane order.
pub const HARAKA_RC: [[u32; 4]; 8] = [
    [0xb670_7e78, 0x417f_1b07, 0x2d34_5e69, 0x0e05_ae8c],
    [0x78a9_3ab4, 0xfd7c_8b85, 0x5c12_a4a8, 0xc6f7_e2f3],
    [0xe1a7_c3d1, 0x924f_ddb2, 0x4c9a_4f5e, 0x8c5f_87ad],
    [0x23a8_c9be, 0x85f2_a641, 0x7a94_c28e, 0xf43b_8f5b],
    [0x41c8_d956, 0xf83c_6e2b, 0x9a7d_e8f1, 0x5c18_b2d4],
    [0x73e1_a4c2, 0xb5f8_d629, 0x8e4a_7c5f, 0x2f9d_b3ac],
    [0xa5b9_e1c7, 0x1f8c_4d26, 0xe7d1_5a3b, 0x6b2c_8f94],
    [0x8e1d_756c, 0xf2b4_c9a5, 0x3d7a_61e8, 0x9c5f_2b84],
];

/// Word schedule for the diffusion rounds: the first eight 32-bit words of
/// the table, indexed by `word mod 8`.
pub const ROUND_WORDS: [u32; 8] = [
    HARAKA_RC[0][0],
    HARAKA_RC[0][1],
    HARAKA_RC[0][2],
    HARAKA_RC[0][3],
    HARAKA_RC[1][0],
    HARAKA_RC[1][1],
    HARAKA_RC[1][2],
    HARAKA_RC[1][3],
];

// =============================================================================
// SPONGE INITIALIZATION
// =============================================================================

/// Initial 512-bit sponge state: eight 64-bit words, encoded little-endian
/// into the state buffer. Identical for every computation; not secret and
/// not caller-configurable.
pub const IV: [u64; 8] = [
    0xbb67_ae85_84ca_a73b,
    0x6a09_e667_f3bc_c908,
    0xa54f_f53a_5f1d_36f1,
    0x3c6e_f372_fe94_f82b,
    0x9b05_688c_2b3e_6c1f,
    0x510e_527f_ade6_82d1,
    0x5be0_cd19_137e_2179,
    0x1f83_d9ab_fb41_bd6b,
];
