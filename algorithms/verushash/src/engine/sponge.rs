//! Sponge core: the 512-bit running state, block absorption, and the
//! canonical closing-block rule shared by the one-shot and streaming entry
//! points. Keeping both paths on these helpers is what guarantees
//! `streaming(C1..Cn) == hash(M)` for every partition of `M`.

use crate::engine::dispatcher;
use crate::kernels::constants::{BLOCK_SIZE, DIGEST_SIZE, IV, LENGTH_OFFSET, PAD_MARKER};
use crate::types::Digest;

use zeroize::Zeroize;

// =============================================================================
// STATE
// =============================================================================

/// 512-bit sponge state, one 64-byte buffer holding four 128-bit lanes.
#[derive(Clone)]
pub struct State {
    pub(crate) bytes: [u8; BLOCK_SIZE],
}

impl State {
    /// Fresh state loaded with the fixed initialization words.
    #[must_use]
    pub fn new() -> Self {
        let mut bytes = [0u8; BLOCK_SIZE];
        for (chunk, word) in bytes.chunks_exact_mut(8).zip(IV) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        Self { bytes }
    }

    /// Absorb one full 64-byte block: XOR it into the state, permute, and
    /// overwrite the first two lanes with the 256-bit permutation output.
    ///
    /// Lanes 2 and 3 keep their post-XOR value between blocks. Replacing
    /// all four lanes would change every digest, so the partial update is
    /// load-bearing consensus behavior.
    pub fn absorb(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), BLOCK_SIZE);
        for (s, b) in self.bytes.iter_mut().zip(block) {
            *s ^= *b;
        }
        let folded = dispatcher::permute(&self.bytes);
        self.bytes[..DIGEST_SIZE].copy_from_slice(&folded);
    }

    /// Absorb the closing block and return the permutation output directly
    /// as the digest (it is not folded back into the state).
    #[must_use]
    pub fn squeeze(&mut self, block: &[u8; BLOCK_SIZE]) -> Digest {
        for (s, b) in self.bytes.iter_mut().zip(block) {
            *s ^= *b;
        }
        dispatcher::permute(&self.bytes)
    }

    /// Zeroize the state buffer.
    pub fn wipe(&mut self) {
        self.bytes.zeroize();
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// PADDING
// =============================================================================

/// Lay out the closing block: tail bytes, the `0x80` marker, zero fill to
/// offset 56, and the total message length in bits as a little-endian
/// 64-bit value in the last eight bytes. Little-endian is explicit so the
/// digest is identical on big-endian hosts.
///
/// `tail` must leave room for the marker before the length field, i.e. be
/// at most 55 bytes; `finish` flushes longer tails first.
#[must_use]
pub fn closing_block(tail: &[u8], total_len: u64) -> [u8; BLOCK_SIZE] {
    debug_assert!(tail.len() < LENGTH_OFFSET);
    let mut block = [0u8; BLOCK_SIZE];
    block[..tail.len()].copy_from_slice(tail);
    block[tail.len()] = PAD_MARKER;
    // Bit count; the field is 64 bits wide, so the count wraps past 2^61
    // input bytes.
    block[LENGTH_OFFSET..].copy_from_slice(&total_len.wrapping_mul(8).to_le_bytes());
    block
}

/// Drain the 0–63 byte tail and produce the digest.
///
/// Canonical rule: a tail of 56 bytes or more has no room for the marker
/// plus the length field, so it is absorbed zero-padded as a full block
/// and the marker moves to a fresh closing block.
#[must_use]
pub fn finish(state: &mut State, tail: &[u8], total_len: u64) -> Digest {
    debug_assert!(tail.len() < BLOCK_SIZE);
    if tail.len() >= LENGTH_OFFSET {
        let mut overflow = [0u8; BLOCK_SIZE];
        overflow[..tail.len()].copy_from_slice(tail);
        state.absorb(&overflow);
        state.squeeze(&closing_block(&[], total_len))
    } else {
        state.squeeze(&closing_block(tail, total_len))
    }
}

// =============================================================================
// TESTS
// =============================================================================
