//! Portable permutation kernel.
//!
//! Pure scalar arithmetic over sixteen 32-bit words. This is the canonical
//! definition of the permutation; the SSE2 backend computes the same
//! function and must stay byte-identical to it on every input.

use crate::kernels::constants::{BLOCK_SIZE, DIGEST_SIZE, ROUNDS, ROUND_WORDS};

/// Haraka512-style permutation: one 64-byte block in, the folded 256-bit
/// result out. No side effects, no retained state.
#[must_use]
pub fn permute(block: &[u8; BLOCK_SIZE]) -> [u8; DIGEST_SIZE] {
    let mut words = [0u32; 16];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(chunk);
        *word = u32::from_le_bytes(buf);
    }
    let input = words;

    for round in 0..ROUNDS {
        for (i, word) in words.iter_mut().enumerate() {
            let mut x = *word;
            x ^= x.rotate_left(13);
            x ^= x.rotate_right(17);
            *word = x.wrapping_add(ROUND_WORDS[i & 7]);
        }
        // Odd rounds rotate the four 128-bit lanes cyclically.
        if round & 1 == 1 {
            words.rotate_left(4);
        }
    }

    // Feed-forward with the original block, then fold 512 bits to 256 by
    // XORing the upper half into the lower half.
    for (word, orig) in words.iter_mut().zip(input) {
        *word ^= orig;
    }
    let mut out = [0u8; DIGEST_SIZE];
    for (chunk, i) in out.chunks_exact_mut(4).zip(0..8) {
        chunk.copy_from_slice(&(words[i] ^ words[i + 8]).to_le_bytes());
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================
