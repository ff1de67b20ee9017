//! One-shot hashing API.

use crate::engine::sponge::{self, State};
use crate::kernels::constants::BLOCK_SIZE;
use crate::types::Digest;

use subtle::ConstantTimeEq;

// =============================================================================
// HASHING
// =============================================================================

/// Compute the VerusHash digest of a complete message.
///
/// Deterministic for any input, including empty. Bit-identical to feeding
/// the same bytes through [`crate::Hasher`] in chunks of any size.
///
/// # Example
/// ```rust
/// let digest = verushash::hash(b"Verus block header");
/// assert_eq!(digest.len(), 32);
/// ```
#[must_use]
pub fn hash(input: &[u8]) -> Digest {
    let mut state = State::new();
    let mut blocks = input.chunks_exact(BLOCK_SIZE);
    for block in &mut blocks {
        state.absorb(block);
    }
    let digest = sponge::finish(&mut state, blocks.remainder(), input.len() as u64);
    state.wipe();
    digest
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Recompute the digest of `input` and compare it to `expected` in
/// constant time.
///
/// # Example
/// ```rust
/// let digest = verushash::hash(b"share");
/// assert!(verushash::verify(b"share", &digest));
/// assert!(!verushash::verify(b"stale share", &digest));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &Digest) -> bool {
    hash(input).ct_eq(expected).into()
}
