//! Streaming hasher.
//!
//! Incremental interface over the sponge core: chunks of any size,
//! bit-identical to the one-shot path for the same total input. Full
//! blocks are absorbed straight from the caller's slice; only sub-block
//! tails pass through the internal buffer.

use crate::engine::sponge::{self, State};
use crate::kernels::constants::BLOCK_SIZE;
use crate::types::Digest;

use zeroize::Zeroize;

#[cfg(feature = "digest-trait")]
use digest::typenum::U32;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, HashMarker, Output, OutputSizeUser, Reset, Update};

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Incremental VerusHash computation.
///
/// `finalize` consumes the hasher, so using a context after finalization
/// (or finalizing twice) is a compile error rather than a runtime check.
/// Dropping a hasher on any path zeroizes its state and buffer.
///
/// Not synchronized: one logical computation belongs to one thread.
/// Independent hashers share nothing mutable and may run concurrently.
#[derive(Clone)]
pub struct VerusHasher {
    state: State,
    /// Tail bytes not yet forming a full block (always < `BLOCK_SIZE`).
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    /// Every byte ever supplied; only used for the closing length field.
    total_len: u64,
}

impl VerusHasher {
    /// Create an empty hasher with a fresh state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::new(),
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Absorb a chunk. Any length is accepted, including zero.
    pub fn update(&mut self, data: &[u8]) {
        self.total_len += data.len() as u64;
        let mut rest = data;

        // Top up a partially filled buffer first.
        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(rest.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&rest[..take]);
            self.buffer_len += take;
            rest = &rest[take..];
            if self.buffer_len == BLOCK_SIZE {
                let block = self.buffer;
                self.state.absorb(&block);
                self.buffer_len = 0;
            }
        }

        // Full blocks straight from the input, no buffer copy.
        let mut blocks = rest.chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            self.state.absorb(block);
        }

        let tail = blocks.remainder();
        if !tail.is_empty() {
            self.buffer[..tail.len()].copy_from_slice(tail);
            self.buffer_len = tail.len();
        }
    }

    /// Drain the buffer, pad, and return the digest. Consumes the hasher;
    /// the remaining state is zeroized on drop.
    #[must_use]
    pub fn finalize(mut self) -> Digest {
        let total = self.total_len;
        let digest = sponge::finish(&mut self.state, &self.buffer[..self.buffer_len], total);
        self.wipe();
        digest
    }

    /// Wipe and reinitialize for a new computation.
    pub fn reset(&mut self) {
        self.wipe();
        self.state = State::new();
    }

    fn wipe(&mut self) {
        self.state.wipe();
        self.buffer.zeroize();
        self.buffer_len = 0;
        self.total_len = 0;
    }
}

impl Drop for VerusHasher {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl Default for VerusHasher {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for VerusHasher {
    type OutputSize = U32;
}

#[cfg(feature = "digest-trait")]
impl Update for VerusHasher {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for VerusHasher {
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(&self.finalize());
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for VerusHasher {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for VerusHasher {}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wipe_zeroizes_everything() {
        let mut hasher = VerusHasher::new();
        hasher.update(&[0xC3u8; 100]);
        assert!(hasher.buffer_len > 0);

        hasher.wipe();
        assert_eq!(hasher.state.bytes, [0u8; BLOCK_SIZE]);
        assert_eq!(hasher.buffer, [0u8; BLOCK_SIZE]);
        assert_eq!(hasher.buffer_len, 0);
        assert_eq!(hasher.total_len, 0);
    }

    #[test]
    fn reset_restores_fresh_state() {
        let mut hasher = VerusHasher::new();
        hasher.update(b"stale data");
        hasher.reset();
        hasher.update(b"abc");

        let mut fresh = VerusHasher::new();
        fresh.update(b"abc");
        assert_eq!(hasher.finalize(), fresh.finalize());
    }

    #[test]
    fn buffer_counts_track_input() {
        let mut hasher = VerusHasher::new();
        hasher.update(&[0u8; 63]);
        assert_eq!(hasher.buffer_len, 63);
        hasher.update(&[0u8; 1]);
        assert_eq!(hasher.buffer_len, 0);
        assert_eq!(hasher.total_len, 64);
        hasher.update(&[]);
        assert_eq!(hasher.total_len, 64);
    }
}
