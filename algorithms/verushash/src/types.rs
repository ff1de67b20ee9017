//! Shared types used across the VerusHash library.

use crate::kernels::constants::{BLOCK_SIZE, DIGEST_SIZE};

/// 32-byte digest produced by the engine.
pub type Digest = [u8; DIGEST_SIZE];

/// Unified permutation kernel signature: one 64-byte block in, the folded
/// 256-bit result out.
///
/// The SSE2 backend and the portable fallback share this signature so the
/// dispatcher can swap them without the sponge caring which one runs.
pub type PermuteFn = fn(&[u8; BLOCK_SIZE]) -> Digest;
