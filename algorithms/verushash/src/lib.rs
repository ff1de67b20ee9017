#![cfg_attr(not(feature = "std"), no_std)]
// Product names (VerusHash, Haraka512) appear in prose throughout the docs.
#![allow(clippy::doc_markdown)]

//! # VerusHash
//!
//! Proof-of-work hash engine: a sponge over a Haraka512-style
//! 512-to-256-bit permutation, absorbing 64-byte blocks into a 512-bit
//! state. Two interchangeable permutation backends (SSE2 and portable
//! scalar) are selected once per process by a CPU capability probe and
//! produce identical output on every input.
//!
//! # Usage
//! ```rust
//! // 1. One-shot hashing
//! let digest = verushash::hash(b"Verus block header");
//!
//! // 2. Streaming, bit-identical for any chunking of the same bytes
//! let mut hasher = verushash::Hasher::new();
//! hasher.update(b"Verus ");
//! hasher.update(b"block header");
//! assert_eq!(hasher.finalize(), digest);
//!
//! // 3. Constant-time verification
//! assert!(verushash::verify(b"Verus block header", &digest));
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod engine;
// Re-export internal kernels so harnesses can force a backend; hidden from docs.
#[doc(hidden)]
pub mod kernels;
mod oneshot;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use engine::cpu::{has_hardware_accel, has_wide_vector};
#[cfg(feature = "std")]
pub use engine::cpu::recommended_parallelism;
pub use oneshot::{hash, verify};
pub use streaming::VerusHasher as Hasher;
pub use types::Digest;

/// Run the core 512-to-256-bit permutation on a single 64-byte block with
/// the backend the dispatcher selected.
///
/// This is the compression primitive underneath [`hash`], exposed so test
/// harnesses can compare backends directly; it is not a hash function on
/// its own.
#[must_use]
pub fn permute(block: &[u8; 64]) -> [u8; 32] {
    engine::dispatcher::permute(block)
}

/// Name of the permutation backend in use (`"sse2"` or `"portable"`).
#[must_use]
pub fn active_backend() -> &'static str {
    engine::dispatcher::active_backend_name()
}
