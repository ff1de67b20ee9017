//! Permutation kernels.
//!
//! Two interchangeable backends behind one signature: the SSE2 kernel and
//! the portable scalar fallback. Public for test and benchmark harnesses
//! that need to force a specific backend; not part of the stable API.

// =============================================================================
// MODULES
// =============================================================================

pub mod constants;
pub mod portable;
#[cfg(target_arch = "x86_64")]
pub mod sse2;
