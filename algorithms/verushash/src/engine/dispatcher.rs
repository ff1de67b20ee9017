//! Kernel dispatch.
//!
//! Selects the SSE2 permutation when the CPU supports it, the portable
//! fallback otherwise. The choice is made once per process and cached;
//! there is no fallback-on-error logic; the probe result is trusted.

use crate::engine::cpu;
use crate::kernels;
use crate::kernels::constants::BLOCK_SIZE;
use crate::types::{Digest, PermuteFn};

#[cfg(feature = "std")]
use std::sync::OnceLock;

#[cfg(feature = "std")]
static ACTIVE_KERNEL: OnceLock<PermuteFn> = OnceLock::new();

// =============================================================================
// DISPATCH
// =============================================================================

/// Run the 512-to-256-bit permutation with the selected kernel.
#[must_use]
pub fn permute(block: &[u8; BLOCK_SIZE]) -> Digest {
    (active_kernel())(block)
}

/// Name of the backend the dispatcher resolves to.
#[must_use]
pub fn active_backend_name() -> &'static str {
    if cpu::has_hardware_accel() {
        "sse2"
    } else {
        "portable"
    }
}

#[cfg(feature = "std")]
fn active_kernel() -> PermuteFn {
    *ACTIVE_KERNEL.get_or_init(best_kernel)
}

// Without std the probe is a compile-time constant, so there is nothing to
// cache.
#[cfg(not(feature = "std"))]
fn active_kernel() -> PermuteFn {
    best_kernel()
}

/// Pick the permutation backend for this CPU.
fn best_kernel() -> PermuteFn {
    #[cfg(target_arch = "x86_64")]
    {
        if cpu::has_hardware_accel() {
            return kernels::sse2::permute;
        }
    }

    kernels::portable::permute
}

// =============================================================================
// TESTS
// =============================================================================
