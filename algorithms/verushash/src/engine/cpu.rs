//! CPU capability probe.
//!
//! Pure queries with no side effects, safe to call repeatedly. The
//! dispatcher consults them once per process and caches the result.

/// Whether the instruction set used by the accelerated kernel (SSE2) is
/// available on this CPU.
#[must_use]
pub fn has_hardware_accel() -> bool {
    #[cfg(all(feature = "std", target_arch = "x86_64"))]
    {
        is_x86_feature_detected!("sse2")
    }
    #[cfg(not(all(feature = "std", target_arch = "x86_64")))]
    {
        cfg!(all(target_arch = "x86_64", target_feature = "sse2"))
    }
}

/// Whether a wider vector instruction set (AVX2) is available. Advisory
/// only; the permutation itself does not use it.
#[must_use]
pub fn has_wide_vector() -> bool {
    #[cfg(all(feature = "std", target_arch = "x86_64"))]
    {
        is_x86_feature_detected!("avx2")
    }
    #[cfg(not(all(feature = "std", target_arch = "x86_64")))]
    {
        cfg!(all(target_arch = "x86_64", target_feature = "avx2"))
    }
}

/// Suggested parallelism for callers that hash many messages: the
/// available hardware concurrency (at least 1). The engine itself is
/// strictly single-threaded.
#[cfg(feature = "std")]
#[must_use]
pub fn recommended_parallelism() -> usize {
    std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
}

// =============================================================================
// TESTS
// =============================================================================
