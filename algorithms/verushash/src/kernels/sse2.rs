//! SSE2 permutation kernel.
//!
//! Computes the canonical permutation with packed 32-bit vector operations,
//! one 128-bit lane per register. Byte-identical to the portable kernel on
//! every input; only reachable after the capability probe confirms SSE2.

#![allow(clippy::cast_possible_wrap, clippy::cast_ptr_alignment)]

use crate::kernels::constants::{BLOCK_SIZE, DIGEST_SIZE, HARAKA_RC, ROUNDS};

use core::arch::x86_64::{
    __m128i, _mm_add_epi32, _mm_loadu_si128, _mm_or_si128, _mm_set_epi32, _mm_slli_epi32,
    _mm_srli_epi32, _mm_storeu_si128, _mm_xor_si128,
};

/// SSE2 entry point with the shared kernel signature.
#[must_use]
pub fn permute(block: &[u8; BLOCK_SIZE]) -> [u8; DIGEST_SIZE] {
    // SAFETY: the dispatcher selects this backend only after
    // `cpu::has_hardware_accel` reports SSE2 support.
    #[allow(unsafe_code)]
    unsafe {
        permute_block(block)
    }
}

/// One round-constant vector from a table entry (word 0 in the low lane).
// SAFETY: requires SSE2 (enforced by the dispatcher before selection).
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
#[inline]
unsafe fn rc_vector(entry: usize) -> __m128i {
    _mm_set_epi32(
        HARAKA_RC[entry][3] as i32,
        HARAKA_RC[entry][2] as i32,
        HARAKA_RC[entry][1] as i32,
        HARAKA_RC[entry][0] as i32,
    )
}

/// Per-word diffusion step on a whole lane:
/// `x ^= rotl(x, 13)`, `x ^= rotr(x, 17)`, `x += rc` (wrapping, per word).
// SAFETY: requires SSE2 (enforced by the dispatcher before selection).
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
#[inline]
unsafe fn word_round(x: __m128i, rc: __m128i) -> __m128i {
    let rl = _mm_or_si128(_mm_slli_epi32(x, 13), _mm_srli_epi32(x, 19));
    let x = _mm_xor_si128(x, rl);
    let rr = _mm_or_si128(_mm_srli_epi32(x, 17), _mm_slli_epi32(x, 15));
    let x = _mm_xor_si128(x, rr);
    _mm_add_epi32(x, rc)
}

// SAFETY: requires SSE2. Pointer arithmetic uses compile-time offsets on a
// 64-byte array reference; unaligned loads/stores throughout.
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn permute_block(block: &[u8; BLOCK_SIZE]) -> [u8; DIGEST_SIZE] {
    let ptr = block.as_ptr();
    let mut s0 = _mm_loadu_si128(ptr.cast());
    let mut s1 = _mm_loadu_si128(ptr.add(16).cast());
    let mut s2 = _mm_loadu_si128(ptr.add(32).cast());
    let mut s3 = _mm_loadu_si128(ptr.add(48).cast());
    let (f0, f1, f2, f3) = (s0, s1, s2, s3);

    // The word schedule is positional: lane positions 0/2 use table words
    // 0..4, positions 1/3 use words 4..8, matching `ROUND_WORDS[i mod 8]`.
    let rc0 = rc_vector(0);
    let rc1 = rc_vector(1);

    for round in 0..ROUNDS {
        s0 = word_round(s0, rc0);
        s1 = word_round(s1, rc1);
        s2 = word_round(s2, rc0);
        s3 = word_round(s3, rc1);
        // Odd rounds rotate the four lanes cyclically.
        if round & 1 == 1 {
            let t = s0;
            s0 = s1;
            s1 = s2;
            s2 = s3;
            s3 = t;
        }
    }

    // Feed-forward, then fold the upper 256 bits into the lower 256.
    s0 = _mm_xor_si128(s0, f0);
    s1 = _mm_xor_si128(s1, f1);
    s2 = _mm_xor_si128(s2, f2);
    s3 = _mm_xor_si128(s3, f3);
    let o0 = _mm_xor_si128(s0, s2);
    let o1 = _mm_xor_si128(s1, s3);

    let mut out = [0u8; DIGEST_SIZE];
    _mm_storeu_si128(out.as_mut_ptr().cast(), o0);
    _mm_storeu_si128(out.as_mut_ptr().add(16).cast(), o1);
    out
}
