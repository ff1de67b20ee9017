//! Consistency & Regression Tests
//!
//! Verifies the central invariant of the engine: for any message and any
//! partition of it into chunks, the streaming hasher and the one-shot
//! path produce the same digest. Also pins both padding branches around
//! the 55/56-byte tail boundary.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use rand::prelude::*;
use verushash::{hash, Hasher};

fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

// =============================================================================
// EMPTY INPUT
// =============================================================================

#[test]
fn test_empty_input() {
    let one_shot = hash(b"");
    assert_eq!(one_shot, hash(b""), "Empty digest must be deterministic");

    // A fresh context finalized without any update must match.
    let streamed = Hasher::new().finalize();
    assert_eq!(one_shot, streamed, "hash(\"\") != finalize of fresh context");

    // update with an empty chunk must be a no-op.
    let mut hasher = Hasher::new();
    hasher.update(b"");
    assert_eq!(one_shot, hasher.finalize());
}

// =============================================================================
// STREAMING CONSISTENCY
// =============================================================================

#[test]
fn test_streaming_single_chunk() {
    for size in [1usize, 7, 55, 63, 64, 65, 127, 128, 1000, 4096] {
        let input = patterned(size);
        let mut hasher = Hasher::new();
        hasher.update(&input);
        assert_eq!(
            hash(&input),
            hasher.finalize(),
            "one-shot vs single-chunk streaming mismatch at size {size}"
        );
    }
}

#[test]
fn test_streaming_byte_at_a_time() {
    let input = patterned(257);
    let mut hasher = Hasher::new();
    for byte in &input {
        hasher.update(std::slice::from_ref(byte));
    }
    assert_eq!(hash(&input), hasher.finalize());
}

#[test]
fn test_streaming_block_straddling_chunks() {
    // Chunk sizes chosen to land unevenly across 64-byte block boundaries.
    let input = patterned(500);
    for chunk_size in [1usize, 3, 13, 31, 63, 64, 65, 100, 127, 129, 499] {
        let mut hasher = Hasher::new();
        for chunk in input.chunks(chunk_size) {
            hasher.update(chunk);
        }
        assert_eq!(
            hash(&input),
            hasher.finalize(),
            "partition with chunk size {chunk_size} diverged"
        );
    }
}

#[test]
fn test_streaming_with_interleaved_empty_chunks() {
    let input = patterned(130);
    let mut hasher = Hasher::new();
    hasher.update(&[]);
    hasher.update(&input[..64]);
    hasher.update(&[]);
    hasher.update(&input[64..64]);
    hasher.update(&input[64..]);
    hasher.update(&[]);
    assert_eq!(hash(&input), hasher.finalize());
}

#[test]
fn test_streaming_random_partitions() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5645_5255_5348);
    let mut input = vec![0u8; 3000];
    rng.fill(&mut input[..]);
    let expected = hash(&input);

    for _ in 0..20 {
        let mut hasher = Hasher::new();
        let mut offset = 0;
        while offset < input.len() {
            let take = rng.random_range(0..=200).min(input.len() - offset);
            hasher.update(&input[offset..offset + take]);
            offset += take;
        }
        assert_eq!(expected, hasher.finalize(), "random partition diverged");
    }
}

// =============================================================================
// PADDING BRANCHES
// =============================================================================

#[test]
fn test_padding_boundary_lengths() {
    // 0..=55 pads in place; 56..=63 tails absorb a zero-filled block first;
    // 64/65 and the 119/120/128 group exercise the same branches after one
    // or more full blocks.
    let sizes = [
        0usize, 1, 54, 55, 56, 57, 62, 63, 64, 65, 110, 111, 119, 120, 127, 128, 129, 256,
    ];

    for &size in &sizes {
        let input = patterned(size);
        let expected = hash(&input);
        assert_ne!(expected, [0u8; 32], "degenerate digest at size {size}");

        // Whole message at once.
        let mut whole = Hasher::new();
        whole.update(&input);
        assert_eq!(expected, whole.finalize(), "whole-chunk mismatch at {size}");

        // Byte at a time.
        let mut bytes = Hasher::new();
        for b in &input {
            bytes.update(std::slice::from_ref(b));
        }
        assert_eq!(expected, bytes.finalize(), "byte-wise mismatch at {size}");
    }
}

#[test]
fn test_length_injection() {
    // Same bytes, different lengths of trailing zeros must not collide:
    // the bit-length field separates them even when the zero fill matches.
    let h1 = hash(b"A");
    let h2 = hash(b"A\0");
    assert_ne!(h1, h2, "length field failed to separate 'A' and 'A\\0'");

    let h3 = hash(&[0u8; 55]);
    let h4 = hash(&[0u8; 56]);
    assert_ne!(h3, h4, "padding branches collided on zero messages");
}

#[test]
fn test_determinism_across_contexts() {
    let input = patterned(777);
    let a = hash(&input);
    let b = hash(&input);
    let mut hasher = Hasher::new();
    hasher.update(&input);
    let c = hasher.finalize();
    assert_eq!(a, b);
    assert_eq!(a, c);
}
