//! Benchmark inputs for the Strand container library.
//!
//! Provides deterministic sequences for benchmarking:
//!
//! - [`random_sequence`]: seeded pseudo-random values via ChaCha8
//! - [`ascending_sequence`]: `0..n` in order

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strand_seq::Sequence;

/// Build a sequence of `n` pseudo-random `u32` values from `seed`.
///
/// The same seed always yields the same sequence.
pub fn random_sequence(n: usize, seed: u64) -> Sequence<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u32()).collect()
}

/// Build the sequence `0, 1, ..., n - 1`.
pub fn ascending_sequence(n: usize) -> Sequence<u32> {
    (0..n as u32).collect()
}
