//! Random minterm generation utilities
//!
//! Seeded generation of ones/don't-care partitions for tests and
//! benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Generate `n_minterms` unique random minterms in `[0, 2^n_bits)`,
/// sorted ascending.
///
/// # Panics
/// Panics if `n_bits` is zero or exceeds 63, or if `n_minterms` exceeds
/// the size of the space.
pub fn generate_random_minterms(n_bits: usize, n_minterms: usize, seed: u64) -> Vec<u64> {
    assert!(n_bits > 0, "number of bits must be positive");
    assert!(n_bits < 64, "number of bits must be below 64");
    let space = 1u64 << n_bits;
    assert!(
        n_minterms as u64 <= space,
        "cannot draw {} unique minterms from a space of {}",
        n_minterms,
        space
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut minterms = HashSet::new();
    while minterms.len() < n_minterms {
        minterms.insert(rng.random_range(0..space));
    }

    let mut result: Vec<u64> = minterms.into_iter().collect();
    result.sort_unstable();
    result
}

/// Generate a disjoint ones/don't-care partition of random minterms.
pub fn generate_random_function(
    n_bits: usize,
    n_ones: usize,
    n_dont_cares: usize,
    seed: u64,
) -> (Vec<u64>, Vec<u64>) {
    let combined = generate_random_minterms(n_bits, n_ones + n_dont_cares, seed);
    let (ones, dont_cares) = combined.split_at(n_ones);
    (ones.to_vec(), dont_cares.to_vec())
}
