//! Concretizer: enumerate the pure minterms an implicant covers

use std::collections::HashSet;

use super::implicant::{BitState, Implicant};

/// Enumerate every pure `0`/`1` bitstring represented by `value`, minus
/// `exclude`.
///
/// Fixed positions are copied, `-` positions range over both values, the
/// `^` positions jointly take every assignment of odd parity and the `~`
/// positions every assignment of even parity.
pub fn permutations(value: &Implicant, exclude: &HashSet<Implicant>) -> HashSet<Implicant> {
    let indices = value.token_indices();
    let dont_cares = &indices.dont_cares;
    let xors = &indices.xors;
    let xnors = &indices.xnors;

    let template: Vec<BitState> = value
        .iter()
        .map(|b| match b {
            BitState::Zero | BitState::One => b,
            _ => BitState::Zero,
        })
        .collect();

    let mut result = HashSet::new();
    for dc_assign in 0u64..(1u64 << dont_cares.len()) {
        for xor_assign in 0u64..(1u64 << xors.len()) {
            if !xors.is_empty() && xor_assign.count_ones() % 2 != 1 {
                continue;
            }
            for xnor_assign in 0u64..(1u64 << xnors.len()) {
                if !xnors.is_empty() && xnor_assign.count_ones() % 2 != 0 {
                    continue;
                }

                let mut bits = template.clone();
                for (k, &i) in dont_cares.iter().enumerate() {
                    if (dc_assign >> k) & 1 == 1 {
                        bits[i] = BitState::One;
                    }
                }
                for (k, &i) in xors.iter().enumerate() {
                    if (xor_assign >> k) & 1 == 1 {
                        bits[i] = BitState::One;
                    }
                }
                for (k, &i) in xnors.iter().enumerate() {
                    if (xnor_assign >> k) & 1 == 1 {
                        bits[i] = BitState::One;
                    }
                }

                let minterm = Implicant::new(bits);
                if !exclude.contains(&minterm) {
                    result.insert(minterm);
                }
            }
        }
    }

    result
}
