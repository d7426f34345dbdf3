//! Pairwise XOR/XNOR reduction of two same-length terms

use super::implicant::{BitState, Implicant};

/// Try to combine two terms into a single XOR term.
///
/// Succeeds only when the terms differ at exactly two positions, one in
/// each direction (`t2` has a `0` at one mismatch and a `1` at the other).
/// Operands that already carry a `^` or `~` are never combined.
pub fn reduce_xor_pair(t1: &Implicant, t2: &Implicant) -> Option<Implicant> {
    reduce_parity_pair(t1, t2, BitState::Xor, |d10, d20| d10 == 1 && d20 == 1)
}

/// Try to combine two terms into a single XNOR term.
///
/// Succeeds only when the terms differ at exactly two positions, both in
/// the same direction (`t2` has a `0` at both mismatches, or a `1` at
/// both).
pub fn reduce_xnor_pair(t1: &Implicant, t2: &Implicant) -> Option<Implicant> {
    reduce_parity_pair(t1, t2, BitState::Xnor, |d10, d20| {
        (d10 == 2 && d20 == 0) || (d10 == 0 && d20 == 2)
    })
}

fn reduce_parity_pair(
    t1: &Implicant,
    t2: &Implicant,
    replacement: BitState,
    accept: impl Fn(usize, usize) -> bool,
) -> Option<Implicant> {
    if t1.len() != t2.len() {
        return None;
    }

    let mut d10 = 0;
    let mut d20 = 0;
    let mut bits = Vec::with_capacity(t1.len());

    for (c1, c2) in t1.iter().zip(t2.iter()) {
        if matches!(c1, BitState::Xor | BitState::Xnor)
            || matches!(c2, BitState::Xor | BitState::Xnor)
        {
            return None;
        }
        if c1 != c2 {
            bits.push(replacement);
            if c2 == BitState::Zero {
                d10 += 1;
            } else {
                d20 += 1;
            }
        } else {
            bits.push(c1);
        }
    }

    accept(d10, d20).then(|| Implicant::new(bits))
}
