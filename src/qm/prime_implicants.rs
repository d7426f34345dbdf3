//! Prime-implicant generation: grouped pairwise reduction to a fixed point

use std::collections::{HashMap, HashSet};

use super::implicant::{BitState, Implicant};
use super::pairwise::{reduce_xor_pair, reduce_xnor_pair};

/// Merge-attempt counters, one per merge category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Profile {
    pub cmp: u64,
    pub xor: u64,
    pub xnor: u64,
}

/// Bucket key: (number of `1`s, number of `^`s, number of `~`s).
type GroupKey = (usize, usize, usize);

/// Generate all prime implicants of `terms` (the union of the ones and the
/// don't cares, as pure bitstrings).
///
/// With `use_xor` the working set is first seeded with the parity terms
/// obtainable from a single pair of minterms; the iterative phase then
/// merges adjacent terms and promotes parity terms until no term is
/// consumed in a round. Candidate partners are probed by flipping a `0` of
/// the current term instead of scanning the neighbour group pairwise.
pub fn prime_implicants(
    use_xor: bool,
    terms: &HashSet<Implicant>,
) -> (HashSet<Implicant>, Profile) {
    let mut profile = Profile::default();
    let mut terms = terms.clone();

    if use_xor {
        seed_parity_terms(&mut terms);
    }

    let mut marked: HashSet<Implicant> = HashSet::new();

    loop {
        let mut groups: HashMap<GroupKey, HashSet<Implicant>> = HashMap::new();
        for t in &terms {
            let key = (t.count_ones(), t.count_xors(), t.count_xnors());
            assert!(
                key.1 == 0 || key.2 == 0,
                "term {} mixes XOR and XNOR positions",
                t
            );
            groups.entry(key).or_default().insert(t.clone());
        }

        let mut new_terms: HashSet<Implicant> = HashSet::new();
        let mut used: HashSet<Implicant> = HashSet::new();

        for (&key, group) in &groups {
            // Adjacent merge: probe for the partner that has one more '1'.
            let key_next = (key.0 + 1, key.1, key.2);
            if let Some(group_next) = groups.get(&key_next) {
                for t1 in group {
                    for (i, c1) in t1.iter().enumerate() {
                        if c1 != BitState::Zero {
                            continue;
                        }
                        profile.cmp += 1;
                        let t2 = t1.with_bit(i, BitState::One);
                        if group_next.contains(&t2) {
                            used.insert(t1.clone());
                            used.insert(t2);
                            new_terms.insert(t1.with_bit(i, BitState::DontCare));
                        }
                    }
                }
            }

            // Parity promotion: an XOR term grows by absorbing the XNOR
            // term that agrees everywhere except one extra '1'. The
            // complement key swaps the parity counts.
            let key_complement = (key.0 + 1, key.2, key.1);
            if key.1 > 0 {
                if let Some(group_complement) = groups.get(&key_complement) {
                    for t1 in group {
                        let swapped = t1.swap_parities();
                        for (i, c1) in t1.iter().enumerate() {
                            if c1 != BitState::Zero {
                                continue;
                            }
                            profile.xor += 1;
                            let probe = swapped.with_bit(i, BitState::One);
                            if group_complement.contains(&probe) {
                                used.insert(t1.clone());
                                new_terms.insert(t1.with_bit(i, BitState::Xor));
                            }
                        }
                    }
                }
            }

            // XNOR promotion, same shape with the roles swapped.
            if key.2 > 0 {
                if let Some(group_complement) = groups.get(&key_complement) {
                    for t1 in group {
                        let swapped = t1.swap_parities();
                        for (i, c1) in t1.iter().enumerate() {
                            if c1 != BitState::Zero {
                                continue;
                            }
                            profile.xnor += 1;
                            let probe = swapped.with_bit(i, BitState::One);
                            if group_complement.contains(&probe) {
                                used.insert(t1.clone());
                                new_terms.insert(t1.with_bit(i, BitState::Xnor));
                            }
                        }
                    }
                }
            }
        }

        for group in groups.values() {
            for t in group {
                if !used.contains(t) {
                    marked.insert(t.clone());
                }
            }
        }

        let done = used.is_empty();
        terms = new_terms;
        if done {
            break;
        }
    }

    (marked, profile)
}

/// Add to `terms` every XOR/XNOR term obtainable from a single pair of
/// minterms. XOR partners share a popcount; XNOR partners differ by two.
fn seed_parity_terms(terms: &mut HashSet<Implicant>) {
    let mut by_popcount: HashMap<usize, Vec<Implicant>> = HashMap::new();
    for t in terms.iter() {
        by_popcount.entry(t.count_ones()).or_default().push(t.clone());
    }

    let mut seeded = Vec::new();
    for (&key, group) in &by_popcount {
        for t1 in group {
            for t2 in group {
                if let Some(t12) = reduce_xor_pair(t1, t2) {
                    seeded.push(t12);
                }
            }
            if let Some(group_next) = by_popcount.get(&(key + 2)) {
                for t2 in group_next {
                    if let Some(t12) = reduce_xnor_pair(t1, t2) {
                        seeded.push(t12);
                    }
                }
            }
        }
    }
    terms.extend(seeded);
}
