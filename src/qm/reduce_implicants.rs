//! Implicant reduction: orthogonal merging and redundancy elimination

use std::collections::{BTreeSet, HashMap, HashSet};

use super::implicant::{BitState, Implicant};
use super::permutations::permutations;

/// Try to replace `a` and `b` by a single implicant with exactly their
/// combined coverage.
///
/// Each candidate fills the `-` positions of one operand with the other
/// operand's characters; it is accepted only when its concretization
/// equals the union of the two coverages, so the merge never adds or
/// drops a minterm. When both candidates are valid the simpler one wins.
pub fn combine_implicants(
    a: &Implicant,
    b: &Implicant,
    dc: &HashSet<Implicant>,
) -> Option<Implicant> {
    let mut union = permutations(a, dc);
    union.extend(permutations(b, dc));

    let mut best: Option<Implicant> = None;
    for candidate in [substitute_dont_cares(a, b), substitute_dont_cares(b, a)] {
        if candidate.has_mixed_parity() {
            continue;
        }
        if permutations(&candidate, dc) != union {
            continue;
        }
        best = match best {
            Some(current) if current.complexity() <= candidate.complexity() => Some(current),
            _ => Some(candidate),
        };
    }
    best
}

/// Copy of `a` with every `-` position replaced by `b`'s character at the
/// same index.
fn substitute_dont_cares(a: &Implicant, b: &Implicant) -> Implicant {
    let bits = a
        .iter()
        .zip(b.iter())
        .map(|(ca, cb)| if ca == BitState::DontCare { cb } else { ca })
        .collect();
    Implicant::new(bits)
}

/// Shrink a set of implicants without changing the function it covers.
///
/// Phase 1 repeatedly merges orthogonal pairs via [`combine_implicants`].
/// Phase 2 removes redundant implicants one at a time, worst complexity
/// first; removing one can make another non-redundant, so the set is
/// re-examined after every removal.
pub fn reduce_implicants(
    n_bits: usize,
    implicants: &HashSet<Implicant>,
    dc: &HashSet<Implicant>,
) -> HashSet<Implicant> {
    let mut implicants: BTreeSet<Implicant> = implicants.iter().cloned().collect();

    'merge: loop {
        let candidates: Vec<Implicant> = implicants.iter().cloned().collect();
        for i in 0..candidates.len() {
            for j in (i + 1)..candidates.len() {
                if let Some(replacement) = combine_implicants(&candidates[i], &candidates[j], dc) {
                    implicants.remove(&candidates[i]);
                    implicants.remove(&candidates[j]);
                    implicants.insert(replacement);
                    continue 'merge;
                }
            }
        }
        break;
    }

    let mut coverage: HashMap<Implicant, HashSet<Implicant>> = implicants
        .iter()
        .map(|t| (t.clone(), permutations(t, dc)))
        .collect();

    loop {
        let mut redundant: Vec<Implicant> = Vec::new();
        for t in &implicants {
            let mut others: HashSet<Implicant> = HashSet::new();
            for other in &implicants {
                if other != t {
                    others.extend(coverage[other].iter().cloned());
                }
            }
            if coverage[t].is_subset(&others) {
                redundant.push(t.clone());
            }
        }

        let Some(worst) = redundant.into_iter().max_by(|x, y| {
            x.complexity()
                .partial_cmp(&y.complexity())
                .expect("complexity is finite")
                .then_with(|| x.cmp(y))
        }) else {
            break;
        };

        implicants.remove(&worst);
        coverage.remove(&worst);
    }

    if implicants.is_empty() {
        return [Implicant::tautology(n_bits)].into_iter().collect();
    }
    implicants.into_iter().collect()
}
