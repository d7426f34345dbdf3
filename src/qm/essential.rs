//! Essential-implicant selection: greedy set cover over concretizations

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use super::implicant::{BitState, Implicant};
use super::permutations::permutations;

/// Rank of a term for the greedy cover; higher is more desirable.
///
/// `term_range` is the size of the term's coverage with the don't cares
/// removed.
pub fn term_rank(term: &Implicant, term_range: usize) -> u64 {
    let mut n = 4 * term_range as u64;
    for b in term.iter() {
        n += match b {
            BitState::DontCare => 8,
            BitState::Xor => 4,
            BitState::Xnor => 2,
            BitState::One => 1,
            BitState::Zero => 0,
        };
    }
    n
}

/// Select a covering subset of the prime implicants `terms`.
///
/// Terms are visited in descending rank, ties in descending term order,
/// and kept whenever they cover a minterm no earlier term covered. The
/// don't cares never count as coverage. An empty selection collapses to
/// the tautology.
pub fn essential_implicants(
    n_bits: usize,
    terms: &HashSet<Implicant>,
    dc: &HashSet<Implicant>,
) -> HashSet<Implicant> {
    let mut coverage: HashMap<Implicant, HashSet<Implicant>> = HashMap::new();
    for t in terms {
        coverage.insert(t.clone(), permutations(t, dc));
    }

    let mut by_rank: BTreeMap<u64, BTreeSet<Implicant>> = BTreeMap::new();
    for t in terms {
        let rank = term_rank(t, coverage[t].len());
        by_rank.entry(rank).or_default().insert(t.clone());
    }

    let mut covered: HashSet<Implicant> = HashSet::new();
    let mut essential: HashSet<Implicant> = HashSet::new();
    for group in by_rank.values().rev() {
        for t in group.iter().rev() {
            if !coverage[t].is_subset(&covered) {
                essential.insert(t.clone());
                covered.extend(coverage[t].iter().cloned());
            }
        }
    }

    if essential.is_empty() {
        essential.insert(Implicant::tautology(n_bits));
    }
    essential
}
