//! End-to-end minimization tests against the known-good result vectors.

use std::collections::HashSet;

use qmx::qm::{permutations, random::generate_random_function};
use qmx::{Implicant, simplify, simplify_los, simplify_with_profile};

fn to_set(strings: &[&str]) -> HashSet<Implicant> {
    strings.iter().map(|s| s.parse().unwrap()).collect()
}

fn check_ints(ones: &[u64], dc: &[u64], use_xor: bool, expected: &[&str]) {
    let result = simplify(ones, dc, None, use_xor).expect("expected a result");
    assert_eq!(result, to_set(expected));
}

/// Build the ones-set by concretizing the expected implicants, minimize it,
/// and expect the implicants back.
fn check_round_trip(expected: &[&str], use_xor: bool) {
    let mut ones: HashSet<Implicant> = HashSet::new();
    for s in expected {
        let term: Implicant = s.parse().unwrap();
        ones.extend(permutations(&term, &HashSet::new()));
    }
    let ones_strings: Vec<String> = ones.iter().map(|t| t.to_string()).collect();
    let ones_refs: Vec<&str> = ones_strings.iter().map(String::as_str).collect();

    let result = simplify_los(&ones_refs, &[], None, use_xor)
        .unwrap()
        .expect("expected a result");
    assert_eq!(result, to_set(expected));
}

#[test]
fn test_all_dont_cares_is_tautology() {
    let dc: Vec<u64> = (0..16).collect();
    check_ints(&[], &dc, false, &["----"]);
    check_ints(&[], &dc, true, &["----"]);
}

#[test]
fn test_full_ones_is_tautology() {
    let ones: Vec<u64> = (0..16).collect();
    check_ints(&ones, &[], false, &["----"]);
    check_ints(&ones, &[], true, &["----"]);
}

#[test]
fn test_ones_padded_by_dont_cares_is_tautology() {
    let ones: Vec<u64> = (0..10).collect();
    let dc: Vec<u64> = (10..16).collect();
    check_ints(&ones, &dc, false, &["----"]);
    check_ints(&ones, &dc, true, &["----"]);
}

#[test]
fn test_odd_ones_even_dont_cares_is_tautology() {
    let ones: Vec<u64> = (0..16).filter(|i| i % 2 == 1).collect();
    let dc: Vec<u64> = (0..16).filter(|i| i % 2 == 0).collect();
    check_ints(&ones, &dc, false, &["----"]);
    check_ints(&ones, &dc, true, &["----"]);
}

#[test]
fn test_and_only_cover() {
    check_ints(
        &[3, 4, 5, 7, 9, 13, 14, 15],
        &[],
        false,
        &["010-", "1-01", "111-", "0-11"],
    );
}

#[test]
fn test_single_one_with_dont_care_block() {
    check_ints(&[2], &[4, 5, 6, 7], true, &["-10"]);
}

#[test]
fn test_parity_of_low_two_bits() {
    check_ints(&[1, 2, 5, 6, 9, 10, 13, 14], &[], true, &["--^^"]);
}

#[test]
fn test_full_parity_through_dont_cares() {
    check_ints(&[1, 7, 8, 14], &[2, 4, 5, 6, 9, 10, 11, 13], true, &["^^^^"]);
}

#[test]
fn test_round_trip_xor_pair() {
    check_round_trip(&["--^^"], true);
}

#[test]
fn test_round_trip_anchored_xor() {
    check_round_trip(&["1--^^"], true);
}

#[test]
fn test_round_trip_single_literal() {
    check_round_trip(&["-------1"], true);
}

#[test]
fn test_round_trip_wide_xor_tail() {
    check_round_trip(&["------^^"], true);
    check_round_trip(&["-----^^^"], true);
}

#[test]
fn test_round_trip_xor_with_fixed_bit() {
    check_round_trip(&["0^^^"], true);
}

#[test]
fn test_round_trip_xnor_with_fixed_bit() {
    check_round_trip(&["0~~~"], true);
}

#[test]
fn test_round_trip_full_width_parity() {
    check_round_trip(&["^^^^^^^^"], true);
}

#[test]
fn test_round_trip_parity_plus_product() {
    check_round_trip(&["^^^0", "100-"], true);
}

#[test]
fn test_round_trip_mixed_cover() {
    check_round_trip(&["--1--11-", "00000001", "10001000"], true);
}

#[test]
fn test_round_trip_parity_factors() {
    check_round_trip(&["^^^00", "111^^"], true);
}

#[test]
fn test_round_trip_isolated_minterms() {
    check_round_trip(&["00^-0^^0", "01000001", "10001000"], true);
}

#[test]
fn test_round_trip_wide_parity_block() {
    check_round_trip(&["---00000^^^^^^^"], true);
}

#[test]
fn test_profile_counters_without_xor_stay_zero() {
    let outcome = simplify_with_profile(&[3, 4, 5, 7, 9, 13, 14, 15], &[], None, false);
    assert!(outcome.result.is_some());
    assert!(outcome.profile.cmp > 0);
    assert_eq!(outcome.profile.xor, 0);
    assert_eq!(outcome.profile.xnor, 0);
}

/// Check the correctness invariants on a result: every one is covered,
/// nothing outside ones ∪ dc is covered, and every implicant is well
/// formed.
fn check_invariants(ones: &[u64], dc: &[u64], n_bits: usize, use_xor: bool) {
    let result = simplify(ones, dc, Some(n_bits), use_xor).expect("expected a result");

    let ones_set: HashSet<Implicant> = ones
        .iter()
        .map(|&m| Implicant::from_minterm(m, n_bits))
        .collect();
    let allowed: HashSet<Implicant> = ones
        .iter()
        .chain(dc.iter())
        .map(|&m| Implicant::from_minterm(m, n_bits))
        .collect();

    let mut covered: HashSet<Implicant> = HashSet::new();
    for term in &result {
        assert_eq!(term.len(), n_bits);
        assert!(!term.has_mixed_parity(), "mixed parity in {}", term);
        covered.extend(permutations(term, &HashSet::new()));
    }

    for m in &ones_set {
        assert!(covered.contains(m), "uncovered minterm {}", m);
    }
    for b in &covered {
        assert!(allowed.contains(b), "forbidden coverage {}", b);
    }
}

#[test]
fn test_invariants_on_random_functions() {
    for seed in 0..20 {
        let (ones, dc) = generate_random_function(6, 12, 8, seed);
        check_invariants(&ones, &dc, 6, false);
        check_invariants(&ones, &dc, 6, true);
    }
}

#[test]
fn test_invariants_on_dense_random_functions() {
    for seed in 100..110 {
        let (ones, dc) = generate_random_function(5, 20, 6, seed);
        check_invariants(&ones, &dc, 5, false);
        check_invariants(&ones, &dc, 5, true);
    }
}
