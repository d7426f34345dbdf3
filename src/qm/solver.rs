//! Driver: the `simplify` family of entry points

use std::collections::HashSet;

use super::error::QmError;
use super::essential::essential_implicants;
use super::implicant::Implicant;
use super::prime_implicants::{Profile, prime_implicants};
use super::reduce_implicants::reduce_implicants;

/// A minimization result together with the merge-attempt counters.
///
/// `result` is `None` ("no result") when the input was empty or the input
/// widths were inconsistent; this is distinct from the tautology `{-…-}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultWithProfile {
    pub result: Option<HashSet<Implicant>>,
    pub profile: Profile,
}

impl ResultWithProfile {
    pub fn none() -> Self {
        Self {
            result: None,
            profile: Profile::default(),
        }
    }
}

/// Minimize the partial Boolean function given as integer minterms.
///
/// `ones` are the assignments that must evaluate to 1 and `dc` the
/// assignments whose value is free. When `num_bits` is absent the width is
/// the smallest that fits the largest input. With `use_xor` the result may
/// contain `^`/`~` parity terms.
pub fn simplify(
    ones: &[u64],
    dc: &[u64],
    num_bits: Option<usize>,
    use_xor: bool,
) -> Option<HashSet<Implicant>> {
    simplify_with_profile(ones, dc, num_bits, use_xor).result
}

/// [`simplify`] plus the profile counters.
pub fn simplify_with_profile(
    ones: &[u64],
    dc: &[u64],
    num_bits: Option<usize>,
    use_xor: bool,
) -> ResultWithProfile {
    if ones.is_empty() && dc.is_empty() {
        return ResultWithProfile::none();
    }

    let n_bits = num_bits.unwrap_or_else(|| {
        let max = ones.iter().chain(dc.iter()).copied().max().unwrap_or(0);
        (u64::BITS - max.leading_zeros()) as usize
    });

    let ones: HashSet<Implicant> = ones
        .iter()
        .map(|&m| Implicant::from_minterm(m, n_bits))
        .collect();
    let dc: HashSet<Implicant> = dc
        .iter()
        .map(|&m| Implicant::from_minterm(m, n_bits))
        .collect();

    run_pipeline(&ones, &dc, n_bits, use_xor)
}

/// Minimize the partial Boolean function given as bitstrings.
///
/// Every string must contain only `'0'`/`'1'` and all strings must share
/// one width; a `num_bits` argument that contradicts that width yields "no
/// result".
pub fn simplify_los(
    ones: &[&str],
    dc: &[&str],
    num_bits: Option<usize>,
    use_xor: bool,
) -> Result<Option<HashSet<Implicant>>, QmError> {
    Ok(simplify_los_with_profile(ones, dc, num_bits, use_xor)?.result)
}

/// [`simplify_los`] plus the profile counters.
pub fn simplify_los_with_profile(
    ones: &[&str],
    dc: &[&str],
    num_bits: Option<usize>,
    use_xor: bool,
) -> Result<ResultWithProfile, QmError> {
    let ones = parse_minterm_strings(ones)?;
    let dc = parse_minterm_strings(dc)?;

    if ones.is_empty() && dc.is_empty() {
        return Ok(ResultWithProfile::none());
    }

    let n_bits = ones.iter().chain(dc.iter()).map(Implicant::len).max().unwrap_or(0);
    let min_bits = ones.iter().chain(dc.iter()).map(Implicant::len).min().unwrap_or(0);
    if n_bits != min_bits {
        return Ok(ResultWithProfile::none());
    }
    if let Some(requested) = num_bits
        && requested != n_bits
    {
        return Ok(ResultWithProfile::none());
    }

    Ok(run_pipeline(&ones, &dc, n_bits, use_xor))
}

fn parse_minterm_strings(strings: &[&str]) -> Result<HashSet<Implicant>, QmError> {
    let mut terms = HashSet::with_capacity(strings.len());
    for s in strings {
        let term: Implicant = s.parse()?;
        if !term.is_minterm() {
            return Err(QmError::NotAMinterm {
                term: term.to_string(),
            });
        }
        terms.insert(term);
    }
    Ok(terms)
}

fn run_pipeline(
    ones: &HashSet<Implicant>,
    dc: &HashSet<Implicant>,
    n_bits: usize,
    use_xor: bool,
) -> ResultWithProfile {
    let terms: HashSet<Implicant> = ones.union(dc).cloned().collect();

    let (prime, profile) = prime_implicants(use_xor, &terms);
    let essential = essential_implicants(n_bits, &prime, dc);
    let reduced = reduce_implicants(n_bits, &essential, dc);

    ResultWithProfile {
        result: Some(reduced),
        profile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_strings(result: &Option<HashSet<Implicant>>) -> Vec<String> {
        let mut v: Vec<String> = result
            .as_ref()
            .expect("expected a result")
            .iter()
            .map(|t| t.to_string())
            .collect();
        v.sort();
        v
    }

    #[test]
    fn test_empty_input_is_no_result() {
        assert_eq!(simplify(&[], &[], None, false), None);
        assert_eq!(simplify(&[], &[], Some(4), true), None);
    }

    #[test]
    fn test_width_defaults_to_largest_input() {
        let result = simplify(&[4], &[], None, false);
        assert_eq!(as_strings(&result), vec!["100"]);
    }

    #[test]
    fn test_explicit_width_pads_terms() {
        let result = simplify(&[4], &[], Some(5), false);
        assert_eq!(as_strings(&result), vec!["00100"]);
    }

    #[test]
    fn test_simple_pair_merge() {
        let result = simplify(&[0, 1], &[], Some(2), false);
        assert_eq!(as_strings(&result), vec!["0-"]);
    }

    #[test]
    fn test_los_accepts_strings() {
        let result = simplify_los(&["00", "01"], &[], None, false).unwrap();
        assert_eq!(as_strings(&result), vec!["0-"]);
    }

    #[test]
    fn test_los_rejects_width_mismatch() {
        let result = simplify_los(&["00", "010"], &[], None, false).unwrap();
        assert_eq!(result, None);
        let result = simplify_los(&["00", "01"], &[], Some(3), false).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_los_rejects_operator_characters() {
        let err = simplify_los(&["0-"], &[], None, false).unwrap_err();
        assert!(matches!(err, QmError::NotAMinterm { .. }));
        let err = simplify_los(&["0z"], &[], None, false).unwrap_err();
        assert!(matches!(err, QmError::InvalidCharacter { .. }));
    }

    #[test]
    fn test_profile_counters_returned() {
        let outcome = simplify_with_profile(&[1, 2, 5, 6], &[], Some(3), true);
        assert!(outcome.result.is_some());
        assert!(outcome.profile.cmp > 0);
    }

    #[test]
    fn test_ones_overlapping_dont_cares() {
        // A minterm may be both a one and a don't care; it is coverable
        // but never forces a conflict.
        let result = simplify(&[0, 1], &[1, 3], Some(2), false);
        assert_eq!(as_strings(&result), vec!["0-"]);
    }
}
