//! qmx library
//!
//! Boolean function minimization using the Quine-McCluskey algorithm,
//! extended with XOR/XNOR implicants and a coverage-preserving reduction
//! pass.

pub mod qm; // Quine-McCluskey algorithm and solver

// Re-export the main types
pub use qm::{BitState, Implicant, Profile, QmError, ResultWithProfile};
pub use qm::{simplify, simplify_los, simplify_los_with_profile, simplify_with_profile};

/// Generate variable names (A, B, C, ...)
pub fn generate_variable_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| ((b'A' + (i % 26) as u8) as char).to_string())
        .collect()
}

/// Parse a minterm string like "1,3,7,15"
pub fn parse_minterms(input: &str) -> Result<Vec<u64>, std::num::ParseIntError> {
    input
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().parse())
        .collect()
}
