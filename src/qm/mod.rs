// Quine-McCluskey Boolean minimization with XOR/XNOR implicants
//
// The pipeline runs integers -> bitstrings -> prime implicants ->
// essential subset -> reduced subset; each stage lives in its own module.

pub mod error;              // QmError
pub mod essential;          // Greedy essential-implicant selection
pub mod implicant;          // BitState, Implicant, complexity
pub mod pairwise;           // reduce_xor_pair, reduce_xnor_pair
pub mod permutations;       // Concretizer
pub mod prime_implicants;   // Grouping/merging fixpoint engine
pub mod random;             // Seeded random inputs for tests and benches
pub mod reduce_implicants;  // Orthogonal merging and redundancy removal
pub mod solver;             // simplify, simplify_los and profile variants

// Re-export main types for convenience
pub use error::QmError;
pub use essential::{essential_implicants, term_rank};
pub use implicant::{BitState, Implicant, TokenIndices};
pub use pairwise::{reduce_xor_pair, reduce_xnor_pair};
pub use permutations::permutations;
pub use prime_implicants::{Profile, prime_implicants};
pub use reduce_implicants::{combine_implicants, reduce_implicants};
pub use solver::{
    ResultWithProfile, simplify, simplify_los, simplify_los_with_profile, simplify_with_profile,
};
