use std::fmt;

/// Errors reported at the public API boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QmError {
    /// A term contained a character outside `{'0','1','-','^','~'}`
    InvalidCharacter { character: char, position: usize },
    /// A term mixed `^` and `~` positions
    MixedParity { term: String },
    /// An input minterm contained an operator character
    NotAMinterm { term: String },
}

impl fmt::Display for QmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QmError::InvalidCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {}",
                    character, position
                )
            }
            QmError::MixedParity { term } => {
                write!(f, "term '{}' mixes XOR and XNOR positions", term)
            }
            QmError::NotAMinterm { term } => {
                write!(f, "input minterm '{}' must contain only '0' and '1'", term)
            }
        }
    }
}

impl std::error::Error for QmError {}
