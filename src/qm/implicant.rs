//! Implicant: symbolic terms over the alphabet `{'0','1','-','^','~'}`

use std::fmt;
use std::str::FromStr;

use super::error::QmError;

/// State of a single position in an implicant.
///
/// Variant order follows the ASCII order of the display characters
/// ('-' < '0' < '1' < '^' < '~'); the greedy cover tie-break relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BitState {
    DontCare,
    Zero,
    One,
    Xor,
    Xnor,
}

impl BitState {
    pub fn as_char(self) -> char {
        match self {
            BitState::DontCare => '-',
            BitState::Zero => '0',
            BitState::One => '1',
            BitState::Xor => '^',
            BitState::Xnor => '~',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(BitState::DontCare),
            '0' => Some(BitState::Zero),
            '1' => Some(BitState::One),
            '^' => Some(BitState::Xor),
            '~' => Some(BitState::Xnor),
            _ => None,
        }
    }
}

/// Index lists of the `'1'`, `'0'`, `'^'`, `'~'` and `'-'` positions of an
/// implicant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenIndices {
    pub ones: Vec<usize>,
    pub zeros: Vec<usize>,
    pub xors: Vec<usize>,
    pub xnors: Vec<usize>,
    pub dont_cares: Vec<usize>,
}

/// An implicant: a fixed-width term, MSB first (position 0 is the most
/// significant bit).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Implicant {
    bits: Vec<BitState>,
}

impl Implicant {
    pub fn new(bits: Vec<BitState>) -> Self {
        Self { bits }
    }

    /// Convert an integer minterm to a pure `0`/`1` implicant of width
    /// `n_bits`. Only the low `n_bits` bits of `minterm` are used.
    pub fn from_minterm(minterm: u64, n_bits: usize) -> Self {
        let mut bits = Vec::with_capacity(n_bits);
        for i in 0..n_bits {
            if i < u64::BITS as usize && (minterm >> i) & 1 == 1 {
                bits.push(BitState::One);
            } else {
                bits.push(BitState::Zero);
            }
        }
        bits.reverse(); // MSB first

        Self { bits }
    }

    /// The all-dont-care implicant of width `n_bits` (the tautology).
    pub fn tautology(n_bits: usize) -> Self {
        Self {
            bits: vec![BitState::DontCare; n_bits],
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> BitState {
        self.bits[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = BitState> + '_ {
        self.bits.iter().copied()
    }

    /// Copy of `self` with position `index` replaced by `state`.
    pub fn with_bit(&self, index: usize, state: BitState) -> Self {
        let mut bits = self.bits.clone();
        bits[index] = state;
        Self { bits }
    }

    /// Copy of `self` with every `^` turned into `~` and vice versa.
    pub fn swap_parities(&self) -> Self {
        let bits = self
            .bits
            .iter()
            .map(|&b| match b {
                BitState::Xor => BitState::Xnor,
                BitState::Xnor => BitState::Xor,
                other => other,
            })
            .collect();
        Self { bits }
    }

    pub fn count(&self, state: BitState) -> usize {
        self.bits.iter().filter(|&&b| b == state).count()
    }

    pub fn count_ones(&self) -> usize {
        self.count(BitState::One)
    }

    pub fn count_xors(&self) -> usize {
        self.count(BitState::Xor)
    }

    pub fn count_xnors(&self) -> usize {
        self.count(BitState::Xnor)
    }

    /// True if the term is a pure minterm (only `0` and `1` positions).
    pub fn is_minterm(&self) -> bool {
        self.bits
            .iter()
            .all(|&b| matches!(b, BitState::Zero | BitState::One))
    }

    /// True if the term contains both `^` and `~` positions.
    pub fn has_mixed_parity(&self) -> bool {
        self.count_xors() > 0 && self.count_xnors() > 0
    }

    pub fn token_indices(&self) -> TokenIndices {
        let mut indices = TokenIndices::default();
        for (i, &b) in self.bits.iter().enumerate() {
            match b {
                BitState::One => indices.ones.push(i),
                BitState::Zero => indices.zeros.push(i),
                BitState::Xor => indices.xors.push(i),
                BitState::Xnor => indices.xnors.push(i),
                BitState::DontCare => indices.dont_cares.push(i),
            }
        }
        indices
    }

    /// Weighted literal count used as a merge tiebreaker; lower is simpler.
    pub fn complexity(&self) -> f64 {
        self.bits
            .iter()
            .map(|&b| match b {
                BitState::One => 1.0,
                BitState::Zero => 1.5,
                BitState::Xor => 1.25,
                BitState::Xnor => 1.75,
                BitState::DontCare => 0.0,
            })
            .sum()
    }

    /// Render the implicant as a product term over `names`, e.g. `AB'` or
    /// `B'(A ⊕ C)`. The empty product renders as `1`.
    pub fn to_expression(&self, names: &[String]) -> String {
        let mut result = String::new();
        let mut xor_vars = Vec::new();
        let mut xnor_vars = Vec::new();

        for (i, &b) in self.bits.iter().enumerate() {
            match b {
                BitState::One => result.push_str(&names[i]),
                BitState::Zero => {
                    result.push_str(&names[i]);
                    result.push('\'');
                }
                BitState::Xor => xor_vars.push(names[i].as_str()),
                BitState::Xnor => xnor_vars.push(names[i].as_str()),
                BitState::DontCare => {}
            }
        }

        if !xor_vars.is_empty() {
            result.push('(');
            result.push_str(&xor_vars.join(" ⊕ "));
            result.push(')');
        }
        if !xnor_vars.is_empty() {
            result.push('(');
            result.push_str(&xnor_vars.join(" ⊙ "));
            result.push(')');
        }

        if result.is_empty() {
            "1".to_string()
        } else {
            result
        }
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            write!(f, "{}", b.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for Implicant {
    type Err = QmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = Vec::with_capacity(s.len());
        for (position, character) in s.chars().enumerate() {
            match BitState::from_char(character) {
                Some(b) => bits.push(b),
                None => return Err(QmError::InvalidCharacter { character, position }),
            }
        }
        let term = Self { bits };
        if term.has_mixed_parity() {
            return Err(QmError::MixedParity {
                term: term.to_string(),
            });
        }
        Ok(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minterm_msb_first() {
        assert_eq!(Implicant::from_minterm(0b0110, 4).to_string(), "0110");
        assert_eq!(Implicant::from_minterm(1, 4).to_string(), "0001");
        assert_eq!(Implicant::from_minterm(8, 4).to_string(), "1000");
    }

    #[test]
    fn test_from_minterm_truncates_high_bits() {
        assert_eq!(Implicant::from_minterm(0b10110, 4).to_string(), "0110");
    }

    #[test]
    fn test_parse_round_trip() {
        for s in ["0101", "01-1", "--^^", "0~~~", "----"] {
            let term: Implicant = s.parse().unwrap();
            assert_eq!(term.to_string(), s);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_character() {
        let err = "01#1".parse::<Implicant>().unwrap_err();
        assert_eq!(
            err,
            QmError::InvalidCharacter {
                character: '#',
                position: 2
            }
        );
    }

    #[test]
    fn test_parse_rejects_mixed_parity() {
        let err = "^~00".parse::<Implicant>().unwrap_err();
        assert!(matches!(err, QmError::MixedParity { .. }));
    }

    #[test]
    fn test_ordering_matches_character_order() {
        // '-' < '0' < '1' < '^' < '~' as in the reference's string sort.
        let mut terms: Vec<Implicant> = ["10", "-1", "^^", "~~", "01"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        terms.sort();
        let sorted: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
        assert_eq!(sorted, vec!["-1", "01", "10", "^^", "~~"]);
    }

    #[test]
    fn test_token_indices() {
        let term: Implicant = "10^-^".parse().unwrap();
        let indices = term.token_indices();
        assert_eq!(indices.ones, vec![0]);
        assert_eq!(indices.zeros, vec![1]);
        assert_eq!(indices.xors, vec![2, 4]);
        assert!(indices.xnors.is_empty());
        assert_eq!(indices.dont_cares, vec![3]);
    }

    #[test]
    fn test_complexity_weights() {
        assert_eq!("1".parse::<Implicant>().unwrap().complexity(), 1.0);
        assert_eq!("0".parse::<Implicant>().unwrap().complexity(), 1.5);
        assert_eq!("^^".parse::<Implicant>().unwrap().complexity(), 2.5);
        assert_eq!("~~".parse::<Implicant>().unwrap().complexity(), 3.5);
        assert_eq!("--".parse::<Implicant>().unwrap().complexity(), 0.0);
        assert_eq!("10-".parse::<Implicant>().unwrap().complexity(), 2.5);
    }

    #[test]
    fn test_swap_parities() {
        let term: Implicant = "0^^1".parse().unwrap();
        assert_eq!(term.swap_parities().to_string(), "0~~1");
        assert_eq!(term.swap_parities().swap_parities(), term);
    }

    #[test]
    fn test_to_expression() {
        let names: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        let term: Implicant = "10--".parse().unwrap();
        assert_eq!(term.to_expression(&names), "AB'");
        let term: Implicant = "--^^".parse().unwrap();
        assert_eq!(term.to_expression(&names), "(C ⊕ D)");
        let term: Implicant = "0~-~".parse().unwrap();
        assert_eq!(term.to_expression(&names), "A'(B ⊙ D)");
        let term: Implicant = "----".parse().unwrap();
        assert_eq!(term.to_expression(&names), "1");
    }
}
