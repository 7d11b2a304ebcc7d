//! Substitution scoring for the diagonal (match/mismatch) edges.
//!
//! [`Scoring`] is either a flat match/mismatch pair, used for nucleotides and
//! edit distance, or a full [`SubstitutionMatrix`] such as BLOSUM62. Scoring
//! is passed to the schemes as an immutable value; nothing here is global.

use crate::cell::Score;
use crate::error::{AlignError, Result};

const ABSENT: u8 = u8::MAX;

/// Residue order of the built-in protein matrices.
pub const AMINO_ACIDS: &[u8; 24] = b"ARNDCQEGHILKMFPSTWYVBZX*";

/// A character-pair scoring table over a fixed alphabet.
///
/// Tables may be asymmetric: the score of `(a, b)` is looked up with `a`
/// from the first sequence and `b` from the second. Lookups are exact, so
/// lowercase residues are missing from the built-in uppercase tables.
#[derive(Clone)]
pub struct SubstitutionMatrix {
    name: String,
    index: [u8; 256],
    dim: usize,
    scores: Vec<Score>,
}

impl SubstitutionMatrix {
    /// Build a table from its alphabet and a row-major `dim * dim` score grid.
    ///
    /// # Panics
    /// Panics if the alphabet repeats a symbol, has more than 255 symbols, or
    /// `scores.len() != alphabet.len()^2`.
    pub fn from_table(name: impl Into<String>, alphabet: &[u8], scores: Vec<Score>) -> Self {
        let dim = alphabet.len();
        assert!(dim < ABSENT as usize, "alphabet too large");
        assert_eq!(scores.len(), dim * dim, "score table must be {dim}x{dim}");
        let mut index = [ABSENT; 256];
        for (i, &symbol) in alphabet.iter().enumerate() {
            assert_eq!(
                index[symbol as usize], ABSENT,
                "duplicate symbol {:?}",
                symbol as char
            );
            index[symbol as usize] = i as u8;
        }
        Self {
            name: name.into(),
            index,
            dim,
            scores,
        }
    }

    /// BLOSUM62, NCBI values.
    pub fn blosum62() -> Self {
        Self::from_table("BLOSUM62", AMINO_ACIDS, BLOSUM62.to_vec())
    }

    /// PAM250, NCBI/Dayhoff values.
    pub fn pam250() -> Self {
        Self::from_table("PAM250", AMINO_ACIDS, PAM250.to_vec())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Score for `a` in the first sequence against `b` in the second.
    pub fn get(&self, a: u8, b: u8) -> Option<Score> {
        let i = self.index[a as usize];
        let j = self.index[b as usize];
        if i == ABSENT || j == ABSENT {
            return None;
        }
        Some(self.scores[i as usize * self.dim + j as usize])
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.index[symbol as usize] != ABSENT
    }

    fn worst(&self) -> Score {
        self.scores.iter().copied().min().unwrap_or(0)
    }
}

impl std::fmt::Debug for SubstitutionMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubstitutionMatrix")
            .field("name", &self.name)
            .field("dim", &self.dim)
            .finish()
    }
}

/// Diagonal edge weights.
#[derive(Clone, Debug)]
pub enum Scoring {
    /// `matched` for equal residues, `mismatched` otherwise.
    Uniform { matched: Score, mismatched: Score },
    Matrix(SubstitutionMatrix),
}

impl Scoring {
    pub fn uniform(matched: Score, mismatched: Score) -> Self {
        Scoring::Uniform {
            matched,
            mismatched,
        }
    }

    /// Unit-cost edit scoring: matches free, everything else `-1`.
    pub fn edit() -> Self {
        Self::uniform(0, -1)
    }

    /// Weight of the diagonal edge pairing `a` with `b`.
    ///
    /// Pairs missing from a matrix score as its worst entry; call
    /// [`Scoring::check_covers`] first to rule that out.
    pub fn score(&self, a: u8, b: u8) -> Score {
        match self {
            Scoring::Uniform {
                matched,
                mismatched,
            } => {
                if a == b {
                    *matched
                } else {
                    *mismatched
                }
            }
            Scoring::Matrix(m) => m.get(a, b).unwrap_or_else(|| m.worst()),
        }
    }

    /// Fail with [`AlignError::MissingScore`] if some residue pair of `a`
    /// against `b` has no table entry.
    pub fn check_covers(&self, a: &[u8], b: &[u8]) -> Result<()> {
        let Scoring::Matrix(m) = self else {
            return Ok(());
        };
        let mut seen_a = [false; 256];
        let mut seen_b = [false; 256];
        for &x in a {
            seen_a[x as usize] = true;
        }
        for &y in b {
            seen_b[y as usize] = true;
        }
        for x in (0..=255u8).filter(|&x| seen_a[x as usize]) {
            for y in (0..=255u8).filter(|&y| seen_b[y as usize]) {
                if m.get(x, y).is_none() {
                    return Err(AlignError::MissingScore {
                        a: x as char,
                        b: y as char,
                    });
                }
            }
        }
        Ok(())
    }
}

impl From<SubstitutionMatrix> for Scoring {
    fn from(m: SubstitutionMatrix) -> Self {
        Scoring::Matrix(m)
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self::edit()
    }
}

#[rustfmt::skip]
const BLOSUM62: [Score; 24 * 24] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0, -2, -1,  0, -4, // A
    -1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3, -1,  0, -1, -4, // R
    -2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3,  3,  0, -1, -4, // N
    -2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3,  4,  1, -1, -4, // D
     0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1, -3, -3, -2, -4, // C
    -1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2,  0,  3, -1, -4, // Q
    -1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4, // E
     0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3, -1, -2, -1, -4, // G
    -2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3,  0,  0, -1, -4, // H
    -1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3, -3, -3, -1, -4, // I
    -1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1, -4, -3, -1, -4, // L
    -1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2,  0,  1, -1, -4, // K
    -1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1, -3, -1, -1, -4, // M
    -2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1, -3, -3, -1, -4, // F
    -1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2, -2, -1, -2, -4, // P
     1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2,  0,  0,  0, -4, // S
     0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0, -1, -1,  0, -4, // T
    -3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3, -4, -3, -2, -4, // W
    -2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1, -3, -2, -1, -4, // Y
     0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4, -3, -2, -1, -4, // V
    -2, -1,  3,  4, -3,  0,  1, -1,  0, -3, -4,  0, -3, -3, -2,  0, -1, -4, -3, -3,  4,  1, -1, -4, // B
    -1,  0,  0,  1, -3,  3,  4, -2,  0, -3, -3,  1, -1, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4, // Z
     0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -2,  0,  0, -2, -1, -1, -1, -1, -1, -4, // X
    -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1, // *
];

#[rustfmt::skip]
const PAM250: [Score; 24 * 24] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   *
     2, -2,  0,  0, -2,  0,  0,  1, -1, -1, -2, -1, -1, -3,  1,  1,  1, -6, -3,  0,  0,  0,  0, -8, // A
    -2,  6,  0, -1, -4,  1, -1, -3,  2, -2, -3,  3,  0, -4,  0,  0, -1,  2, -4, -2, -1,  0, -1, -8, // R
     0,  0,  2,  2, -4,  1,  1,  0,  2, -2, -3,  1, -2, -3,  0,  1,  0, -4, -2, -2,  2,  1,  0, -8, // N
     0, -1,  2,  4, -5,  2,  3,  1,  1, -2, -4,  0, -3, -6, -1,  0,  0, -7, -4, -2,  3,  3, -1, -8, // D
    -2, -4, -4, -5, 12, -5, -5, -3, -3, -2, -6, -5, -5, -4, -3,  0, -2, -8,  0, -2, -4, -5, -3, -8, // C
     0,  1,  1,  2, -5,  4,  2, -1,  3, -2, -2,  1, -1, -5,  0, -1, -1, -5, -4, -2,  1,  3, -1, -8, // Q
     0, -1,  1,  3, -5,  2,  4,  0,  1, -2, -3,  0, -2, -5, -1,  0,  0, -7, -4, -2,  3,  3, -1, -8, // E
     1, -3,  0,  1, -3, -1,  0,  5, -2, -3, -4, -2, -3, -5,  0,  1,  0, -7, -5, -1,  0,  0, -1, -8, // G
    -1,  2,  2,  1, -3,  3,  1, -2,  6, -2, -2,  0, -2, -2,  0, -1, -1, -3,  0, -2,  1,  2, -1, -8, // H
    -1, -2, -2, -2, -2, -2, -2, -3, -2,  5,  2, -2,  2,  1, -2, -1,  0, -5, -1,  4, -2, -2, -1, -8, // I
    -2, -3, -3, -4, -6, -2, -3, -4, -2,  2,  6, -3,  4,  2, -3, -3, -2, -2, -1,  2, -3, -3, -1, -8, // L
    -1,  3,  1,  0, -5,  1,  0, -2,  0, -2, -3,  5,  0, -5, -1,  0,  0, -3, -4, -2,  1,  0, -1, -8, // K
    -1,  0, -2, -3, -5, -1, -2, -3, -2,  2,  4,  0,  6,  0, -2, -2, -1, -4, -2,  2, -2, -2, -1, -8, // M
    -3, -4, -3, -6, -4, -5, -5, -5, -2,  1,  2, -5,  0,  9, -5, -3, -3,  0,  7, -1, -4, -5, -2, -8, // F
     1,  0,  0, -1, -3,  0, -1,  0,  0, -2, -3, -1, -2, -5,  6,  1,  0, -6, -5, -1, -1,  0, -1, -8, // P
     1,  0,  1,  0,  0, -1,  0,  1, -1, -1, -3,  0, -2, -3,  1,  2,  1, -2, -3, -1,  0,  0,  0, -8, // S
     1, -1,  0,  0, -2, -1,  0,  0, -1,  0, -2,  0, -1, -3,  0,  1,  3, -5, -3,  0,  0, -1,  0, -8, // T
    -6,  2, -4, -7, -8, -5, -7, -7, -3, -5, -2, -3, -4,  0, -6, -2, -5, 17,  0, -6, -5, -6, -4, -8, // W
    -3, -4, -2, -4,  0, -4, -4, -5,  0, -1, -1, -4, -2,  7, -5, -3, -3,  0, 10, -2, -3, -4, -2, -8, // Y
     0, -2, -2, -2, -2, -2, -2, -1, -2,  4,  2, -2,  2, -1, -1, -1,  0, -6, -2,  4, -2, -2, -1, -8, // V
     0, -1,  2,  3, -4,  1,  3,  0,  1, -2, -3,  1, -2, -4, -1,  0,  0, -5, -3, -2,  3,  2, -1, -8, // B
     0,  0,  1,  3, -5,  3,  3,  0,  2, -2, -3,  0, -2, -5,  0,  0, -1, -6, -4, -2,  2,  3, -1, -8, // Z
     0, -1,  0, -1, -3, -1, -1, -1, -1, -1, -1, -1, -1, -2, -1,  0,  0, -4, -2, -1, -1, -1, -1, -8, // X
    -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,  1, // *
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blosum62_spot_checks() {
        let m = SubstitutionMatrix::blosum62();
        assert_eq!(m.get(b'A', b'A'), Some(4));
        assert_eq!(m.get(b'W', b'W'), Some(11));
        assert_eq!(m.get(b'A', b'R'), Some(-1));
        assert_eq!(m.get(b'R', b'A'), Some(-1));
        assert_eq!(m.get(b'E', b'Y'), Some(-2));
        assert_eq!(m.get(b'a', b'A'), None);
    }

    #[test]
    fn pam250_spot_checks() {
        let m = SubstitutionMatrix::pam250();
        assert_eq!(m.get(b'A', b'A'), Some(2));
        assert_eq!(m.get(b'W', b'W'), Some(17));
        assert_eq!(m.get(b'C', b'W'), Some(-8));
    }

    #[test]
    fn built_in_tables_are_symmetric() {
        for m in [SubstitutionMatrix::blosum62(), SubstitutionMatrix::pam250()] {
            for &x in AMINO_ACIDS {
                for &y in AMINO_ACIDS {
                    assert_eq!(m.get(x, y), m.get(y, x), "{} {x} {y}", m.name());
                }
            }
        }
    }

    #[test]
    fn uniform_scoring() {
        let s = Scoring::uniform(2, -3);
        assert_eq!(s.score(b'A', b'A'), 2);
        assert_eq!(s.score(b'A', b'C'), -3);
        assert!(s.check_covers(b"anything", b"goes").is_ok());
    }

    #[test]
    fn asymmetric_custom_table() {
        let m = SubstitutionMatrix::from_table("tiny", b"XY", vec![1, -2, -5, 3]);
        let s = Scoring::from(m);
        assert_eq!(s.score(b'X', b'Y'), -2);
        assert_eq!(s.score(b'Y', b'X'), -5);
        assert_eq!(s.score(b'Z', b'X'), -5);
    }

    #[test]
    fn missing_pair_is_reported() {
        let s = Scoring::from(SubstitutionMatrix::blosum62());
        assert!(s.check_covers(b"PLEASANTLY", b"MEANLY").is_ok());
        assert_eq!(
            s.check_covers(b"ACGU", b"AC"),
            Err(AlignError::MissingScore { a: 'U', b: 'A' })
        );
    }
}
