//! Decoding a grid path into a pairwise alignment.
//!
//! Consecutive ids on a path differ by a constant per move once the layer
//! offset is removed: `+1` is a horizontal move, `+cols` a vertical one and
//! `+cols + 1` a diagonal one. A delta of `0` is a layer change inside one
//! coordinate (closing a gap in the affine grid) and emits nothing.

use std::fmt;
use std::ops::Range;

use crate::cell::{CellId, Score};
use crate::coords::GridCoords;
use crate::graph::Path;

/// Default gap symbol.
pub const GAP: char = '-';

/// One alignment column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Consume one residue of each sequence (match or substitution).
    Diagonal,
    /// Consume a residue of `a` against a gap (deletion).
    Vertical,
    /// Consume a residue of `b` against a gap (insertion).
    Horizontal,
}

/// An optimal pairwise alignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub score: Score,
    pub aligned_a: String,
    pub aligned_b: String,
    pub moves: Vec<Move>,
    /// Part of `a` covered by the alignment.
    pub a_range: Range<usize>,
    /// Part of `b` covered by the alignment.
    pub b_range: Range<usize>,
}

impl Alignment {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.score)?;
        writeln!(f, "{}", self.aligned_a)?;
        write!(f, "{}", self.aligned_b)
    }
}

/// Translate consecutive path cells into moves.
///
/// # Panics
/// Panics if two consecutive cells are not one move apart, which means the
/// path did not come from a grid with these coordinates.
pub fn decode_moves(cells: &[CellId], coords: &GridCoords) -> Vec<Move> {
    let cols = coords.cols();
    let mut moves = Vec::with_capacity(cells.len().saturating_sub(1));
    for pair in cells.windows(2) {
        let prev = coords.normalize(pair[0]);
        let next = coords.normalize(pair[1]);
        match next.checked_sub(prev) {
            Some(0) => {}
            Some(1) => moves.push(Move::Horizontal),
            Some(d) if d == cols => moves.push(Move::Vertical),
            Some(d) if d == cols + 1 => moves.push(Move::Diagonal),
            _ => panic!("cells {} and {} are not one move apart", pair[0], pair[1]),
        }
    }
    moves
}

/// Decode a grid path into aligned strings, dropping taxi endpoints first.
///
/// Each residue byte becomes one `char`, so `a` and `b` must be ASCII. The
/// grid constructors reject anything else.
pub fn decode(path: &Path, coords: &GridCoords, a: &[u8], b: &[u8], gap: char) -> Alignment {
    let cells = path.trimmed();
    let (Some(&first), Some(&last)) = (cells.first(), cells.last()) else {
        return Alignment {
            score: path.weight(),
            aligned_a: String::new(),
            aligned_b: String::new(),
            moves: Vec::new(),
            a_range: 0..0,
            b_range: 0..0,
        };
    };
    let start = coords.normalize(first);
    let end = coords.normalize(last);
    let cols = coords.cols();
    let (start_row, start_col) = (start / cols, start % cols);
    let (end_row, end_col) = (end / cols, end % cols);

    let moves = decode_moves(cells, coords);
    let mut aligned_a = String::with_capacity(moves.len());
    let mut aligned_b = String::with_capacity(moves.len());
    let (mut row, mut col) = (start_row, start_col);
    for mv in &moves {
        match mv {
            Move::Diagonal => {
                aligned_a.push(a[row] as char);
                aligned_b.push(b[col] as char);
                row += 1;
                col += 1;
            }
            Move::Vertical => {
                aligned_a.push(a[row] as char);
                aligned_b.push(gap);
                row += 1;
            }
            Move::Horizontal => {
                aligned_a.push(gap);
                aligned_b.push(b[col] as char);
                col += 1;
            }
        }
    }
    debug_assert_eq!((row, col), (end_row, end_col));

    Alignment {
        score: path.weight(),
        aligned_a,
        aligned_b,
        moves,
        a_range: start_row..end_row,
        b_range: start_col..end_col,
    }
}
