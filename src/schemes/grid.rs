//! Rectangular alignment grid with linear gap costs.
//!
//! Rows follow sequence `a`, columns follow sequence `b`; cell `(r, c)` is
//! the state after consuming `a[..r]` and `b[..c]`. Each cell has up to three
//! step edges, added in this order:
//! - diagonal from `(r-1, c-1)`, weighted by the substitution score,
//! - vertical from `(r-1, c)`, weighted `indel` (gap in `b`),
//! - horizontal from `(r, c-1)`, weighted `indel` (gap in `a`),
//!
//! followed by an entry taxi from the source where the [`TaxiPolicy`] allows.
//! With any exit taxi a virtual sink follows the grid and collects zero-cost
//! exits from the admissible cells in row-major order.

use crate::cell::{CellId, Score};
use crate::coords::{GridCoords, Layer};
use crate::error::{AlignError, Result};
use crate::graph::Graph;
use crate::policy::TaxiPolicy;
use crate::scoring::Scoring;
use crate::traits::CoordinateScheme;

#[derive(Clone, Debug)]
pub struct Grid<'a> {
    a: &'a [u8],
    b: &'a [u8],
    scoring: &'a Scoring,
    indel: Score,
    taxi: TaxiPolicy,
    coords: GridCoords,
}

impl<'a> Grid<'a> {
    /// Validate the inputs and lay out a `(|a|+1) x (|b|+1)` grid.
    ///
    /// # Errors
    /// [`AlignError::EmptySequence`] if either sequence is empty,
    /// [`AlignError::NonAsciiResidue`] for bytes above `0x7f`, and
    /// [`AlignError::MissingScore`] if the scoring table lacks a needed pair.
    pub fn new(
        a: &'a [u8],
        b: &'a [u8],
        scoring: &'a Scoring,
        indel: Score,
        taxi: TaxiPolicy,
    ) -> Result<Self> {
        check_sequences(a, b)?;
        scoring.check_covers(a, b)?;
        Ok(Self {
            a,
            b,
            scoring,
            indel,
            taxi,
            coords: GridCoords::new(a.len() + 1, b.len() + 1, 1),
        })
    }

    #[inline]
    pub fn coords(&self) -> &GridCoords {
        &self.coords
    }

    #[inline]
    fn id(&self, row: usize, col: usize) -> CellId {
        self.coords.id(row, col, Layer::Diagonal)
    }
}

pub(crate) fn check_sequences(a: &[u8], b: &[u8]) -> Result<()> {
    for (which, seq) in [("a", a), ("b", b)] {
        if seq.is_empty() {
            return Err(AlignError::EmptySequence { which });
        }
        if let Some(index) = seq.iter().position(|byte| !byte.is_ascii()) {
            return Err(AlignError::NonAsciiResidue {
                which,
                index,
                byte: seq[index],
            });
        }
    }
    Ok(())
}

impl<'a> CoordinateScheme for Grid<'a> {
    fn num_cells(&self) -> usize {
        self.coords.num_cells() + usize::from(self.taxi.has_exit())
    }

    fn source(&self) -> CellId {
        self.id(0, 0)
    }

    fn sink(&self) -> CellId {
        if self.taxi.has_exit() {
            self.coords.num_cells()
        } else {
            self.id(self.coords.last_row(), self.coords.last_col())
        }
    }

    fn wire(&self, graph: &mut Graph) {
        let (rows, cols) = (self.coords.rows(), self.coords.cols());
        for row in 0..rows {
            for col in 0..cols {
                let id = self.id(row, col);
                if row > 0 && col > 0 {
                    let w = self.scoring.score(self.a[row - 1], self.b[col - 1]);
                    graph.add_incoming(id, self.id(row - 1, col - 1), w);
                }
                if row > 0 {
                    graph.add_incoming(id, self.id(row - 1, col), self.indel);
                }
                if col > 0 {
                    graph.add_incoming(id, self.id(row, col - 1), self.indel);
                }
                if self.taxi.enters(row, col) {
                    graph.add_entry(id);
                }
            }
        }
        if self.taxi.has_exit() {
            let (last_row, last_col) = (self.coords.last_row(), self.coords.last_col());
            for row in 0..rows {
                for col in 0..cols {
                    if self.taxi.exits(row, col, last_row, last_col) {
                        graph.add_exit(self.id(row, col));
                    }
                }
            }
        }
    }

    /// First row, then first column, then the interior row by row. Every
    /// interior cell reads only cells scanned before it.
    fn scan_order(&self) -> Option<Vec<CellId>> {
        let (rows, cols) = (self.coords.rows(), self.coords.cols());
        let mut order = Vec::with_capacity(self.num_cells());
        order.extend((0..cols).map(|col| self.id(0, col)));
        order.extend((1..rows).map(|row| self.id(row, 0)));
        for row in 1..rows {
            order.extend((1..cols).map(|col| self.id(row, col)));
        }
        if self.taxi.has_exit() {
            order.push(self.sink());
        }
        Some(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DagEngine;

    #[test]
    fn edit_distance_references() {
        let scoring = Scoring::edit();
        let grid = Grid::new(b"AC", b"AC", &scoring, -1, TaxiPolicy::GLOBAL).unwrap();
        assert_eq!(DagEngine::new(grid).run().unwrap().score(), 0);
        let grid = Grid::new(b"AC", b"AG", &scoring, -1, TaxiPolicy::GLOBAL).unwrap();
        assert_eq!(DagEngine::new(grid).run().unwrap().score(), -1);
    }

    #[test]
    fn first_row_and_column_accumulate_indels() {
        let scoring = Scoring::uniform(1, -1);
        let grid = Grid::new(b"GAT", b"TA", &scoring, -2, TaxiPolicy::GLOBAL).unwrap();
        let solution = DagEngine::new(grid.clone()).run().unwrap();
        let g = solution.graph();
        assert_eq!(g.score(grid.id(0, 2)), -4);
        assert_eq!(g.score(grid.id(3, 0)), -6);
    }

    #[test]
    fn sink_is_virtual_only_with_exits() {
        let scoring = Scoring::edit();
        let global = Grid::new(b"AA", b"A", &scoring, -1, TaxiPolicy::GLOBAL).unwrap();
        assert_eq!(global.num_cells(), 6);
        assert_eq!(global.sink(), 5);
        let local = Grid::new(b"AA", b"A", &scoring, -1, TaxiPolicy::LOCAL).unwrap();
        assert_eq!(local.num_cells(), 7);
        assert_eq!(local.sink(), 6);
        assert_eq!(local.scan_order().unwrap().len(), 7);
    }

    #[test]
    fn empty_input_is_rejected() {
        let scoring = Scoring::edit();
        assert_eq!(
            Grid::new(b"", b"A", &scoring, -1, TaxiPolicy::GLOBAL).unwrap_err(),
            AlignError::EmptySequence { which: "a" }
        );
        assert_eq!(
            Grid::new(b"A", b"", &scoring, -1, TaxiPolicy::GLOBAL).unwrap_err(),
            AlignError::EmptySequence { which: "b" }
        );
    }
}
