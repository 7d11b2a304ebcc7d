//! Three-layer affine-gap grid (Gotoh).
//!
//! Every `(r, c)` owns three cells:
//! - M (diagonal layer): substitution edge from M `(r-1, c-1)`, then
//!   zero-cost closing edges from D `(r, c)` and R `(r, c)`;
//! - D (down layer, gap in `b`): extension from D `(r-1, c)` weighted
//!   `extend`, then opening from M `(r-1, c)` weighted `open`;
//! - R (right layer, gap in `a`): extension from R `(r, c-1)`, then opening
//!   from M `(r, c-1)`.
//!
//! D and R on the first row/column have no extension predecessor, so only
//! the opening edge exists there. Entry and exit taxis attach to the M layer.
//! Per coordinate, D and R are scanned before M because M's closing edges
//! read them.

use crate::cell::{CellId, Score};
use crate::coords::{GridCoords, Layer};
use crate::error::{AlignError, Result};
use crate::graph::Graph;
use crate::policy::TaxiPolicy;
use crate::schemes::grid::check_sequences;
use crate::scoring::Scoring;
use crate::traits::CoordinateScheme;

#[derive(Clone, Debug)]
pub struct AffineGrid<'a> {
    a: &'a [u8],
    b: &'a [u8],
    scoring: &'a Scoring,
    open: Score,
    extend: Score,
    taxi: TaxiPolicy,
    coords: GridCoords,
}

impl<'a> AffineGrid<'a> {
    /// Equal `open` and `extend` weights are accepted here and make the
    /// scheme score like the linear [`Grid`](crate::schemes::grid::Grid);
    /// [`GapModel::validate`](crate::policy::GapModel::validate) is stricter.
    ///
    /// # Errors
    /// Empty sequences, missing substitution scores, and an `extend` weight
    /// more severe than `open`.
    pub fn new(
        a: &'a [u8],
        b: &'a [u8],
        scoring: &'a Scoring,
        open: Score,
        extend: Score,
        taxi: TaxiPolicy,
    ) -> Result<Self> {
        if extend < open {
            return Err(AlignError::GapExtendTooSevere { open, extend });
        }
        check_sequences(a, b)?;
        scoring.check_covers(a, b)?;
        Ok(Self {
            a,
            b,
            scoring,
            open,
            extend,
            taxi,
            coords: GridCoords::new(a.len() + 1, b.len() + 1, Layer::ALL.len()),
        })
    }

    #[inline]
    pub fn coords(&self) -> &GridCoords {
        &self.coords
    }

    #[inline]
    fn id(&self, row: usize, col: usize, layer: Layer) -> CellId {
        self.coords.id(row, col, layer)
    }

    fn wire_down(&self, graph: &mut Graph, row: usize, col: usize) {
        if row == 0 {
            return;
        }
        let id = self.id(row, col, Layer::Down);
        if row > 1 {
            graph.add_incoming(id, self.id(row - 1, col, Layer::Down), self.extend);
        }
        graph.add_incoming(id, self.id(row - 1, col, Layer::Diagonal), self.open);
    }

    fn wire_right(&self, graph: &mut Graph, row: usize, col: usize) {
        if col == 0 {
            return;
        }
        let id = self.id(row, col, Layer::Right);
        if col > 1 {
            graph.add_incoming(id, self.id(row, col - 1, Layer::Right), self.extend);
        }
        graph.add_incoming(id, self.id(row, col - 1, Layer::Diagonal), self.open);
    }

    fn wire_diagonal(&self, graph: &mut Graph, row: usize, col: usize) {
        let id = self.id(row, col, Layer::Diagonal);
        if row > 0 && col > 0 {
            let w = self.scoring.score(self.a[row - 1], self.b[col - 1]);
            graph.add_incoming(id, self.id(row - 1, col - 1, Layer::Diagonal), w);
        }
        if row > 0 {
            graph.add_incoming(id, self.id(row, col, Layer::Down), 0);
        }
        if col > 0 {
            graph.add_incoming(id, self.id(row, col, Layer::Right), 0);
        }
        if self.taxi.enters(row, col) {
            graph.add_entry(id);
        }
    }
}

impl<'a> CoordinateScheme for AffineGrid<'a> {
    fn num_cells(&self) -> usize {
        self.coords.num_cells() + usize::from(self.taxi.has_exit())
    }

    fn source(&self) -> CellId {
        self.id(0, 0, Layer::Diagonal)
    }

    fn sink(&self) -> CellId {
        if self.taxi.has_exit() {
            self.coords.num_cells()
        } else {
            self.id(
                self.coords.last_row(),
                self.coords.last_col(),
                Layer::Diagonal,
            )
        }
    }

    fn wire(&self, graph: &mut Graph) {
        let (rows, cols) = (self.coords.rows(), self.coords.cols());
        for row in 0..rows {
            for col in 0..cols {
                self.wire_down(graph, row, col);
                self.wire_right(graph, row, col);
                self.wire_diagonal(graph, row, col);
            }
        }
        if self.taxi.has_exit() {
            let (last_row, last_col) = (self.coords.last_row(), self.coords.last_col());
            for row in 0..rows {
                for col in 0..cols {
                    if self.taxi.exits(row, col, last_row, last_col) {
                        graph.add_exit(self.id(row, col, Layer::Diagonal));
                    }
                }
            }
        }
    }

    fn scan_order(&self) -> Option<Vec<CellId>> {
        let (rows, cols) = (self.coords.rows(), self.coords.cols());
        let mut order = Vec::with_capacity(self.num_cells());
        for row in 0..rows {
            for col in 0..cols {
                if row > 0 {
                    order.push(self.id(row, col, Layer::Down));
                }
                if col > 0 {
                    order.push(self.id(row, col, Layer::Right));
                }
                order.push(self.id(row, col, Layer::Diagonal));
            }
        }
        if self.taxi.has_exit() {
            order.push(self.sink());
        }
        Some(order)
    }
}
