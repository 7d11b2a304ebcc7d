//! Flat cell arena and path reconstruction.

use crate::cell::{Cell, CellId, Edge, EdgeKind, Score};
use crate::error::{AlignError, Result};

/// All cells of one alignment DAG, indexed by id, with a designated source
/// and sink.
///
/// Cells are created once up front; edges are wired by a
/// [`CoordinateScheme`](crate::traits::CoordinateScheme) and scores are
/// written during a single computation pass.
#[derive(Clone, Debug)]
pub struct Graph {
    cells: Vec<Cell>,
    source: CellId,
    sink: CellId,
}

impl Graph {
    /// Create `num_cells` default cells. The source starts reached with score 0.
    ///
    /// # Panics
    /// Panics if `source` or `sink` is out of range.
    pub fn new(num_cells: usize, source: CellId, sink: CellId) -> Self {
        assert!(source < num_cells, "source {source} out of range");
        assert!(sink < num_cells, "sink {sink} out of range");
        let mut cells = vec![Cell::default(); num_cells];
        cells[source].mark_source();
        Self {
            cells,
            source,
            sink,
        }
    }

    #[inline]
    pub fn source(&self) -> CellId {
        self.source
    }

    #[inline]
    pub fn sink(&self) -> CellId {
        self.sink
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id]
    }

    #[inline]
    pub fn score(&self, id: CellId) -> Score {
        self.cells[id].score
    }

    /// Add a step edge `from -> to`.
    pub fn add_incoming(&mut self, to: CellId, from: CellId, weight: Score) {
        self.cells[to].add_incoming(Edge::step(from, weight));
    }

    /// Let `to` be entered from the source at zero cost.
    ///
    /// Taxi edges are appended without a duplicate check; a repeated call
    /// adds a parallel edge that changes neither scores nor tie-breaks.
    pub fn add_entry(&mut self, to: CellId) {
        let from = self.source;
        self.cells[to].push_taxi(Edge {
            from,
            weight: 0,
            kind: EdgeKind::Entry,
        });
    }

    /// Let `from` leave for the sink at zero cost.
    pub fn add_exit(&mut self, from: CellId) {
        let to = self.sink;
        self.cells[to].push_taxi(Edge {
            from,
            weight: 0,
            kind: EdgeKind::Exit,
        });
    }

    /// Recompute the score of `id` from its incoming edges.
    ///
    /// Returns whether the cell is reached afterwards. The source is never
    /// relaxed.
    pub fn relax(&mut self, id: CellId) -> bool {
        if id == self.source {
            return true;
        }
        let best = self.cells[id].best_incoming(&self.cells);
        let cell = &mut self.cells[id];
        cell.settle(best);
        cell.reached
    }

    /// Outgoing adjacency derived from the incoming edge lists, in
    /// compressed-row form: targets of `u` are `targets[offsets[u]..offsets[u + 1]]`.
    pub(crate) fn outgoing(&self) -> (Vec<usize>, Vec<CellId>) {
        let n = self.cells.len();
        let mut offsets = vec![0usize; n + 1];
        for cell in &self.cells {
            for edge in &cell.incoming {
                offsets[edge.from + 1] += 1;
            }
        }
        for u in 0..n {
            offsets[u + 1] += offsets[u];
        }
        let mut fill = offsets.clone();
        let mut targets = vec![0; offsets[n]];
        for (to, cell) in self.cells.iter().enumerate() {
            for edge in &cell.incoming {
                targets[fill[edge.from]] = to;
                fill[edge.from] += 1;
            }
        }
        (offsets, targets)
    }

    /// Walk predecessors from the sink back to the source.
    ///
    /// Fails with [`AlignError::Unreachable`] if the chain breaks or does not
    /// end at the source within `len()` steps.
    pub fn backtrack(&self) -> Result<Path> {
        let unreachable = AlignError::Unreachable {
            source_id: self.source,
            sink_id: self.sink,
        };
        if !self.cells[self.sink].reached {
            return Err(unreachable);
        }
        let mut cells = Vec::new();
        let mut current = self.sink;
        loop {
            cells.push(current);
            if current == self.source {
                break;
            }
            if cells.len() > self.cells.len() {
                return Err(unreachable);
            }
            match self.cells[current].predecessor() {
                Some(prev) => current = prev,
                None => return Err(unreachable),
            }
        }
        cells.reverse();

        let kind_into = |id: CellId| self.cells[id].via.map(|e| e.kind);
        let leading_taxi = cells.len() > 1 && kind_into(cells[1]) == Some(EdgeKind::Entry);
        let trailing_taxi = cells.len() > 1 && kind_into(self.sink) == Some(EdgeKind::Exit);

        Ok(Path {
            cells,
            weight: self.cells[self.sink].score,
            leading_taxi,
            trailing_taxi,
        })
    }
}

/// An optimal source-to-sink path and its total weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<CellId>,
    weight: Score,
    leading_taxi: bool,
    trailing_taxi: bool,
}

impl Path {
    /// Every cell id from source to sink.
    #[inline]
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    #[inline]
    pub fn weight(&self) -> Score {
        self.weight
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the first edge is a zero-cost entry from the source.
    #[inline]
    pub fn has_leading_taxi(&self) -> bool {
        self.leading_taxi
    }

    /// Whether the last edge is a zero-cost exit into the sink.
    #[inline]
    pub fn has_trailing_taxi(&self) -> bool {
        self.trailing_taxi
    }

    /// The genuinely aligned part: the path without a source entered through
    /// a taxi edge and without a sink reached through one.
    pub fn trimmed(&self) -> &[CellId] {
        let start = usize::from(self.leading_taxi);
        let end = self.cells.len() - usize::from(self.trailing_taxi);
        &self.cells[start..end.max(start)]
    }
}
