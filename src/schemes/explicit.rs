//! Caller-supplied DAG as a coordinate scheme.
//!
//! Cells are plain ids `0..num_cells` and edges are listed explicitly. This
//! is the generic end of the engine: no implicit coordinates, and no scan
//! order unless the caller provides one.

use crate::cell::{CellId, Score};
use crate::graph::Graph;
use crate::traits::CoordinateScheme;

#[derive(Clone, Debug)]
pub struct ExplicitDag {
    num_cells: usize,
    source: CellId,
    sink: CellId,
    /// `(from, to, weight)`, wired in this order.
    edges: Vec<(CellId, CellId, Score)>,
    /// Cells that may be entered from the source at zero cost.
    entries: Vec<CellId>,
    /// Cells that may leave for the sink at zero cost.
    exits: Vec<CellId>,
    order: Option<Vec<CellId>>,
}

impl ExplicitDag {
    /// # Panics
    /// Panics if an endpoint or edge refers to a cell outside `0..num_cells`.
    pub fn new(
        num_cells: usize,
        source: CellId,
        sink: CellId,
        edges: Vec<(CellId, CellId, Score)>,
    ) -> Self {
        assert!(
            source < num_cells && sink < num_cells,
            "source and sink must lie in 0..{num_cells}"
        );
        assert!(
            edges.iter().all(|&(u, v, _)| u < num_cells && v < num_cells),
            "edge endpoint out of range"
        );
        Self {
            num_cells,
            source,
            sink,
            edges,
            entries: Vec::new(),
            exits: Vec::new(),
            order: None,
        }
    }

    /// Allow free restarts from the source at the given cells.
    pub fn with_entries(mut self, entries: Vec<CellId>) -> Self {
        self.entries = entries;
        self
    }

    /// Allow free exits to the sink from the given cells.
    pub fn with_exits(mut self, exits: Vec<CellId>) -> Self {
        self.exits = exits;
        self
    }

    /// Supply a topological order so the engine can relax in one scan.
    pub fn with_order(mut self, order: Vec<CellId>) -> Self {
        self.order = Some(order);
        self
    }
}

impl CoordinateScheme for ExplicitDag {
    fn num_cells(&self) -> usize {
        self.num_cells
    }

    fn source(&self) -> CellId {
        self.source
    }

    fn sink(&self) -> CellId {
        self.sink
    }

    fn wire(&self, graph: &mut Graph) {
        for &(from, to, weight) in &self.edges {
            graph.add_incoming(to, from, weight);
        }
        for &cell in &self.entries {
            if cell != self.source {
                graph.add_entry(cell);
            }
        }
        for &cell in &self.exits {
            if cell != self.sink {
                graph.add_exit(cell);
            }
        }
    }

    fn scan_order(&self) -> Option<Vec<CellId>> {
        self.order.clone()
    }
}
