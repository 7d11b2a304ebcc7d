//! Core trait for plugging a topology into the DAG engine.
//!
//! To compute longest paths over your own implicit DAG, implement
//! [`CoordinateScheme`] for a struct that captures the instance (sequences,
//! scores, dimensions).
//!
//! A scheme is responsible for:
//! - Identity: how many cells exist and which ids are the source and sink.
//! - Topology: which weighted edges enter each cell, in tie-break order.
//! - Ordering (optional): a single topological scan order, which lets the
//!   engine skip the generic level-synchronous relaxation.
//!
//! The engine never checks that the wired topology is acyclic. Every edge
//! must run from a cell that is finalised earlier to one finalised later.

use crate::cell::CellId;
use crate::graph::Graph;

/// Produces cell ids and wires the edges of one DAG instance.
pub trait CoordinateScheme {
    /// Total number of cells, including any virtual source or sink.
    fn num_cells(&self) -> usize;

    /// Id of the cell every path starts from.
    fn source(&self) -> CellId;

    /// Id of the cell whose best path is reconstructed.
    fn sink(&self) -> CellId;

    /// Add the incoming edges of every cell to `graph`.
    ///
    /// Edges of one cell must be added in tie-break order: when two edges
    /// give the same score, the one added first wins. Cells with no path
    /// from the source stay unreached and contribute nothing downstream; to
    /// let a cell start for free, wire an entry with [`Graph::add_entry`].
    fn wire(&self, graph: &mut Graph);

    /// A topological order covering every cell that must be computed.
    ///
    /// Return `None` to let the engine discover the order itself by
    /// level-synchronous relaxation from the source.
    fn scan_order(&self) -> Option<Vec<CellId>> {
        None
    }
}
