//! Cell and edge model.
//!
//! A [`Cell`] is a vertex of the alignment DAG. Its identity is an integer
//! [`CellId`] that encodes a coordinate (see [`crate::coords`]); cells refer to
//! each other only through ids, never through references, so the arena that
//! owns them ([`crate::graph::Graph`]) has no ownership cycles.

use smallvec::SmallVec;

/// Index of a cell inside its graph arena.
pub type CellId = usize;

/// Path weight. Larger is better.
pub type Score = i32;

/// Grid cells carry at most three step edges plus one taxi edge.
pub(crate) const INLINE_EDGES: usize = 4;

/// What an edge represents in the alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// An ordinary move: substitution, indel, gap open/extend or a layer change.
    Step,
    /// Zero-cost taxi edge from the source, skipping a prefix.
    Entry,
    /// Zero-cost taxi edge into the sink, skipping a suffix.
    Exit,
}

/// A weighted incoming edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: CellId,
    pub weight: Score,
    pub kind: EdgeKind,
}

impl Edge {
    pub fn step(from: CellId, weight: Score) -> Self {
        Self {
            from,
            weight,
            kind: EdgeKind::Step,
        }
    }

    pub fn is_taxi(&self) -> bool {
        self.kind != EdgeKind::Step
    }
}

/// A scored vertex with its incoming edges and the edge it was reached by.
///
/// Only reached predecessors feed a cell's score. A cell that no path from
/// the source enters stays unreached with score 0, and its outgoing edges
/// are ignored; it is not treated as an implicit zero-cost origin. The grid
/// schemes wire every cell from the source, so this only shows on
/// caller-supplied topologies.
#[derive(Clone, Debug, Default)]
pub struct Cell {
    pub(crate) score: Score,
    pub(crate) via: Option<Edge>,
    pub(crate) reached: bool,
    pub(crate) incoming: SmallVec<[Edge; INLINE_EDGES]>,
}

impl Cell {
    /// Best path weight from the source. Zero until the cell is relaxed.
    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    /// The winning incoming edge, if the cell has been reached.
    #[inline]
    pub fn via(&self) -> Option<Edge> {
        self.via
    }

    #[inline]
    pub fn predecessor(&self) -> Option<CellId> {
        self.via.map(|e| e.from)
    }

    /// True for the source and for every cell relaxed from a reached predecessor.
    #[inline]
    pub fn is_reached(&self) -> bool {
        self.reached
    }

    #[inline]
    pub fn incoming(&self) -> &[Edge] {
        &self.incoming
    }

    /// Append an incoming edge. An existing edge with the same predecessor
    /// and kind is overwritten in place, keeping its original position.
    ///
    /// The duplicate scan is linear in the number of incoming edges; taxi
    /// edges into a virtual sink go through [`Cell::push_taxi`] instead.
    pub fn add_incoming(&mut self, edge: Edge) {
        match self
            .incoming
            .iter_mut()
            .find(|e| e.from == edge.from && e.kind == edge.kind)
        {
            Some(existing) => existing.weight = edge.weight,
            None => self.incoming.push(edge),
        }
    }

    /// Append a taxi edge without looking for duplicates. A sink collects one
    /// exit per admissible cell, so wiring stays linear in the grid size.
    pub(crate) fn push_taxi(&mut self, edge: Edge) {
        debug_assert!(edge.is_taxi());
        self.incoming.push(edge);
    }

    /// Pick the best incoming edge given the current state of `cells`.
    ///
    /// Only reached predecessors are considered. Ties keep the edge that was
    /// inserted first.
    pub(crate) fn best_incoming(&self, cells: &[Cell]) -> Option<(Score, Edge)> {
        let mut best: Option<(Score, Edge)> = None;
        for edge in &self.incoming {
            let pred = &cells[edge.from];
            if !pred.reached {
                continue;
            }
            let candidate = pred.score + edge.weight;
            if best.map_or(true, |(score, _)| candidate > score) {
                best = Some((candidate, *edge));
            }
        }
        best
    }

    /// Record the outcome of [`Cell::best_incoming`]. `None` leaves the
    /// default score in place.
    pub(crate) fn settle(&mut self, best: Option<(Score, Edge)>) {
        if let Some((score, edge)) = best {
            self.score = score;
            self.via = Some(edge);
            self.reached = true;
        }
    }

    pub(crate) fn mark_source(&mut self) {
        self.score = 0;
        self.via = None;
        self.reached = true;
    }
}
