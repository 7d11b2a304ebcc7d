//! Generic longest-path engine over a wired DAG.
//!
//! The engine runs in three phases:
//! 1. Topology: allocate the cell arena and let the scheme wire its edges.
//! 2. Relaxation: compute every reachable cell's best score and predecessor,
//!    either by a single scan in the scheme's topological order or by
//!    level-synchronous relaxation from the source.
//! 3. Backtrack: follow predecessors from the sink to recover the best path.
//!
//! The engine is completely generic over implementations of [`CoordinateScheme`].

use crate::cell::CellId;
use crate::error::Result;
use crate::graph::{Graph, Path};
use crate::traits::CoordinateScheme;

/// How scores are computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Scan once in the scheme's topological order when it supplies one,
    /// otherwise fall back to [`Strategy::Levels`].
    #[default]
    Scan,
    /// Always use level-synchronous relaxation from the source.
    ///
    /// A cell is relaxed again in every round that reaches it along a path
    /// of that many hops. On grids with entry taxis nearly every cell is
    /// reachable at every depth, so the cost grows to about
    /// `cells * (rows + cols)` against `cells` for [`Strategy::Scan`]. Meant
    /// for schemes without a scan order and for cross-checking.
    Levels,
}

/// Longest-path engine for a given scheme `S`.
///
/// Typical usage:
/// ```
/// use dag_align::{DagEngine, schemes::explicit::ExplicitDag};
///
/// let dag = ExplicitDag::new(4, 0, 3, vec![(0, 1, 7), (0, 2, 4), (1, 3, 1), (2, 3, 2)]);
/// let solution = DagEngine::new(dag).run().unwrap();
/// assert_eq!(solution.score(), 8);
/// assert_eq!(solution.path().cells(), &[0, 1, 3]);
/// ```
pub struct DagEngine<S: CoordinateScheme> {
    scheme: S,
    strategy: Strategy,
}

/// The computed graph together with its best path.
#[derive(Clone, Debug)]
pub struct Solution {
    graph: Graph,
    path: Path,
}

impl Solution {
    /// Weight of the best source-to-sink path.
    #[inline]
    pub fn score(&self) -> i32 {
        self.path.weight()
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The fully relaxed arena, read-only.
    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_path(self) -> Path {
        self.path
    }
}

impl<S: CoordinateScheme> DagEngine<S> {
    pub fn new(scheme: S) -> Self {
        Self::with_strategy(scheme, Strategy::default())
    }

    pub fn with_strategy(scheme: S, strategy: Strategy) -> Self {
        Self { scheme, strategy }
    }

    pub fn scheme(&self) -> &S {
        &self.scheme
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Allocate the arena and wire every edge.
    pub fn build(&self) -> Graph {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("wire", cells = self.scheme.num_cells());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut graph = Graph::new(
            self.scheme.num_cells(),
            self.scheme.source(),
            self.scheme.sink(),
        );
        self.scheme.wire(&mut graph);
        graph
    }

    /// Compute all scores, then reconstruct the best path to the sink.
    ///
    /// # Errors
    /// Returns [`AlignError::Unreachable`](crate::AlignError::Unreachable)
    /// if the sink has no predecessor chain back to the source.
    pub fn run(&self) -> Result<Solution> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("dag_run", strategy = ?self.strategy);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut graph = self.build();
        let order = match self.strategy {
            Strategy::Scan => self.scheme.scan_order(),
            Strategy::Levels => None,
        };
        match order {
            Some(order) => relax_in_order(&mut graph, &order),
            None => relax_levels(&mut graph),
        }
        let path = graph.backtrack()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(score = path.weight(), path_len = path.len(), "solved");

        Ok(Solution { graph, path })
    }
}

/// Relax cells exactly once each, in the given topological order.
pub fn relax_in_order(graph: &mut Graph, order: &[CellId]) {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("relax_scan", cells = order.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    for &id in order {
        graph.relax(id);
    }
}

/// Level-synchronous relaxation from the source.
///
/// Each round relaxes every out-neighbour of the current frontier once and
/// makes those cells the next frontier. A cell is relaxed for the last time
/// in the round equal to the hop count of its longest path from the source,
/// by which point all of its predecessors are final.
///
/// A DAG with `n` cells needs at most `n` rounds. More rounds mean the
/// topology has a cycle: debug builds panic, release builds stop with
/// unspecified scores.
pub fn relax_levels(graph: &mut Graph) {
    let (offsets, targets) = graph.outgoing();
    let n = graph.len();
    // Round in which each cell was last relaxed; 0 = never.
    let mut stamp = vec![0usize; n];
    let mut frontier = vec![graph.source()];
    let mut next = Vec::new();
    let mut round = 0usize;

    while !frontier.is_empty() {
        round += 1;
        debug_assert!(round <= n, "topology contains a cycle");
        if round > n {
            break;
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("relax_round", round, frontier = frontier.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        for &u in &frontier {
            for &v in &targets[offsets[u]..offsets[u + 1]] {
                if stamp[v] == round {
                    continue;
                }
                stamp[v] = round;
                graph.relax(v);
                next.push(v);
            }
        }
        std::mem::swap(&mut frontier, &mut next);
        next.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemes::explicit::ExplicitDag;

    #[test]
    fn levels_and_scan_agree_on_diamond() {
        let edges = vec![(0, 1, 1), (0, 2, 1), (1, 3, 2), (2, 3, 2), (3, 4, 0)];
        let dag = ExplicitDag::new(5, 0, 4, edges.clone());
        let levels = DagEngine::with_strategy(dag, Strategy::Levels).run().unwrap();
        let dag = ExplicitDag::new(5, 0, 4, edges).with_order(vec![0, 1, 2, 3, 4]);
        let scan = DagEngine::new(dag).run().unwrap();
        assert_eq!(levels.score(), 3);
        assert_eq!(levels.path(), scan.path());
        // Tie between 1 and 2: the edge from 1 was added first.
        assert_eq!(levels.path().cells(), &[0, 1, 3, 4]);
    }

    #[test]
    fn uneven_depths_settle_on_longest_hop_count() {
        // 0 -> 2 directly and 0 -> 1 -> 2; cell 2 is relaxed in rounds 1 and 2.
        let dag = ExplicitDag::new(3, 0, 2, vec![(0, 2, 1), (0, 1, 5), (1, 2, 5)]);
        let solution = DagEngine::new(dag).run().unwrap();
        assert_eq!(solution.score(), 10);
        assert_eq!(solution.path().cells(), &[0, 1, 2]);
    }

    #[test]
    fn orphan_cells_do_not_feed_successors() {
        // Cell 1 has no incoming edge, so its heavy edge into 2 is ignored.
        let edges = vec![(1, 2, 10), (0, 2, -5), (2, 3, 0), (0, 3, 1)];
        for strategy in [Strategy::Scan, Strategy::Levels] {
            let dag = ExplicitDag::new(4, 0, 3, edges.clone()).with_order(vec![0, 1, 2, 3]);
            let solution = DagEngine::with_strategy(dag, strategy).run().unwrap();
            assert_eq!(solution.score(), 1);
            assert_eq!(solution.path().cells(), &[0, 3]);
            assert!(!solution.graph().cell(1).is_reached());
            assert_eq!(solution.graph().score(1), 0);
        }
        // An explicit entry turns it into a free start.
        let dag = ExplicitDag::new(4, 0, 3, edges).with_entries(vec![1]);
        let solution = DagEngine::new(dag).run().unwrap();
        assert_eq!(solution.score(), 10);
        assert_eq!(solution.path().trimmed(), &[1, 2, 3]);
    }

    #[test]
    fn scan_is_the_default_strategy() {
        assert_eq!(Strategy::default(), Strategy::Scan);
        let dag = ExplicitDag::new(2, 0, 1, vec![(0, 1, 4)]);
        assert_eq!(DagEngine::new(dag).strategy(), Strategy::Scan);
    }

    #[test]
    fn unreachable_sink_fails() {
        let dag = ExplicitDag::new(3, 0, 2, vec![(0, 1, 1)]);
        assert!(DagEngine::new(dag).run().is_err());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cycle")]
    fn cycle_trips_debug_assertion() {
        let dag = ExplicitDag::new(3, 0, 2, vec![(0, 1, 1), (1, 2, 1), (2, 1, 1)]);
        let _ = DagEngine::with_strategy(dag, Strategy::Levels).run();
    }
}
