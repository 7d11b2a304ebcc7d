//! High-level pairwise alignment API.
//!
//! An [`Aligner`] holds a validated configuration and runs one complete
//! alignment per call: pick the coordinate scheme for the gap model, relax,
//! backtrack, decode. Nothing is shared between calls.

use crate::alignment::{decode, Alignment};
use crate::engine::{DagEngine, Strategy};
use crate::error::Result;
use crate::policy::{GapModel, Mode, TaxiPolicy};
use crate::schemes::{affine::AffineGrid, grid::Grid};
use crate::scoring::Scoring;
use crate::traits::CoordinateScheme;
use crate::AlignerBuilder;

#[derive(Clone, Debug)]
pub struct Aligner {
    scoring: Scoring,
    gaps: GapModel,
    taxi: TaxiPolicy,
    gap_symbol: char,
    strategy: Strategy,
}

impl Aligner {
    pub fn builder(scoring: Scoring) -> AlignerBuilder {
        AlignerBuilder::new(scoring)
    }

    pub(crate) fn from_parts(
        scoring: Scoring,
        gaps: GapModel,
        taxi: TaxiPolicy,
        gap_symbol: char,
        strategy: Strategy,
    ) -> Self {
        Self {
            scoring,
            gaps,
            taxi,
            gap_symbol,
            strategy,
        }
    }

    /// Shorthand for a linear-gap aligner in one of the named modes.
    pub fn with_mode(scoring: Scoring, indel: i32, mode: Mode) -> Self {
        Self::from_parts(
            scoring,
            GapModel::Linear { indel },
            mode.into(),
            crate::alignment::GAP,
            Strategy::default(),
        )
    }

    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    pub fn gaps(&self) -> GapModel {
        self.gaps
    }

    pub fn taxi(&self) -> TaxiPolicy {
        self.taxi
    }

    /// Align `a` (rows) against `b` (columns).
    ///
    /// # Errors
    /// Configuration errors for empty inputs or missing substitution scores,
    /// detected before any cell is computed.
    pub fn align(&self, a: &[u8], b: &[u8]) -> Result<Alignment> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("align", a_len = a.len(), b_len = b.len(), taxi = ?self.taxi);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let alignment = match self.gaps {
            GapModel::Linear { indel } => {
                let grid = Grid::new(a, b, &self.scoring, indel, self.taxi)?;
                let coords = *grid.coords();
                self.solve(grid, |path| decode(path, &coords, a, b, self.gap_symbol))?
            }
            GapModel::Affine { open, extend } => {
                let grid = AffineGrid::new(a, b, &self.scoring, open, extend, self.taxi)?;
                let coords = *grid.coords();
                self.solve(grid, |path| decode(path, &coords, a, b, self.gap_symbol))?
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(score = alignment.score, columns = alignment.len(), "aligned");

        Ok(alignment)
    }

    /// Optimal score only; still runs the full pass.
    pub fn score(&self, a: &[u8], b: &[u8]) -> Result<i32> {
        self.align(a, b).map(|alignment| alignment.score)
    }

    fn solve<S, F>(&self, scheme: S, decode_path: F) -> Result<Alignment>
    where
        S: CoordinateScheme,
        F: FnOnce(&crate::graph::Path) -> Alignment,
    {
        let solution = DagEngine::with_strategy(scheme, self.strategy).run()?;
        Ok(decode_path(solution.path()))
    }
}

/// Unit-cost edit distance between `a` and `b`.
///
/// ```
/// assert_eq!(dag_align::edit_distance(b"PLEASANTLY", b"MEANLY").unwrap(), 5);
/// ```
pub fn edit_distance(a: &[u8], b: &[u8]) -> Result<usize> {
    let score = Aligner::with_mode(Scoring::edit(), -1, Mode::Global).score(a, b)?;
    Ok(score.unsigned_abs() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::Move;
    use crate::error::AlignError;
    use crate::scoring::SubstitutionMatrix;

    #[test]
    fn edit_distance_examples() {
        assert_eq!(edit_distance(b"AC", b"AC").unwrap(), 0);
        assert_eq!(edit_distance(b"AC", b"AG").unwrap(), 1);
        assert_eq!(edit_distance(b"GAGA", b"GAT").unwrap(), 2);
    }

    #[test]
    fn global_protein_alignment() {
        let aligner = Aligner::with_mode(SubstitutionMatrix::blosum62().into(), -5, Mode::Global);
        let alignment = aligner.align(b"PLEASANTLY", b"MEANLY").unwrap();
        assert_eq!(alignment.score, 8);
        assert_eq!(alignment.aligned_a.len(), alignment.aligned_b.len());
        assert_eq!(alignment.aligned_a.replace('-', ""), "PLEASANTLY");
        assert_eq!(alignment.aligned_b.replace('-', ""), "MEANLY");
    }

    #[test]
    fn local_protein_alignment() {
        let aligner = Aligner::with_mode(SubstitutionMatrix::pam250().into(), -5, Mode::Local);
        let alignment = aligner.align(b"MEANLY", b"PENALTY").unwrap();
        assert_eq!(alignment.score, 15);
        assert_eq!(alignment.aligned_a, "EANL-Y");
        assert_eq!(alignment.aligned_b, "ENALTY");
        assert_eq!(alignment.a_range, 1..6);
        assert_eq!(alignment.b_range, 1..7);
    }

    #[test]
    fn local_with_nothing_in_common_is_empty() {
        let aligner = Aligner::with_mode(Scoring::uniform(1, -1), -1, Mode::Local);
        let alignment = aligner.align(b"AAA", b"CCC").unwrap();
        assert_eq!(alignment.score, 0);
        assert!(alignment.is_empty());
        assert_eq!(alignment.a_range, 0..0);
    }

    #[test]
    fn fitting_places_b_inside_a() {
        let aligner = Aligner::with_mode(Scoring::uniform(1, -1), -1, Mode::Fitting);
        let alignment = aligner.align(b"GTAGGCTTAAGGTTA", b"TAGATA").unwrap();
        assert_eq!(alignment.score, 2);
        assert_eq!(alignment.b_range, 0..6);
        assert_eq!(alignment.aligned_b.replace('-', ""), "TAGATA");
    }

    #[test]
    fn overlap_uses_suffix_of_a_and_prefix_of_b() {
        let aligner = Aligner::with_mode(Scoring::uniform(1, -2), -2, Mode::Overlap);
        let alignment = aligner.align(b"CCCCAAGT", b"AAGTGGGG").unwrap();
        assert_eq!(alignment.score, 4);
        assert_eq!(alignment.aligned_a, "AAGT");
        assert_eq!(alignment.aligned_b, "AAGT");
        assert_eq!(alignment.a_range, 4..8);
        assert_eq!(alignment.b_range, 0..4);
    }

    #[test]
    fn custom_gap_symbol() {
        let aligner = AlignerBuilder::new(Scoring::edit())
            .gap_symbol('.')
            .build()
            .unwrap();
        let alignment = aligner.align(b"ACGT", b"AGT").unwrap();
        assert_eq!(alignment.aligned_a, "ACGT");
        assert_eq!(alignment.aligned_b, "A.GT");
        assert_eq!(alignment.moves[1], Move::Vertical);
    }

    #[test]
    fn affine_global_protein_alignment() {
        let aligner = AlignerBuilder::new(SubstitutionMatrix::blosum62().into())
            .affine(-11, -1)
            .build()
            .unwrap();
        let alignment = aligner.align(b"PRTEINS", b"PRTWPSEIN").unwrap();
        assert_eq!(alignment.score, 8);
        assert_eq!(alignment.aligned_a, "PRT---EINS");
        assert_eq!(alignment.aligned_b, "PRTWPSEIN-");
    }

    #[test]
    fn configuration_errors_surface_before_computing() {
        let aligner = Aligner::with_mode(SubstitutionMatrix::blosum62().into(), -5, Mode::Global);
        assert_eq!(
            aligner.align(b"", b"MEANLY"),
            Err(AlignError::EmptySequence { which: "a" })
        );
        assert_eq!(
            aligner.align(b"meanly", b"MEANLY"),
            Err(AlignError::MissingScore { a: 'a', b: 'A' })
        );
        assert!(AlignerBuilder::new(Scoring::edit())
            .affine(-1, -4)
            .build()
            .is_err());
    }
}
