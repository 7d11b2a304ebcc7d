use crate::aligner::Aligner;
use crate::alignment::GAP;
use crate::engine::Strategy;
use crate::error::Result;
use crate::policy::{GapModel, Mode, TaxiPolicy};
use crate::scoring::Scoring;

/// Step-by-step configuration of an [`Aligner`].
///
/// ```
/// use dag_align::{AlignerBuilder, GapModel, Mode, Scoring};
///
/// let aligner = AlignerBuilder::new(Scoring::uniform(1, -1))
///     .gaps(GapModel::Affine { open: -3, extend: -1 })
///     .mode(Mode::Local)
///     .build()
///     .unwrap();
/// let alignment = aligner.align(b"TTGATTACA", b"GATCACA").unwrap();
/// assert!(alignment.score > 0);
/// ```
pub struct AlignerBuilder {
    scoring: Scoring,
    gaps: GapModel,
    taxi: TaxiPolicy,
    gap_symbol: char,
    strategy: Strategy,
}

impl AlignerBuilder {
    pub fn new(scoring: Scoring) -> Self {
        Self {
            scoring,
            gaps: GapModel::default(),
            taxi: TaxiPolicy::GLOBAL,
            gap_symbol: GAP,
            strategy: Strategy::default(),
        }
    }
    pub fn gaps(mut self, gaps: GapModel) -> Self {
        self.gaps = gaps;
        self
    }
    pub fn indel(self, indel: i32) -> Self {
        self.gaps(GapModel::Linear { indel })
    }
    pub fn affine(self, open: i32, extend: i32) -> Self {
        self.gaps(GapModel::Affine { open, extend })
    }
    pub fn mode(mut self, mode: Mode) -> Self {
        self.taxi = mode.into();
        self
    }
    pub fn taxi(mut self, taxi: TaxiPolicy) -> Self {
        self.taxi = taxi;
        self
    }
    pub fn gap_symbol(mut self, gap_symbol: char) -> Self {
        self.gap_symbol = gap_symbol;
        self
    }
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
    /// Validate the gap model and produce the aligner.
    pub fn build(self) -> Result<Aligner> {
        self.gaps.validate()?;
        Ok(Aligner::from_parts(
            self.scoring,
            self.gaps,
            self.taxi,
            self.gap_symbol,
            self.strategy,
        ))
    }
}
