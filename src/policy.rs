//! Value objects selecting the alignment flavour: where paths may start and
//! end ([`TaxiPolicy`]) and how gaps are charged ([`GapModel`]).

use crate::cell::Score;
use crate::error::{AlignError, Result};

/// Four independent zero-cost "taxi" permissions.
///
/// Rows follow `a`, columns follow `b`.
/// - `start_vert`: the top of each column (first row) may be entered from
///   the source, skipping a prefix of `b`.
/// - `end_vert`: the bottom of each column (last row) may exit to the sink,
///   skipping a suffix of `b`.
/// - `start_horiz`: the start of each row (first column) may be entered from
///   the source, skipping a prefix of `a`.
/// - `end_horiz`: the end of each row (last column) may exit to the sink,
///   skipping a suffix of `a`.
///
/// When both start flags are set every cell may be entered from the source;
/// when both end flags are set every cell may exit to the sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TaxiPolicy {
    pub start_vert: bool,
    pub end_vert: bool,
    pub start_horiz: bool,
    pub end_horiz: bool,
}

impl TaxiPolicy {
    /// End-to-end alignment of both sequences.
    pub const GLOBAL: TaxiPolicy = TaxiPolicy {
        start_vert: false,
        end_vert: false,
        start_horiz: false,
        end_horiz: false,
    };

    /// Best-scoring pair of substrings.
    pub const LOCAL: TaxiPolicy = TaxiPolicy {
        start_vert: true,
        end_vert: true,
        start_horiz: true,
        end_horiz: true,
    };

    /// All of `b` against the best substring of `a`.
    pub const FITTING: TaxiPolicy = TaxiPolicy {
        start_vert: false,
        end_vert: false,
        start_horiz: true,
        end_horiz: true,
    };

    /// A suffix of `a` against a prefix of `b`.
    pub const OVERLAP: TaxiPolicy = TaxiPolicy {
        start_vert: false,
        end_vert: true,
        start_horiz: true,
        end_horiz: false,
    };

    /// Whether the cell at `(row, col)` gets a free entry from the source.
    /// The source itself never does.
    pub fn enters(&self, row: usize, col: usize) -> bool {
        if row == 0 && col == 0 {
            return false;
        }
        if self.start_vert && self.start_horiz {
            return true;
        }
        (self.start_vert && row == 0) || (self.start_horiz && col == 0)
    }

    /// Whether the cell at `(row, col)` may exit to the sink for free.
    pub fn exits(&self, row: usize, col: usize, last_row: usize, last_col: usize) -> bool {
        if self.end_vert && self.end_horiz {
            return true;
        }
        (self.end_vert && row == last_row) || (self.end_horiz && col == last_col)
    }

    /// Whether any exit taxi exists, which requires a virtual sink.
    #[inline]
    pub fn has_exit(&self) -> bool {
        self.end_vert || self.end_horiz
    }
}

/// Named alignment flavours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Global,
    Local,
    Fitting,
    Overlap,
}

impl From<Mode> for TaxiPolicy {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Global => TaxiPolicy::GLOBAL,
            Mode::Local => TaxiPolicy::LOCAL,
            Mode::Fitting => TaxiPolicy::FITTING,
            Mode::Overlap => TaxiPolicy::OVERLAP,
        }
    }
}

/// Gap cost model. Weights are added to the path score, so penalties are
/// negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GapModel {
    /// Every gap position costs `indel`.
    Linear { indel: Score },
    /// A gap of length `k` costs `open + (k - 1) * extend`.
    Affine { open: Score, extend: Score },
}

impl GapModel {
    /// Reject an extension weight that is not strictly milder than the
    /// opening weight.
    pub fn validate(&self) -> Result<()> {
        match *self {
            GapModel::Linear { .. } => Ok(()),
            GapModel::Affine { open, extend } if extend <= open => {
                Err(AlignError::GapExtendTooSevere { open, extend })
            }
            GapModel::Affine { .. } => Ok(()),
        }
    }
}

impl Default for GapModel {
    fn default() -> Self {
        GapModel::Linear { indel: -1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_has_no_taxis() {
        let p = TaxiPolicy::GLOBAL;
        assert!(!p.has_exit());
        for row in 0..3 {
            for col in 0..3 {
                assert!(!p.enters(row, col));
                assert!(!p.exits(row, col, 2, 2));
            }
        }
    }

    #[test]
    fn local_enters_and_exits_everywhere_but_source_entry() {
        let p = TaxiPolicy::LOCAL;
        assert!(!p.enters(0, 0));
        assert!(p.enters(1, 1));
        assert!(p.exits(0, 0, 3, 3));
        assert!(p.exits(1, 2, 3, 3));
    }

    #[test]
    fn differing_end_flags_restrict_exits_to_border() {
        let vert = TaxiPolicy {
            end_vert: true,
            ..TaxiPolicy::GLOBAL
        };
        assert!(vert.exits(3, 0, 3, 5));
        assert!(!vert.exits(2, 5, 3, 5));

        let fitting = TaxiPolicy::FITTING;
        assert!(fitting.exits(0, 5, 3, 5));
        assert!(!fitting.exits(3, 4, 3, 5));
        assert!(fitting.enters(2, 0));
        assert!(!fitting.enters(0, 2));
    }

    #[test]
    fn overlap_skips_prefix_of_a_and_suffix_of_b() {
        let p: TaxiPolicy = Mode::Overlap.into();
        assert!(p.enters(4, 0));
        assert!(!p.enters(0, 4));
        assert!(p.exits(6, 1, 6, 6));
        assert!(!p.exits(1, 6, 6, 6));
    }

    #[test]
    fn gap_model_validation() {
        assert!(GapModel::Linear { indel: 5 }.validate().is_ok());
        assert!(GapModel::Affine { open: -11, extend: -1 }.validate().is_ok());
        assert_eq!(
            GapModel::Affine { open: -2, extend: -2 }.validate(),
            Err(AlignError::GapExtendTooSevere { open: -2, extend: -2 })
        );
        assert_eq!(
            GapModel::Affine { open: -1, extend: -3 }.validate(),
            Err(AlignError::GapExtendTooSevere { open: -1, extend: -3 })
        );
    }
}
