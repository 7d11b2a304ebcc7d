//! Error type shared by the scheme constructors, the engine and the aligner.

use crate::cell::CellId;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AlignError>;

/// Errors reported before or after a relaxation pass.
///
/// Configuration errors are raised before any cell is computed. `Unreachable`
/// signals a topology that breaks the engine's contract (the sink has no
/// predecessor chain back to the source).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// One of the input sequences has no residues.
    #[error("sequence `{which}` is empty")]
    EmptySequence { which: &'static str },

    /// A sequence byte outside ASCII; residues are emitted as single `char`s.
    #[error("sequence `{which}` has non-ASCII byte {byte:#04x} at position {index}")]
    NonAsciiResidue {
        which: &'static str,
        index: usize,
        byte: u8,
    },

    /// The substitution matrix lacks a score that the inputs require.
    #[error("substitution matrix has no score for pair ({a}, {b})")]
    MissingScore { a: char, b: char },

    /// The affine gap extension is not milder than opening a gap.
    #[error("gap extension {extend} is not milder than gap opening {open}")]
    GapExtendTooSevere { open: i32, extend: i32 },

    /// Backtracking from the sink did not arrive at the source.
    #[error("sink {sink_id} is not reachable from source {source_id}")]
    Unreachable { source_id: CellId, sink_id: CellId },
}
