use dag_align::schemes::{affine::AffineGrid, explicit::ExplicitDag, grid::Grid};
use dag_align::{
    AlignError, Aligner, AlignerBuilder, DagEngine, GapModel, Mode, Scoring, SubstitutionMatrix,
    TaxiPolicy,
};

#[test]
fn empty_sequences_name_the_culprit() {
    let aligner = Aligner::with_mode(Scoring::edit(), -1, Mode::Local);
    assert_eq!(
        aligner.align(b"", b"A").unwrap_err(),
        AlignError::EmptySequence { which: "a" }
    );
    assert_eq!(
        aligner.align(b"A", b"").unwrap_err(),
        AlignError::EmptySequence { which: "b" }
    );
}

#[test]
fn matrix_must_cover_every_residue() {
    let blosum: Scoring = SubstitutionMatrix::blosum62().into();
    let aligner = Aligner::with_mode(blosum.clone(), -5, Mode::Global);
    assert_eq!(
        aligner.align(b"MEANLY", b"PEN?LTY").unwrap_err(),
        AlignError::MissingScore { a: 'A', b: '?' }
    );
    // Reported pairs come in byte order; BLOSUM62 has no `U`.
    assert_eq!(
        Grid::new(b"ACGU", b"ACGT", &blosum, -1, TaxiPolicy::GLOBAL).unwrap_err(),
        AlignError::MissingScore { a: 'U', b: 'A' }
    );
    assert!(AffineGrid::new(b"AC#", b"AC", &blosum, -11, -1, TaxiPolicy::GLOBAL).is_err());
}

#[test]
fn uniform_scoring_covers_any_byte() {
    let aligner = Aligner::with_mode(Scoring::uniform(1, -1), -1, Mode::Global);
    assert_eq!(aligner.score(b"a#7", b"a#7").unwrap(), 3);
}

#[test]
fn severe_gap_extension_is_rejected_everywhere() {
    let expected = AlignError::GapExtendTooSevere { open: -2, extend: -5 };
    assert_eq!(
        AlignerBuilder::new(Scoring::edit())
            .affine(-2, -5)
            .build()
            .unwrap_err(),
        expected
    );
    assert_eq!(
        GapModel::Affine { open: -2, extend: -5 }.validate().unwrap_err(),
        expected
    );
    let scoring = Scoring::edit();
    assert_eq!(
        AffineGrid::new(b"A", b"A", &scoring, -2, -5, TaxiPolicy::GLOBAL).unwrap_err(),
        expected
    );
}

#[test]
fn equal_open_and_extend_is_a_scheme_level_choice() {
    assert_eq!(
        AlignerBuilder::new(Scoring::edit())
            .affine(-2, -2)
            .build()
            .unwrap_err(),
        AlignError::GapExtendTooSevere { open: -2, extend: -2 }
    );
    let scoring = Scoring::edit();
    assert!(AffineGrid::new(b"A", b"A", &scoring, -2, -2, TaxiPolicy::GLOBAL).is_ok());
}

#[test]
fn disconnected_sink_is_unreachable() {
    let dag = ExplicitDag::new(4, 0, 3, vec![(0, 1, 1), (2, 3, 1)]);
    assert_eq!(
        DagEngine::new(dag).run().unwrap_err(),
        AlignError::Unreachable { source_id: 0, sink_id: 3 }
    );
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(
        AlignError::EmptySequence { which: "b" }.to_string(),
        "sequence `b` is empty"
    );
    assert_eq!(
        AlignError::MissingScore { a: 'X', b: '?' }.to_string(),
        "substitution matrix has no score for pair (X, ?)"
    );
    assert_eq!(
        AlignError::GapExtendTooSevere { open: -1, extend: -3 }.to_string(),
        "gap extension -3 is not milder than gap opening -1"
    );
    let unreachable = AlignError::Unreachable { source_id: 0, sink_id: 7 };
    assert_eq!(unreachable.to_string(), "sink 7 is not reachable from source 0");
    assert!(std::error::Error::source(&unreachable).is_none());
    assert_eq!(
        AlignError::NonAsciiResidue { which: "a", index: 1, byte: 0xc3 }.to_string(),
        "sequence `a` has non-ASCII byte 0xc3 at position 1"
    );
}

#[test]
fn non_ascii_residues_are_rejected() {
    let aligner = Aligner::with_mode(Scoring::edit(), -1, Mode::Global);
    assert_eq!(
        aligner.align("caf\u{e9}".as_bytes(), b"CAFE").unwrap_err(),
        AlignError::NonAsciiResidue { which: "a", index: 3, byte: 0xc3 }
    );
    assert_eq!(
        aligner.align(b"CAFE", "\u{e9}".as_bytes()).unwrap_err(),
        AlignError::NonAsciiResidue { which: "b", index: 0, byte: 0xc3 }
    );
    let scoring = Scoring::uniform(1, -1);
    assert!(AffineGrid::new(b"A\xff", b"A", &scoring, -3, -1, TaxiPolicy::GLOBAL).is_err());
}
