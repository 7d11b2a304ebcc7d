//! Example: local protein alignment with PAM250 and affine gaps with BLOSUM62.
//!
//! Run with:
//! `cargo run --example local_protein`
//!
//! With `--features tracing` the engine emits spans for wiring and relaxation.

use dag_align::{AlignerBuilder, Mode, SubstitutionMatrix};

fn main() -> dag_align::Result<()> {
    let local = AlignerBuilder::new(SubstitutionMatrix::pam250().into())
        .indel(-5)
        .mode(Mode::Local)
        .build()?;
    let alignment = local.align(b"MEANLY", b"PENALTY")?;
    println!("PAM250 local, indel -5:\n{alignment}");
    println!(
        "covers a[{:?}] and b[{:?}]",
        alignment.a_range, alignment.b_range
    );

    let affine = AlignerBuilder::new(SubstitutionMatrix::blosum62().into())
        .affine(-11, -1)
        .build()?;
    println!("\nBLOSUM62 global, open -11 extend -1:\n{}", affine.align(b"PRTEINS", b"PRTWPSEIN")?);
    Ok(())
}
