//! Example: global, fitting and overlap alignment of DNA strings.
//!
//! Run with:
//! `cargo run --example align`

use dag_align::{edit_distance, Aligner, Mode, Scoring};

fn main() -> dag_align::Result<()> {
    let s = b"GATTACA";
    let t = b"GCATGCU";

    // +1 match, -1 mismatch, -1 per gap position.
    let global = Aligner::with_mode(Scoring::uniform(1, -1), -1, Mode::Global).align(s, t)?;
    println!("Global alignment score: {}", global.score);
    println!("S': {}", global.aligned_a);
    println!("T': {}", global.aligned_b);
    println!("Edit distance: {}", edit_distance(s, t)?);

    let read = b"TAGATA";
    let genome = b"GTAGGCTTAAGGTTA";
    let fitting = Aligner::with_mode(Scoring::uniform(1, -1), -1, Mode::Fitting).align(genome, read)?;
    println!(
        "\nFitting {} into genome[{}..{}]:\n{fitting}",
        String::from_utf8_lossy(read),
        fitting.a_range.start,
        fitting.a_range.end
    );

    let overlap =
        Aligner::with_mode(Scoring::uniform(1, -2), -2, Mode::Overlap).align(b"CCCCAAGT", b"AAGTGGGG")?;
    println!("\nOverlap:\n{overlap}");
    Ok(())
}
