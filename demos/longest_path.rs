//! Example: longest path in a hand-built DAG.
//!
//! Run with:
//! `cargo run --example longest_path`

use dag_align::schemes::explicit::ExplicitDag;
use dag_align::{DagEngine, Strategy};

fn main() -> dag_align::Result<()> {
    // 0 is the source, 5 the sink.
    let edges = vec![
        (0, 1, 3),
        (0, 2, 6),
        (1, 3, 4),
        (2, 3, -2),
        (2, 4, 1),
        (3, 5, 2),
        (4, 5, 5),
    ];
    let dag = ExplicitDag::new(6, 0, 5, edges);
    let solution = DagEngine::with_strategy(dag, Strategy::Levels).run()?;
    println!("Longest path weight: {}", solution.score());
    println!("Cells: {:?}", solution.path().cells());
    Ok(())
}
