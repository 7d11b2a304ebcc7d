//! Pairwise sequence alignment as longest paths in a DAG.
//!
//! Every alignment problem in this crate is phrased the same way: lay out a
//! directed acyclic graph whose cells are DP states, weight the edges with
//! substitution scores and gap penalties, and find the heaviest path from a
//! source to a sink. Alignment flavours (global, local, fitting, overlap) are
//! not separate algorithms; they differ only in which zero-cost "taxi" edges
//! connect the source and sink to the grid.
//!
//! ## Layers
//! 1. [`DagEngine`] relaxes any [`CoordinateScheme`] and backtracks the best
//!    path. It knows nothing about sequences.
//! 2. [`schemes`] provides the coordinate layouts: an explicit edge list, the
//!    linear-gap [`schemes::grid::Grid`] and the three-layer affine-gap
//!    [`schemes::affine::AffineGrid`].
//! 3. [`Aligner`] validates a configuration, picks a scheme, and decodes the
//!    winning path into an [`Alignment`].
//!
//! ## Quick start
//! ```
//! use dag_align::{Aligner, Mode, SubstitutionMatrix};
//!
//! let aligner = Aligner::with_mode(SubstitutionMatrix::pam250().into(), -5, Mode::Local);
//! let alignment = aligner.align(b"MEANLY", b"PENALTY").unwrap();
//! assert_eq!(alignment.score, 15);
//! assert_eq!(alignment.aligned_a, "EANL-Y");
//! assert_eq!(alignment.aligned_b, "ENALTY");
//! ```
//!
//! Raw longest paths work on any wired DAG:
//! ```
//! use dag_align::{DagEngine, schemes::explicit::ExplicitDag};
//!
//! let dag = ExplicitDag::new(3, 0, 2, vec![(0, 1, 2), (1, 2, 3), (0, 2, 4)]);
//! assert_eq!(DagEngine::new(dag).run().unwrap().score(), 5);
//! ```

pub mod aligner;
pub mod alignment;
pub mod builder;
pub mod cell;
pub mod coords;
pub mod engine;
pub mod error;
pub mod graph;
pub mod policy;
pub mod schemes;
pub mod scoring;
pub mod traits;

pub use crate::aligner::{edit_distance, Aligner};
pub use crate::alignment::{Alignment, Move};
pub use crate::builder::AlignerBuilder;
pub use crate::cell::{Cell, CellId, Score};
pub use crate::engine::{DagEngine, Solution, Strategy};
pub use crate::error::{AlignError, Result};
pub use crate::graph::{Graph, Path};
pub use crate::policy::{GapModel, Mode, TaxiPolicy};
pub use crate::scoring::{Scoring, SubstitutionMatrix};
pub use crate::traits::CoordinateScheme;
