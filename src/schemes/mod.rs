//! Coordinate schemes: how cells are laid out and wired.
//!
//! - [`explicit`]: an arbitrary DAG given as an edge list.
//! - [`grid`]: the `(|a|+1) x (|b|+1)` alignment grid with linear gaps.
//! - [`affine`]: three stacked grids for affine gaps.

pub mod affine;
pub mod explicit;
pub mod grid;
