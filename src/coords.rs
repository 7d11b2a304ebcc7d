//! The `(row, col, layer) <-> id` bijection used by the grid schemes.
//!
//! Ids are laid out layer-major, then row-major:
//! `id = layer * rows * cols + row * cols + col`.
//! Most subtle bugs in grid DPs live in this arithmetic at the borders, so it
//! is kept separate from the relaxation code and tested on its own.

use crate::cell::CellId;

/// Layers of the affine grid. The linear grid only uses [`Layer::Diagonal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Match/mismatch layer (M).
    Diagonal = 0,
    /// Vertical gap layer (D): consumes `a`, gap in `b`.
    Down = 1,
    /// Horizontal gap layer (R): consumes `b`, gap in `a`.
    Right = 2,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Diagonal, Layer::Down, Layer::Right];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Layer> {
        Self::ALL.get(index).copied()
    }
}

/// A decoded cell position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
    pub layer: Layer,
}

/// Dimensions of a (possibly layered) grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCoords {
    rows: usize,
    cols: usize,
    layers: usize,
}

impl GridCoords {
    /// # Panics
    /// Panics if any dimension is zero or `layers > 3`.
    pub fn new(rows: usize, cols: usize, layers: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid must have at least one cell");
        assert!(
            (1..=Layer::ALL.len()).contains(&layers),
            "layers must be between 1 and 3"
        );
        Self { rows, cols, layers }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Cells per layer.
    #[inline]
    pub fn layer_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Cells across all layers.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.layer_size() * self.layers
    }

    #[inline]
    pub fn id(&self, row: usize, col: usize, layer: Layer) -> CellId {
        debug_assert!(row < self.rows && col < self.cols && layer.index() < self.layers);
        layer.index() * self.layer_size() + row * self.cols + col
    }

    /// Inverse of [`GridCoords::id`]. `None` for ids outside the grid.
    pub fn coord(&self, id: CellId) -> Option<Coord> {
        if id >= self.num_cells() {
            return None;
        }
        let layer = Layer::from_index(id / self.layer_size())?;
        let within = id % self.layer_size();
        Some(Coord {
            row: within / self.cols,
            col: within % self.cols,
            layer,
        })
    }

    /// Project an id onto the first layer, dropping the layer offset.
    #[inline]
    pub fn normalize(&self, id: CellId) -> CellId {
        id % self.layer_size()
    }

    /// Last row index.
    #[inline]
    pub fn last_row(&self) -> usize {
        self.rows - 1
    }

    /// Last column index.
    #[inline]
    pub fn last_col(&self) -> usize {
        self.cols - 1
    }
}
