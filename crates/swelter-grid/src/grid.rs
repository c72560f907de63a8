//! Rectangular temperature grid with per-cell flags.

use swelter_core::{CellFlags, GridError};

/// Minimum grid dimension: the outermost ring is boundary, so an interior
/// exists only from 3×3 up.
pub const MIN_DIM: u32 = 3;

/// A rectangular 2-D heat grid.
///
/// Cells are stored row-major: `index = y * width + x`. `state` holds one
/// temperature per cell, normalized to [0, 1]; `properties` holds the
/// aligned flag for each cell and is treated as immutable once loaded.
///
/// The outermost ring of cells must be flagged [`CellFlags::FIXED`] or
/// [`CellFlags::INSULATOR`]: the update rule performs no bounds checking
/// and assumes `index ± width` and `index ± 1` are valid for every cell
/// it actually updates, which holds only if no updatable cell sits on the
/// border. [`Grid::validate`] enforces this, and the stepping driver
/// re-runs it at every `step()` entry.
///
/// Fields are public in the manner of a loaded data entity; the driver
/// revalidates before trusting them.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    /// Number of columns (≥ 3).
    pub width: u32,
    /// Number of rows (≥ 3).
    pub height: u32,
    /// Per-cell temperatures, row-major, `width * height` entries.
    pub state: Vec<f32>,
    /// Per-cell flags, aligned index-for-index with `state`.
    pub properties: Vec<CellFlags>,
    /// Diffusion coefficient.
    pub alpha: f64,
    /// Accumulated simulated time; advances by `dt` per completed pass.
    pub elapsed_time: f64,
}

impl Grid {
    /// Construct a grid and validate it.
    ///
    /// `elapsed_time` starts at zero. Returns the same errors as
    /// [`Grid::validate`].
    pub fn new(
        width: u32,
        height: u32,
        state: Vec<f32>,
        properties: Vec<CellFlags>,
        alpha: f64,
    ) -> Result<Self, GridError> {
        let grid = Self {
            width,
            height,
            state,
            properties,
            alpha,
            elapsed_time: 0.0,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Total cell count (`width * height`).
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of `(x, y)`.
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Flags of the cell at `(x, y)`.
    pub fn flags(&self, x: u32, y: u32) -> CellFlags {
        self.properties[self.index(x, y)]
    }

    /// Temperature of the cell at `(x, y)`.
    pub fn value(&self, x: u32, y: u32) -> f32 {
        self.state[self.index(x, y)]
    }

    /// Check the preconditions the stencil depends on.
    ///
    /// Verified, in order:
    /// 1. both dimensions are at least [`MIN_DIM`];
    /// 2. `state` and `properties` both have `width * height` entries;
    /// 3. every cell on the outermost ring is flagged `FIXED` or
    ///    `INSULATOR`.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.width < MIN_DIM {
            return Err(GridError::DimensionTooSmall {
                name: "width",
                value: self.width,
                min: MIN_DIM,
            });
        }
        if self.height < MIN_DIM {
            return Err(GridError::DimensionTooSmall {
                name: "height",
                value: self.height,
                min: MIN_DIM,
            });
        }

        let expected = self.cell_count();
        if self.state.len() != expected || self.properties.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                state_len: self.state.len(),
                properties_len: self.properties.len(),
            });
        }

        for y in 0..self.height {
            for x in 0..self.width {
                let border =
                    x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1;
                if border && !self.flags(x, y).is_inert() {
                    return Err(GridError::UnflaggedBorder { x, y });
                }
            }
        }

        Ok(())
    }
}
