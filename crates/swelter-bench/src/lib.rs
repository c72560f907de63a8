//! Benchmark profiles for the Swelter diffusion engine.
//!
//! Provides pre-built grids at reference sizes:
//!
//! - [`reference_grid`]: 100×100 (10K cells)
//! - [`stress_grid`]: 316×316 (~100K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use swelter_grid::Grid;
use swelter_test_utils::random_grid;

/// Reference benchmark grid: 100×100 (10K cells), seeded-random
/// temperatures, insulator border ring, `alpha = 1.0`.
pub fn reference_grid(seed: u64) -> Grid {
    random_grid(100, 100, 1.0, seed)
}

/// Stress benchmark grid: 316×316 (~100K cells), same shape as
/// [`reference_grid`] at 10× the cell count.
pub fn stress_grid(seed: u64) -> Grid {
    random_grid(316, 316, 1.0, seed)
}
