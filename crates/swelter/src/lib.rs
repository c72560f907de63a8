//! Swelter: a 2-D heat diffusion engine with pluggable compute backends.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Swelter sub-crates. For most users, adding `swelter` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use swelter::prelude::*;
//!
//! // Build a 5×5 grid: insulator border ring, hot cell in the centre.
//! let width = 5u32;
//! let height = 5u32;
//! let mut properties = vec![CellFlags::NONE; 25];
//! for y in 0..height {
//!     for x in 0..width {
//!         if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
//!             properties[(y * width + x) as usize] = CellFlags::INSULATOR;
//!         }
//!     }
//! }
//! let mut state = vec![0.0f32; 25];
//! state[12] = 1.0;
//!
//! let mut grid = Grid::new(width, height, state, properties, 1.0).unwrap();
//!
//! // Advance ten passes of 0.1 simulated time each.
//! let mut driver = StepDriver::new(Box::new(SerialBackend::new()));
//! driver.step(&mut grid, 0.1, 10).unwrap();
//!
//! assert!((grid.elapsed_time - 1.0).abs() < 1e-9);
//! assert!(grid.value(2, 2) < 1.0); // centre has cooled
//! assert!(grid.value(2, 1) > 0.0); // neighbours have warmed
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `swelter-core` | Cell flags, packed descriptors, error types |
//! | [`grid`] | `swelter-grid` | The [`grid::Grid`] entity and validation |
//! | [`stencil`] | `swelter-stencil` | Coefficients, packer, update rule |
//! | [`backend`] | `swelter-backend` | `PassBackend` trait, serial and threaded backends |
//! | [`engine`] | `swelter-engine` | The stepping driver and run metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`swelter-core`).
///
/// Contains [`types::CellFlags`], [`types::PackedCellProps`], and the
/// error enums ([`types::GridError`], [`types::BackendError`],
/// [`types::StepError`]).
pub use swelter_core as types;

/// The grid entity and precondition validation (`swelter-grid`).
pub use swelter_grid as grid;

/// Coefficients, neighbour-property packer, and the update rule
/// (`swelter-stencil`).
pub use swelter_stencil as stencil;

/// The [`backend::PassBackend`] dispatch trait and the reference
/// backends (`swelter-backend`).
pub use swelter_backend as backend;

/// The double-buffered stepping driver (`swelter-engine`).
pub use swelter_engine as engine;

/// Common imports for typical Swelter usage.
///
/// ```rust
/// use swelter::prelude::*;
/// ```
pub mod prelude {
    pub use swelter_backend::{PassBackend, PassJob, SerialBackend, ThreadedBackend, ThreadedConfig};
    pub use swelter_core::{BackendError, CellFlags, GridError, PackedCellProps, StepError};
    pub use swelter_engine::{StepDriver, StepMetrics};
    pub use swelter_grid::Grid;
    pub use swelter_stencil::Coefficients;
}
