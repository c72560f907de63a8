//! Stencil core for Swelter simulations.
//!
//! Three pieces, all pure functions over validated input:
//!
//! - [`Coefficients`]: the per-run `inner`/`outer` weights derived from
//!   the diffusion coefficient and timestep.
//! - [`pack_properties`]: the one-time preprocessing pass folding each
//!   cell's flags and its neighbours' insulation status into a
//!   [`PackedCellProps`](swelter_core::PackedCellProps).
//! - [`update_cell`] / [`apply_rows`]: the per-cell update rule and the
//!   row-band loop both compute backends drive.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coeffs;
pub mod kernel;
pub mod pack;

pub use coeffs::Coefficients;
pub use kernel::{apply_rows, update_cell};
pub use pack::pack_properties;
