//! Grid entity for Swelter simulations.
//!
//! Defines [`Grid`] — per-cell temperatures and flags in row-major order
//! plus dimensions, diffusion coefficient, and elapsed simulated time —
//! together with the precondition validation the stepping driver relies
//! on before running the unchecked stencil.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;

pub use grid::Grid;
