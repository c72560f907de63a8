//! Core types and errors for the Swelter diffusion engine.
//!
//! This is the leaf crate with zero dependencies. It defines the per-cell
//! flag bitmask, the packed neighbour descriptor consumed by the stencil
//! hot loop, and the error types shared across the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod flags;
pub mod packed;

pub use error::{BackendError, GridError, StepError};
pub use flags::CellFlags;
pub use packed::PackedCellProps;
