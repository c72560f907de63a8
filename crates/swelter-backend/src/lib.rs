//! Compute backends for the Swelter diffusion engine.
//!
//! The [`PassBackend`] trait is the seam between the stepping driver and
//! whatever executes a full-grid pass. The driver describes the work as a
//! [`PassJob`] — packed descriptors, previous snapshot, dimensions,
//! weights — and expects the next snapshot back; how a backend computes
//! it (one thread, a worker pool, or something more exotic) is invisible
//! to the driver so long as the contract in the trait docs holds.
//!
//! Two reference backends ship here:
//!
//! - [`SerialBackend`]: single-threaded reference loop.
//! - [`ThreadedBackend`]: row-band worker pool over `crossbeam-channel`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod backend;
pub mod serial;
pub mod threaded;

pub use backend::{PassBackend, PassJob};
pub use serial::SerialBackend;
pub use threaded::{ThreadedBackend, ThreadedConfig};
