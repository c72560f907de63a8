//! Stepping driver for Swelter simulations.
//!
//! [`StepDriver`] owns a compute backend and advances a
//! [`Grid`](swelter_grid::Grid) by `n` double-buffered passes: validate
//! once, pack neighbour properties once, then alternate two buffers with
//! an O(1) index flip per pass, publishing elapsed time as each pass
//! completes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod driver;
pub mod metrics;

pub use driver::StepDriver;
pub use metrics::StepMetrics;
