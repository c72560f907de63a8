//! Single-threaded reference backend.

use swelter_core::BackendError;
use swelter_stencil::apply_rows;

use crate::backend::{check_buffer, PassBackend, PassJob};

/// Reference backend: one pass over the whole grid on the calling thread.
///
/// The ground truth every other backend must match cell-for-cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct SerialBackend;

impl SerialBackend {
    /// Create a serial backend.
    pub fn new() -> Self {
        Self
    }
}

impl PassBackend for SerialBackend {
    fn name(&self) -> &str {
        "serial"
    }

    fn apply_pass(&self, job: &PassJob<'_>, next: &mut [f32]) -> Result<(), BackendError> {
        check_buffer(job, next)?;
        apply_rows(job.packed, job.prev, job.coeffs, job.width, 0, next);
        Ok(())
    }
}
