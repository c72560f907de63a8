//! The [`PassBackend`] trait and the [`PassJob`] work description.

use swelter_core::{BackendError, PackedCellProps};
use swelter_stencil::Coefficients;

/// Everything a backend needs to compute one full-grid pass.
///
/// All borrows are read-only: the previous snapshot and the packed
/// descriptors are shared freely across any number of workers.
#[derive(Clone, Copy, Debug)]
pub struct PassJob<'a> {
    /// Per-cell packed flags and neighbour insulation, aligned with `prev`.
    pub packed: &'a [PackedCellProps],
    /// The previous full-grid snapshot (read-only during the pass).
    pub prev: &'a [f32],
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Stencil weights for this run.
    pub coeffs: Coefficients,
}

impl PassJob<'_> {
    /// Total cell count (`width * height`).
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// A collaborator that executes one full-grid pass.
///
/// # Contract
///
/// - Every cell of `next` MUST be written, computed purely from
///   `job.prev` — never from other cells of `next`.
/// - `apply_pass()` returns only after **all** cells are complete: the
///   return is the pass barrier. The driver publishes the buffer swap
///   only after a successful return, so a backend that returns early
///   would leak a torn snapshot into the next pass.
/// - Deterministic: the same job must produce an identical `next`
///   regardless of worker count or scheduling.
/// - On failure, return `Err` without retrying; the driver discards
///   `next` wholesale, so partially written output is harmless.
///
/// # Object safety
///
/// The trait is object-safe; the driver stores backends as
/// `Box<dyn PassBackend>`.
pub trait PassBackend: Send + 'static {
    /// Human-readable name for error reporting.
    fn name(&self) -> &str;

    /// Compute the next snapshot for every cell into `next`.
    fn apply_pass(&self, job: &PassJob<'_>, next: &mut [f32]) -> Result<(), BackendError>;
}

/// Shared output-buffer check used by the reference backends.
pub(crate) fn check_buffer(job: &PassJob<'_>, next: &[f32]) -> Result<(), BackendError> {
    let expected = job.cell_count();
    if next.len() != expected || job.prev.len() != expected || job.packed.len() != expected {
        return Err(BackendError::BufferSizeMismatch {
            expected,
            actual: next.len(),
        });
    }
    Ok(())
}
