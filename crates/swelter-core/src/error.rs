//! Error types for the Swelter diffusion engine.
//!
//! Organized by subsystem: grid precondition failures, compute backend
//! failures, and the step-driver errors that wrap both.

use std::error::Error;
use std::fmt;

/// A malformed grid detected during precondition validation.
///
/// Checked once at `step()` entry (and at grid construction) so the
/// stencil's unchecked neighbour arithmetic never reads out of bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// `state` and `properties` do not both have `width * height` entries.
    LengthMismatch {
        /// Expected `width * height` cell count.
        expected: usize,
        /// Actual length of the `state` buffer.
        state_len: usize,
        /// Actual length of the `properties` buffer.
        properties_len: usize,
    },
    /// A dimension is below the minimum of 3 required for an interior
    /// to exist.
    DimensionTooSmall {
        /// Which dimension ("width" or "height").
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The minimum accepted value.
        min: u32,
    },
    /// A cell on the outermost ring is neither `Fixed` nor `Insulator`.
    UnflaggedBorder {
        /// Column of the offending cell.
        x: u32,
        /// Row of the offending cell.
        y: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                expected,
                state_len,
                properties_len,
            } => write!(
                f,
                "state/properties length mismatch: expected {expected} cells, \
                 got state={state_len}, properties={properties_len}"
            ),
            Self::DimensionTooSmall { name, value, min } => {
                write!(f, "{name} must be at least {min} (got {value})")
            }
            Self::UnflaggedBorder { x, y } => write!(
                f,
                "border cell ({x}, {y}) must be flagged fixed or insulator"
            ),
        }
    }
}

impl Error for GridError {}

/// Errors from a compute backend executing a full-grid pass.
///
/// Returned by `PassBackend::apply_pass()` and wrapped in
/// [`StepError::BackendFailed`] by the stepping driver. The driver never
/// retries a failed pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendError {
    /// Backend configuration rejected at construction.
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// The output buffer does not match the job's cell count.
    BufferSizeMismatch {
        /// Cell count implied by the job dimensions.
        expected: usize,
        /// Length of the supplied output buffer.
        actual: usize,
    },
    /// The backend could not complete the pass.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
            Self::BufferSizeMismatch { expected, actual } => write!(
                f,
                "output buffer size mismatch: expected {expected} cells, got {actual}"
            ),
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
        }
    }
}

impl Error for BackendError {}

/// Errors from the stepping driver's `step()` entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The grid failed precondition validation; nothing was mutated.
    MalformedGrid(GridError),
    /// The compute backend failed mid-run. The grid holds the state
    /// published by the last completed pass; the failing pass left no
    /// partial mutation behind.
    BackendFailed {
        /// Name of the failing backend.
        backend: String,
        /// The underlying backend error.
        reason: BackendError,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedGrid(err) => write!(f, "malformed grid: {err}"),
            Self::BackendFailed { backend, reason } => {
                write!(f, "backend '{backend}' failed: {reason}")
            }
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MalformedGrid(err) => Some(err),
            Self::BackendFailed { reason, .. } => Some(reason),
        }
    }
}
