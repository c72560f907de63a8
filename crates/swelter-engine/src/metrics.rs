//! Per-run performance metrics for the stepping driver.

/// Timing data collected during a single `step()` call.
///
/// All durations are in microseconds. The driver populates these after
/// each run; consumers read them from
/// [`StepDriver::last_metrics`](crate::StepDriver::last_metrics).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire run, in microseconds.
    pub total_us: u64,
    /// Time spent packing neighbour properties, in microseconds.
    pub pack_us: u64,
    /// Cumulative time spent inside backend passes, in microseconds.
    pub pass_us: u64,
    /// Number of passes completed.
    pub passes: u32,
    /// Cells per pass (`width * height`).
    pub cells: usize,
}
