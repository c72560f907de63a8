//! The double-buffered stepping driver.

use std::mem;
use std::time::Instant;

use swelter_backend::{PassBackend, PassJob};
use swelter_core::StepError;
use swelter_grid::Grid;
use swelter_stencil::{pack_properties, Coefficients};

use crate::metrics::StepMetrics;

/// Advances a [`Grid`] by repeated full-grid passes through a compute
/// backend.
///
/// Each run (`step()` call) follows the protocol:
///
/// 1. validate the grid once at entry — the stencil's neighbour
///    arithmetic is unchecked, so a malformed grid must fail fast here;
/// 2. derive the stencil [`Coefficients`] and pack neighbour properties,
///    both once for the whole run;
/// 3. alternate two buffers: each pass reads the full previous snapshot
///    and writes the other buffer, then the roles flip via a buffer
///    index (`current ^= 1`) — an O(1) swap, never a copy;
/// 4. `elapsed_time` advances by `dt` after each completed pass.
///
/// Every cell's value for pass *t* is computed purely from pass
/// *t−1*'s snapshot; the backend's return is the barrier that separates
/// the write side of one pass from the read side of the next. On backend
/// failure the run stops: the grid keeps the state published by the last
/// completed pass and the failing pass leaves nothing behind.
///
/// `dt` is expected to be positive and small enough to keep
/// `alpha * dt` stable; no stability check is performed — an unstable
/// rate saturates at the clamped bounds rather than producing undefined
/// values.
pub struct StepDriver {
    backend: Box<dyn PassBackend>,
    last_metrics: StepMetrics,
}

impl StepDriver {
    /// Create a driver around a compute backend.
    pub fn new(backend: Box<dyn PassBackend>) -> Self {
        Self {
            backend,
            last_metrics: StepMetrics::default(),
        }
    }

    /// Name of the underlying backend.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Metrics from the most recent run.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Advance `grid` by `n` passes of `dt` simulated time each.
    ///
    /// Mutates `grid.state` and `grid.elapsed_time` in place; a zero-pass
    /// run leaves both untouched. Fails fast with
    /// [`StepError::MalformedGrid`] before any mutation, or with
    /// [`StepError::BackendFailed`] if the backend cannot complete a
    /// pass — in which case the grid holds the pass-(k−1) state and
    /// `elapsed_time` has advanced by (k−1)·dt for a failure on pass k.
    pub fn step(&mut self, grid: &mut Grid, dt: f64, n: u32) -> Result<(), StepError> {
        let run_start = Instant::now();
        grid.validate().map_err(StepError::MalformedGrid)?;

        let width = grid.width as usize;
        let height = grid.height as usize;
        let cells = grid.cell_count();

        let mut metrics = StepMetrics {
            cells,
            ..StepMetrics::default()
        };

        if n == 0 {
            metrics.total_us = run_start.elapsed().as_micros() as u64;
            self.last_metrics = metrics;
            return Ok(());
        }

        let coeffs = Coefficients::from_rate(grid.alpha, dt);

        let pack_start = Instant::now();
        let packed = pack_properties(&grid.properties, width, height);
        metrics.pack_us = pack_start.elapsed().as_micros() as u64;

        // The two step buffers live only for this run; the grid's state
        // seeds buffer 0 and the final buffer is moved back at the end.
        let mut buffers = [mem::take(&mut grid.state), vec![0.0; cells]];
        let mut current = 0usize;

        for _ in 0..n {
            let [a, b] = &mut buffers;
            let (prev, next) = if current == 0 {
                (a.as_slice(), b.as_mut_slice())
            } else {
                (b.as_slice(), a.as_mut_slice())
            };

            let job = PassJob {
                packed: &packed,
                prev,
                width,
                height,
                coeffs,
            };

            let pass_start = Instant::now();
            let result = self.backend.apply_pass(&job, next);
            metrics.pass_us += pass_start.elapsed().as_micros() as u64;

            if let Err(reason) = result {
                // The failing pass wrote only into the scratch buffer;
                // hand the last published snapshot back to the grid.
                grid.state = mem::take(&mut buffers[current]);
                metrics.total_us = run_start.elapsed().as_micros() as u64;
                self.last_metrics = metrics;
                return Err(StepError::BackendFailed {
                    backend: self.backend.name().to_string(),
                    reason,
                });
            }

            // Publish: the buffer just written becomes the snapshot the
            // next pass reads.
            current ^= 1;
            grid.elapsed_time += dt;
            metrics.passes += 1;
        }

        grid.state = mem::take(&mut buffers[current]);
        metrics.total_us = run_start.elapsed().as_micros() as u64;
        self.last_metrics = metrics;
        Ok(())
    }
}

impl std::fmt::Debug for StepDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepDriver")
            .field("backend", &self.backend.name())
            .field("last_metrics", &self.last_metrics)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swelter_backend::SerialBackend;
    use swelter_core::{CellFlags, GridError};

    fn bordered(width: u32, height: u32, fill: f32, alpha: f64) -> Grid {
        let cells = (width * height) as usize;
        let mut properties = vec![CellFlags::NONE; cells];
        for y in 0..height {
            for x in 0..width {
                if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                    properties[(y * width + x) as usize] = CellFlags::INSULATOR;
                }
            }
        }
        Grid::new(width, height, vec![fill; cells], properties, alpha).unwrap()
    }

    #[test]
    fn malformed_grid_fails_before_mutation() {
        let mut grid = bordered(5, 5, 0.5, 1.0);
        grid.state.pop();
        let before = grid.clone();

        let mut driver = StepDriver::new(Box::new(SerialBackend::new()));
        let result = driver.step(&mut grid, 0.1, 3);

        assert!(matches!(
            result,
            Err(StepError::MalformedGrid(GridError::LengthMismatch { .. }))
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn zero_passes_is_identity() {
        let mut grid = bordered(5, 5, 0.5, 1.0);
        let before = grid.clone();

        let mut driver = StepDriver::new(Box::new(SerialBackend::new()));
        driver.step(&mut grid, 0.1, 0).unwrap();

        assert_eq!(grid, before);
        assert_eq!(driver.last_metrics().passes, 0);
    }

    #[test]
    fn elapsed_time_advances_by_n_dt() {
        let mut grid = bordered(5, 5, 0.5, 1.0);
        let mut driver = StepDriver::new(Box::new(SerialBackend::new()));
        driver.step(&mut grid, 0.25, 8).unwrap();
        assert!((grid.elapsed_time - 2.0).abs() < 1e-12);

        // Time keeps accumulating across runs.
        driver.step(&mut grid, 0.5, 2).unwrap();
        assert!((grid.elapsed_time - 3.0).abs() < 1e-12);
    }

    #[test]
    fn metrics_reflect_the_run() {
        let mut grid = bordered(8, 8, 0.5, 1.0);
        let mut driver = StepDriver::new(Box::new(SerialBackend::new()));
        driver.step(&mut grid, 0.1, 5).unwrap();

        let m = driver.last_metrics();
        assert_eq!(m.passes, 5);
        assert_eq!(m.cells, 64);
    }

    #[test]
    fn backend_name_is_exposed() {
        let driver = StepDriver::new(Box::new(SerialBackend::new()));
        assert_eq!(driver.backend_name(), "serial");
    }
}
