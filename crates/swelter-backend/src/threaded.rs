//! Worker-pool backend distributing row bands over a channel.

use std::thread;

use crossbeam_channel::unbounded;
use swelter_core::BackendError;
use swelter_stencil::apply_rows;

use crate::backend::{check_buffer, PassBackend, PassJob};

/// Configuration for [`ThreadedBackend`].
///
/// Passed explicitly at construction — the backend never consults the
/// process environment.
#[derive(Clone, Copy, Debug)]
pub struct ThreadedConfig {
    /// Worker thread count. `0` means auto-detect from
    /// `std::thread::available_parallelism`.
    pub workers: usize,
    /// Rows per work band. Smaller bands balance load better on ragged
    /// workloads; larger bands cut channel traffic. Must be ≥ 1.
    pub rows_per_band: usize,
}

impl Default for ThreadedConfig {
    fn default() -> Self {
        Self {
            workers: 0,
            rows_per_band: 16,
        }
    }
}

/// Worker-pool backend.
///
/// Each pass, the output buffer is split into disjoint bands of whole
/// rows; bands are queued on a `crossbeam-channel` and pulled by scoped
/// worker threads. Every band reads only the shared previous snapshot,
/// so workers need no synchronization beyond the queue itself, and
/// joining the scope before returning realizes the pass barrier.
///
/// Output is identical to [`SerialBackend`](crate::SerialBackend) for any
/// job, worker count, and band size.
#[derive(Clone, Copy, Debug)]
pub struct ThreadedBackend {
    workers: usize,
    rows_per_band: usize,
}

impl ThreadedBackend {
    /// Create a worker-pool backend from a validated configuration.
    ///
    /// Returns `Err(BackendError::InvalidConfig)` if `rows_per_band` is
    /// zero, or if `workers` is zero and the platform reports no
    /// available parallelism.
    pub fn new(config: ThreadedConfig) -> Result<Self, BackendError> {
        if config.rows_per_band == 0 {
            return Err(BackendError::InvalidConfig {
                reason: "rows_per_band must be at least 1".into(),
            });
        }
        let workers = if config.workers > 0 {
            config.workers
        } else {
            thread::available_parallelism()
                .map_err(|err| BackendError::InvalidConfig {
                    reason: format!("cannot auto-detect worker count: {err}"),
                })?
                .get()
        };
        Ok(Self {
            workers,
            rows_per_band: config.rows_per_band,
        })
    }

    /// Resolved worker thread count.
    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl PassBackend for ThreadedBackend {
    fn name(&self) -> &str {
        "threaded"
    }

    fn apply_pass(&self, job: &PassJob<'_>, next: &mut [f32]) -> Result<(), BackendError> {
        check_buffer(job, next)?;
        if next.is_empty() {
            return Ok(());
        }

        let band_cells = self.rows_per_band * job.width;
        let (tx, rx) = unbounded::<(usize, &mut [f32])>();
        for (i, band) in next.chunks_mut(band_cells).enumerate() {
            tx.send((i * self.rows_per_band, band))
                .expect("receiver outlives the queueing loop");
        }
        // Close the queue so workers drain it and exit.
        drop(tx);

        // Scope exit joins every worker: the pass barrier.
        thread::scope(|s| {
            for _ in 0..self.workers {
                let rx = rx.clone();
                s.spawn(move || {
                    while let Ok((start_row, band)) = rx.recv() {
                        apply_rows(job.packed, job.prev, job.coeffs, job.width, start_row, band);
                    }
                });
            }
        });

        Ok(())
    }
}
