//! Test utilities and mock backends for Swelter development.
//!
//! Provides grid fixtures (bordered, fixed, hot-centre, seeded random)
//! and instrumented [`PassBackend`] implementations for exercising the
//! stepping driver's contract.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicU32, Ordering};

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use swelter_backend::{PassBackend, PassJob, SerialBackend};
use swelter_core::{BackendError, CellFlags};
use swelter_grid::Grid;

/// Properties with an insulator border ring and an unflagged interior.
pub fn bordered_properties(width: u32, height: u32) -> Vec<CellFlags> {
    let mut properties = vec![CellFlags::NONE; (width * height) as usize];
    for y in 0..height {
        for x in 0..width {
            if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                properties[(y * width + x) as usize] = CellFlags::INSULATOR;
            }
        }
    }
    properties
}

/// Grid with an insulator border ring and every cell at `fill`.
pub fn bordered_grid(width: u32, height: u32, fill: f32, alpha: f64) -> Grid {
    let cells = (width * height) as usize;
    Grid::new(
        width,
        height,
        vec![fill; cells],
        bordered_properties(width, height),
        alpha,
    )
    .expect("bordered fixture is always valid")
}

/// Grid where every cell is `Fixed` at `fill`.
pub fn fixed_grid(width: u32, height: u32, fill: f32, alpha: f64) -> Grid {
    let cells = (width * height) as usize;
    Grid::new(
        width,
        height,
        vec![fill; cells],
        vec![CellFlags::FIXED; cells],
        alpha,
    )
    .expect("fixed fixture is always valid")
}

/// The canonical 5×5 scenario: insulator border ring, interior at 0
/// except the centre at 1.0, `alpha = 1.0`.
pub fn hot_centre_grid() -> Grid {
    let mut grid = bordered_grid(5, 5, 0.0, 1.0);
    let centre = grid.index(2, 2);
    grid.state[centre] = 1.0;
    grid
}

/// Bordered grid with deterministic seeded-random interior temperatures
/// in [0, 1).
pub fn random_grid(width: u32, height: u32, alpha: f64, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = bordered_grid(width, height, 0.0, alpha);
    for value in &mut grid.state {
        *value = rng.random::<f32>();
    }
    grid
}

/// Backend that counts passes while delegating to [`SerialBackend`].
#[derive(Debug, Default)]
pub struct CountingBackend {
    inner: SerialBackend,
    passes: AtomicU32,
}

impl CountingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `apply_pass` calls observed so far.
    pub fn passes(&self) -> u32 {
        self.passes.load(Ordering::Relaxed)
    }
}

impl PassBackend for CountingBackend {
    fn name(&self) -> &str {
        "counting"
    }

    fn apply_pass(&self, job: &PassJob<'_>, next: &mut [f32]) -> Result<(), BackendError> {
        self.passes.fetch_add(1, Ordering::Relaxed);
        self.inner.apply_pass(job, next)
    }
}

/// Backend that succeeds (via [`SerialBackend`]) for a configured number
/// of passes, then fails every call after that.
///
/// Used to verify that a failing pass publishes nothing: after a failure
/// on pass k the grid must hold exactly the pass-(k−1) snapshot.
#[derive(Debug)]
pub struct FailingBackend {
    inner: SerialBackend,
    succeed_for: u32,
    calls: AtomicU32,
}

impl FailingBackend {
    /// Succeed for the first `succeed_for` passes, then fail.
    pub fn after(succeed_for: u32) -> Self {
        Self {
            inner: SerialBackend::new(),
            succeed_for,
            calls: AtomicU32::new(0),
        }
    }
}

impl PassBackend for FailingBackend {
    fn name(&self) -> &str {
        "failing"
    }

    fn apply_pass(&self, job: &PassJob<'_>, next: &mut [f32]) -> Result<(), BackendError> {
        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        if call < self.succeed_for {
            self.inner.apply_pass(job, next)
        } else {
            // Scribble over part of the output first: the driver must
            // discard this buffer wholesale.
            if let Some(cell) = next.first_mut() {
                *cell = f32::NAN;
            }
            Err(BackendError::ExecutionFailed {
                reason: format!("injected failure on pass {}", call + 1),
            })
        }
    }
}
