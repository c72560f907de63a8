//! Contract tests for the stepping driver: clamping, inert-cell
//! invariance, time accounting, failure atomicity, and the canonical
//! 5×5 hot-centre scenario.

use proptest::prelude::*;
use swelter_backend::SerialBackend;
use swelter_core::{CellFlags, StepError};
use swelter_engine::StepDriver;
use swelter_test_utils::{
    bordered_grid, fixed_grid, hot_centre_grid, random_grid, CountingBackend, FailingBackend,
};

const EPS: f32 = 1e-6;

fn serial_driver() -> StepDriver {
    StepDriver::new(Box::new(SerialBackend::new()))
}

#[test]
fn hot_centre_first_pass_matches_hand_computation() {
    // alpha = 1.0, dt = 0.1: outer = 0.1, inner = 0.975.
    let mut grid = hot_centre_grid();
    serial_driver().step(&mut grid, 0.1, 1).unwrap();

    let inner = 0.975f32;
    let outer = 0.1f32;

    // Centre: all four neighbours contribute (none insulating).
    let centre_expected = inner / (inner + 4.0 * outer);
    assert!(
        (grid.value(2, 2) - centre_expected).abs() < EPS,
        "centre: got {}, expected {centre_expected}",
        grid.value(2, 2)
    );

    // Each orthogonal neighbour of the centre touches the insulating
    // border on exactly one side, so three neighbours contribute and
    // only the centre carries heat.
    let neighbour_expected = outer / (inner + 3.0 * outer);
    for (x, y) in [(2, 1), (1, 2), (3, 2), (2, 3)] {
        assert!(
            (grid.value(x, y) - neighbour_expected).abs() < EPS,
            "neighbour ({x}, {y}): got {}, expected {neighbour_expected}",
            grid.value(x, y)
        );
    }

    // Diagonal interior cells see no heat on the first pass.
    for (x, y) in [(1, 1), (3, 1), (1, 3), (3, 3)] {
        assert_eq!(grid.value(x, y), 0.0, "diagonal ({x}, {y})");
    }

    // The insulating border never changes.
    for x in 0..5 {
        assert_eq!(grid.value(x, 0), 0.0);
        assert_eq!(grid.value(x, 4), 0.0);
    }

    assert!((grid.elapsed_time - 0.1).abs() < 1e-12);
}

#[test]
fn entirely_fixed_grid_only_advances_time() {
    let mut grid = fixed_grid(6, 4, 0.37, 1.0);
    let state_before = grid.state.clone();

    serial_driver().step(&mut grid, 0.2, 25).unwrap();

    assert_eq!(grid.state, state_before);
    assert!((grid.elapsed_time - 5.0).abs() < 1e-9);
}

#[test]
fn inert_cells_are_bit_for_bit_unchanged() {
    // Mixed grid: a fixed source and an interior insulator among
    // diffusing cells.
    let mut grid = bordered_grid(7, 7, 0.2, 1.0);
    let source = grid.index(3, 3);
    let island = grid.index(5, 4);
    grid.properties[source] = CellFlags::FIXED;
    grid.properties[island] = CellFlags::INSULATOR;
    grid.state[source] = 0.9128374;
    grid.state[island] = 0.4561234;

    serial_driver().step(&mut grid, 0.1, 50).unwrap();

    assert_eq!(grid.state[source].to_bits(), 0.9128374f32.to_bits());
    assert_eq!(grid.state[island].to_bits(), 0.4561234f32.to_bits());
}

#[test]
fn fixed_source_heats_its_neighbourhood() {
    let mut grid = bordered_grid(7, 7, 0.0, 1.0);
    let source = grid.index(3, 3);
    grid.properties[source] = CellFlags::FIXED;
    grid.state[source] = 1.0;

    serial_driver().step(&mut grid, 0.1, 50).unwrap();

    assert!(grid.value(3, 2) > 0.1, "north neighbour stayed cold");
    assert!(grid.value(2, 3) > 0.1, "west neighbour stayed cold");
    // Heat decays with distance from the source.
    assert!(grid.value(3, 2) > grid.value(3, 1));
}

#[test]
fn multi_pass_run_equals_sequential_single_passes() {
    // The double-buffer rotation must make step(n=k) indistinguishable
    // from k runs of step(n=1).
    let mut batched = random_grid(9, 8, 0.8, 1234);
    let mut sequential = batched.clone();
    let mut driver = serial_driver();

    driver.step(&mut batched, 0.1, 6).unwrap();
    for _ in 0..6 {
        driver.step(&mut sequential, 0.1, 1).unwrap();
    }

    assert_eq!(batched.state, sequential.state);
    assert!((batched.elapsed_time - sequential.elapsed_time).abs() < 1e-12);
}

#[test]
fn backend_failure_preserves_last_completed_pass() {
    let mut expected = random_grid(6, 6, 1.0, 99);
    let mut grid = expected.clone();

    // Reference: two clean passes.
    serial_driver().step(&mut expected, 0.1, 2).unwrap();

    // Failing run: passes 1-2 succeed, pass 3 fails.
    let mut driver = StepDriver::new(Box::new(FailingBackend::after(2)));
    let result = driver.step(&mut grid, 0.1, 5);

    match result {
        Err(StepError::BackendFailed { backend, .. }) => assert_eq!(backend, "failing"),
        other => panic!("expected BackendFailed, got {other:?}"),
    }

    // Pass-2 snapshot published, nothing from the failing pass leaked.
    assert_eq!(grid.state, expected.state);
    assert!((grid.elapsed_time - 0.2).abs() < 1e-12);
    assert!(grid.state.iter().all(|v| !v.is_nan()));
}

#[test]
fn driver_dispatches_exactly_n_passes() {
    let mut grid = bordered_grid(5, 5, 0.5, 1.0);
    let mut driver = StepDriver::new(Box::new(CountingBackend::new()));
    driver.step(&mut grid, 0.1, 7).unwrap();
    assert_eq!(driver.last_metrics().passes, 7);

    driver.step(&mut grid, 0.1, 0).unwrap();
    assert_eq!(driver.last_metrics().passes, 0);
}

proptest! {
    #[test]
    fn uniform_unfixed_field_is_a_fixed_point(
        width in 3u32..10,
        height in 3u32..10,
        fill in 0.0f32..=1.0,
        alpha in 0.0f64..2.0,
        passes in 1u32..8,
    ) {
        let mut grid = bordered_grid(width, height, fill, alpha);
        serial_driver().step(&mut grid, 0.1, passes).unwrap();
        for (i, &v) in grid.state.iter().enumerate() {
            prop_assert!((v - fill).abs() < 1e-4, "cell {i}: {v} != {fill}");
        }
    }

    #[test]
    fn state_stays_in_unit_interval(
        width in 3u32..9,
        height in 3u32..9,
        seed in 0u64..1000,
        passes in 1u32..6,
    ) {
        let mut grid = random_grid(width, height, 1.0, seed);
        serial_driver().step(&mut grid, 0.1, passes).unwrap();
        for &v in &grid.state {
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn elapsed_time_is_additive(
        dt in 0.001f64..0.5,
        n in 0u32..20,
    ) {
        let mut grid = bordered_grid(4, 4, 0.5, 1.0);
        serial_driver().step(&mut grid, dt, n).unwrap();
        let expected = f64::from(n) * dt;
        prop_assert!((grid.elapsed_time - expected).abs() < 1e-9);
    }
}
