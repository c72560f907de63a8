//! The per-cell update rule and the row-band loop backends drive.

use swelter_core::PackedCellProps;

use crate::coeffs::Coefficients;

/// Compute a cell's next temperature from the previous full-grid
/// snapshot.
///
/// Inert cells return their previous value untouched. For every other
/// cell, a weighted sum starts from the cell's own retained heat and
/// adds `outer * prev[neighbour]` for each neighbour whose packed
/// insulation field is clear; the sum is renormalized by the weights
/// actually contributed and clamped to [0, 1].
///
/// If all four neighbours are insulating the rule degenerates to
/// `prev[index]` (contribution is `inner` alone) — intentional, not an
/// error. Total function: no input produces a NaN, panic, or value
/// outside [0, 1], provided `index` respects the grid's flagged-border
/// invariant.
pub fn update_cell(
    props: PackedCellProps,
    index: usize,
    width: usize,
    prev: &[f32],
    coeffs: Coefficients,
) -> f32 {
    if props.is_inert() {
        return prev[index];
    }

    let mut contribution = coeffs.inner;
    let mut acc = coeffs.inner * prev[index];

    if !props.above_insulated() {
        contribution += coeffs.outer;
        acc += coeffs.outer * prev[index - width];
    }
    if !props.below_insulated() {
        contribution += coeffs.outer;
        acc += coeffs.outer * prev[index + width];
    }
    if !props.left_insulated() {
        contribution += coeffs.outer;
        acc += coeffs.outer * prev[index - 1];
    }
    if !props.right_insulated() {
        contribution += coeffs.outer;
        acc += coeffs.outer * prev[index + 1];
    }

    (acc / contribution).clamp(0.0, 1.0)
}

/// Apply [`update_cell`] to a contiguous band of whole rows.
///
/// `out` is the slice of the next buffer covering rows starting at
/// `start_row`; its length must be a multiple of `width` except for the
/// final band of the grid. Each output cell is computed purely from
/// `prev`, so disjoint bands may run on any number of workers with no
/// synchronization.
pub fn apply_rows(
    packed: &[PackedCellProps],
    prev: &[f32],
    coeffs: Coefficients,
    width: usize,
    start_row: usize,
    out: &mut [f32],
) {
    let base = start_row * width;
    for (offset, cell) in out.iter_mut().enumerate() {
        let index = base + offset;
        *cell = update_cell(packed[index], index, width, prev, coeffs);
    }
}
