//! One-time neighbour-property packing pass.

use swelter_core::{CellFlags, PackedCellProps};

/// Fold each cell's own flags and its four cardinal neighbours'
/// insulation status into one [`PackedCellProps`] per cell.
///
/// For every cell that is not `Fixed`/`Insulator`, the four neighbour
/// fields record whether `index - width`, `index + width`, `index - 1`
/// and `index + 1` are insulators. Inert cells keep only their own low
/// bits — the update rule never consults their neighbour fields.
///
/// Pure function over already-validated input: every non-inert cell must
/// be an interior cell (the grid's flagged-border invariant), so the
/// neighbour index arithmetic cannot leave the buffer. O(width·height);
/// runs once per stepping run.
pub fn pack_properties(
    properties: &[CellFlags],
    width: usize,
    height: usize,
) -> Vec<PackedCellProps> {
    debug_assert_eq!(properties.len(), width * height);

    let mut packed = Vec::with_capacity(properties.len());
    for y in 0..height {
        for x in 0..width {
            let index = y * width + x;
            let own = properties[index];
            if own.is_inert() {
                packed.push(PackedCellProps::pack(own, false, false, false, false));
            } else {
                packed.push(PackedCellProps::pack(
                    own,
                    properties[index - width].is_insulator(),
                    properties[index + width].is_insulator(),
                    properties[index - 1].is_insulator(),
                    properties[index + 1].is_insulator(),
                ));
            }
        }
    }
    packed
}
