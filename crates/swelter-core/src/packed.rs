//! Packed per-cell neighbour descriptor for the stencil hot loop.

use crate::flags::CellFlags;

/// Precomputed summary of a cell's own flags and its four cardinal
/// neighbours' insulation status, packed into a single `u16`.
///
/// Layout (bit offsets):
///
/// ```text
/// this:  1-0   (raw CellFlags bits)
/// above: 3-2
/// below: 5-4
/// left:  7-6
/// right: 9-8
/// ```
///
/// Each neighbour field is two bits wide but stores a re-derived boolean
/// (nonzero ⇔ that neighbour is an insulator), never the raw flag
/// constant — callers read the fields only through the `*_insulated()`
/// accessors, so the stored bit pattern is not part of the contract.
///
/// Built once per stepping run and never mutated afterwards; its only
/// purpose is to answer "is my neighbour an insulator" without a second
/// array lookup per neighbour inside the update rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackedCellProps(u16);

const OWN_MASK: u16 = 0b11;
const ABOVE_SHIFT: u16 = 2;
const BELOW_SHIFT: u16 = 4;
const LEFT_SHIFT: u16 = 6;
const RIGHT_SHIFT: u16 = 8;
const FIELD_MASK: u16 = 0b11;

impl PackedCellProps {
    /// Pack a cell's own flags together with the insulation status of its
    /// four cardinal neighbours.
    pub fn pack(own: CellFlags, above: bool, below: bool, left: bool, right: bool) -> Self {
        let mut bits = u16::from(own.bits()) & OWN_MASK;
        bits |= u16::from(above) << ABOVE_SHIFT;
        bits |= u16::from(below) << BELOW_SHIFT;
        bits |= u16::from(left) << LEFT_SHIFT;
        bits |= u16::from(right) << RIGHT_SHIFT;
        Self(bits)
    }

    /// The cell's own flags (low two bits).
    pub fn own(self) -> CellFlags {
        CellFlags((self.0 & OWN_MASK) as u8)
    }

    /// Whether this cell is never updated by the stencil.
    pub fn is_inert(self) -> bool {
        self.own().is_inert()
    }

    /// Whether the neighbour one row up (`index - width`) is an insulator.
    pub fn above_insulated(self) -> bool {
        (self.0 >> ABOVE_SHIFT) & FIELD_MASK != 0
    }

    /// Whether the neighbour one row down (`index + width`) is an insulator.
    pub fn below_insulated(self) -> bool {
        (self.0 >> BELOW_SHIFT) & FIELD_MASK != 0
    }

    /// Whether the neighbour one cell left (`index - 1`) is an insulator.
    pub fn left_insulated(self) -> bool {
        (self.0 >> LEFT_SHIFT) & FIELD_MASK != 0
    }

    /// Whether the neighbour one cell right (`index + 1`) is an insulator.
    pub fn right_insulated(self) -> bool {
        (self.0 >> RIGHT_SHIFT) & FIELD_MASK != 0
    }

    /// Raw bit pattern (diagnostics only).
    pub fn bits(self) -> u16 {
        self.0
    }
}
