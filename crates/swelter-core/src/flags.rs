//! Per-cell boundary/material flags.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bitmask of boundary/material flags for a single grid cell.
///
/// The two flags are independent bits and may combine, though in practice
/// a cell carries at most one:
///
/// - [`CellFlags::FIXED`] — the cell's temperature is externally clamped
///   and never changes across steps (a heat source or sink).
/// - [`CellFlags::INSULATOR`] — the cell neither receives nor contributes
///   diffusion; its own temperature also never changes.
///
/// A cell with either flag set is *inert*: the update rule returns its
/// previous value without touching any neighbour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellFlags(pub u8);

impl CellFlags {
    /// No flags: an ordinary diffusing cell.
    pub const NONE: CellFlags = CellFlags(0);
    /// Temperature externally clamped; never updated.
    pub const FIXED: CellFlags = CellFlags(1 << 0);
    /// Blocks diffusion to and from this cell; never updated.
    pub const INSULATOR: CellFlags = CellFlags(1 << 1);

    /// Check whether all bits of `other` are set in `self`.
    pub fn contains(self, other: CellFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether the `FIXED` bit is set.
    pub fn is_fixed(self) -> bool {
        self.contains(Self::FIXED)
    }

    /// Whether the `INSULATOR` bit is set.
    pub fn is_insulator(self) -> bool {
        self.contains(Self::INSULATOR)
    }

    /// Whether the cell is never updated by the stencil
    /// (`FIXED` or `INSULATOR` set).
    pub fn is_inert(self) -> bool {
        self.0 & (Self::FIXED.0 | Self::INSULATOR.0) != 0
    }

    /// Raw bit pattern.
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for CellFlags {
    type Output = CellFlags;

    fn bitor(self, rhs: CellFlags) -> CellFlags {
        CellFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for CellFlags {
    fn bitor_assign(&mut self, rhs: CellFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for CellFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_fixed(), self.is_insulator()) {
            (false, false) => write!(f, "none"),
            (true, false) => write!(f, "fixed"),
            (false, true) => write!(f, "insulator"),
            (true, true) => write!(f, "fixed|insulator"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn none_is_not_inert() {
        assert!(!CellFlags::NONE.is_inert());
        assert!(!CellFlags::NONE.is_fixed());
        assert!(!CellFlags::NONE.is_insulator());
    }

    #[test]
    fn single_flags_are_inert() {
        assert!(CellFlags::FIXED.is_inert());
        assert!(CellFlags::INSULATOR.is_inert());
        assert!(CellFlags::FIXED.is_fixed());
        assert!(!CellFlags::FIXED.is_insulator());
        assert!(CellFlags::INSULATOR.is_insulator());
        assert!(!CellFlags::INSULATOR.is_fixed());
    }

    #[test]
    fn flags_combine() {
        let both = CellFlags::FIXED | CellFlags::INSULATOR;
        assert!(both.is_fixed());
        assert!(both.is_insulator());
        assert!(both.is_inert());
        assert!(both.contains(CellFlags::FIXED));
        assert!(both.contains(CellFlags::INSULATOR));
    }

    #[test]
    fn display_names() {
        assert_eq!(CellFlags::NONE.to_string(), "none");
        assert_eq!(CellFlags::FIXED.to_string(), "fixed");
        assert_eq!(CellFlags::INSULATOR.to_string(), "insulator");
        assert_eq!(
            (CellFlags::FIXED | CellFlags::INSULATOR).to_string(),
            "fixed|insulator"
        );
    }

    proptest! {
        #[test]
        fn or_is_commutative(a in 0u8..4, b in 0u8..4) {
            prop_assert_eq!(CellFlags(a) | CellFlags(b), CellFlags(b) | CellFlags(a));
        }

        #[test]
        fn contains_self(a in 0u8..4) {
            prop_assert!(CellFlags(a).contains(CellFlags(a)));
        }

        #[test]
        fn inert_iff_either_bit(a in 0u8..4) {
            let flags = CellFlags(a);
            prop_assert_eq!(flags.is_inert(), flags.is_fixed() || flags.is_insulator());
        }
    }
}
