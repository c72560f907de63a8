//! Per-run stencil weights.

/// The two weights of the averaging rule, computed once per stepping run.
///
/// `outer` is the fraction of heat that flows to one neighbour per unit
/// time; `inner` is the fraction a cell retains assuming up to four
/// contributing neighbours. The weighted sum is renormalized by the
/// actual contribution inside [`update_cell`](crate::update_cell), so
/// insulated neighbours simply drop out.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coefficients {
    /// Self-retention weight: `1 - outer / 4`.
    pub inner: f32,
    /// Per-neighbour flow weight: `alpha * dt`.
    pub outer: f32,
}

impl Coefficients {
    /// Derive the weights from a diffusion coefficient and timestep.
    ///
    /// Computed in `f64` and narrowed to `f32` once, rather than per
    /// cell. A large `alpha * dt` makes the scheme unstable; no check is
    /// performed here — the clamp in the update rule bounds the damage to
    /// saturation at [0, 1].
    pub fn from_rate(alpha: f64, dt: f64) -> Self {
        let outer = alpha * dt;
        let inner = 1.0 - outer / 4.0;
        Self {
            inner: inner as f32,
            outer: outer as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_rate() {
        // alpha = 1.0, dt = 0.1: the canonical worked example.
        let c = Coefficients::from_rate(1.0, 0.1);
        assert!((c.outer - 0.1).abs() < 1e-7);
        assert!((c.inner - 0.975).abs() < 1e-7);
    }

    #[test]
    fn zero_dt_retains_everything() {
        let c = Coefficients::from_rate(0.3, 0.0);
        assert_eq!(c.outer, 0.0);
        assert_eq!(c.inner, 1.0);
    }

    #[test]
    fn weights_scale_linearly_in_dt() {
        let a = Coefficients::from_rate(0.5, 0.1);
        let b = Coefficients::from_rate(0.5, 0.2);
        assert!((b.outer - 2.0 * a.outer).abs() < 1e-7);
    }
}
