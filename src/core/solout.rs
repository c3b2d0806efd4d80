//! User defined callback hook executed after each accepted step.

use crate::Float;

/// Return flags for [`SolOut`].
///
/// - `Continue`: proceed with integration as normal.
/// - `Interrupt`: stop integration and return control to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlag {
    Continue,
    Interrupt,
}

/// Callback hook executed after each accepted step.
///
/// The callback is invoked once before the main loop (with `nstep == 0` and
/// `xold == x`) and after every accepted step, starter and Adams steps alike.
/// The arguments are:
/// - `nstep`: number of accepted steps so far,
/// - `xold`: the previous abscissa (left end of the last accepted step),
/// - `x`: the new abscissa after the accepted step (xold + h),
/// - `y`: the solution at `x`,
/// - `h`: the step size.
///
/// Return `ControlFlag::Interrupt` to stop integration and hand back a
/// [`Solution`](crate::core::solution::Solution) with
/// [`Status::Interrupted`](crate::core::status::Status::Interrupted).
pub trait SolOut {
    fn solout(&mut self, nstep: usize, xold: Float, x: Float, y: Float, h: Float) -> ControlFlag;
}

/// A [`SolOut`] that observes nothing, for callers without a callback.
pub struct NoSolOut;

impl SolOut for NoSolOut {
    fn solout(
        &mut self,
        _nstep: usize,
        _xold: Float,
        _x: Float,
        _y: Float,
        _h: Float,
    ) -> ControlFlag {
        ControlFlag::Continue
    }
}
