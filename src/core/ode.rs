//! User-supplied ODE.

use crate::Float;

/// User-supplied ODE.
///
/// Implement this trait for your problem to provide the right-hand side
/// function y' = f(x, y). The integrator calls `ode` with the current
/// abscissa `x` and value `y` and expects the slope in return. It is invoked
/// several times per step: once for the newest history sample plus once per
/// corrector pass.
///
/// # Example
///
/// ```ignore
/// struct Decay { rate: f64 }
/// impl ODE for Decay {
///     fn ode(&self, _x: f64, y: f64) -> f64 {
///         -self.rate * y
///     }
/// }
/// ```
pub trait ODE {
    fn ode(&self, x: Float, y: Float) -> Float;
}
