//! Options and method selection for solve_ivp

use bon::Builder;

use crate::Float;

/// Integrator selection for [`solve_ivp`](crate::solve::solve_ivp).
#[derive(Clone, Copy, Debug)]
pub enum Method {
    /// 12-step Adams-Bashforth-Moulton pair
    Adams12,
    /// 16-step Adams-Bashforth-Moulton pair
    Adams16,
    /// 20-step Adams-Bashforth-Moulton pair
    Adams20,
}

#[derive(Builder, Clone, Debug)]
/// Options for the high-level solve entry points
pub struct Options {
    /// Method to use. Default: the 12-step pair.
    #[builder(default = Method::Adams12)]
    pub method: Method,
    /// Step size, fixed for the whole run. The default splits [x0, xend]
    /// into 100 steps.
    pub h: Option<Float>,
    /// Terminating tolerance for the corrector iteration. This is not an
    /// error bound on the solution y(x).
    #[builder(default = 1e-10)]
    pub tolerance: Float,
    /// Maximum corrector passes per step before the step is reported as
    /// unconverged.
    #[builder(default = 10)]
    pub iterations: usize,
    /// Maximum number of allowed steps.
    #[builder(default = 100_000)]
    pub nmax: usize,
}
