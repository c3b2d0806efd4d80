//! A struct representing the outputted result of a numerical integrator.

use crate::{Float, core::status::Status};

/// The output of a numerical integrator
#[derive(Clone, Debug)]
pub struct Solution {
    /// The final value of the independent variable
    pub x: Float,
    /// The final value of the dependent variable
    pub y: Float,
    /// The step size used
    pub h: Float,
    /// The number of function evaluations
    pub nfev: usize,
    /// The number of steps taken
    pub nstep: usize,
    /// Total corrector iterations across all Adams steps
    pub niter: usize,
    /// The status of the integration process
    pub status: Status,
}
