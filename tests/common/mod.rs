#![allow(dead_code)]

use adams::prelude::*;

/// y' = 0
pub struct Zero;

impl ODE for Zero {
    fn ode(&self, _x: Float, _y: Float) -> Float {
        0.0
    }
}

/// y' = c, constant slope
pub struct Constant(pub Float);

impl ODE for Constant {
    fn ode(&self, _x: Float, _y: Float) -> Float {
        self.0
    }
}

/// y' = y, solution e^x
pub struct Exp;

impl ODE for Exp {
    fn ode(&self, _x: Float, y: Float) -> Float {
        y
    }
}

/// y' = -rate * y, solution e^(-rate x)
pub struct Decay {
    pub rate: Float,
}

impl ODE for Decay {
    fn ode(&self, _x: Float, y: Float) -> Float {
        -self.rate * y
    }
}

/// y' = x, slope independent of y; handy for checking which abscissas the
/// integrator sampled.
pub struct XSlope;

impl ODE for XSlope {
    fn ode(&self, x: Float, _y: Float) -> Float {
        x
    }
}

/// Analytic e^x values at `x + i*h` for seeding a history by hand.
pub fn exp_values<const K: usize>(x: Float, h: Float) -> [Float; K] {
    core::array::from_fn(|i| (x + i as Float * h).exp())
}
