//! Classic explicit Runge-Kutta 4 (RK4) single-step integrator.
//!
//! A k-step multistep method needs k starting values before its own
//! recursion can run; the solve layer uses this one-step method to
//! manufacture them from the initial condition alone.

use crate::{Float, core::ode::ODE};

/// One classical RK4 step: returns y(x + h) given y = y(x).
pub fn rk4_step<F: ODE>(f: &F, x: Float, y: Float, h: Float) -> Float {
    let k1 = f.ode(x, y);
    let k2 = f.ode(x + C2 * h, y + h * A21 * k1);
    let k3 = f.ode(x + C3 * h, y + h * A32 * k2);
    let k4 = f.ode(x + C4 * h, y + h * A43 * k3);
    y + h * (B1 * k1 + B2 * k2 + B3 * k3 + B4 * k4)
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;
