//! # Example: Exponential Decay
//!
//! Solve the exponential decay equation with the 12-step
//! Adams-Bashforth-Moulton pair.
//!
//! Equations:
//! dy/dx = -y
//!
//! Initial condition: y(0) = 1.0
//!

use adams::prelude::*;

struct SimpleODE;

impl ODE for SimpleODE {
    fn ode(&self, _x: f64, y: f64) -> f64 {
        // dy/dx = -y (exponential decay)
        -y
    }
}

fn main() {
    let f = SimpleODE;
    let x0 = 0.0;
    let xend = 5.0;
    let y0 = 1.0;

    let options = Options::builder()
        // Default method is the 12-step pair.
        .h(0.05)
        .tolerance(1e-10)
        .iterations(10)
        .build();

    match solve_ivp(&f, x0, xend, y0, options) {
        Ok(sol) => {
            println!("Final status: {:?}", sol.status);
            println!("Final state: x = {:.5}, y = {:.10}", sol.x, sol.y);
            println!("Exact value: y = {:.10}", (-sol.x).exp());
            println!("Number of function evaluations: {}", sol.nfev);
            println!("Number of steps taken: {}", sol.nstep);
            println!("Total corrector iterations: {}", sol.niter);
        }
        Err(e) => eprintln!("Integration failed: {:?}", e),
    }
}
