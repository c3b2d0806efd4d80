//! # Example: Logistic Growth
//!
//! Solve the logistic equation and print the trajectory at every grid point
//! through a [`SolOut`] callback.
//!
//! Equations:
//! dy/dx = r * y * (1 - y)
//!
//! Initial condition: y(0) = 0.1
//!

use adams::prelude::*;

struct Logistic {
    r: f64,
}

impl ODE for Logistic {
    fn ode(&self, _x: f64, y: f64) -> f64 {
        self.r * y * (1.0 - y)
    }
}

struct Printer {
    every: usize,
}

impl SolOut for Printer {
    fn solout(&mut self, nstep: usize, _xold: f64, x: f64, y: f64, _h: f64) -> ControlFlag {
        if nstep % self.every == 0 {
            println!("x = {:6.3}, y = {:.8}", x, y);
        }
        ControlFlag::Continue
    }
}

fn main() {
    let f = Logistic { r: 1.5 };
    let mut printer = Printer { every: 20 };

    let options = Options::builder()
        .method(Method::Adams16)
        .h(0.01)
        .build();

    match solve_ivp_with(&f, 0.0, 10.0, 0.1, &mut printer, options) {
        Ok(sol) => {
            println!("Final status: {:?}", sol.status);
            println!("Final state: x = {:.3}, y = {:.8}", sol.x, sol.y);
        }
        Err(e) => eprintln!("Integration failed: {:?}", e),
    }
}
