//! Explicit Runge-Kutta starter (RK4)

mod rk4;

pub use rk4::rk4_step;
