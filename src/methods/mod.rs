// Numerical methods

pub mod adams;
pub mod rk;
