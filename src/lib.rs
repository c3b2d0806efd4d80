//! Fixed-step Adams-Bashforth-Moulton predictor-corrector integrators for
//! scalar ordinary differential equations y' = f(x, y).
//!
//! The explicit Adams-Bashforth formula predicts the next value from a
//! sliding history of derivative samples; the implicit Adams-Moulton formula
//! refines it by fixed-point iteration. Pairs of orders 12, 16, and 20 are
//! provided as coefficient tables feeding one generic stepper.

pub mod core;
pub mod methods;
pub mod prelude;
pub mod solve;

mod error;

pub use error::Error;

/// Scalar type used throughout the library.
///
/// The Adams coefficient tables are exact rationals evaluated in double
/// precision, so the crate is f64 only.
pub type Float = f64;
