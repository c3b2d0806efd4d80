//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use adams::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `ODE`, `SolOut`, `ControlFlag`, `Solution`, `Status`.
//! - The generic stepper: `Adams`, `Step`, `Coefficients`, the order 12/16/20
//!   tables, and the `converged` predicate.
//! - High-level API: `solve_ivp`, `solve_ivp_with`, `Options`, and `Method`.

pub use crate::Float;
pub use crate::core::{
    ode::ODE,
    solout::{ControlFlag, NoSolOut, SolOut},
    solution::Solution,
    status::Status,
};
pub use crate::error::Error;
pub use crate::methods::adams::{ADAMS_12, ADAMS_16, ADAMS_20, Adams, Coefficients, Step, converged};
pub use crate::methods::rk::rk4_step;
pub use crate::solve::{Method, Options, solve_ivp, solve_ivp_with};
