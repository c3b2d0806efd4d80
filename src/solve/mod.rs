//! High-level driver: march a fixed-step trajectory over [x0, xend].

pub mod options;
pub mod solve_ivp;

pub use options::{Method, Options};
pub use solve_ivp::{solve_ivp, solve_ivp_with};
