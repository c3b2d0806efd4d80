//! Adams-Bashforth-Moulton predictor-corrector integrators.
//!
//! The Adams-Bashforth method together with the Adams-Moulton method form a
//! predictor-corrector pair for the differential equation y' = f(x, y). The
//! k-step Adams-Bashforth method is the explicit recursion
//!
//! ```text
//! y[i+1] = y[i] + h * ( a[0]*f(x[i],y[i]) + ... + a[k-1]*f(x[i-k+1],y[i-k+1]) )
//! ```
//!
//! and the k-step Adams-Moulton method is the implicit recursion
//!
//! ```text
//! y[i+1] = y[i] + h * ( b[0]*f(x[i+1],y[i+1]) + b[1]*f(x[i],y[i]) + ... )
//! ```
//!
//! where x[i+1] - x[i] = h. For sufficiently small h the Adams-Moulton
//! formula, seeded with the Adams-Bashforth estimate, is contractive, so
//! fixed-point iteration converges without any Jacobian information. The
//! local truncation error of a k-step pair is of order h^(k+2).

mod coefficients;

pub use coefficients::{ADAMS_12, ADAMS_16, ADAMS_20, Coefficients};

use crate::{Float, core::ode::ODE};

/// Result of one predictor-corrector step.
#[derive(Clone, Copy, Debug)]
pub struct Step {
    /// Corrected value at x0 + h.
    pub y: Float,
    /// Raw Adams-Bashforth estimate the corrector started from.
    pub predictor: Float,
    /// Corrector passes performed, 1-indexed. Strictly greater than the
    /// requested budget when the corrector failed to converge.
    pub iterations: usize,
}

impl Step {
    /// True if the corrector met its tolerance within `iterations` passes.
    pub fn converged(&self, iterations: usize) -> bool {
        self.iterations <= iterations
    }
}

/// Fixed-step, k-step Adams-Bashforth-Moulton integrator.
///
/// Owns the sliding history of the k most recent derivative samples, oldest
/// first. Between steps the samples belong to the k grid points strictly
/// before the current point: `history[i] = f(x0 - (k-i)*h)`. [`Adams::step`]
/// maintains the buffer and [`Adams::build_history`] seeds it; the fixed-size
/// array ties the buffer length to the order, so a mismatched history cannot
/// be constructed.
///
/// One instance drives one trajectory. Integrating several trajectories
/// concurrently takes one instance per trajectory; nothing is shared.
pub struct Adams<const K: usize> {
    coefficients: &'static Coefficients<K>,
    history: [Float; K],
}

impl Adams<12> {
    /// 12-step integrator.
    pub fn new() -> Self {
        Self::with_coefficients(&ADAMS_12)
    }
}

impl Adams<16> {
    /// 16-step integrator.
    pub fn new() -> Self {
        Self::with_coefficients(&ADAMS_16)
    }
}

impl Adams<20> {
    /// 20-step integrator.
    pub fn new() -> Self {
        Self::with_coefficients(&ADAMS_20)
    }
}

impl<const K: usize> Adams<K> {
    /// Integrator over a caller-supplied coefficient table. The history
    /// starts out zeroed and must be seeded with [`Adams::build_history`]
    /// before the first step.
    pub fn with_coefficients(coefficients: &'static Coefficients<K>) -> Self {
        Adams {
            coefficients,
            history: [0.0; K],
        }
    }

    /// Read-only view of the history buffer, oldest sample first.
    pub fn history(&self) -> &[Float; K] {
        &self.history
    }

    /// Seed the history from k known trajectory values.
    ///
    /// `y[i]` is the solution at `x + i*h`; the buffer is filled with
    /// `f(x + i*h, y[i])`, in order. Seeded from the points
    /// `x0 - k*h, ..., x0 - h`, the integrator is ready to step from
    /// `(x0, y(x0))`. A panic in `f` propagates with the buffer partially
    /// written; seed again before stepping.
    pub fn build_history<F: ODE>(&mut self, f: &F, y: &[Float; K], x: Float, h: Float) {
        for (i, (slot, yi)) in self.history.iter_mut().zip(y.iter()).enumerate() {
            *slot = f.ode(x + i as Float * h, *yi);
        }
    }

    /// Adams-Bashforth predictor: explicit estimate of y(x0 + h) given
    /// y = y(x0) and a history whose newest sample is f(x0, y(x0)).
    ///
    /// Pure arithmetic, no failure mode. The sum runs weight-index ascending
    /// over the samples newest-first; keeping that order fixed keeps results
    /// reproducible, since float addition is not associative.
    pub fn predict(&self, y: Float, h: Float) -> Float {
        let c = self.coefficients;
        let mut delta = 0.0;
        for (j, a) in c.bashforth.iter().enumerate() {
            delta += a * self.history[K - 1 - j];
        }
        y + h * c.divisor * delta
    }

    /// Adams-Moulton corrector: refines `estimate` of y(x) by fixed-point
    /// iteration, `y_prev` being the solution one step before the target
    /// abscissa `x`. Returns the refined value and the number of passes
    /// performed, 1-indexed.
    ///
    /// A count strictly greater than `iterations` means the budget ran out
    /// before [`converged`] was satisfied; the value returned alongside it is
    /// the last, unconverged estimate. A budget of zero performs no
    /// refinement, evaluates `f` zero times, and reports 1.
    pub fn correct<F: ODE>(
        &self,
        f: &F,
        y_prev: Float,
        x: Float,
        h: Float,
        estimate: Float,
        tolerance: Float,
        iterations: usize,
    ) -> (Float, usize) {
        let c = self.coefficients;

        // moulton[0] belongs to the still-unknown derivative at the target;
        // the remaining weights pair with the newest k-1 history samples.
        // This part is invariant across passes.
        let mut delta = 0.0;
        for j in 1..K {
            delta += c.moulton[j] * self.history[K - j];
        }

        let mut y_next = estimate;
        for i in 0..iterations {
            let old_estimate = y_next;
            y_next = y_prev + h * c.divisor * (c.moulton[0] * f.ode(x, y_next) + delta);
            if converged(old_estimate, y_next, tolerance) {
                return (y_next, i + 1);
            }
        }
        (y_next, iterations + 1)
    }

    /// Advance the solution one step, from y = y(x0) to y(x0 + h).
    ///
    /// Evaluates f once at (x0, y), pushes the sample into the history
    /// (dropping the oldest), predicts with Adams-Bashforth, then corrects
    /// with Adams-Moulton. The history shift is applied unconditionally; a
    /// corrector that runs out of budget does not roll it back.
    pub fn step<F: ODE>(
        &mut self,
        f: &F,
        y: Float,
        x0: Float,
        h: Float,
        tolerance: Float,
        iterations: usize,
    ) -> Step {
        let fx = f.ode(x0, y);
        self.history.copy_within(1.., 0);
        self.history[K - 1] = fx;

        let predictor = self.predict(y, h);
        let (y_next, used) = self.correct(f, y, x0 + h, h, predictor, tolerance, iterations);

        Step {
            y: y_next,
            predictor,
            iterations: used,
        }
    }
}

/// Dual-mode convergence test for the corrector.
///
/// `epsilon` acts as a relative tolerance scaled by |y1| when both estimates
/// have magnitude above 1, and as an absolute tolerance otherwise. A pure
/// relative test divides by near-zero solutions; a pure absolute test never
/// triggers for large ones.
pub fn converged(y0: Float, y1: Float, epsilon: Float) -> bool {
    let bound = if y0.abs() > 1.0 && y1.abs() > 1.0 {
        y1.abs() * epsilon
    } else {
        epsilon
    };
    (y0 - y1).abs() < bound
}
