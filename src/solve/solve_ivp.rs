//! Fixed-step marching entry points built on the Adams core.

use crate::{
    Float,
    core::{
        ode::ODE,
        solout::{ControlFlag, NoSolOut, SolOut},
        solution::Solution,
        status::Status,
    },
    error::Error,
    methods::{adams::Adams, rk::rk4_step},
};

use super::options::{Method, Options};

/// Integrate y' = f(x, y) from (x0, y0) to xend with a fixed step size.
///
/// The first k points are generated with RK4 starter steps, after which the
/// selected Adams-Bashforth-Moulton pair marches the rest of the span. Steps
/// are taken with exactly the configured h; the returned [`Solution`] carries
/// the last grid point reached, which lands on xend when h divides the span.
///
/// A corrector that exhausts its iteration budget stops the run with
/// [`Status::DidNotConverge`], keeping the unconverged estimate in `y`; the
/// caller decides whether to accept it or retry with a smaller h.
pub fn solve_ivp<F>(
    f: &F,
    x0: Float,
    xend: Float,
    y0: Float,
    options: Options,
) -> Result<Solution, Vec<Error>>
where
    F: ODE,
{
    solve_ivp_with(f, x0, xend, y0, &mut NoSolOut, options)
}

/// Same as [`solve_ivp`], with a [`SolOut`] callback invoked at the initial
/// point and after every accepted step.
pub fn solve_ivp_with<F, S>(
    f: &F,
    x0: Float,
    xend: Float,
    y0: Float,
    solout: &mut S,
    options: Options,
) -> Result<Solution, Vec<Error>>
where
    F: ODE,
    S: SolOut,
{
    match options.method {
        Method::Adams12 => march(f, x0, xend, y0, solout, &options, Adams::<12>::new()),
        Method::Adams16 => march(f, x0, xend, y0, solout, &options, Adams::<16>::new()),
        Method::Adams20 => march(f, x0, xend, y0, solout, &options, Adams::<20>::new()),
    }
}

fn march<F, S, const K: usize>(
    f: &F,
    x0: Float,
    xend: Float,
    y0: Float,
    solout: &mut S,
    options: &Options,
    mut method: Adams<K>,
) -> Result<Solution, Vec<Error>>
where
    F: ODE,
    S: SolOut,
{
    // --- Input Validation ---
    let mut errors = Vec::new();

    let h = options.h.unwrap_or((xend - x0) / 100.0);
    let direction = (xend - x0).signum();
    if h == 0.0 || h.signum() != direction {
        errors.push(Error::InvalidStepSize(h));
    }
    if options.tolerance <= 0.0 {
        errors.push(Error::ToleranceMustBePositive(options.tolerance));
    }
    if options.nmax == 0 {
        errors.push(Error::NMaxMustBePositive(options.nmax));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // --- Declarations ---
    let mut x = x0;
    let mut y = y0;
    let mut nfev = 0;
    let mut nstep = 0;
    let mut niter = 0;
    let mut status = Status::Success;
    let nmax = options.nmax;

    // --- Initializations ---
    if let ControlFlag::Interrupt = solout.solout(nstep, x, x, y, h) {
        return Ok(Solution {
            x,
            y,
            h,
            nfev,
            nstep,
            niter,
            status: Status::Interrupted,
        });
    }

    // --- RK4 starter ---
    // The multistep recursion needs derivative samples at the K grid points
    // before the current one. Take K single steps, remembering the solution
    // at each departure point, then seed the history from those points.
    let mut starters = [y0; K];
    let mut finished = false;
    for slot in starters.iter_mut() {
        *slot = y;
        if nstep >= nmax {
            status = Status::NeedLargerNmax;
            finished = true;
            break;
        }
        let last = (x + 1.01 * h - xend) * direction > 0.0;
        y = rk4_step(f, x, y, h);
        x += h;
        nfev += 4;
        nstep += 1;
        if let ControlFlag::Interrupt = solout.solout(nstep, x - h, x, y, h) {
            status = Status::Interrupted;
            finished = true;
            break;
        }
        if last {
            // The span fit inside the starter run; RK4 covered all of it.
            finished = true;
            break;
        }
    }

    // --- Main integration loop ---
    if !finished {
        method.build_history(f, &starters, x0, h);
        nfev += K;

        loop {
            if nstep >= nmax {
                status = Status::NeedLargerNmax;
                break;
            }
            let last = (x + 1.01 * h - xend) * direction > 0.0;

            let step = method.step(f, y, x, h, options.tolerance, options.iterations);
            x += h;
            y = step.y;
            nstep += 1;
            // Corrector passes actually run, capped at the budget.
            let passes = step.iterations.min(options.iterations);
            nfev += 1 + passes;
            niter += passes;

            if !step.converged(options.iterations) {
                status = Status::DidNotConverge;
            }
            if let ControlFlag::Interrupt = solout.solout(nstep, x - h, x, y, h) {
                status = Status::Interrupted;
                break;
            }
            if status == Status::DidNotConverge || last {
                break;
            }
        }
    }

    Ok(Solution {
        x,
        y,
        h,
        nfev,
        nstep,
        niter,
        status,
    })
}
