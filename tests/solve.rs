use adams::prelude::*;
use approx::assert_abs_diff_eq;

mod common;
use common::{Decay, Exp};

#[test]
fn decay_end_to_end() {
    let options = Options::builder().h(0.05).build();
    let sol = solve_ivp(&Decay { rate: 1.0 }, 0.0, 5.0, 1.0, options).unwrap();

    assert_eq!(sol.status, Status::Success);
    assert_abs_diff_eq!(sol.x, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(sol.y, (-5.0f64).exp(), epsilon = 1e-8);
    assert_eq!(sol.nstep, 100);
    assert!(sol.nfev > sol.nstep);
}

// The higher-order pairs trade stability for order: at h*lambda = -0.05 the
// 16- and 20-step corrector formulas amplify rounding noise step over step,
// so each gets a configuration inside its stability region.

#[test]
fn adams16_decay_within_stable_step() {
    let options = Options::builder().method(Method::Adams16).h(0.005).build();
    let sol = solve_ivp(&Decay { rate: 1.0 }, 0.0, 5.0, 1.0, options).unwrap();

    assert_eq!(sol.status, Status::Success);
    assert_eq!(sol.nstep, 1000);
    assert_abs_diff_eq!(sol.x, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(sol.y, (-5.0f64).exp(), epsilon = 1e-12);
}

#[test]
fn adams20_short_march_tracks_decay() {
    // 20 starter steps plus 5 Adams steps; long marches with the 20-step
    // tables amplify double-precision rounding at any practical h.
    let options = Options::builder().method(Method::Adams20).h(0.005).build();
    let sol = solve_ivp(&Decay { rate: 1.0 }, 0.0, 0.125, 1.0, options).unwrap();

    assert_eq!(sol.status, Status::Success);
    assert_eq!(sol.nstep, 25);
    assert!(sol.niter > 0);
    assert_abs_diff_eq!(sol.x, 0.125, epsilon = 1e-12);
    assert_abs_diff_eq!(sol.y, (-0.125f64).exp(), epsilon = 1e-10);
}

#[test]
fn backward_integration_works() {
    // y' = y integrated right to left; default h is negative here.
    let sol = solve_ivp(&Exp, 0.0, -1.0, 1.0, Options::builder().build()).unwrap();

    assert_eq!(sol.status, Status::Success);
    assert!(sol.h < 0.0);
    assert_abs_diff_eq!(sol.x, -1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(sol.y, (-1.0f64).exp(), epsilon = 1e-9);
}

#[test]
fn short_span_is_covered_by_the_starter() {
    // Four steps of 0.05 end before the 12-step history is complete, so the
    // whole run is RK4.
    let options = Options::builder().h(0.05).build();
    let sol = solve_ivp(&Decay { rate: 1.0 }, 0.0, 0.2, 1.0, options).unwrap();

    assert_eq!(sol.status, Status::Success);
    assert_eq!(sol.nstep, 4);
    assert_eq!(sol.niter, 0);
    assert_abs_diff_eq!(sol.y, (-0.2f64).exp(), epsilon = 1e-7);
}

#[test]
fn mismatched_step_size_is_rejected() {
    let options = Options::builder().h(-0.1).build();
    let errors = solve_ivp(&Exp, 0.0, 1.0, 1.0, options).unwrap_err();
    assert!(errors.contains(&Error::InvalidStepSize(-0.1)));

    let options = Options::builder().tolerance(0.0).build();
    let errors = solve_ivp(&Exp, 0.0, 1.0, 1.0, options).unwrap_err();
    assert!(errors.contains(&Error::ToleranceMustBePositive(0.0)));

    let options = Options::builder().nmax(0).build();
    let errors = solve_ivp(&Exp, 0.0, 1.0, 1.0, options).unwrap_err();
    assert!(errors.contains(&Error::NMaxMustBePositive(0)));
}

#[test]
fn nmax_bounds_the_run() {
    let options = Options::builder().h(0.01).nmax(50).build();
    let sol = solve_ivp(&Exp, 0.0, 10.0, 1.0, options).unwrap();

    assert_eq!(sol.status, Status::NeedLargerNmax);
    assert_eq!(sol.nstep, 50);
}

#[test]
fn stiff_problem_reports_non_convergence() {
    // The corrector's fixed-point map is expansive for this step size, so the
    // first Adams step after the starter fails its budget.
    let options = Options::builder().h(0.1).build();
    let sol = solve_ivp(&Decay { rate: 500.0 }, 0.0, 10.0, 1.0, options).unwrap();

    assert_eq!(sol.status, Status::DidNotConverge);
    assert_eq!(sol.nstep, 13);
}

struct GridRecorder {
    points: Vec<(usize, Float, Float)>,
    stop_after: usize,
}

impl SolOut for GridRecorder {
    fn solout(&mut self, nstep: usize, _xold: Float, x: Float, y: Float, _h: Float) -> ControlFlag {
        self.points.push((nstep, x, y));
        if nstep >= self.stop_after {
            ControlFlag::Interrupt
        } else {
            ControlFlag::Continue
        }
    }
}

#[test]
fn solout_sees_every_grid_point() {
    let mut recorder = GridRecorder {
        points: Vec::new(),
        stop_after: usize::MAX,
    };
    let options = Options::builder().h(0.05).build();
    let sol = solve_ivp_with(&Decay { rate: 1.0 }, 0.0, 1.0, 1.0, &mut recorder, options).unwrap();

    assert_eq!(sol.status, Status::Success);
    // Initial point plus one call per step.
    assert_eq!(recorder.points.len(), sol.nstep + 1);
    for (i, &(nstep, x, y)) in recorder.points.iter().enumerate() {
        assert_eq!(nstep, i);
        assert_abs_diff_eq!(x, 0.05 * i as f64, epsilon = 1e-12);
        assert_abs_diff_eq!(y, (-x).exp(), epsilon = 1e-7);
    }
}

#[test]
fn solout_can_interrupt() {
    let mut recorder = GridRecorder {
        points: Vec::new(),
        stop_after: 5,
    };
    let options = Options::builder().h(0.01).build();
    let sol = solve_ivp_with(&Exp, 0.0, 1.0, 1.0, &mut recorder, options).unwrap();

    assert_eq!(sol.status, Status::Interrupted);
    assert_eq!(sol.nstep, 5);
    assert_abs_diff_eq!(sol.x, 0.05, epsilon = 1e-12);
}
