use log::{debug, trace};

use crate::core::model::MotionParameters;
use crate::core::rk4::rk4_step;
use crate::core::state::StateVector;
use crate::error::{InputError, SimulationError};

pub const DEFAULT_STEP_S: f64 = 0.01;

/// Upper bound on the number of steps in one run.
pub const MAX_STEPS: usize = 1_000_000;

/// Heights this close to zero, relative to the peak, count as ground contact.
const GROUND_TOLERANCE: f64 = 1e-9;

/// How long to simulate and with what fixed step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeHorizon {
    t_max_s: f64,
    dt_s: f64,
}

impl TimeHorizon {
    pub fn new(t_max_s: f64, dt_s: f64) -> Result<Self, SimulationError> {
        if !(t_max_s.is_finite() && t_max_s > 0.0) {
            return Err(SimulationError::DegenerateFlight {
                time_of_flight_s: t_max_s,
            });
        }
        let dt_s = InputError::check("time step", dt_s, "positive", |dt| dt > 0.0)?;
        let dt_s = InputError::check(
            "time step",
            dt_s,
            "large enough for at most 1000000 steps",
            |dt| t_max_s / dt <= MAX_STEPS as f64,
        )?;
        Ok(Self { t_max_s, dt_s })
    }

    pub fn t_max_s(&self) -> f64 {
        self.t_max_s
    }

    pub fn dt_s(&self) -> f64 {
        self.dt_s
    }

    /// Number of steps the integrator will take.
    pub fn step_count(&self) -> usize {
        // Must agree with the `t < t_max` loop condition, not just the quotient.
        let limit = MAX_STEPS + 1;
        let mut steps = ((self.t_max_s / self.dt_s).ceil() as usize).min(limit);
        while steps > 0 && ((steps - 1) as f64) * self.dt_s >= self.t_max_s {
            steps -= 1;
        }
        while steps < limit && (steps as f64) * self.dt_s < self.t_max_s {
            steps += 1;
        }
        steps
    }
}

/// A recorded integrator state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub t: f64,
    pub state: StateVector,
}

/// Time and position samples of one run, all of equal length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrajectorySeries {
    time: Vec<f64>,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl TrajectorySeries {
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn peak_height(&self) -> f64 {
        self.y.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn max_range(&self) -> f64 {
        self.x.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// First descent through `y = 0` after launch, as `(t, x)`.
    ///
    /// Interpolates linearly between the two samples bracketing the crossing.
    /// A sample within rounding distance of the ground counts as touching it,
    /// so a shot landing exactly on the last step is still reported.
    pub fn ground_crossing(&self) -> Option<(f64, f64)> {
        let tolerance = GROUND_TOLERANCE * self.peak_height().max(1.0);
        (1..self.len()).find_map(|i| {
            let (y0, y1) = (self.y[i - 1], self.y[i]);
            if y0 > tolerance && y1 <= tolerance {
                let frac = (y0 / (y0 - y1)).min(1.0);
                Some((
                    lerp(self.time[i - 1], self.time[i], frac),
                    lerp(self.x[i - 1], self.x[i], frac),
                ))
            } else {
                None
            }
        })
    }
}

impl FromIterator<Sample> for TrajectorySeries {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut series = Self {
            time: Vec::with_capacity(lower),
            x: Vec::with_capacity(lower),
            y: Vec::with_capacity(lower),
        };
        for sample in iter {
            series.time.push(sample.t);
            series.x.push(sample.state.x);
            series.y.push(sample.state.y);
        }
        series
    }
}

fn lerp(a: f64, b: f64, frac: f64) -> f64 {
    a + (b - a) * frac
}

/// Forces a below-ground state back onto the ground with no vertical motion.
fn clamp_to_ground(state: &mut StateVector) -> bool {
    if state.y < 0.0 {
        state.y = 0.0;
        state.vy = 0.0;
        true
    } else {
        false
    }
}

/// Every state from launch until the horizon is reached, launch included.
///
/// The drag model clamps below-ground states onto `y = 0` with `vy = 0`; the
/// run still continues to the horizon and horizontal motion is left alone.
pub fn integrate_states(params: &MotionParameters, horizon: TimeHorizon) -> Vec<Sample> {
    let model = params.model();
    let gravity = params.gravity_mps2();
    let dt = horizon.dt_s();
    let derivative = |t: f64, y: &StateVector| model.derivative(t, y, gravity);

    let steps = horizon.step_count();
    debug!(
        "integrating {} model: {steps} steps of {dt} s up to {} s",
        model.label(),
        horizon.t_max_s()
    );

    let mut samples = Vec::with_capacity(steps + 1);
    let mut t = 0.0;
    let mut state = params.initial_state();
    samples.push(Sample { t, state });

    let mut landed = false;
    let mut step = 0usize;
    while t < horizon.t_max_s() {
        state = rk4_step(derivative, t, state, dt);
        step += 1;
        t = step as f64 * dt;

        if model.applies_ground_clamp() && clamp_to_ground(&mut state) && !landed {
            landed = true;
            debug!("ground contact at t = {t:.4} s, x = {:.4} m", state.x);
        }
        trace!("t={t:.4} x={:.6} y={:.6}", state.x, state.y);
        samples.push(Sample { t, state });
    }

    samples
}

/// Integrates a full run and keeps only the time and position series.
pub fn integrate(params: &MotionParameters, horizon: TimeHorizon) -> TrajectorySeries {
    integrate_states(params, horizon).into_iter().collect()
}
