use log::{info, warn};

use crate::core::ballistics::{FlightParameters, flight_parameters};
use crate::core::integrator::{TimeHorizon, TrajectorySeries, integrate};
use crate::core::model::{MotionModel, MotionParameters};
use crate::error::SimulationError;
use crate::input::LaunchForm;

/// Result of one simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationReport {
    pub params: MotionParameters,
    pub flight: FlightParameters,
    pub horizon: TimeHorizon,
    pub series: TrajectorySeries,
}

impl SimulationReport {
    pub fn model(&self) -> MotionModel {
        self.params.model()
    }

    /// Simulated `(t, x)` at the first descent to the ground, if any.
    ///
    /// A clamped drag run lands on the sample that touches `y = 0`.
    pub fn landing(&self) -> Option<(f64, f64)> {
        self.series.ground_crossing()
    }
}

/// Uses the closed-form flight time as the horizon and integrates up to it.
pub fn simulate(params: &MotionParameters, dt_s: f64) -> Result<SimulationReport, SimulationError> {
    let flight = flight_parameters(params);
    if flight.time_of_flight_s <= 0.0 {
        warn!(
            "rejecting launch at {}° with flight time {:.4} s",
            params.angle_deg(),
            flight.time_of_flight_s
        );
        return Err(SimulationError::DegenerateFlight {
            time_of_flight_s: flight.time_of_flight_s,
        });
    }

    let horizon = TimeHorizon::new(flight.time_of_flight_s, dt_s)?;
    let series = integrate(params, horizon);
    info!(
        "{} run: v0 = {} m/s, angle = {}°, {} samples",
        params.model().label(),
        params.speed_mps(),
        params.angle_deg(),
        series.len()
    );

    Ok(SimulationReport {
        params: *params,
        flight,
        horizon,
        series,
    })
}

/// Parses a raw form and simulates it. Nothing is integrated if parsing fails.
pub fn simulate_form(form: &LaunchForm) -> Result<SimulationReport, SimulationError> {
    let request = form.parse()?;
    simulate(&request.params, request.dt_s)
}
