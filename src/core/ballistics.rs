use crate::core::model::MotionParameters;

/// Closed-form flight figures for a frictionless launch from ground level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightParameters {
    pub time_of_flight_s: f64,
    pub max_height_m: f64,
    pub range_m: f64,
}

pub fn velocity_components(params: &MotionParameters) -> (f64, f64) {
    let theta = params.angle_rad();
    (
        params.speed_mps() * theta.cos(),
        params.speed_mps() * theta.sin(),
    )
}

/// `T = 2 v0 sin θ / g`, `H = v0² sin²θ / 2g`, `L = v0² sin 2θ / g`.
///
/// Drag is ignored even when configured; callers use `T` only as a horizon.
pub fn flight_parameters(params: &MotionParameters) -> FlightParameters {
    let g = params.gravity_mps2();
    let v0 = params.speed_mps();
    let theta = params.angle_rad();
    let sin_theta = theta.sin();

    FlightParameters {
        time_of_flight_s: 2.0 * v0 * sin_theta / g,
        max_height_m: (v0 * v0 * sin_theta * sin_theta) / (2.0 * g),
        range_m: (v0 * v0 * (2.0 * theta).sin()) / g,
    }
}

pub fn analytic_position(params: &MotionParameters, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(params);
    let x = vx * time_s;
    let y = (vy * time_s) - (0.5 * params.gravity_mps2() * time_s * time_s);
    (x, y)
}

/// Evenly spaced frictionless positions from launch to `time_of_flight_s`.
pub fn sample_analytic_trajectory(
    params: &MotionParameters,
    time_of_flight_s: f64,
    samples: usize,
) -> Vec<(f64, f64)> {
    let sample_count = samples.max(2);
    (0..=sample_count)
        .map(|i| {
            let t = (i as f64 * time_of_flight_s) / sample_count as f64;
            analytic_position(params, t)
        })
        .collect()
}
