//! Raw launch form as typed by a user, and its conversion into validated
//! simulation inputs.

use crate::core::integrator::DEFAULT_STEP_S;
use crate::core::model::{
    DEFAULT_AREA_M2, DEFAULT_DRAG_COEFFICIENT, DEFAULT_FLUID_DENSITY_KG_M3, DEFAULT_MASS_KG,
    DragParameters, MotionParameters, STANDARD_GRAVITY_MPS2,
};
use crate::error::InputError;

/// Unparsed field values. `None` and blank strings both count as missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LaunchForm {
    pub speed: Option<String>,
    pub angle: Option<String>,
    pub gravity: Option<String>,
    pub dt: Option<String>,
    pub use_drag: bool,
    pub drag_coefficient: Option<String>,
    pub fluid_density: Option<String>,
    pub area: Option<String>,
    pub mass: Option<String>,
}

/// Everything a simulation run needs, already validated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchRequest {
    pub params: MotionParameters,
    pub dt_s: f64,
}

pub fn parse_f64(value: &str, field: &'static str) -> Result<f64, InputError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber {
            field,
            value: value.to_string(),
        })
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn required(value: &Option<String>, field: &'static str) -> Result<f64, InputError> {
    present(value)
        .ok_or(InputError::Missing { field })
        .and_then(|v| parse_f64(v, field))
}

fn optional(value: &Option<String>, field: &'static str, default: f64) -> Result<f64, InputError> {
    present(value).map_or(Ok(default), |v| parse_f64(v, field))
}

fn drag_field(value: &Option<String>, field: &'static str) -> Result<f64, InputError> {
    present(value)
        .ok_or(InputError::IncompleteDrag { field })
        .and_then(|v| parse_f64(v, field))
}

impl LaunchForm {
    pub fn new(speed: impl Into<String>, angle: impl Into<String>) -> Self {
        Self {
            speed: Some(speed.into()),
            angle: Some(angle.into()),
            ..Self::default()
        }
    }

    /// Selects the drag model and fills any empty drag field with its default.
    pub fn with_drag_defaults(mut self) -> Self {
        fn fill(field: &mut Option<String>, default: f64) {
            if present(field).is_none() {
                *field = Some(default.to_string());
            }
        }

        self.use_drag = true;
        fill(&mut self.drag_coefficient, DEFAULT_DRAG_COEFFICIENT);
        fill(&mut self.fluid_density, DEFAULT_FLUID_DENSITY_KG_M3);
        fill(&mut self.area, DEFAULT_AREA_M2);
        fill(&mut self.mass, DEFAULT_MASS_KG);
        self
    }

    pub fn has_launch_fields(&self) -> bool {
        present(&self.speed).is_some() || present(&self.angle).is_some()
    }

    pub fn parse(&self) -> Result<LaunchRequest, InputError> {
        let speed = required(&self.speed, "initial speed")?;
        let angle = required(&self.angle, "launch angle")?;
        let gravity = optional(&self.gravity, "gravity", STANDARD_GRAVITY_MPS2)?;
        let dt_s = optional(&self.dt, "time step", DEFAULT_STEP_S)?;
        let dt_s = InputError::check("time step", dt_s, "positive", |dt| dt > 0.0)?;

        let mut params = MotionParameters::new(speed, angle)?.with_gravity(gravity)?;
        if self.use_drag {
            let drag = DragParameters::new(
                drag_field(&self.drag_coefficient, "drag coefficient")?,
                drag_field(&self.fluid_density, "fluid density")?,
                drag_field(&self.area, "cross-sectional area")?,
                drag_field(&self.mass, "mass")?,
            )?;
            params = params.with_drag(drag);
        }

        Ok(LaunchRequest { params, dt_s })
    }
}

#[cfg(test)]
mod tests {
    use super::{LaunchForm, parse_f64};
    use crate::core::model::{DragParameters, MotionModel};
    use crate::error::InputError;

    #[test]
    fn parses_minimal_form_with_defaults() {
        let request = LaunchForm::new("20", " 45 ").parse().expect("valid form");
        assert_eq!(request.params.speed_mps(), 20.0);
        assert_eq!(request.params.angle_deg(), 45.0);
        assert_eq!(request.params.gravity_mps2(), 9.81);
        assert_eq!(request.dt_s, 0.01);
        assert_eq!(request.params.model(), MotionModel::Frictionless);
    }

    #[test]
    fn rejects_non_numeric_speed() {
        let err = LaunchForm::new("abc", "45").parse().expect_err("bad speed");
        assert_eq!(
            err,
            InputError::NotANumber {
                field: "initial speed",
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn blank_required_field_is_missing() {
        let err = LaunchForm::new("20", "  ").parse().expect_err("no angle");
        assert_eq!(
            err,
            InputError::Missing {
                field: "launch angle"
            }
        );
    }

    #[test]
    fn drag_without_all_parameters_is_rejected() {
        let mut form = LaunchForm::new("20", "45").with_drag_defaults();
        form.area = Some(String::new());
        let err = form.parse().expect_err("area missing");
        assert_eq!(
            err,
            InputError::IncompleteDrag {
                field: "cross-sectional area"
            }
        );
    }

    #[test]
    fn drag_defaults_match_standard_ball() {
        let request = LaunchForm::new("20", "45")
            .with_drag_defaults()
            .parse()
            .expect("valid drag form");
        assert_eq!(
            request.params.drag(),
            Some(DragParameters::new(0.47, 1.225, 0.1, 1.0).unwrap())
        );
    }

    #[test]
    fn supplied_drag_values_are_kept() {
        let mut form = LaunchForm::new("20", "45");
        form.mass = Some("2.5".to_string());
        let request = form.with_drag_defaults().parse().expect("valid");
        assert_eq!(request.params.drag().map(|d| d.mass_kg()), Some(2.5));
    }

    #[test]
    fn rejects_non_positive_step() {
        let mut form = LaunchForm::new("20", "45");
        form.dt = Some("0".to_string());
        assert!(matches!(
            form.parse(),
            Err(InputError::OutOfRange {
                field: "time step",
                ..
            })
        ));
    }

    #[test]
    fn parse_f64_reports_original_text() {
        let err = parse_f64("12,5", "gravity").expect_err("comma decimal");
        assert_eq!(err.to_string(), "invalid gravity: '12,5'. Expected a number.");
    }
}
