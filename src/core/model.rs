use crate::core::state::StateVector;
use crate::error::InputError;

pub const STANDARD_GRAVITY_MPS2: f64 = 9.81;

pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.47;
pub const DEFAULT_FLUID_DENSITY_KG_M3: f64 = 1.225;
pub const DEFAULT_AREA_M2: f64 = 0.1;
pub const DEFAULT_MASS_KG: f64 = 1.0;

/// Quadratic drag configuration. All four values are always present together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragParameters {
    drag_coefficient: f64,
    fluid_density_kg_m3: f64,
    area_m2: f64,
    mass_kg: f64,
}

impl DragParameters {
    pub fn new(
        drag_coefficient: f64,
        fluid_density_kg_m3: f64,
        area_m2: f64,
        mass_kg: f64,
    ) -> Result<Self, InputError> {
        Ok(Self {
            drag_coefficient: InputError::check(
                "drag coefficient",
                drag_coefficient,
                "non-negative",
                |v| v >= 0.0,
            )?,
            fluid_density_kg_m3: InputError::check(
                "fluid density",
                fluid_density_kg_m3,
                "non-negative",
                |v| v >= 0.0,
            )?,
            area_m2: InputError::check("cross-sectional area", area_m2, "non-negative", |v| {
                v >= 0.0
            })?,
            mass_kg: InputError::check("mass", mass_kg, "positive", |v| v > 0.0)?,
        })
    }

    pub fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    pub fn fluid_density_kg_m3(&self) -> f64 {
        self.fluid_density_kg_m3
    }

    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    /// Deceleration produced by the state's velocity, split along each axis.
    ///
    /// The magnitude scales with the full speed `|v|`; each component keeps
    /// the direction of its own velocity component.
    pub fn acceleration(&self, state: &StateVector) -> (f64, f64) {
        let scale = 0.5
            * self.drag_coefficient
            * self.fluid_density_kg_m3
            * self.area_m2
            * state.speed()
            / self.mass_kg;
        (-scale * state.vx, -scale * state.vy)
    }
}

impl Default for DragParameters {
    fn default() -> Self {
        Self {
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            fluid_density_kg_m3: DEFAULT_FLUID_DENSITY_KG_M3,
            area_m2: DEFAULT_AREA_M2,
            mass_kg: DEFAULT_MASS_KG,
        }
    }
}

/// Which set of forces acts on the projectile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionModel {
    Frictionless,
    Drag(DragParameters),
}

impl MotionModel {
    /// State derivative `(dx/dt, dvx/dt, dy/dt, dvy/dt)`.
    ///
    /// Neither model depends on `t`; it is accepted so the function has the
    /// `f(t, y)` shape the stepper expects.
    pub fn derivative(&self, _t: f64, state: &StateVector, gravity_mps2: f64) -> StateVector {
        match self {
            Self::Frictionless => StateVector::new(state.vx, 0.0, state.vy, -gravity_mps2),
            Self::Drag(drag) => {
                let (ax, ay) = drag.acceleration(state);
                StateVector::new(state.vx, ax, state.vy, -gravity_mps2 + ay)
            }
        }
    }

    /// Whether samples below ground are clamped back onto it.
    pub fn applies_ground_clamp(&self) -> bool {
        matches!(self, Self::Drag(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Frictionless => "frictionless",
            Self::Drag(_) => "quadratic drag",
        }
    }
}

/// Validated launch conditions for one simulation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParameters {
    speed_mps: f64,
    angle_deg: f64,
    gravity_mps2: f64,
    drag: Option<DragParameters>,
}

impl MotionParameters {
    pub fn new(speed_mps: f64, angle_deg: f64) -> Result<Self, InputError> {
        Ok(Self {
            speed_mps: InputError::check("initial speed", speed_mps, "positive", |v| v > 0.0)?,
            angle_deg: InputError::check("launch angle", angle_deg, "finite", |_| true)?,
            gravity_mps2: STANDARD_GRAVITY_MPS2,
            drag: None,
        })
    }

    pub fn with_gravity(mut self, gravity_mps2: f64) -> Result<Self, InputError> {
        self.gravity_mps2 =
            InputError::check("gravity", gravity_mps2, "positive", |g| g > 0.0)?;
        Ok(self)
    }

    pub fn with_drag(mut self, drag: DragParameters) -> Self {
        self.drag = Some(drag);
        self
    }

    pub fn speed_mps(&self) -> f64 {
        self.speed_mps
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }

    pub fn gravity_mps2(&self) -> f64 {
        self.gravity_mps2
    }

    pub fn drag(&self) -> Option<DragParameters> {
        self.drag
    }

    pub fn model(&self) -> MotionModel {
        match self.drag {
            Some(drag) => MotionModel::Drag(drag),
            None => MotionModel::Frictionless,
        }
    }

    pub fn initial_state(&self) -> StateVector {
        StateVector::launch(self.speed_mps, self.angle_rad())
    }
}

#[cfg(test)]
mod tests {
    use super::{DragParameters, MotionModel, MotionParameters};
    use crate::core::state::StateVector;
    use crate::error::InputError;
    use approx::assert_relative_eq;

    #[test]
    fn frictionless_derivative_keeps_horizontal_velocity() {
        let state = StateVector::new(3.0, 7.0, 2.0, -1.5);
        let d = MotionModel::Frictionless.derivative(0.0, &state, 9.81);
        assert_eq!(d, StateVector::new(7.0, 0.0, -1.5, -9.81));
    }

    #[test]
    fn drag_uses_full_speed_for_each_component() {
        let drag = DragParameters::new(1.0, 2.0, 0.5, 2.0).expect("valid drag");
        let state = StateVector::new(0.0, 3.0, 0.0, 4.0);
        let d = MotionModel::Drag(drag).derivative(0.0, &state, 10.0);

        // 0.5 * Cd * rho * A / m = 0.25, |v| = 5
        assert_relative_eq!(d.vx, -0.25 * 5.0 * 3.0);
        assert_relative_eq!(d.vy, -10.0 - 0.25 * 5.0 * 4.0);
        assert_eq!(d.x, 3.0);
        assert_eq!(d.y, 4.0);
    }

    #[test]
    fn drag_vanishes_at_rest_and_with_zero_coefficient() {
        let rest = MotionModel::Drag(DragParameters::default()).derivative(
            0.0,
            &StateVector::ZERO,
            9.81,
        );
        assert_eq!(rest, StateVector::new(0.0, 0.0, 0.0, -9.81));

        let no_cd = DragParameters::new(0.0, 1.225, 0.1, 1.0).expect("valid drag");
        let state = StateVector::new(0.0, 12.0, 0.0, 5.0);
        assert_eq!(
            MotionModel::Drag(no_cd).derivative(0.0, &state, 9.81),
            MotionModel::Frictionless.derivative(0.0, &state, 9.81)
        );
    }

    #[test]
    fn only_drag_clamps_at_ground() {
        assert!(!MotionModel::Frictionless.applies_ground_clamp());
        assert!(MotionModel::Drag(DragParameters::default()).applies_ground_clamp());
    }

    #[test]
    fn drag_rejects_non_positive_mass() {
        let err = DragParameters::new(0.47, 1.225, 0.1, 0.0).expect_err("zero mass");
        assert!(matches!(err, InputError::OutOfRange { field: "mass", .. }));
        assert!(DragParameters::new(-0.1, 1.225, 0.1, 1.0).is_err());
    }

    #[test]
    fn parameters_select_model_from_drag_presence() {
        let params = MotionParameters::new(20.0, 45.0).expect("valid");
        assert_eq!(params.model(), MotionModel::Frictionless);
        assert_eq!(params.gravity_mps2(), 9.81);

        let with_drag = params.with_drag(DragParameters::default());
        assert_eq!(
            with_drag.model(),
            MotionModel::Drag(DragParameters::default())
        );
    }

    #[test]
    fn parameters_reject_bad_speed_and_gravity() {
        assert!(MotionParameters::new(0.0, 45.0).is_err());
        assert!(MotionParameters::new(f64::INFINITY, 45.0).is_err());
        assert!(MotionParameters::new(10.0, f64::NAN).is_err());
        let params = MotionParameters::new(10.0, 30.0).expect("valid");
        assert!(params.with_gravity(-9.81).is_err());
        assert_eq!(
            params.with_gravity(1.62).expect("moon gravity").gravity_mps2(),
            1.62
        );
    }
}
