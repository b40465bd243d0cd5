use std::ops::{Add, Mul};

/// Kinematic snapshot `(x, vx, y, vy)` of a projectile in the launch plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StateVector {
    pub x: f64,
    pub vx: f64,
    pub y: f64,
    pub vy: f64,
}

impl StateVector {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f64, vx: f64, y: f64, vy: f64) -> Self {
        Self { x, vx, y, vy }
    }

    /// Launch state at the origin for a speed and an angle in radians.
    pub fn launch(speed_mps: f64, angle_rad: f64) -> Self {
        Self::new(
            0.0,
            speed_mps * angle_rad.cos(),
            0.0,
            speed_mps * angle_rad.sin(),
        )
    }

    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }
}

impl Add for StateVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.vx + rhs.vx,
            self.y + rhs.y,
            self.vy + rhs.vy,
        )
    }
}

impl Mul<f64> for StateVector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.vx * rhs, self.y * rhs, self.vy * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::StateVector;

    #[test]
    fn launch_splits_speed_into_components() {
        let state = StateVector::launch(10.0, 90f64.to_radians());
        assert!(state.vx.abs() < 1e-12);
        assert!((state.vy - 10.0).abs() < 1e-12);
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);
    }

    #[test]
    fn arithmetic_is_component_wise() {
        let a = StateVector::new(1.0, 2.0, 3.0, 4.0);
        let b = StateVector::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a + b, StateVector::new(1.5, 2.5, 3.5, 4.5));
        assert_eq!(a * 2.0, StateVector::new(2.0, 4.0, 6.0, 8.0));
    }

    #[test]
    fn speed_uses_both_velocity_components() {
        let state = StateVector::new(0.0, 3.0, 0.0, 4.0);
        assert_eq!(state.speed(), 5.0);
    }
}
