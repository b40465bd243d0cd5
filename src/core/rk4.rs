use std::ops::{Add, Mul};

/// One classical fourth-order Runge-Kutta step of size `h` for `dy/dt = f(t, y)`.
///
/// Works for any state that supports component-wise addition and scaling,
/// including plain `f64` and [`StateVector`](crate::core::state::StateVector).
pub fn rk4_step<S, F>(f: F, t: f64, y: S, h: f64) -> S
where
    S: Copy + Add<Output = S> + Mul<f64, Output = S>,
    F: Fn(f64, &S) -> S,
{
    let half = 0.5 * h;

    let k1 = f(t, &y);
    let k2 = f(t + half, &(y + k1 * half));
    let k3 = f(t + half, &(y + k2 * half));
    let k4 = f(t + h, &(y + k3 * h));

    y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0)
}
