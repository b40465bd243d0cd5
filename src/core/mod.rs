//! Numerical core: state vectors, motion models, the RK4 stepper and the
//! trajectory integrator, plus closed-form flight figures.

pub mod ballistics;
pub mod integrator;
pub mod model;
pub mod rk4;
pub mod state;
pub mod window;
