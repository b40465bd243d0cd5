//! Fixed-step RK4 integration of a point projectile under gravity, with or
//! without quadratic drag, plus the input and plotting layers around it.

pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod plot;
pub mod simulation;

pub use crate::core::ballistics::{FlightParameters, flight_parameters};
pub use crate::core::integrator::{TimeHorizon, TrajectorySeries, integrate};
pub use crate::core::model::{DragParameters, MotionModel, MotionParameters};
pub use crate::core::state::StateVector;
pub use crate::error::{InputError, SimulationError};
pub use crate::input::LaunchForm;
pub use crate::simulation::{SimulationReport, simulate, simulate_form};
