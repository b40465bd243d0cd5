use thiserror::Error;

/// A value rejected at the input boundary, before any integration runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("invalid {field}: '{value}'. Expected a number.")]
    NotANumber { field: &'static str, value: String },
    #[error("missing {field}")]
    Missing { field: &'static str },
    #[error("{field} must be {requirement} (got {value})")]
    OutOfRange {
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },
    #[error("drag model selected but {field} was not supplied")]
    IncompleteDrag { field: &'static str },
}

impl InputError {
    pub(crate) fn check(
        field: &'static str,
        value: f64,
        requirement: &'static str,
        ok: impl FnOnce(f64) -> bool,
    ) -> Result<f64, Self> {
        if value.is_finite() && ok(value) {
            Ok(value)
        } else {
            Err(Self::OutOfRange {
                field,
                requirement,
                value,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("flight time must be positive (got {time_of_flight_s:.4} s)")]
    DegenerateFlight { time_of_flight_s: f64 },
}
