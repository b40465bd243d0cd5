//! TOML scenario files.
//!
//! ```toml
//! [launch]
//! speed_mps = 20.0
//! angle_deg = 45.0
//! gravity_mps2 = 9.81   # optional
//!
//! [integration]
//! dt_s = 0.01           # optional
//!
//! [drag]                # optional; missing keys take the standard ball values
//! drag_coefficient = 0.47
//!
//! [plot]                # optional
//! output = "plots/shot.svg"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::integrator::DEFAULT_STEP_S;
use crate::core::model::{
    DEFAULT_AREA_M2, DEFAULT_DRAG_COEFFICIENT, DEFAULT_FLUID_DENSITY_KG_M3, DEFAULT_MASS_KG,
    STANDARD_GRAVITY_MPS2,
};
use crate::input::LaunchForm;

pub const DEFAULT_PLOT_WIDTH: u32 = 900;
pub const DEFAULT_PLOT_HEIGHT: u32 = 600;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    pub launch: LaunchConfig,
    #[serde(default)]
    pub integration: IntegrationConfig,
    #[serde(default)]
    pub drag: Option<DragConfig>,
    #[serde(default)]
    pub plot: PlotConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LaunchConfig {
    pub speed_mps: f64,
    pub angle_deg: f64,
    #[serde(default = "default_gravity")]
    pub gravity_mps2: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct IntegrationConfig {
    #[serde(default = "default_step")]
    pub dt_s: f64,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            dt_s: DEFAULT_STEP_S,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DragConfig {
    #[serde(default = "default_drag_coefficient")]
    pub drag_coefficient: f64,
    #[serde(default = "default_fluid_density")]
    pub fluid_density_kg_m3: f64,
    #[serde(default = "default_area")]
    pub area_m2: f64,
    #[serde(default = "default_mass")]
    pub mass_kg: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PlotConfig {
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_plot_width")]
    pub width: u32,
    #[serde(default = "default_plot_height")]
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output: None,
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
        }
    }
}

fn default_gravity() -> f64 {
    STANDARD_GRAVITY_MPS2
}

fn default_step() -> f64 {
    DEFAULT_STEP_S
}

fn default_drag_coefficient() -> f64 {
    DEFAULT_DRAG_COEFFICIENT
}

fn default_fluid_density() -> f64 {
    DEFAULT_FLUID_DENSITY_KG_M3
}

fn default_area() -> f64 {
    DEFAULT_AREA_M2
}

fn default_mass() -> f64 {
    DEFAULT_MASS_KG
}

fn default_plot_width() -> u32 {
    DEFAULT_PLOT_WIDTH
}

fn default_plot_height() -> u32 {
    DEFAULT_PLOT_HEIGHT
}

/// Errors that can occur while loading a scenario file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse scenario TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ScenarioConfig {
    /// The scenario as form fields, so command-line values can override it
    /// before validation.
    pub fn to_form(&self) -> LaunchForm {
        let mut form = LaunchForm {
            speed: Some(self.launch.speed_mps.to_string()),
            angle: Some(self.launch.angle_deg.to_string()),
            gravity: Some(self.launch.gravity_mps2.to_string()),
            dt: Some(self.integration.dt_s.to_string()),
            ..LaunchForm::default()
        };
        if let Some(drag) = &self.drag {
            form.use_drag = true;
            form.drag_coefficient = Some(drag.drag_coefficient.to_string());
            form.fluid_density = Some(drag.fluid_density_kg_m3.to_string());
            form.area = Some(drag.area_m2.to_string());
            form.mass = Some(drag.mass_kg.to_string());
        }
        form
    }
}

pub fn parse_scenario(contents: &str) -> Result<ScenarioConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_scenario(&contents)
}
